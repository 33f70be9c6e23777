//! # Circle Area - Interactive Page
//!
//! Single-window calculator: pick what the number measures, type it, and
//! the area, formula and opening steps update on every keystroke.
//! Built with Iced for native desktops and WASM.
//!
//! Display uses [`INTERACTIVE_PRECISION`] (4 decimals), the HTTP API uses 15.

mod ui;

use circle_core::{calculate, parse_value, AreaResult, InputType, INTERACTIVE_PRECISION};
use iced::widget::{column, container, row, rule, text, Space};
use iced::{Alignment, Element, Length};

/// Shown when the input cannot be used.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid positive number.";

/// Number of calculation steps shown under the result.
pub const VISIBLE_STEPS: usize = 4;

#[derive(Debug, Clone)]
pub enum Message {
    InputTypeSelected(InputType),
    ValueChanged(String),
}

/// What the result panel should show for the current input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing typed yet
    Empty,
    /// Input present but not a positive number
    Invalid,
    Ready(AreaResult),
}

#[derive(Debug)]
pub struct App {
    pub input_type: InputType,
    pub value: String,
    pub outcome: Outcome,
}

impl Default for App {
    fn default() -> Self {
        App {
            input_type: InputType::default(),
            value: String::new(),
            outcome: Outcome::Empty,
        }
    }
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::InputTypeSelected(input_type) => {
                self.input_type = input_type;
            }
            Message::ValueChanged(value) => {
                self.value = value;
            }
        }
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.outcome = evaluate(&self.value, self.input_type);
    }

    fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("Area of Circle").size(28),
            Space::new().width(Length::Fill),
            text("A = πr²").size(14),
        ]
        .align_y(Alignment::Center);

        let body = column![
            ui::input_panel::view_input_panel(self),
            Space::new().height(10),
            ui::result_panel::view_result_panel(self),
        ]
        .spacing(6);

        container(column![header, rule::horizontal(1), Space::new().height(8), body].padding(12))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Map raw text and the selected input type to what the page shows.
pub fn evaluate(raw: &str, input_type: InputType) -> Outcome {
    if raw.trim().is_empty() {
        return Outcome::Empty;
    }
    match parse_value(raw).and_then(|value| calculate(value, input_type, INTERACTIVE_PRECISION)) {
        Ok(result) => Outcome::Ready(result),
        Err(_) => Outcome::Invalid,
    }
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    iced::application(App::default, App::update, App::view)
        .title("Area of Circle Calculator")
        .run()
}
