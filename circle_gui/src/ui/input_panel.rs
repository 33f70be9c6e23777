//! Input Panel (Top)
//!
//! One button per input type (the selected one is highlighted) and the
//! numeric value field.

use iced::widget::{button, column, row, text, text_input, Row};
use iced::{Alignment, Element, Length, Padding};

use circle_core::{FormulaMetadata, InputType};

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let type_buttons = InputType::ALL
        .iter()
        .fold(Row::new().spacing(4), |buttons, &input_type| {
            buttons.push(type_button(input_type, app.input_type == input_type))
        });

    let variable = &FormulaMetadata::for_input(app.input_type).variable;
    let label = format!("{} ({}):", app.input_type.display_name(), variable.symbol);

    column![
        text("Calculate using").size(14),
        type_buttons,
        labeled_input(label, &app.value, Message::ValueChanged),
    ]
    .spacing(8)
    .into()
}

fn type_button(input_type: InputType, selected: bool) -> Element<'static, Message> {
    let style = if selected {
        button::primary
    } else {
        button::secondary
    };

    button(text(input_type.display_name()).size(11))
        .on_press(Message::InputTypeSelected(input_type))
        .padding(Padding::from([4, 8]))
        .style(style)
        .into()
}

fn labeled_input<'a>(
    label: String,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(120.0)),
        text_input("Enter a positive number", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
