//! Result Panel (Bottom)
//!
//! Shows:
//! - Area to 4 decimals in square units
//! - Active formula and its description
//! - The first calculation steps
//! - A validation message for unusable input

use iced::widget::{column, container, text, Column, Space};
use iced::{Element, Length};

use circle_core::{AreaResult, FormulaMetadata};

use crate::{App, Message, Outcome, INVALID_INPUT_MESSAGE, VISIBLE_STEPS};

/// Render the result panel for the current outcome
pub fn view_result_panel(app: &App) -> Element<'_, Message> {
    let formula = FormulaMetadata::for_input(app.input_type);

    let formula_section = column![
        text(formula.name).size(14),
        text(formula.formula).size(20),
        text(formula.description).size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(4);

    let content: Column<'_, Message> = match &app.outcome {
        Outcome::Empty => column![formula_section],
        Outcome::Invalid => column![
            formula_section,
            Space::new().height(8),
            text(INVALID_INPUT_MESSAGE).size(12).color([0.8, 0.2, 0.2]),
        ],
        Outcome::Ready(result) => column![
            view_area(result),
            Space::new().height(8),
            formula_section,
            Space::new().height(8),
            view_steps(result),
        ],
    };

    container(content.padding(8))
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_area(result: &AreaResult) -> Column<'_, Message> {
    column![
        text("Area").size(14),
        text(format!("{} square units", result.display_area()))
            .size(24)
            .color([0.2, 0.6, 0.2]),
    ]
    .spacing(4)
}

fn view_steps(result: &AreaResult) -> Column<'_, Message> {
    result
        .steps
        .iter()
        .take(VISIBLE_STEPS)
        .fold(column![text("Steps").size(14)].spacing(2), |steps, step| {
            steps.push(text(step).size(11))
        })
}
