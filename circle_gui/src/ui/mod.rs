//! UI panels for the interactive page
//!
//! - `input_panel` - input-type buttons and the value field
//! - `result_panel` - area, formula and the opening calculation steps

pub mod input_panel;
pub mod result_panel;
