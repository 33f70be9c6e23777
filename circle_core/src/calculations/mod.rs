//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`area`] - Circle area from radius, diameter, or circumference

pub mod area;

// Re-export commonly used types
pub use area::{calculate, calculate_input, AreaInput, AreaResult, InputType};
