//! # circle_core - Circle Area Calculation Engine
//!
//! `circle_core` computes the area of a circle from its radius, diameter, or
//! circumference and explains the computation step by step. All inputs and
//! outputs are JSON-serializable so the same engine backs the HTTP API, the
//! interactive page and the CLI.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_core::{calculate, InputType, INTERACTIVE_PRECISION};
//!
//! let result = calculate(5.0, InputType::Radius, INTERACTIVE_PRECISION).unwrap();
//! assert_eq!(result.display_area(), "78.5398");
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"formula\": \"A = πr²\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The area calculation and its input/result types
//! - [`formulas`] - Descriptive metadata for each formula
//! - [`precision`] - Display rounding and number formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod formulas;
pub mod precision;

// Re-export commonly used types at crate root for convenience
pub use calculations::area::{
    calculate, calculate_input, parse_input_type, parse_value, validate_value, AreaInput,
    AreaResult, InputType, INVALID_INPUT_TYPE_MESSAGE, INVALID_VALUE_MESSAGE,
};
pub use errors::{CalcError, CalcResult};
pub use formulas::{FormulaMetadata, ALL_FORMULAS};
pub use precision::{API_PRECISION, INTERACTIVE_PRECISION};
