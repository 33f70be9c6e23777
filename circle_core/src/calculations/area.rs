//! # Circle Area Calculation
//!
//! Computes the area enclosed by a circle from one of three measurements and
//! narrates the computation step by step.
//!
//! ## Formulas
//!
//! | Input | Formula | Computation |
//! |-------|---------|-------------|
//! | radius r | A = πr² | π·r² |
//! | diameter d | A = πd²/4 | π·(d/2)² |
//! | circumference C | A = C²/(4π) | C²/(4π) |
//!
//! ## Example
//!
//! ```rust
//! use circle_core::calculations::area::{calculate, InputType};
//! use circle_core::precision::API_PRECISION;
//!
//! let result = calculate(10.0, InputType::Radius, API_PRECISION).unwrap();
//! assert_eq!(result.formula, "A = πr²");
//! assert!((result.area - 314.159265358979).abs() < 1e-9);
//! assert!(result.steps.last().unwrap().starts_with("A = 314.159265358979"));
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::precision::{clamp_precision, format_fixed, format_number, round_to};

/// Shown when the measurement is missing, non-numeric, or not positive
pub const INVALID_VALUE_MESSAGE: &str = "Invalid value. Please provide a positive number.";

/// Shown when the input type tag is not recognized
pub const INVALID_INPUT_TYPE_MESSAGE: &str =
    "Invalid inputType. Must be \"radius\", \"diameter\", or \"circumference\".";

/// Which measurement of the circle the input value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Distance from center to boundary
    #[default]
    Radius,
    /// Twice the radius
    Diameter,
    /// Length of the boundary, 2πr
    Circumference,
}

impl InputType {
    /// All input types in display order
    pub const ALL: [InputType; 3] = [
        InputType::Radius,
        InputType::Diameter,
        InputType::Circumference,
    ];

    /// Wire tag (`"radius"`, `"diameter"`, `"circumference"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Radius => "radius",
            InputType::Diameter => "diameter",
            InputType::Circumference => "circumference",
        }
    }

    /// Capitalized name for UI labels
    pub fn display_name(&self) -> &'static str {
        match self {
            InputType::Radius => "Radius",
            InputType::Diameter => "Diameter",
            InputType::Circumference => "Circumference",
        }
    }

    /// Variable symbol used in the formula
    pub fn symbol(&self) -> &'static str {
        match self {
            InputType::Radius => "r",
            InputType::Diameter => "d",
            InputType::Circumference => "C",
        }
    }

    /// Area formula for this input type
    pub fn formula(&self) -> &'static str {
        match self {
            InputType::Radius => "A = πr²",
            InputType::Diameter => "A = πd²/4",
            InputType::Circumference => "A = C²/(4π)",
        }
    }

    /// Area in square units for a validated measurement
    pub fn area_of(&self, value: f64) -> f64 {
        match self {
            InputType::Radius => PI * value * value,
            InputType::Diameter => PI * (value / 2.0) * (value / 2.0),
            InputType::Circumference => (value * value) / (4.0 * PI),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radius" => Ok(InputType::Radius),
            "diameter" => Ok(InputType::Diameter),
            "circumference" => Ok(InputType::Circumference),
            other => Err(CalcError::invalid_input(
                "inputType",
                other,
                INVALID_INPUT_TYPE_MESSAGE,
            )),
        }
    }
}

/// Parse an input type tag. Tags are case-sensitive.
pub fn parse_input_type(tag: &str) -> CalcResult<InputType> {
    tag.parse()
}

/// Check that `value` is a positive finite number.
pub fn validate_value(value: f64) -> CalcResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            INVALID_VALUE_MESSAGE,
        ));
    }
    Ok(value)
}

/// Parse user-entered text into a validated measurement.
///
/// Surrounding whitespace is ignored. Text that is not a number, or a number
/// that is not positive and finite, is rejected.
pub fn parse_value(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input("value", trimmed, INVALID_VALUE_MESSAGE))?;
    validate_value(value)
}

/// Input parameters for an area calculation.
///
/// ## JSON Example
///
/// ```json
/// { "value": 10.0, "input_type": "radius" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaInput {
    /// The measured value, in linear units
    pub value: f64,
    /// Which measurement `value` is
    pub input_type: InputType,
}

impl AreaInput {
    pub fn new(value: f64, input_type: InputType) -> Self {
        AreaInput { value, input_type }
    }

    /// Validate input parameters
    pub fn validate(&self) -> CalcResult<()> {
        validate_value(self.value).map(|_| ())
    }
}

/// Result of an area calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    /// Area in square units, full precision
    pub area: f64,
    /// Measurement type the input represented
    pub input_type: InputType,
    /// The measurement as given
    pub input_value: f64,
    /// Formula used, e.g. "A = πr²"
    pub formula: String,
    /// Ordered narration of the computation
    pub steps: Vec<String>,
    /// Decimal places used for the displayed area
    pub precision: u32,
}

impl AreaResult {
    /// Area rounded to `precision` decimal places
    pub fn rounded_area(&self) -> f64 {
        round_to(self.area, self.precision)
    }

    /// Area as fixed-point text with `precision` decimals
    pub fn display_area(&self) -> String {
        format_fixed(self.area, self.precision)
    }
}

/// Calculate the area of a circle.
///
/// `precision` only affects the final narration line and
/// [`AreaResult::rounded_area`]; it is clamped to
/// [`crate::precision::MAX_PRECISION`].
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] if `value` is zero, negative, NaN or
/// infinite.
pub fn calculate(value: f64, input_type: InputType, precision: u32) -> CalcResult<AreaResult> {
    let value = validate_value(value)?;
    let precision = clamp_precision(precision);

    let area = input_type.area_of(value);
    let area_text = format_fixed(area, precision);

    let steps = match input_type {
        InputType::Radius => radius_steps(value, &area_text),
        InputType::Diameter => diameter_steps(value, &area_text),
        InputType::Circumference => circumference_steps(value, &area_text),
    };

    Ok(AreaResult {
        area,
        input_type,
        input_value: value,
        formula: input_type.formula().to_string(),
        steps,
        precision,
    })
}

/// Calculate from an [`AreaInput`]
pub fn calculate_input(input: &AreaInput, precision: u32) -> CalcResult<AreaResult> {
    calculate(input.value, input.input_type, precision)
}

fn radius_steps(r: f64, area_text: &str) -> Vec<String> {
    let r_text = format_number(r);
    let r_squared = format_number(r * r);
    vec![
        format!("Given: Radius (r) = {}", r_text),
        "Formula: A = πr²".to_string(),
        "Step 1: Square the radius".to_string(),
        format!("r² = {}² = {}", r_text, r_squared),
        "Step 2: Multiply by π".to_string(),
        format!("A = π × {}", r_squared),
        format!("A = 3.14159... × {}", r_squared),
        format!("A = {} square units", area_text),
    ]
}

fn diameter_steps(d: f64, area_text: &str) -> Vec<String> {
    let r = d / 2.0;
    let r_text = format_number(r);
    let r_squared = format_number(r * r);
    vec![
        format!("Given: Diameter (d) = {}", format_number(d)),
        "Formula: A = π(d/2)² or A = πd²/4".to_string(),
        "Step 1: Find radius = d/2".to_string(),
        format!("r = {}/2 = {}", format_number(d), r_text),
        "Step 2: Square the radius".to_string(),
        format!("r² = {}² = {}", r_text, r_squared),
        "Step 3: Multiply by π".to_string(),
        format!("A = π × {}", r_squared),
        format!("A = {} square units", area_text),
    ]
}

fn circumference_steps(c: f64, area_text: &str) -> Vec<String> {
    let c_text = format_number(c);
    let c_squared = format_number(c * c);
    vec![
        format!("Given: Circumference (C) = {}", c_text),
        "Formula: A = C²/(4π)".to_string(),
        "Step 1: Square the circumference".to_string(),
        format!("C² = {}² = {}", c_text, c_squared),
        "Step 2: Divide by 4π".to_string(),
        format!("A = {}/(4 × π)", c_squared),
        format!("A = {}/(4 × 3.14159...)", c_squared),
        format!("A = {}/12.56637...", c_squared),
        format!("A = {} square units", area_text),
    ]
}
