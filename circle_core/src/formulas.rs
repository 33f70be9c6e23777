//! # Formula Registry
//!
//! Descriptive metadata for the three area formulas. The calculator itself
//! only needs [`InputType::formula`]; this registry carries the extra text the
//! published documents and the interactive page display alongside it.
//!
//! ## Usage
//!
//! ```rust
//! use circle_core::calculations::area::InputType;
//! use circle_core::formulas::{FormulaMetadata, ALL_FORMULAS};
//!
//! let meta = FormulaMetadata::for_input(InputType::Diameter);
//! assert_eq!(meta.formula, "A = πd²/4");
//! assert_eq!(ALL_FORMULAS.len(), 3);
//! ```

use serde::Serialize;

use crate::calculations::area::InputType;

// ============================================================================
// Variable Definition
// ============================================================================

/// A variable appearing in an area formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "r", "d", "C")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Everything the documents say about one formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaMetadata {
    /// Input type this formula consumes
    pub input_type: InputType,
    /// Heading used in metadata listings ("Using Radius")
    pub name: &'static str,
    /// Name used in structured data ("Radius Method")
    pub method_name: &'static str,
    /// Formula text
    pub formula: &'static str,
    /// How to apply the formula by hand
    pub description: &'static str,
    /// Feature-list line ("Calculate area from radius using A = πr²")
    pub feature: &'static str,
    /// The measured quantity
    pub variable: Variable,
}

const AREA_UNITS: &str = "units";

/// Registry of all formulas, in [`InputType::ALL`] order
pub const ALL_FORMULAS: [FormulaMetadata; 3] = [
    FormulaMetadata {
        input_type: InputType::Radius,
        name: "Using Radius",
        method_name: "Radius Method",
        formula: "A = πr²",
        description: "Square the radius and multiply by π. The most common method.",
        feature: "Calculate area from radius using A = πr²",
        variable: Variable::new("r", "Distance from the center to the boundary", AREA_UNITS),
    },
    FormulaMetadata {
        input_type: InputType::Diameter,
        name: "Using Diameter",
        method_name: "Diameter Method",
        formula: "A = πd²/4",
        description: "Square the diameter, multiply by π, then divide by 4.",
        feature: "Calculate area from diameter using A = πd²/4",
        variable: Variable::new("d", "Width of the circle through its center, 2r", AREA_UNITS),
    },
    FormulaMetadata {
        input_type: InputType::Circumference,
        name: "Using Circumference",
        method_name: "Circumference Method",
        formula: "A = C²/(4π)",
        description: "Square the circumference and divide by 4π.",
        feature: "Calculate area from circumference using A = C²/4π",
        variable: Variable::new("C", "Length of the boundary, 2πr", AREA_UNITS),
    },
];

impl FormulaMetadata {
    /// Metadata for the given input type
    pub fn for_input(input_type: InputType) -> &'static FormulaMetadata {
        match input_type {
            InputType::Radius => &ALL_FORMULAS[0],
            InputType::Diameter => &ALL_FORMULAS[1],
            InputType::Circumference => &ALL_FORMULAS[2],
        }
    }

    /// Short description used in structured data,
    /// e.g. "Calculate area using radius (A = πr²)"
    pub fn method_description(&self) -> String {
        format!("Calculate area using {} ({})", self.input_type.as_str(), self.formula)
    }
}

/// Generate a markdown reference table of all formulas.
pub fn generate_formulas_markdown() -> String {
    let mut md = String::new();
    md.push_str("# Area of a Circle: Formulas\n\n");
    md.push_str("| Input | Formula | Method |\n");
    md.push_str("|-------|---------|--------|\n");
    for meta in ALL_FORMULAS.iter() {
        md.push_str(&format!(
            "| {} ({}) | `{}` | {} |\n",
            meta.input_type.display_name(),
            meta.variable.symbol,
            meta.formula,
            meta.description
        ));
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_input_types() {
        for (meta, input_type) in ALL_FORMULAS.iter().zip(InputType::ALL) {
            assert_eq!(meta.input_type, input_type);
            assert_eq!(FormulaMetadata::for_input(input_type), meta);
        }
    }

    #[test]
    fn test_registry_formulas_match_calculator() {
        for meta in ALL_FORMULAS.iter() {
            assert_eq!(meta.formula, meta.input_type.formula());
            assert_eq!(meta.variable.symbol, meta.input_type.symbol());
        }
    }

    #[test]
    fn test_method_description() {
        let meta = FormulaMetadata::for_input(InputType::Circumference);
        assert_eq!(meta.method_description(), "Calculate area using circumference (A = C²/(4π))");
    }

    #[test]
    fn test_markdown_lists_every_formula() {
        let md = generate_formulas_markdown();
        assert!(md.contains("`A = πr²`"));
        assert!(md.contains("`A = πd²/4`"));
        assert!(md.contains("`A = C²/(4π)`"));
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(FormulaMetadata::for_input(InputType::Radius)).unwrap();
        assert_eq!(json["inputType"], "radius");
        assert_eq!(json["methodName"], "Radius Method");
    }
}
