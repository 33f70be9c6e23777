//! `/api/specs`: calculator specification, input constraints and endpoint list.

use std::f64::consts::PI;

use circle_core::precision::{round_to, API_PRECISION, MIN_INPUT_VALUE};
use circle_core::ALL_FORMULAS;
use serde_json::{json, Value};

use super::{CALCULATOR_VERSION, CALCULATE_MAX_AGE_SECS};

const HISTORICAL_CONTEXT: &str = "Ancient mathematicians including Archimedes proved that the area of a circle equals half its circumference times its radius, establishing the foundation for the modern formula A = πr².";

const DERIVATION: &str = "The formula A = πr² can be derived through integral calculus by integrating the circumference (2πr) from 0 to radius r, or by dividing a circle into infinite triangular wedges.";

const ACCESSIBILITY_FEATURES: [&str; 7] = [
    "Semantic HTML structure",
    "ARIA labels for form inputs",
    "Keyboard navigation support",
    "High contrast color scheme",
    "Mobile-responsive design",
    "Text alternatives for all visuals",
    "API documentation for programmatic access",
];

/// (path, method, description, example)
const ENDPOINTS: [(&str, &str, &str, &str); 5] = [
    (
        "/api/calculate",
        "POST",
        "Calculate circle area with detailed steps",
        "POST /api/calculate\n{\"value\": 10, \"inputType\": \"radius\"}",
    ),
    (
        "/api/calculate",
        "GET",
        "Calculate circle area using query parameters",
        "GET /api/calculate?value=10&type=radius",
    ),
    (
        "/api/metadata",
        "GET",
        "Retrieve calculator metadata and features",
        "GET /api/metadata",
    ),
    (
        "/api/specs",
        "GET",
        "Get complete calculator specifications",
        "GET /api/specs",
    ),
    (
        "/api/schema",
        "GET",
        "Retrieve JSON-LD schema for SEO",
        "GET /api/schema",
    ),
];

/// Build the specification document.
pub fn specs_document() -> Value {
    let input_types: Vec<Value> = ALL_FORMULAS
        .iter()
        .map(|meta| {
            json!({
                "id": meta.input_type,
                "name": meta.input_type.display_name(),
                "unit": meta.variable.units,
                "formula": meta.formula,
                "constraints": {
                    "min": MIN_INPUT_VALUE,
                    "max": Value::Null,
                    "type": "positive number",
                },
            })
        })
        .collect();

    let endpoints: Vec<Value> = ENDPOINTS
        .iter()
        .map(|(path, method, description, example)| {
            json!({
                "path": path,
                "method": method,
                "description": description,
                "example": example,
            })
        })
        .collect();

    json!({
        "success": true,
        "data": {
            "calculator": {
                "name": "Area of Circle Calculator",
                "version": CALCULATOR_VERSION,
                "description": "Advanced circle area calculator supporting multiple input methods with educational content and AI platform optimization",
                "category": "Mathematics / Geometry",
            },
            "inputTypes": input_types,
            "outputFormat": {
                "value": "area",
                "unit": "square units",
                "precision": API_PRECISION,
                "format": "decimal number",
            },
            "mathematicalBackground": {
                "constantsPi": round_to(PI, 14),
                "historicalContext": HISTORICAL_CONTEXT,
                "derivation": DERIVATION,
            },
            "apiEndpoints": endpoints,
            "accessibilityFeatures": ACCESSIBILITY_FEATURES,
            "performanceMetrics": {
                "responseTime": "<100ms",
                "cacheControlMaxAge": CALCULATE_MAX_AGE_SECS,
                "supportsCORS": true,
            },
        }
    })
}
