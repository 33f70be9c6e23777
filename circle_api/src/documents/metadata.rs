//! `/api/metadata`: title, keywords, formulas and feature list.

use chrono::{DateTime, SecondsFormat, Utc};
use circle_core::ALL_FORMULAS;
use serde_json::{json, Value};

pub const TITLE: &str = "Area of Circle - Calculator, Formula & Examples | Free Online Tool";

pub const DESCRIPTION: &str = "Area of circle calculator using formulas A = πr², A = πd²/4, and A = C²/4π. Calculate area of a circle instantly from radius, diameter, or circumference with step-by-step solutions.";

pub const KEYWORDS: [&str; 10] = [
    "area of circle",
    "area of circle calculator",
    "area of circle formula",
    "how to find area of circle",
    "how to calculate area of circle",
    "circle area",
    "πr²",
    "πr squared",
    "area of a circle",
    "circle area calculator",
];

/// Features beyond the per-formula lines.
pub const EXTRA_FEATURES: [&str; 6] = [
    "Step-by-step solutions",
    "Visual representations",
    "Real-world examples",
    "15+ decimal precision",
    "No registration required",
    "Free and open access",
];

/// Build the metadata document, stamped with `now`.
pub fn metadata_document(site_url: &str, now: DateTime<Utc>) -> Value {
    let formulas: Vec<Value> = ALL_FORMULAS
        .iter()
        .map(|meta| {
            json!({
                "name": meta.name,
                "formula": meta.formula,
                "description": meta.description,
                "inputType": meta.input_type,
            })
        })
        .collect();

    let features: Vec<&str> = ALL_FORMULAS
        .iter()
        .map(|meta| meta.feature)
        .chain(EXTRA_FEATURES)
        .collect();

    json!({
        "success": true,
        "data": {
            "title": TITLE,
            "description": DESCRIPTION,
            "keywords": KEYWORDS,
            "url": site_url,
            "type": "EducationalApplication",
            "formulas": formulas,
            "features": features,
            "schemaType": "WebApplication",
            "lastUpdated": now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    })
}
