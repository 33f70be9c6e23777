//! `/api/openapi.json`: OpenAPI 3.0 description of the public API.

use circle_core::precision::MIN_INPUT_VALUE;
use circle_core::InputType;
use serde_json::{json, Value};

use super::CALCULATOR_VERSION;

fn input_type_tags() -> Vec<&'static str> {
    InputType::ALL.iter().map(InputType::as_str).collect()
}

fn calculate_response_ref() -> Value {
    json!({
        "application/json": {
            "schema": { "$ref": "#/components/schemas/CalculateResponse" }
        }
    })
}

fn metadata_get(summary: &str, description: &str, ok: &str) -> Value {
    json!({
        "get": {
            "summary": summary,
            "description": description,
            "responses": { "200": { "description": ok } },
            "tags": ["Metadata"],
        }
    })
}

/// Build the OpenAPI document.
pub fn openapi_document(site_url: &str) -> Value {
    let tags = input_type_tags();

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Area of Circle Calculator API",
            "description": "Free, open API for calculating circle area with multiple input methods (radius, diameter, circumference)",
            "version": format!("{}.0", CALCULATOR_VERSION),
            "contact": { "name": "Circle Calculators", "url": site_url },
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" },
        },
        "servers": [{ "url": site_url, "description": "Production server" }],
        "paths": {
            "/api/calculate": {
                "post": {
                    "summary": "Calculate circle area",
                    "description": "Calculate the area of a circle using POST request with JSON payload",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/CalculateRequest" }
                            }
                        },
                    },
                    "responses": {
                        "200": { "description": "Successful calculation", "content": calculate_response_ref() },
                        "400": { "description": "Invalid input" },
                    },
                    "tags": ["Calculator"],
                },
                "get": {
                    "summary": "Calculate circle area via query parameters",
                    "description": "Calculate the area of a circle using GET request with query parameters",
                    "parameters": [
                        {
                            "name": "value",
                            "in": "query",
                            "required": true,
                            "description": "The numeric value (radius, diameter, or circumference)",
                            "schema": { "type": "number", "example": 10, "minimum": MIN_INPUT_VALUE },
                        },
                        {
                            "name": "type",
                            "in": "query",
                            "required": false,
                            "description": "The type of input value",
                            "schema": { "type": "string", "enum": tags, "default": "radius" },
                        },
                    ],
                    "responses": {
                        "200": { "description": "Successful calculation", "content": calculate_response_ref() },
                        "400": { "description": "Invalid input" },
                    },
                    "tags": ["Calculator"],
                },
            },
            "/api/metadata": metadata_get(
                "Get calculator metadata",
                "Retrieve comprehensive metadata about the calculator, including keywords, formulas, and features",
                "Metadata retrieved successfully",
            ),
            "/api/specs": metadata_get(
                "Get calculator specifications",
                "Retrieve detailed specifications about the calculator, input types, and API endpoints",
                "Specifications retrieved successfully",
            ),
            "/api/schema": metadata_get(
                "Get JSON-LD schema",
                "Retrieve structured data (JSON-LD) for SEO and AI platform indexing",
                "Schema retrieved successfully",
            ),
        },
        "components": {
            "schemas": {
                "CalculateRequest": {
                    "type": "object",
                    "required": ["value", "inputType"],
                    "properties": {
                        "value": {
                            "type": "number",
                            "description": "The numeric value to calculate from",
                            "example": 10,
                            "minimum": MIN_INPUT_VALUE,
                        },
                        "inputType": {
                            "type": "string",
                            "description": "Type of input (radius, diameter, or circumference)",
                            "enum": tags,
                            "example": "radius",
                        },
                    },
                },
                "CalculateResponse": {
                    "type": "object",
                    "required": ["success", "data"],
                    "properties": {
                        "success": { "type": "boolean", "example": true },
                        "data": {
                            "type": "object",
                            "properties": {
                                "area": { "type": "number", "example": 314.159265359 },
                                "inputType": { "type": "string", "example": "radius" },
                                "inputValue": { "type": "number", "example": 10 },
                                "formula": { "type": "string", "example": "A = πr²" },
                                "steps": { "type": "array", "items": { "type": "string" } },
                                "precision": { "type": "integer", "example": 15 },
                            },
                        },
                        "error": { "type": "string" },
                    },
                },
            },
        },
        "tags": [
            { "name": "Calculator", "description": "Core circle area calculation endpoints" },
            { "name": "Metadata", "description": "Information about the calculator and its capabilities" },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = openapi_document("https://areaofcircle.com");
        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["version"], "2.0.0");
        assert_eq!(doc["servers"][0]["url"], "https://areaofcircle.com");

        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 4);
        assert!(paths["/api/calculate"].get("post").is_some());
        assert!(paths["/api/calculate"].get("get").is_some());
        assert_eq!(paths["/api/specs"]["get"]["tags"][0], "Metadata");
    }

    #[test]
    fn test_enums_list_every_input_type() {
        let doc = openapi_document("https://areaofcircle.com");
        let expected = json!(["radius", "diameter", "circumference"]);
        assert_eq!(
            doc["components"]["schemas"]["CalculateRequest"]["properties"]["inputType"]["enum"],
            expected
        );
        assert_eq!(
            doc["paths"]["/api/calculate"]["get"]["parameters"][1]["schema"]["enum"],
            expected
        );
    }
}
