//! Request and response bodies for the REST API.
//!
//! Field names on the wire are camelCase.

use chrono::{SecondsFormat, Utc};
use circle_core::{AreaResult, InputType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST `/api/calculate` body.
///
/// Fields are kept as raw JSON so that a wrong type (`"value": "ten"`) is
/// reported as an invalid value rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculateRequest {
    pub value: Option<Value>,
    pub input_type: Option<Value>,
}

impl CalculateRequest {
    /// Read `value` and `inputType` from a JSON object body.
    ///
    /// Returns `None` for malformed JSON and for any top-level value that is
    /// not an object (arrays, strings, numbers, `null`).
    pub fn from_json(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(mut fields) => Some(CalculateRequest {
                value: fields.remove("value"),
                input_type: fields.remove("inputType"),
            }),
            _ => None,
        }
    }
}

/// GET `/api/calculate` query string.
///
/// `inputType` is read as a fallback for `type`; when both are present
/// `type` wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuery {
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type_alias: Option<String>,
}

impl CalculateQuery {
    /// The requested input-type tag, empty values treated as absent.
    pub fn input_type_tag(&self) -> Option<&str> {
        [self.input_type.as_deref(), self.input_type_alias.as_deref()]
            .into_iter()
            .flatten()
            .find(|tag| !tag.is_empty())
    }
}

/// Successful calculation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationData {
    pub area: f64,
    pub input_type: InputType,
    pub input_value: f64,
    pub formula: String,
    pub steps: Vec<String>,
    pub precision: u32,
}

impl From<AreaResult> for CalculationData {
    fn from(result: AreaResult) -> Self {
        CalculationData {
            area: result.rounded_area(),
            input_type: result.input_type,
            input_value: result.input_value,
            precision: result.precision,
            formula: result.formula,
            steps: result.steps,
        }
    }
}

/// Response metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    pub cached: bool,
}

impl ResponseMeta {
    pub fn now() -> Self {
        ResponseMeta {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            cached: false,
        }
    }
}

/// `/api/calculate` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CalculationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl CalculateResponse {
    pub fn success(result: AreaResult) -> Self {
        CalculateResponse {
            success: true,
            data: Some(result.into()),
            error: None,
            meta: Some(ResponseMeta::now()),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}
