//! Route handlers.
//!
//! The calculation handlers are thin: they pull `value` and `inputType` out of
//! the request, hand them to [`circle_core::calculate`] at API precision and
//! wrap the result in the response envelope.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, CONTENT_TYPE,
};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use circle_core::{
    calculate, parse_input_type, parse_value, validate_value, AreaResult, CalcError, CalcResult,
    InputType, API_PRECISION, INVALID_INPUT_TYPE_MESSAGE, INVALID_VALUE_MESSAGE,
};
use serde_json::Value;
use tracing::debug;

use crate::documents::metadata::metadata_document;
use crate::documents::{CALCULATE_MAX_AGE_SECS, DOCUMENT_MAX_AGE_SECS};
use crate::documents::sitemap::sitemap_xml;
use crate::dto::{CalculateQuery, CalculateRequest, CalculateResponse};
use crate::error::ApiError;
use crate::server::AppState;

/// `Cache-Control` value for a public response cached `max_age_secs`.
pub fn cache_control(max_age_secs: u64) -> String {
    format!("public, max-age={}", max_age_secs)
}

pub const INVALID_BODY_MESSAGE: &str =
    "Invalid request body. Expected JSON with \"value\" and \"inputType\".";
pub const INVALID_QUERY_VALUE_MESSAGE: &str =
    "Invalid value. Please provide a positive number as query parameter.";
pub const INVALID_QUERY_MESSAGE: &str =
    "Invalid request. Please use ?value=number&type=radius|diameter|circumference";

// =============================================================================
// Calculation
// =============================================================================

/// POST /api/calculate
pub async fn calculate_post(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let result = calculate_from_body(&body)?;
    Ok(calculation_response(result))
}

/// GET /api/calculate?value=10&type=radius
pub async fn calculate_get(
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        debug!(%rejection, "Unreadable query string");
        ApiError::BadRequest(INVALID_QUERY_MESSAGE.to_string())
    })?;
    let result = calculate_from_query(&query)?;
    Ok(calculation_response(result))
}

/// OPTIONS /api/calculate
pub async fn calculate_options() -> impl IntoResponse {
    options_response("GET, POST, OPTIONS", CALCULATE_MAX_AGE_SECS)
}

/// Validate a JSON body and run the calculation.
///
/// `value` is checked before `inputType`, so a request with both wrong
/// reports the value.
pub fn calculate_from_body(body: &[u8]) -> Result<AreaResult, ApiError> {
    let request = CalculateRequest::from_json(body).ok_or_else(|| {
        debug!(len = body.len(), "Calculate body is not a JSON object");
        ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    })?;

    let value = value_from_json(request.value.as_ref())?;
    let input_type = input_type_from_json(request.input_type.as_ref())?;
    Ok(calculate(value, input_type, API_PRECISION)?)
}

/// Validate query parameters and run the calculation.
///
/// A missing or empty `type` means radius. `inputType` is only consulted
/// when `type` is absent or empty.
pub fn calculate_from_query(query: &CalculateQuery) -> Result<AreaResult, ApiError> {
    let value = parse_value(query.value.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::InvalidInput(INVALID_QUERY_VALUE_MESSAGE.to_string()))?;

    let input_type = match query.input_type_tag() {
        Some(tag) => parse_input_type(tag)?,
        None => InputType::default(),
    };

    Ok(calculate(value, input_type, API_PRECISION)?)
}

fn value_from_json(raw: Option<&Value>) -> CalcResult<f64> {
    match raw.and_then(Value::as_f64) {
        Some(value) => validate_value(value),
        None => Err(CalcError::invalid_input(
            "value",
            raw.map(Value::to_string).unwrap_or_default(),
            INVALID_VALUE_MESSAGE,
        )),
    }
}

fn input_type_from_json(raw: Option<&Value>) -> CalcResult<InputType> {
    match raw {
        Some(Value::String(tag)) => parse_input_type(tag),
        other => Err(CalcError::invalid_input(
            "inputType",
            other.map(Value::to_string).unwrap_or_default(),
            INVALID_INPUT_TYPE_MESSAGE,
        )),
    }
}

fn calculation_response(result: AreaResult) -> impl IntoResponse {
    debug!(
        input_type = %result.input_type,
        value = result.input_value,
        area = result.area,
        "Calculated area"
    );
    (
        [(CACHE_CONTROL, cache_control(CALCULATE_MAX_AGE_SECS))],
        Json(CalculateResponse::success(result)),
    )
}

// =============================================================================
// Documents
// =============================================================================

/// GET /api/metadata
pub async fn metadata(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(CACHE_CONTROL, cache_control(DOCUMENT_MAX_AGE_SECS))],
        Json(metadata_document(&state.config.site_url, Utc::now())),
    )
}

/// GET /api/specs
pub async fn specs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(CACHE_CONTROL, cache_control(DOCUMENT_MAX_AGE_SECS))],
        Json(state.documents.specs.clone()),
    )
}

/// GET /api/schema
pub async fn schema(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/ld+json".to_string()),
            (CACHE_CONTROL, cache_control(DOCUMENT_MAX_AGE_SECS)),
        ],
        Json(state.documents.schema.clone()),
    )
}

/// GET /api/openapi.json
pub async fn openapi(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(CACHE_CONTROL, cache_control(DOCUMENT_MAX_AGE_SECS))],
        Json(state.documents.openapi.clone()),
    )
}

/// OPTIONS on any read-only document route
pub async fn document_options() -> impl IntoResponse {
    options_response("GET, OPTIONS", DOCUMENT_MAX_AGE_SECS)
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/xml".to_string()),
            (CACHE_CONTROL, cache_control(DOCUMENT_MAX_AGE_SECS)),
        ],
        sitemap_xml(&state.config.site_url, Utc::now().date_naive()),
    )
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}

fn options_response(methods: &'static str, max_age_secs: u64) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
            (ACCESS_CONTROL_ALLOW_METHODS, methods.to_string()),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type".to_string()),
            (CACHE_CONTROL, cache_control(max_age_secs)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(value: Option<&str>, input_type: Option<&str>) -> CalculateQuery {
        CalculateQuery {
            value: value.map(str::to_string),
            input_type: input_type.map(str::to_string),
            input_type_alias: None,
        }
    }

    #[test]
    fn test_body_radius() {
        let result = calculate_from_body(br#"{"value": 10, "inputType": "radius"}"#).unwrap();
        assert_eq!(result.input_type, InputType::Radius);
        assert_eq!(result.precision, API_PRECISION);
        assert!((result.area - 314.159265358979).abs() < 1e-9);
    }

    #[test]
    fn test_body_value_checked_first() {
        let err = calculate_from_body(br#"{"value": -5, "inputType": "unknown"}"#).unwrap_err();
        assert_eq!(err.to_string(), INVALID_VALUE_MESSAGE);
    }

    #[test]
    fn test_body_rejects_non_numeric_value() {
        for body in [
            &br#"{"value": "10", "inputType": "radius"}"#[..],
            br#"{"value": null, "inputType": "radius"}"#,
            br#"{"inputType": "radius"}"#,
            br#"{"value": true, "inputType": "radius"}"#,
        ] {
            let err = calculate_from_body(body).unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(ref m) if m == INVALID_VALUE_MESSAGE));
        }
    }

    #[test]
    fn test_body_rejects_unknown_input_type() {
        for body in [
            &br#"{"value": 5, "inputType": "unknown"}"#[..],
            br#"{"value": 5}"#,
            br#"{"value": 5, "inputType": 3}"#,
        ] {
            let err = calculate_from_body(body).unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(ref m) if m == INVALID_INPUT_TYPE_MESSAGE));
        }
    }

    #[test]
    fn test_body_malformed_json() {
        let err = calculate_from_body(b"{value: 10").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == INVALID_BODY_MESSAGE));
    }

    #[test]
    fn test_body_positional_array_rejected() {
        for body in [&br#"[10, "radius"]"#[..], b"[1, 2]", b"42", br#""radius""#] {
            let err = calculate_from_body(body).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == INVALID_BODY_MESSAGE));
        }
    }

    #[test]
    fn test_cache_control_values() {
        assert_eq!(cache_control(CALCULATE_MAX_AGE_SECS), "public, max-age=86400");
        assert_eq!(cache_control(DOCUMENT_MAX_AGE_SECS), "public, max-age=604800");
    }

    #[test]
    fn test_query_defaults_to_radius() {
        let result = calculate_from_query(&query(Some("10"), None)).unwrap();
        assert_eq!(result.input_type, InputType::Radius);

        let result = calculate_from_query(&query(Some("10"), Some(""))).unwrap();
        assert_eq!(result.input_type, InputType::Radius);
    }

    #[test]
    fn test_query_type_preferred_over_input_type() {
        let mut both = query(Some("10"), Some("radius"));
        both.input_type_alias = Some("diameter".to_string());
        let result = calculate_from_query(&both).unwrap();
        assert_eq!(result.input_type, InputType::Radius);

        let mut alias = query(Some("10"), None);
        alias.input_type_alias = Some("diameter".to_string());
        let result = calculate_from_query(&alias).unwrap();
        assert_eq!(result.input_type, InputType::Diameter);
    }

    #[test]
    fn test_query_diameter() {
        let result = calculate_from_query(&query(Some("20"), Some("diameter"))).unwrap();
        assert!((result.area - 314.159265358979).abs() < 1e-9);
    }

    #[test]
    fn test_query_invalid_value() {
        for value in [None, Some(""), Some("abc"), Some("0"), Some("-3")] {
            let err = calculate_from_query(&query(value, Some("radius"))).unwrap_err();
            assert_eq!(err.to_string(), INVALID_QUERY_VALUE_MESSAGE);
        }
    }

    #[test]
    fn test_query_unknown_type() {
        let err = calculate_from_query(&query(Some("5"), Some("unknown"))).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_TYPE_MESSAGE);
    }
}
