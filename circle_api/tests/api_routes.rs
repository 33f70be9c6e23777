#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use circle_api::config::ApiConfig;
use circle_api::error::INTERNAL_ERROR_MESSAGE;
use circle_api::handlers::{INVALID_BODY_MESSAGE, INVALID_QUERY_VALUE_MESSAGE};
use circle_api::server::{apply_layers, build_router, AppState};
use circle_core::{INVALID_INPUT_TYPE_MESSAGE, INVALID_VALUE_MESSAGE};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let config = ApiConfig {
        site_url: "http://localhost:3000".to_string(),
        ..ApiConfig::default()
    };
    build_router(Arc::new(AppState::new(config)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(req: Request<Body>) -> Response {
    app().oneshot(req).await.unwrap()
}

async fn body_json(res: Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_str<'a>(res: &'a Response, name: &str) -> &'a str {
    res.headers().get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn post_calculate_radius() {
    let res = send(post_json(
        "/api/calculate",
        r#"{"value": 10, "inputType": "radius"}"#,
    ))
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "cache-control"), "public, max-age=86400");

    let body = body_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["inputType"], "radius");
    assert_eq!(body["data"]["inputValue"], 10.0);
    assert_eq!(body["data"]["formula"], "A = πr²");
    assert_eq!(body["data"]["precision"], 15);
    assert_eq!(body["data"]["steps"].as_array().unwrap().len(), 8);
    assert_eq!(body["meta"]["cached"], false);
    assert!(body["meta"]["timestamp"].as_str().unwrap().ends_with('Z'));

    let area = body["data"]["area"].as_f64().unwrap();
    assert!((area - 314.159265358979).abs() < 1e-9);
}

#[tokio::test]
async fn post_calculate_circumference() {
    let res = send(post_json(
        "/api/calculate",
        r#"{"value": 31.4159, "inputType": "circumference"}"#,
    ))
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["formula"], "A = C²/(4π)");
    assert_eq!(body["data"]["steps"].as_array().unwrap().len(), 9);
    let area = body["data"]["area"].as_f64().unwrap();
    assert!((area - 78.5397).abs() < 1e-3);
}

#[tokio::test]
async fn post_rejects_bad_value_before_bad_type() {
    let res = send(post_json(
        "/api/calculate",
        r#"{"value": -5, "inputType": "unknown"}"#,
    ))
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], INVALID_VALUE_MESSAGE);
}

#[tokio::test]
async fn post_rejects_unknown_input_type() {
    let res = send(post_json(
        "/api/calculate",
        r#"{"value": 5, "inputType": "square"}"#,
    ))
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], INVALID_INPUT_TYPE_MESSAGE);
}

#[tokio::test]
async fn post_rejects_malformed_json() {
    let res = send(post_json("/api/calculate", "{not json")).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], INVALID_BODY_MESSAGE);
}

#[tokio::test]
async fn post_rejects_non_object_bodies() {
    for body in [r#"[10, "radius"]"#, "[1, 2]", "10", r#""radius""#] {
        let res = send(post_json("/api/calculate", body)).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(res).await["error"], INVALID_BODY_MESSAGE);
    }
}

#[tokio::test]
async fn get_calculate_defaults_to_radius() {
    let res = send(get_req("/api/calculate?value=5")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["inputType"], "radius");
    let area = body["data"]["area"].as_f64().unwrap();
    assert!((area - 78.539816339744).abs() < 1e-9);
}

#[tokio::test]
async fn get_calculate_diameter() {
    let res = send(get_req("/api/calculate?value=20&type=diameter")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["formula"], "A = πd²/4");
    let area = body["data"]["area"].as_f64().unwrap();
    assert!((area - 314.159265358979).abs() < 1e-9);
}

#[tokio::test]
async fn get_calculate_accepts_input_type_alias() {
    let res = send(get_req("/api/calculate?value=10&inputType=diameter")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["inputType"], "diameter");
    assert_eq!(body["data"]["formula"], "A = πd²/4");
}

#[tokio::test]
async fn get_calculate_type_takes_precedence_over_alias() {
    let res = send(get_req("/api/calculate?value=10&type=radius&inputType=diameter")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["data"]["formula"], "A = πr²");
}

#[tokio::test]
async fn get_calculate_rejects_missing_value() {
    for uri in [
        "/api/calculate",
        "/api/calculate?value=abc",
        "/api/calculate?value=0&type=radius",
    ] {
        let res = send(get_req(uri)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(res).await["error"], INVALID_QUERY_VALUE_MESSAGE);
    }
}

#[tokio::test]
async fn get_calculate_rejects_unknown_type() {
    let res = send(get_req("/api/calculate?value=5&type=square")).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], INVALID_INPUT_TYPE_MESSAGE);
}

#[tokio::test]
async fn options_calculate_advertises_methods() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/calculate")
        .body(Body::empty())
        .unwrap();
    let res = send(req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "access-control-allow-origin"), "*");
    assert_eq!(
        header_str(&res, "access-control-allow-methods"),
        "GET, POST, OPTIONS"
    );
}

#[tokio::test]
async fn options_document_route_carries_document_cache() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/specs")
        .body(Body::empty())
        .unwrap();
    let res = send(req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "access-control-allow-methods"), "GET, OPTIONS");
    assert_eq!(header_str(&res, "cache-control"), "public, max-age=604800");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/calculate")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let res = send(req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "access-control-allow-origin"), "*");
    assert_eq!(header_str(&res, "access-control-allow-headers"), "Content-Type");
    assert_eq!(header_str(&res, "cache-control"), "public, max-age=86400");
}

#[tokio::test]
async fn cross_origin_get_allows_any_origin() {
    let req = Request::builder()
        .uri("/api/calculate?value=1")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::empty())
        .unwrap();
    let res = send(req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "access-control-allow-origin"), "*");
}

#[tokio::test]
async fn security_headers_are_set() {
    let res = send(get_req("/health")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "x-content-type-options"), "nosniff");
    assert_eq!(header_str(&res, "x-frame-options"), "SAMEORIGIN");
    assert_eq!(header_str(&res, "x-xss-protection"), "1; mode=block");
    assert_eq!(
        header_str(&res, "referrer-policy"),
        "strict-origin-when-cross-origin"
    );
    assert_eq!(body_text(res).await, "OK");
}

#[tokio::test]
async fn metadata_document_is_served() {
    let res = send(get_req("/api/metadata")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "cache-control"), "public, max-age=604800");
    let body = body_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["url"], "http://localhost:3000");
}

#[tokio::test]
async fn specs_document_is_served() {
    let res = send(get_req("/api/specs")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["data"]["outputFormat"]["precision"], 15);
}

#[tokio::test]
async fn responses_are_gzipped_when_accepted() {
    let req = Request::builder()
        .uri("/api/specs")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let res = send(req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "content-encoding"), "gzip");
}

#[tokio::test]
async fn schema_is_json_ld() {
    let res = send(get_req("/api/schema")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "content-type"), "application/ld+json");
    let body = body_json(res).await;
    assert_eq!(body["@context"], "https://schema.org");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let res = send(get_req("/api/openapi.json")).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["openapi"], "3.0.0");
    assert_eq!(body["servers"][0]["url"], "http://localhost:3000");
}

#[tokio::test]
async fn sitemap_is_xml() {
    let res = send(get_req("/sitemap.xml")).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(header_str(&res, "content-type"), "application/xml");
    let body = body_text(res).await;
    assert!(body.starts_with("<?xml"));
    assert!(body.contains("<loc>http://localhost:3000</loc>"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let res = send(get_req("/api/nope")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn handler_panic_becomes_500_envelope() {
    async fn boom() -> &'static str {
        panic!("boom")
    }

    let router = apply_layers(Router::new().route("/boom", get(boom)));
    let res = router.oneshot(get_req("/boom")).await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
}
