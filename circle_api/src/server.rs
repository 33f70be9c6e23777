//! # HTTP Server
//!
//! Router assembly, the middleware stack and the serve loop.
//!
//! ## Middleware (outermost first)
//! ```text
//! TraceLayer ─▶ Compression ─▶ security + CORS headers ─▶ CatchPanic ─▶ routes
//! ```
//!
//! Every response allows any origin. Preflight requests are answered by the
//! per-route OPTIONS handlers so they carry the route's cache policy.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ApiConfig;
use crate::documents::Documents;
use crate::error::ApiError;
use crate::handlers;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub config: ApiConfig,
    pub documents: Documents,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let documents = Documents::render(&config.site_url);
        AppState { config, documents }
    }
}

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route(
            "/api/calculate",
            get(handlers::calculate_get)
                .post(handlers::calculate_post)
                .options(handlers::calculate_options),
        )
        .route(
            "/api/metadata",
            get(handlers::metadata).options(handlers::document_options),
        )
        .route(
            "/api/specs",
            get(handlers::specs).options(handlers::document_options),
        )
        .route(
            "/api/schema",
            get(handlers::schema).options(handlers::document_options),
        )
        .route(
            "/api/openapi.json",
            get(handlers::openapi).options(handlers::document_options),
        )
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/health", get(handlers::health))
        .with_state(state);

    apply_layers(routes)
}

/// Wrap `router` in the middleware stack shared by every route.
pub fn apply_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Turns a handler panic into the generic 500 envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Handler panicked");
    ApiError::internal().into_response()
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(state: Arc<AppState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let bind_addr = state.config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "HTTP server listening");

    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("HTTP server shutting down");
        })
        .await
}
