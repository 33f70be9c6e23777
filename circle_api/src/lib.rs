//! # circle_api - HTTP API for the circle area calculator
//!
//! Exposes [`circle_core`] over HTTP together with the descriptive documents
//! (metadata, specs, JSON-LD schema, OpenAPI, sitemap) that advertise it.
//!
//! ## Routes
//!
//! | Method              | Path                | Handler                          |
//! |---------------------|---------------------|----------------------------------|
//! | POST, GET, OPTIONS  | `/api/calculate`    | [`handlers::calculate_post`] ... |
//! | GET, OPTIONS        | `/api/metadata`     | [`handlers::metadata`]           |
//! | GET, OPTIONS        | `/api/specs`        | [`handlers::specs`]              |
//! | GET, OPTIONS        | `/api/schema`       | [`handlers::schema`]             |
//! | GET, OPTIONS        | `/api/openapi.json` | [`handlers::openapi`]            |
//! | GET                 | `/sitemap.xml`      | [`handlers::sitemap`]            |
//! | GET                 | `/health`           | [`handlers::health`]             |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use circle_api::{config::ApiConfig, server::{self, AppState}};
//!
//! # async fn run() -> std::io::Result<()> {
//! let state = Arc::new(AppState::new(ApiConfig::default()));
//! server::serve(state, std::future::pending()).await
//! # }
//! ```

#![recursion_limit = "256"]

pub mod config;
pub mod documents;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use server::{build_router, AppState};
