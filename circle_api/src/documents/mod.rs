//! # Published Documents
//!
//! Static descriptive documents served next to the calculator endpoint. They
//! reference the formula registry in `circle_core` but never call the
//! calculator.
//!
//! - [`metadata`] - title, keywords, formulas, features
//! - [`specs`] - input constraints, output format, endpoint list
//! - [`schema`] - JSON-LD structured data
//! - [`openapi`] - OpenAPI 3.0 document
//! - [`sitemap`] - XML sitemap
//!
//! Documents that do not depend on the clock are rendered once at startup
//! and held in [`Documents`].

pub mod metadata;
pub mod openapi;
pub mod schema;
pub mod sitemap;
pub mod specs;

use serde_json::Value;

/// Published calculator version.
pub const CALCULATOR_VERSION: &str = "2.0";

/// `max-age` advertised for calculation responses.
pub const CALCULATE_MAX_AGE_SECS: u64 = 86_400;

/// `max-age` for the descriptive documents.
pub const DOCUMENT_MAX_AGE_SECS: u64 = 604_800;

/// Pre-rendered documents for a given site URL.
#[derive(Debug, Clone)]
pub struct Documents {
    pub specs: Value,
    pub schema: Value,
    pub openapi: Value,
}

impl Documents {
    pub fn render(site_url: &str) -> Self {
        Documents {
            specs: specs::specs_document(),
            schema: schema::schema_document(site_url),
            openapi: openapi::openapi_document(site_url),
        }
    }
}
