//! HTTP inbound adapter exposing the landing page API.

pub mod auth;
pub mod chat;
pub mod cors;
pub mod error;
pub mod event;
pub mod health;
pub mod registrations;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::web;

/// JSON extractor settings for the API scope.
///
/// Browsers and form scripts do not always label the body, so any content
/// type is accepted and the payload alone decides whether it parses.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().content_type_required(false)
}
