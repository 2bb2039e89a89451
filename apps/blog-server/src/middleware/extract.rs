//! Extractor configuration so that rejected bodies and paths produce
//! problem documents instead of actix's plain-text errors.

use actix_web::web;

use super::error::AppError;

/// Malformed or non-JSON bodies are validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::Validation(vec![err.to_string()]).into()
    })
}

/// A path id that does not parse can never name a stored post.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(error = %err, path = %req.path(), "Rejected path");
        AppError::NotFound(format!("No resource at {}", req.path())).into()
    })
}
