//! Input validation for target URLs and aliases.
//!
//! The store accepts any strings; these checks run in the service layer
//! before anything reaches it.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Maximum alias length in characters.
pub const MAX_ALIAS_LEN: usize = 64;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute HTTP(S) URL.
///
/// The URL is not rewritten; callers store exactly what they validated.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs, including
/// ones without a host, and [`UrlValidationError::UnsupportedProtocol`] for
/// schemes such as `javascript:`, `data:` or `file:`.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    Ok(())
}

/// Validates an alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request("Alias must not be empty", json!({})));
    }

    if alias.len() > MAX_ALIAS_LEN {
        return Err(AppError::bad_request(
            format!("Alias must be at most {MAX_ALIAS_LEN} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
