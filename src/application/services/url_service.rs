//! Alias creation, resolution and removal.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StorageError, map_storage_error};
use crate::utils::validation::{validate_alias, validate_url};
use serde_json::json;

/// Service that validates requests and forwards them to a [`UrlRepository`].
///
/// Storage failures are mapped to [`AppError`]: an existing alias becomes
/// [`AppError::Conflict`], a missing one [`AppError::NotFound`], and
/// infrastructure errors [`AppError::Internal`] after being logged here.
pub struct UrlService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Maps `alias` to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or alias is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken; the
    /// existing mapping is not modified.
    pub async fn shorten(&self, url: &str, alias: &str) -> Result<(), AppError> {
        validate_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;
        validate_alias(alias)?;

        self.url_repository
            .save_url(url, alias)
            .await
            .map_err(|e| log_and_map(e, alias))?;

        tracing::debug!(alias, "alias saved");
        Ok(())
    }

    /// Returns the target URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        validate_alias(alias)?;

        self.url_repository
            .get_url(alias)
            .await
            .map_err(|e| log_and_map(e, alias))
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist, including
    /// a second delete of the same alias.
    pub async fn remove(&self, alias: &str) -> Result<(), AppError> {
        validate_alias(alias)?;

        self.url_repository
            .delete_url(alias)
            .await
            .map_err(|e| log_and_map(e, alias))?;

        tracing::debug!(alias, "alias deleted");
        Ok(())
    }
}

fn log_and_map(e: StorageError, alias: &str) -> AppError {
    if !e.is_domain() {
        tracing::error!(alias, error = %e, "storage failure");
    }
    map_storage_error(e, alias)
}
