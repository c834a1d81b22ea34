//! Repository trait for alias-to-URL mappings.

use crate::error::StorageResult;
use async_trait::async_trait;

/// Persistent mapping from a unique alias to a target URL.
///
/// Implementations hold no mutable in-process state and are safe to share
/// between concurrent tasks. Concurrent saves of the same alias are settled
/// by the backend's uniqueness constraint. Implementations never log; they
/// only tag errors with the operation identity and return them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping.
    ///
    /// Inputs are not validated here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::AliasExists`] if the alias is
    /// already mapped; the existing record is left untouched.
    ///
    /// Returns [`crate::error::StorageError::Backend`] on database errors.
    async fn save_url(&self, url: &str, alias: &str) -> StorageResult<()>;

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::AliasNotFound`] if no record matches.
    ///
    /// Returns [`crate::error::StorageError::Backend`] on database errors.
    async fn get_url(&self, alias: &str) -> StorageResult<String>;

    /// Removes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StorageError::AliasNotFound`] if nothing was
    /// deleted, including when the alias was already removed.
    ///
    /// Returns [`crate::error::StorageError::Backend`] on database errors.
    async fn delete_url(&self, alias: &str) -> StorageResult<()>;
}
