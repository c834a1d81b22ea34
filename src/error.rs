//! Error types for the storage and application layers.
//!
//! [`StorageError`] is the contract between the store and its callers: two
//! domain kinds ([`StorageError::AliasExists`], [`StorageError::AliasNotFound`])
//! and one opaque infrastructure kind ([`StorageError::Backend`]). Every
//! variant carries the identity of the operation that produced it, so a single
//! log line at the top of the call stack is enough to locate the failure.
//!
//! [`AppError`] is what the service layer hands to its own callers.

use serde_json::{Value, json};
use thiserror::Error;

/// Boxed source error of an infrastructure failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Failure reported by a URL store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record for the alias already exists.
    #[error("{op}: url alias already exists")]
    AliasExists { op: &'static str },

    /// No record exists for the alias.
    #[error("{op}: url alias not found")]
    AliasNotFound { op: &'static str },

    /// Connectivity, authentication, permission or query failure.
    #[error("{op}: {source}")]
    Backend {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

/// Capability check for backend errors that signal a duplicate alias.
///
/// Implementations must only report violations of the alias uniqueness
/// constraint; conflicts on other columns are infrastructure failures.
///
/// Implemented once per backend adapter so that the translation logic in
/// [`StorageError::from_insert`] never inspects driver-specific codes.
pub trait UniqueViolation {
    fn is_unique_violation(&self) -> bool;
}

impl StorageError {
    /// Wraps an infrastructure error with the operation identity.
    pub fn backend<E>(op: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            op,
            source: Box::new(err),
        }
    }

    /// Translates an error returned by an insert.
    ///
    /// Alias uniqueness violations become [`StorageError::AliasExists`]; anything
    /// else is wrapped as [`StorageError::Backend`].
    pub fn from_insert<E>(op: &'static str, err: E) -> Self
    where
        E: UniqueViolation + std::error::Error + Send + Sync + 'static,
    {
        if err.is_unique_violation() {
            Self::AliasExists { op }
        } else {
            Self::backend(op, err)
        }
    }

    /// Operation that produced the error, e.g. `storage.postgres.save_url`.
    pub fn op(&self) -> &'static str {
        match self {
            Self::AliasExists { op }
            | Self::AliasNotFound { op }
            | Self::Backend { op, .. } => *op,
        }
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }

    pub fn is_alias_not_found(&self) -> bool {
        matches!(self, Self::AliasNotFound { .. })
    }

    /// Returns true for the expected, caller-recoverable kinds.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Backend { .. })
    }
}

/// Error returned by the application services.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Maps a storage failure for an alias into an application error.
///
/// Infrastructure details stay out of the returned error; the caller is
/// expected to have logged them.
pub fn map_storage_error(e: StorageError, alias: &str) -> AppError {
    match e {
        StorageError::AliasExists { .. } => {
            AppError::conflict("Alias already exists", json!({ "alias": alias }))
        }
        StorageError::AliasNotFound { .. } => {
            AppError::not_found("Alias not found", json!({ "alias": alias }))
        }
        StorageError::Backend { op, .. } => {
            AppError::internal("Storage error", json!({ "operation": op }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("fake backend error (unique: {unique})")]
    struct FakeBackendError {
        unique: bool,
    }

    impl UniqueViolation for FakeBackendError {
        fn is_unique_violation(&self) -> bool {
            self.unique
        }
    }

    #[test]
    fn test_from_insert_translates_unique_violation() {
        let err = StorageError::from_insert("test.save", FakeBackendError { unique: true });

        assert!(err.is_alias_exists());
        assert!(err.is_domain());
        assert_eq!(err.op(), "test.save");
        assert_eq!(err.to_string(), "test.save: url alias already exists");
    }

    #[test]
    fn test_from_insert_wraps_other_errors() {
        let err = StorageError::from_insert("test.save", FakeBackendError { unique: false });

        assert!(matches!(err, StorageError::Backend { .. }));
        assert!(!err.is_domain());
        assert_eq!(
            err.to_string(),
            "test.save: fake backend error (unique: false)"
        );
    }

    #[test]
    fn test_backend_keeps_source() {
        use std::error::Error as _;

        let err = StorageError::backend("test.get", FakeBackendError { unique: true });

        // backend() never classifies, even for unique violations
        assert!(!err.is_alias_exists());
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<FakeBackendError>().is_some());
    }

    #[test]
    fn test_not_found_message() {
        let err = StorageError::AliasNotFound { op: "test.delete" };

        assert!(err.is_alias_not_found());
        assert!(!err.is_alias_exists());
        assert_eq!(err.to_string(), "test.delete: url alias not found");
    }

    #[test]
    fn test_map_storage_error() {
        let conflict = map_storage_error(StorageError::AliasExists { op: "x" }, "ex1");
        assert!(matches!(conflict, AppError::Conflict { .. }));
        assert_eq!(conflict.details()["alias"], "ex1");

        let missing = map_storage_error(StorageError::AliasNotFound { op: "x" }, "ex1");
        assert!(matches!(missing, AppError::NotFound { .. }));

        let internal = map_storage_error(
            StorageError::backend("storage.postgres.get_url", FakeBackendError { unique: false }),
            "ex1",
        );
        assert!(matches!(internal, AppError::Internal { .. }));
        assert_eq!(internal.code(), "internal_error");
        assert_eq!(internal.details()["operation"], "storage.postgres.get_url");
        assert!(!internal.to_string().contains("fake backend"));
    }
}
