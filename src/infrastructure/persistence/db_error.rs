//! Backend error classification for PostgreSQL.

use crate::error::UniqueViolation;

/// Name PostgreSQL gives the unique constraint on `url.alias`.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "url_alias_key";

/// Only a violation of the alias constraint counts; a clash on the primary
/// key or any other constraint stays an infrastructure failure.
impl UniqueViolation for sqlx::Error {
    fn is_unique_violation(&self) -> bool {
        let Some(db_err) = self.as_database_error() else {
            return false;
        };

        if !db_err.is_unique_violation() {
            return false;
        }

        matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT))
    }
}
