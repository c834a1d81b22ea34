//! URL record entity as persisted in the `url` table.

use sqlx::FromRow;

/// A persisted alias-to-URL mapping.
///
/// The surrogate `id` column exists only to give the table a primary key and
/// is never selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UrlRecord {
    pub alias: String,
    pub url: String,
}
