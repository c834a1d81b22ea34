//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::{StorageError, StorageResult};

/// PostgreSQL repository for alias-to-URL mappings.
///
/// Stateless apart from the shared pool; cloning is cheap.
#[derive(Debug, Clone)]
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    ///
    /// The `url` table must already exist, see
    /// [`crate::infrastructure::persistence::PgStorage`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> StorageResult<()> {
        const OP: &str = "storage.postgres.save_url";

        sqlx::query("INSERT INTO url (url, alias) VALUES ($1, $2)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_insert(OP, e))?;

        Ok(())
    }

    async fn get_url(&self, alias: &str) -> StorageResult<String> {
        const OP: &str = "storage.postgres.get_url";

        let record =
            sqlx::query_as::<_, UrlRecord>("SELECT alias, url FROM url WHERE alias = $1")
                .bind(alias)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StorageError::backend(OP, e))?;

        record
            .map(|r| r.url)
            .ok_or(StorageError::AliasNotFound { op: OP })
    }

    async fn delete_url(&self, alias: &str) -> StorageResult<()> {
        const OP: &str = "storage.postgres.delete_url";

        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::backend(OP, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::AliasNotFound { op: OP });
        }

        Ok(())
    }
}
