//! PostgreSQL connection bootstrap.
//!
//! Opens the pool, checks liveness and makes sure the `url` table exists
//! before any repository is handed out.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::{StorageError, StorageResult};
use crate::infrastructure::persistence::PgUrlRepository;

/// Table holding alias-to-URL mappings.
///
/// The unique constraint on `alias` already creates an index, so no separate
/// lookup index is declared.
const CREATE_URL_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id BIGSERIAL PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL
    )
"#;

/// Owned handle to the PostgreSQL storage.
///
/// Created once at process startup and released with [`PgStorage::close`].
/// Repositories obtained from it share the same connection pool.
#[derive(Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects to PostgreSQL, pings it and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] tagged `storage.postgres.open` on the
    /// first failure (connection refused, authentication, permission to
    /// create the table). No handle is returned in that case and the pool is
    /// already closed.
    pub async fn open(config: &DatabaseConfig) -> StorageResult<Self> {
        const OP: &str = "storage.postgres.open";

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect_with(config.connect_options())
            .await
            .map_err(|e| StorageError::backend(OP, e))?;

        Self::from_pool(pool).await
    }

    /// Bootstraps storage on an existing pool.
    ///
    /// Runs the same liveness check and schema creation as [`PgStorage::open`].
    pub async fn from_pool(pool: PgPool) -> StorageResult<Self> {
        const OP: &str = "storage.postgres.open";

        if let Err(e) = bootstrap(&pool).await {
            pool.close().await;
            return Err(StorageError::backend(OP, e));
        }

        Ok(Self { pool })
    }

    /// Creates the `url` table if it does not exist. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> StorageResult<()> {
        const OP: &str = "storage.postgres.ensure_schema";

        create_schema(&self.pool)
            .await
            .map_err(|e| StorageError::backend(OP, e))
    }

    /// Checks that a connection can be acquired and answers a ping.
    pub async fn ping(&self) -> StorageResult<()> {
        const OP: &str = "storage.postgres.ping";

        ping(&self.pool)
            .await
            .map_err(|e| StorageError::backend(OP, e))
    }

    /// Returns a URL repository backed by this storage.
    pub fn repository(&self) -> PgUrlRepository {
        PgUrlRepository::new(self.pool.clone())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every connection in the pool.
    ///
    /// Repositories created from this handle fail with a backend error
    /// afterwards.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
    ping(pool).await?;
    create_schema(pool).await
}

async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_URL_TABLE).execute(pool).await?;
    Ok(())
}
