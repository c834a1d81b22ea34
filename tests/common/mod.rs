#![allow(dead_code)]

use sqlx::PgPool;
use url_alias_store::config::DatabaseConfig;
use url_alias_store::domain::entities::UrlRecord;
use url_alias_store::infrastructure::persistence::PgStorage;

pub async fn setup_storage(pool: &PgPool) -> PgStorage {
    PgStorage::from_pool(pool.clone()).await.unwrap()
}

pub async fn insert_url(pool: &PgPool, url: &str, alias: &str) {
    sqlx::query("INSERT INTO url (url, alias) VALUES ($1, $2)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_record(pool: &PgPool, alias: &str) -> Option<UrlRecord> {
    sqlx::query_as::<_, UrlRecord>("SELECT alias, url FROM url WHERE alias = $1")
        .bind(alias)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Settings pointing at a port nothing listens on.
pub fn unreachable_database() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: "nobody".to_string(),
        password: "nothing".to_string(),
        name: "none".to_string(),
        max_connections: 1,
        connect_timeout: 2,
        idle_timeout: 10,
        max_lifetime: 10,
    }
}
