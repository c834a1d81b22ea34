//! PostgreSQL storage.
//!
//! - [`PgStorage`] - Owned connection handle with schema bootstrap
//! - [`PgUrlRepository`] - Alias-to-URL storage and retrieval
//!
//! Queries are checked at runtime, so the crate builds without a live
//! database.

pub mod bootstrap;
pub mod db_error;
pub mod pg_url_repository;

pub use bootstrap::PgStorage;
pub use pg_url_repository::PgUrlRepository;
