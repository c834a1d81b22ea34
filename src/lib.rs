//! # url-alias-store
//!
//! Maps short aliases to long URLs and persists the mapping in PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the [`domain::repositories::UrlRepository`] contract
//! - **Application Layer** ([`application`]) - Validation and error mapping over the repository
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL bootstrap and repository
//!
//! ## Error contract
//!
//! Stores return [`StorageError`]. Callers tell the two expected outcomes,
//! [`StorageError::AliasExists`] and [`StorageError::AliasNotFound`], apart
//! from infrastructure failures by matching on the variant:
//!
//! ```rust,ignore
//! match repo.get_url("ex1").await {
//!     Ok(url) => println!("{url}"),
//!     Err(StorageError::AliasNotFound { .. }) => println!("no such alias"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export POSTGRES_HOST=localhost POSTGRES_PORT=5432 POSTGRES_USER=postgres \
//!        POSTGRES_PASSWORD=postgres POSTGRES_DB=urls
//! export CONFIG_PATH=./config/local.toml
//!
//! cargo run
//! cargo run --bin urlctl -- save https://example.com ex1
//! ```
//!
//! See [`config`] for every available option.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use error::{AppError, StorageError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StorageError, StorageResult};
    pub use crate::infrastructure::persistence::{PgStorage, PgUrlRepository};
}
