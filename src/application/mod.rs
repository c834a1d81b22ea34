//! Application layer services implementing business logic.
//!
//! Services consume repository traits, validate input and translate storage
//! failures into [`crate::error::AppError`].
//!
//! - [`services::url_service::UrlService`] - Alias creation, resolution and removal

pub mod services;
