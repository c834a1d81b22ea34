//! Domain layer: the URL record and the storage contract.
//!
//! The domain layer has no dependencies on infrastructure. Repository traits
//! define contracts implemented by the infrastructure layer; failures are
//! expressed with [`crate::error::StorageError`].
//!
//! - [`entities`] - The URL record as persisted
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
