//! Core domain entities.
//!
//! - [`UrlRecord`] - An alias mapped to its target URL

pub mod url_record;

pub use url_record::UrlRecord;
