//! Helper functions shared by the services and the CLI.
//!
//! - [`validation`] - Target URL and alias validation

pub mod validation;
