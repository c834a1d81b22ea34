//! Tracing subscriber setup.
//!
//! | env     | format | default level |
//! |---------|--------|---------------|
//! | `local` | pretty | `debug`       |
//! | `dev`   | text   | `debug`       |
//! | `prod`  | json   | `info`        |
//!
//! `RUST_LOG` overrides the default level when set.

use tracing_subscriber::EnvFilter;

use crate::config::{ENV_DEV, ENV_LOCAL};

/// Default filter directive for an environment.
pub fn default_directive(env: &str) -> &'static str {
    match env {
        ENV_LOCAL | ENV_DEV => "debug",
        _ => "info",
    }
}

/// Installs the global tracing subscriber for `env`.
///
/// Must be called once, before anything logs.
pub fn init(env: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    match env {
        ENV_LOCAL => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
        ENV_DEV => tracing_subscriber::fmt().with_env_filter(filter).init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
    }
}
