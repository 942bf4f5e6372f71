pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod input;
pub mod metric;
pub mod metrics;
pub mod report;
pub mod server;
pub mod signals;
pub mod tips;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `default_level`. Can only be called once.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
