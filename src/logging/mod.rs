//! Logging initialization with environment-based formatters
//!
//! - Production: structured JSON lines for log aggregation
//! - Sandbox: human-readable, colored output for local scans

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging based on the environment.
///
/// Logs go to stderr so the report on stdout stays machine-readable when
/// `REPORT_FORMAT=json`. Filtering honours `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}
