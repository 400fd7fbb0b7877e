//! Logging configuration and initialization
//!
//! Sets up the tracing subscriber used by the scenario runner. The level
//! comes from the config file but `RUST_LOG` still wins when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with the specified level
///
/// Unknown levels fall back to "info" rather than failing the run.
pub fn init_logging(log_level: &str) {
    let level = match log_level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
