//! Logging setup utilities for the demo binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Log lines go to stderr so that stdout only carries demo output.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "bridge-demo")
/// * `default_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use patterns_shared::logger::setup_logger;
///
/// setup_logger("strategy-demo", "warn");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},{}={}",
                    crate_target(binary_name),
                    default_log_level,
                    binary_name.replace('-', "_"),
                    default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Library target the binary belongs to: `bridge-demo` logs from `patterns_bridge`.
fn crate_target(binary_name: &str) -> String {
    let skin = binary_name.strip_suffix("-demo").unwrap_or(binary_name);
    format!("patterns_{}", skin.replace('-', "_"))
}
