//! Singleton pattern demo.
//!
//! Fetches the configuration twice, prints whether both accesses returned the
//! same object, then prints the value for the requested key.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin singleton-demo
//! cargo run --bin singleton-demo -- --key env --legacy
//! ```

use std::sync::Arc;

use clap::Parser;

use patterns_shared::{logger::setup_logger, time::timestamp_to_rfc3339};
use patterns_singleton::{AppConfig, LegacyAppConfig};

#[derive(Parser, Debug)]
#[command(name = "singleton-demo")]
#[command(about = "Show that the application configuration exists only once", long_about = None)]
struct Args {
    /// Setting to look up
    #[arg(short = 'k', long, default_value = "env")]
    key: String,

    /// Use the non-singleton configuration instead
    #[arg(long)]
    legacy: bool,
}

fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    let (identical, value) = if args.legacy {
        let c1 = LegacyAppConfig::instance();
        let c2 = LegacyAppConfig::instance();
        (Arc::ptr_eq(&c1, &c2), c1.get(&args.key).map(str::to_string))
    } else {
        let c1 = AppConfig::instance();
        let c2 = AppConfig::instance();
        tracing::info!(
            "AppConfig loaded at {}",
            timestamp_to_rfc3339(c1.loaded_at()).unwrap_or_default()
        );
        (std::ptr::eq(c1, c2), c1.get(&args.key).map(str::to_string))
    };

    println!("{identical}");
    match value {
        Some(value) => println!("{value}"),
        None => {
            tracing::warn!("Setting '{}' is not configured", args.key);
            println!();
        }
    }
}
