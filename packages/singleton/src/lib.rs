//! Singleton pattern exercise.
//!
//! [`AppConfig`] exists at most once per process and is reached only through
//! [`AppConfig::instance`].

pub mod config;
pub mod legacy;

pub use config::AppConfig;
pub use legacy::LegacyAppConfig;
