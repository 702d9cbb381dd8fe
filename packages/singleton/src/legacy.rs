//! Non-singleton configuration kept for comparison.
//!
//! `instance()` builds a new object on every call, so two callers never
//! share the same configuration.

use std::{collections::HashMap, sync::Arc};

#[derive(Debug, Clone)]
pub struct LegacyAppConfig {
    settings: HashMap<String, String>,
}

impl LegacyAppConfig {
    /// Returns a fresh instance every time
    pub fn instance() -> Arc<LegacyAppConfig> {
        Arc::new(Self {
            settings: HashMap::from([("env".to_string(), "production".to_string())]),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}
