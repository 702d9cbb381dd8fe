//! Process-wide application configuration.
//!
//! ## 状態遷移
//!
//! - Uninitialized: `instance()` がまだ呼ばれていない
//! - Initialized: 最初の `instance()` で唯一のインスタンスが構築された
//!
//! 初期化は `OnceLock` で直列化されるため、同時に初回アクセスが発生しても
//! 構築は 1 回だけ行われる。構築後の設定は読み取り専用。

use std::{
    collections::HashMap,
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use patterns_shared::{
    PatternError,
    time::{Clock, SystemClock},
};

static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Application settings, shared by the whole process.
///
/// There is no public constructor and no `Clone` impl; [`AppConfig::try_clone`]
/// and [`AppConfig::try_dup`] exist only to fail loudly.
#[derive(Debug)]
pub struct AppConfig {
    settings: HashMap<String, String>,
    /// Unix timestamp (milliseconds) of construction
    loaded_at: i64,
}

impl AppConfig {
    fn new(clock: &dyn Clock) -> Self {
        let settings = HashMap::from([("env".to_string(), "production".to_string())]);
        Self {
            settings,
            loaded_at: clock.now_millis(),
        }
    }

    /// The sole instance, built on first access
    pub fn instance() -> &'static AppConfig {
        INSTANCE.get_or_init(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            let config = Self::new(&SystemClock);
            tracing::debug!("AppConfig initialized with {} settings", config.settings.len());
            config
        })
    }

    /// Whether the instance has been built yet
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Number of instances built during this process (0 or 1)
    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Value configured for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Unix timestamp (milliseconds) at which the instance was built
    pub fn loaded_at(&self) -> i64 {
        self.loaded_at
    }

    /// Always fails: the configuration cannot be cloned
    pub fn try_clone(&self) -> Result<AppConfig, PatternError> {
        Err(PatternError::invalid("Can't clone this config"))
    }

    /// Always fails: the configuration cannot be duplicated
    pub fn try_dup(&self) -> Result<AppConfig, PatternError> {
        Err(PatternError::invalid("Can't duplicate this config"))
    }
}
