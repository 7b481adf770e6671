//! Runtime settings read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

pub const DEFAULT_LOG_PATH: &str = "blockfall.log";
pub const DEFAULT_MAX_SCALE: u16 = 2;

/// Largest accepted `BLOCKFALL_MAX_SCALE`; bigger values fall back to the default.
pub const MAX_SCALE_LIMIT: u16 = 16;

/// Settings for the terminal binary.
///
/// Every field has a default; unparsable values fall back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed piece seed. `None` seeds from the clock.
    pub seed: Option<u32>,
    pub log_path: String,
    pub log_level: LevelFilter,
    /// Largest cell scale the responsive layout may use.
    pub max_scale: u16,
    /// Outline pointer hit regions.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: DEFAULT_LOG_PATH.to_string(),
            log_level: LevelFilter::Info,
            max_scale: DEFAULT_MAX_SCALE,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Read `BLOCKFALL_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let log_path = var("BLOCKFALL_LOG_PATH").unwrap_or(defaults.log_path);

        let log_level = var("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        let max_scale = var("BLOCKFALL_MAX_SCALE")
            .and_then(|s| s.parse().ok())
            .filter(|s: &u16| (1..=MAX_SCALE_LIMIT).contains(s))
            .unwrap_or(defaults.max_scale);

        let debug = var("BLOCKFALL_DEBUG")
            .map(|s| parse_flag(&s))
            .unwrap_or(defaults.debug);

        Self {
            seed,
            log_path,
            log_level,
            max_scale,
            debug,
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
