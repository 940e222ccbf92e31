use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::caller_engine::error::Result;

/// How long the last ball stays on the caller display before "DONE!".
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1500;

/// Settings for one caller session. Every field has a default, so `{}` is a
/// valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallerConfig {
    /// Fixed seed for reproducible games; entropy when `None`.
    pub rng_seed: Option<u64>,
    pub announcements_enabled: bool,
    pub completion_delay_ms: u64,
    /// Pause between automatic calls in `play`.
    pub call_interval_ms: u64,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            announcements_enabled: false,
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            call_interval_ms: 0,
        }
    }
}

impl CallerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(?path, ?config, "loaded caller config");
        Ok(config)
    }
}
