//! Wizard settings.
//!
//! `WizardSettings` mirrors the optional `~/.slsart/config.toml`. Every
//! field has a default, so a missing or empty file behaves identically to
//! no file at all.

use serde::{Deserialize, Serialize};

/// Settings that shape wizard validation.
///
/// Resolved by `slsart-infra` from the environment and config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSettings {
    /// Upper bound for a single phase duration, in seconds.
    #[serde(default = "default_max_script_duration_secs")]
    pub max_script_duration_secs: u64,
}

/// Six days, in seconds.
fn default_max_script_duration_secs() -> u64 {
    518_400
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            max_script_duration_secs: default_max_script_duration_secs(),
        }
    }
}
