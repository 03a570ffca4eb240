//! Wizard settings resolution.
//!
//! Priority:
//! 1. `SLSART_MAX_SCRIPT_DURATION` environment variable
//! 2. `~/.slsart/config.toml`
//! 3. Built-in defaults
//!
//! Resolution never fails: malformed sources are logged and ignored.

use std::path::PathBuf;

use slsart_types::config::WizardSettings;

/// Environment variable overriding the maximum phase duration, in seconds.
const MAX_DURATION_ENV: &str = "SLSART_MAX_SCRIPT_DURATION";

/// Resolve wizard settings from the environment and config file.
pub fn resolve_settings() -> WizardSettings {
    let file_content = config_path().and_then(|path| std::fs::read_to_string(path).ok());
    let env_value = std::env::var(MAX_DURATION_ENV).ok();

    settings_from(file_content.as_deref(), env_value.as_deref())
}

/// Path of the optional config file: `~/.slsart/config.toml`.
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".slsart").join("config.toml"))
}

/// Merge config file content and environment override into settings.
fn settings_from(file_content: Option<&str>, env_max_duration: Option<&str>) -> WizardSettings {
    let mut settings = match file_content {
        Some(content) => match toml::from_str::<WizardSettings>(content) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!("Failed to parse config.toml: {err}, using defaults");
                WizardSettings::default()
            }
        },
        None => WizardSettings::default(),
    };

    if let Some(raw) = env_max_duration {
        match raw.trim().parse::<u64>() {
            Ok(max) if max > 0 => settings.max_script_duration_secs = max,
            _ => tracing::warn!("Ignoring invalid {MAX_DURATION_ENV} value '{raw}'"),
        }
    }

    settings
}
