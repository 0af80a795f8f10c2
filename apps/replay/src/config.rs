use std::{fs, path::Path};

use selection_core::ControllerConfig;
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "info,selection_core=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub controller: ControllerConfig,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    activation_delay_ms: Option<u64>,
    heavy_kinds: Option<Vec<String>>,
    log_filter: Option<String>,
}

/// Defaults, then `path` if readable, then `APP__*` environment overrides.
pub fn load_settings(path: &Path) -> Settings {
    let raw = fs::read_to_string(path).ok();
    load_settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    raw_toml: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(file_cfg) = raw_toml.and_then(|raw| toml::from_str::<FileSettings>(raw).ok()) {
        if let Some(v) = file_cfg.activation_delay_ms {
            settings.controller.activation_delay_ms = v;
        }
        if let Some(v) = file_cfg.heavy_kinds {
            settings.controller.heavy_kinds = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("APP__ACTIVATION_DELAY_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.controller.activation_delay_ms = parsed;
        }
    }

    if let Some(v) = env("APP__HEAVY_KINDS") {
        settings.controller.heavy_kinds = v
            .split(',')
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
