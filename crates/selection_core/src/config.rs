use std::time::Duration;

use serde::Deserialize;
use shared::domain::ItemKind;

pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = 100;

/// Kinds whose preview needs decoding on the backend.
pub const DEFAULT_HEAVY_KINDS: &[&str] = &["c16", "s16", "blk"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub activation_delay_ms: u64,
    pub heavy_kinds: Vec<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            activation_delay_ms: DEFAULT_ACTIVATION_DELAY_MS,
            heavy_kinds: DEFAULT_HEAVY_KINDS.iter().map(|kind| kind.to_string()).collect(),
        }
    }
}

impl ControllerConfig {
    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }

    pub fn is_heavy(&self, kind: &ItemKind) -> bool {
        self.heavy_kinds
            .iter()
            .any(|heavy| heavy.eq_ignore_ascii_case(kind.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_defer_sprite_and_background_kinds() {
        let config = ControllerConfig::default();
        assert_eq!(config.activation_delay(), Duration::from_millis(100));
        assert!(config.is_heavy(&ItemKind::new("c16")));
        assert!(config.is_heavy(&ItemKind::new("BLK")));
        assert!(!config.is_heavy(&ItemKind::new("wav")));
        assert!(!config.is_heavy(&ItemKind::frame()));
    }

    #[test]
    fn partial_table_keeps_remaining_defaults() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"activation_delay_ms": 250}"#).expect("parse");
        assert_eq!(config.activation_delay_ms, 250);
        assert_eq!(config.heavy_kinds, vec!["c16", "s16", "blk"]);
    }
}
