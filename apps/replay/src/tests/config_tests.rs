use std::collections::HashMap;

use super::*;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(load_settings_from(None, env_of(&[])), Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
activation_delay_ms = 40
heavy_kinds = ["c16"]
"#;
    let settings = load_settings_from(Some(raw), env_of(&[]));

    assert_eq!(settings.controller.activation_delay_ms, 40);
    assert_eq!(settings.controller.heavy_kinds, vec!["c16"]);
    assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn env_overrides_file() {
    let raw = "activation_delay_ms = 40\nlog_filter = \"warn\"\n";
    let settings = load_settings_from(
        Some(raw),
        env_of(&[
            ("APP__ACTIVATION_DELAY_MS", "250"),
            ("APP__HEAVY_KINDS", "c16, s16 ,,blk"),
        ]),
    );

    assert_eq!(settings.controller.activation_delay_ms, 250);
    assert_eq!(settings.controller.heavy_kinds, vec!["c16", "s16", "blk"]);
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn invalid_values_keep_previous_layer() {
    let settings = load_settings_from(
        Some("activation_delay_ms = \"soon\""),
        env_of(&[("APP__ACTIVATION_DELAY_MS", "later"), ("APP__LOG_FILTER", " ")]),
    );

    assert_eq!(settings, Settings::default());
}
