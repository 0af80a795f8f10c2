//! JSON-lines replay scripts: user gestures, raw backend pushes and pauses.

use anyhow::{Context, Result};
use selection_core::Gesture;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    User(Gesture),
    /// Handed to the session verbatim, so malformed pushes can be replayed.
    Push(Value),
    WaitMs(u64),
}

/// One step per non-empty line; lines starting with `#` are skipped.
pub fn parse_script(raw: &str) -> Result<Vec<ScriptStep>> {
    raw.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("invalid script step on line {line_no}"))
        })
        .collect()
}
