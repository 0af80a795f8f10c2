use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::{CollectionKind, Modifiers, RegistryItem},
    error::ProtocolError,
};

/// Sprite and background files store their frame count in 16 bits.
pub const MAX_FRAME_COUNT: usize = u16::MAX as usize;

const INBOUND_EVENT_TYPES: &[&str] = &[
    "registry_updated",
    "checked_updated",
    "deselect",
    "dependency_info",
];

/// Authoritative pushes from the backend. Each one replaces the named state
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum InboundEvent {
    RegistryUpdated {
        collection: CollectionKind,
        items: Vec<RegistryItem>,
    },
    CheckedUpdated {
        collection: CollectionKind,
        indices: Vec<usize>,
    },
    Deselect {
        collection: CollectionKind,
    },
    /// Preview of the active dependency arrived. Rebuilds the frame grid.
    DependencyInfo {
        index: usize,
        filename: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frame_count: Option<usize>,
    },
}

impl InboundEvent {
    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(raw).map_err(ProtocolError::MalformedJson)?;
        let event = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingType)?
            .to_string();

        if !INBOUND_EVENT_TYPES.contains(&event.as_str()) {
            return Err(ProtocolError::UnknownEvent(event));
        }

        let parsed: Self = serde_json::from_value(value)
            .map_err(|source| ProtocolError::InvalidPayload { event, source })?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Range checks serde cannot express. A failing event must not be applied.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        match self {
            Self::DependencyInfo {
                frame_count: Some(count),
                ..
            } if *count > MAX_FRAME_COUNT => Err(ProtocolError::OutOfRange {
                event: self.name(),
                reason: format!("frame_count {count} exceeds {MAX_FRAME_COUNT}"),
            }),
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RegistryUpdated { .. } => "registry_updated",
            Self::CheckedUpdated { .. } => "checked_updated",
            Self::Deselect { .. } => "deselect",
            Self::DependencyInfo { .. } => "dependency_info",
        }
    }
}

/// Fire-and-forget calls from the core to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum OutboundIntent {
    SelectionChanged {
        collection: CollectionKind,
        selection: Vec<usize>,
    },
    Activate {
        collection: CollectionKind,
        index: usize,
    },
    Deactivate {
        collection: CollectionKind,
    },
    CheckChanged {
        collection: CollectionKind,
        checked: Vec<usize>,
    },
    Extract {
        indices: Vec<usize>,
    },
    Reload {
        indices: Vec<usize>,
    },
    Remove {
        indices: Vec<usize>,
    },
    Export {
        index: usize,
        frames: Vec<usize>,
    },
}

impl OutboundIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectionChanged { .. } => "selection_changed",
            Self::Activate { .. } => "activate",
            Self::Deactivate { .. } => "deactivate",
            Self::CheckChanged { .. } => "check_changed",
            Self::Extract { .. } => "extract",
            Self::Reload { .. } => "reload",
            Self::Remove { .. } => "remove",
            Self::Export { .. } => "export",
        }
    }
}

/// One user gesture from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    Click {
        collection: CollectionKind,
        index: usize,
        #[serde(default)]
        modifiers: Modifiers,
    },
    CheckboxClick {
        collection: CollectionKind,
        index: usize,
    },
    SelectAll {
        collection: CollectionKind,
    },
    DeselectAll {
        collection: CollectionKind,
    },
    ExtractSelected,
    ReloadSelected,
    RemoveSelected,
    ExportPreview,
}
