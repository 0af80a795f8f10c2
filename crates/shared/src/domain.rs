use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The two independent selectable collections of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Dependencies,
    Frames,
}

impl CollectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::Frames => "frames",
        }
    }
}

/// File extension of an item. Only renderers and the heavy-activation
/// classification look at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKind(pub String);

impl ItemKind {
    pub const FRAME: &'static str = "frame";

    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn frame() -> Self {
        Self::new(Self::FRAME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// One entry of a backend registry push. Position in the pushed list is the
/// item's index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    pub extension: ItemKind,
    pub is_checked: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryItem {
    pub fn new(name: impl Into<String>, extension: impl Into<String>, is_checked: bool) -> Self {
        Self {
            name: name.into(),
            extension: ItemKind::new(extension),
            is_checked,
            extra: Map::new(),
        }
    }

    pub fn frame(index: usize) -> Self {
        Self {
            name: format!("frame-{index}"),
            extension: ItemKind::frame(),
            is_checked: false,
            extra: Map::new(),
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.{}", self.name, self.extension.as_str())
    }
}
