use std::collections::BTreeSet;

use shared::domain::RegistryItem;

/// Ordered snapshot of one collection as last pushed by the backend.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    items: Vec<RegistryItem>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitutes the whole sequence. Indices held elsewhere must be
    /// re-derived by the caller.
    pub fn replace(&mut self, items: Vec<RegistryItem>) {
        self.items = items;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_valid(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&RegistryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[RegistryItem] {
        &self.items
    }

    /// Indices flagged `is_checked` at push time.
    pub fn checked_flags(&self) -> BTreeSet<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_checked)
            .map(|(index, _)| index)
            .collect()
    }

    /// `name.kind` filenames of every item of `kind`, in registry order.
    pub fn names_with_kind(&self, kind: &str) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.extension.as_str() == kind)
            .map(RegistryItem::filename)
            .collect()
    }
}
