//! Click-driven selection state machine.
//!
//! Pure state: no intents are emitted here. Callers inspect the returned
//! [`ClickOutcome`] and forward what it asks for to the gateway.

use std::collections::BTreeSet;

use shared::domain::Modifiers;

/// What a click asks the backend to do about the previewed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    None,
    Activate(usize),
    Deactivate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub changed: bool,
    pub activation: Activation,
}

impl ClickOutcome {
    fn ignored() -> Self {
        Self {
            changed: false,
            activation: Activation::None,
        }
    }

    fn membership(changed: bool) -> Self {
        Self {
            changed,
            activation: Activation::None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selection: BTreeSet<usize>,
    anchor: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn snapshot(&self) -> Vec<usize> {
        self.selection.iter().copied().collect()
    }

    /// Applies a click on `index` against a registry of `len` items.
    /// Ctrl wins when both modifiers are set.
    pub fn click(&mut self, index: usize, modifiers: Modifiers, len: usize) -> ClickOutcome {
        if index >= len {
            return ClickOutcome::ignored();
        }

        if modifiers.ctrl {
            self.ctrl_click(index)
        } else if modifiers.shift {
            self.shift_click(index, len)
        } else {
            self.plain_click(index)
        }
    }

    fn ctrl_click(&mut self, index: usize) -> ClickOutcome {
        if !self.selection.remove(&index) {
            self.selection.insert(index);
            self.anchor = index;
        }
        ClickOutcome::membership(true)
    }

    fn shift_click(&mut self, index: usize, len: usize) -> ClickOutcome {
        let first = self.anchor.min(index);
        let last = self.anchor.max(index).min(len - 1);
        let range: BTreeSet<usize> = (first..=last).collect();
        let changed = range != self.selection;
        self.selection = range;
        ClickOutcome::membership(changed)
    }

    fn plain_click(&mut self, index: usize) -> ClickOutcome {
        self.anchor = index;
        if self.selection.len() == 1 && self.selection.contains(&index) {
            self.selection.clear();
            return ClickOutcome {
                changed: true,
                activation: Activation::Deactivate,
            };
        }

        self.selection.clear();
        self.selection.insert(index);
        ClickOutcome {
            changed: true,
            activation: Activation::Activate(index),
        }
    }

    /// Selects every index below `len`. Anchor is kept.
    pub fn select_all(&mut self, len: usize) -> bool {
        let all: BTreeSet<usize> = (0..len).collect();
        let changed = all != self.selection;
        self.selection = all;
        changed
    }

    /// Empties the selection. Anchor is kept.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selection.is_empty();
        self.selection.clear();
        changed
    }

    /// Forgets selection and anchor after a registry replacement.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.anchor = 0;
    }
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
