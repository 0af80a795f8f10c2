//! Checked subset of a collection and its group toggle rules.

use std::collections::BTreeSet;

use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckAction {
    /// The item was outside the selection; the selection was dropped first.
    Solo { selection_cleared: bool },
    /// The item was inside the selection; every selected item now has `target`.
    Group { target: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
    checked: BTreeSet<usize>,
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> &BTreeSet<usize> {
        &self.checked
    }

    pub fn contains(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn snapshot(&self) -> Vec<usize> {
        self.checked.iter().copied().collect()
    }

    /// Toggles `index` and, when it belongs to the selection, forces the
    /// whole selection to the state `index` ended up in.
    pub fn toggle(&mut self, index: usize, selection: &mut SelectionState) -> CheckAction {
        if !selection.contains(index) {
            let selection_cleared = selection.clear();
            self.flip(index);
            return CheckAction::Solo { selection_cleared };
        }

        let target = self.flip(index);
        for &member in selection.selection() {
            if target {
                self.checked.insert(member);
            } else {
                self.checked.remove(&member);
            }
        }
        CheckAction::Group { target }
    }

    /// Replaces the set with an authoritative value. Indices at or past `len`
    /// are dropped; returns how many were.
    pub fn replace(&mut self, indices: impl IntoIterator<Item = usize>, len: usize) -> usize {
        let mut dropped = 0;
        self.checked = indices
            .into_iter()
            .filter(|&index| {
                let valid = index < len;
                if !valid {
                    dropped += 1;
                }
                valid
            })
            .collect();
        dropped
    }

    fn flip(&mut self, index: usize) -> bool {
        if self.checked.remove(&index) {
            false
        } else {
            self.checked.insert(index);
            true
        }
    }
}

#[cfg(test)]
#[path = "tests/check_group_tests.rs"]
mod tests;
