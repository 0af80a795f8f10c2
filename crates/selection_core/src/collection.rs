use std::collections::BTreeSet;

use shared::{
    domain::{CollectionKind, Modifiers, RegistryItem},
    protocol::OutboundIntent,
};
use tracing::{debug, warn};

use crate::{
    check_group::{CheckAction, CheckedSet},
    config::ControllerConfig,
    gateway::{Outbox, SyncGateway},
    registry::Registry,
    selection::{Activation, SelectionState},
};

/// Selection, check state and backend sync for one collection.
///
/// All methods run to completion; the only deferred work is the activation
/// timer owned by the gateway.
pub struct CollectionController {
    kind: CollectionKind,
    config: ControllerConfig,
    registry: Registry,
    selection: SelectionState,
    checked: CheckedSet,
    gateway: SyncGateway,
    preview_busy: bool,
}

impl CollectionController {
    pub fn new(kind: CollectionKind, config: ControllerConfig, outbox: Outbox) -> Self {
        let gateway = SyncGateway::new(kind, outbox, config.activation_delay());
        Self {
            kind,
            config,
            registry: Registry::new(),
            selection: SelectionState::new(),
            checked: CheckedSet::new(),
            gateway,
            preview_busy: false,
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn on_click(&mut self, index: usize, modifiers: Modifiers) {
        let Some(item) = self.registry.get(index) else {
            warn!(collection = self.kind.as_str(), index, "click on stale index ignored");
            return;
        };
        let heavy = self.config.is_heavy(&item.extension);

        let outcome = self.selection.click(index, modifiers, self.registry.len());
        if outcome.changed {
            self.gateway.selection_changed(&self.selection);
        }

        match outcome.activation {
            Activation::Activate(index) => {
                self.preview_busy = heavy;
                self.gateway.activate(index, heavy);
            }
            Activation::Deactivate => {
                self.preview_busy = false;
                self.gateway.deactivate();
            }
            Activation::None => self.drop_unselected_activation(),
        }
    }

    /// A ctrl/shift click may deselect the item whose deferred activation is
    /// still armed; the backend must not be asked to preview it.
    fn drop_unselected_activation(&mut self) {
        let Some(pending) = self.gateway.pending_activation_index() else {
            return;
        };
        if !self.selection.contains(pending) && self.gateway.cancel_pending_activation() {
            self.preview_busy = false;
        }
    }

    pub fn on_checkbox_click(&mut self, index: usize) {
        if !self.registry.is_valid(index) {
            warn!(collection = self.kind.as_str(), index, "check on stale index ignored");
            return;
        }

        let action = self.checked.toggle(index, &mut self.selection);
        if let CheckAction::Solo { selection_cleared } = action {
            if selection_cleared {
                self.gateway.selection_changed(&self.selection);
            }
            self.preview_busy = false;
            self.gateway.deactivate();
        }
        debug!(collection = self.kind.as_str(), index, ?action, "check toggled");
        self.gateway.check_changed(&self.checked);
    }

    pub fn on_select_all(&mut self) {
        if self.selection.select_all(self.registry.len()) {
            self.gateway.selection_changed(&self.selection);
        }
    }

    pub fn on_deselect_all(&mut self) {
        if self.selection.clear() {
            self.gateway.selection_changed(&self.selection);
        }
        self.preview_busy = false;
        self.gateway.deactivate();
    }

    /// Backend pushed a new snapshot of the collection.
    pub fn registry_updated(&mut self, items: Vec<RegistryItem>) {
        if self.gateway.cancel_pending_activation() {
            self.preview_busy = false;
        }
        self.registry.replace(items);
        self.selection.reset();
        let len = self.registry.len();
        self.checked.replace(self.registry.checked_flags(), len);
        debug!(
            collection = self.kind.as_str(),
            len,
            checked = self.checked.checked().len(),
            "registry replaced"
        );
    }

    /// Backend overwrote the checked set.
    pub fn checked_updated(&mut self, indices: impl IntoIterator<Item = usize>) {
        let dropped = self.checked.replace(indices, self.registry.len());
        if dropped > 0 {
            warn!(
                collection = self.kind.as_str(),
                dropped, "checked push referenced stale indices"
            );
        }
    }

    /// Backend asked to drop the selection.
    pub fn deselect(&mut self) {
        self.selection.clear();
        if self.gateway.cancel_pending_activation() {
            self.preview_busy = false;
        }
    }

    pub(crate) fn preview_arrived(&mut self) {
        self.preview_busy = false;
    }

    /// `make(selection)`, unless nothing is selected.
    pub(crate) fn selection_intent(
        &self,
        make: impl FnOnce(Vec<usize>) -> OutboundIntent,
    ) -> Option<OutboundIntent> {
        if self.selection.is_empty() {
            return None;
        }
        Some(make(self.selection.snapshot()))
    }

    pub fn current_selection(&self) -> &BTreeSet<usize> {
        self.selection.selection()
    }

    pub fn current_checked(&self) -> &BTreeSet<usize> {
        self.checked.checked()
    }

    pub fn anchor(&self) -> usize {
        self.selection.anchor()
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.registry.is_valid(index)
    }

    pub fn selection_actions_enabled(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn preview_busy(&self) -> bool {
        self.preview_busy
    }

    pub fn activation_pending(&self) -> bool {
        self.gateway.activation_pending()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
