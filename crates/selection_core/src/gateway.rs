//! Outbound side of the backend boundary.
//!
//! Everything here is fire-and-forget: the backend answers, if at all, with
//! a later inbound push.

use std::time::Duration;

use shared::{domain::CollectionKind, protocol::OutboundIntent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::{activation::ActivationScheduler, check_group::CheckedSet, selection::SelectionState};

/// Ordered queue of intents towards the backend.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: UnboundedSender<OutboundIntent>,
}

impl Outbox {
    pub fn channel() -> (Self, UnboundedReceiver<OutboundIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, intent: OutboundIntent) {
        let name = intent.name();
        match self.tx.send(intent) {
            Ok(()) => debug!(intent = name, "queued core->backend intent"),
            Err(_) => debug!(intent = name, "backend intake closed; intent dropped"),
        }
    }
}

/// Per-collection emitter of selection, activation and check intents.
pub struct SyncGateway {
    collection: CollectionKind,
    outbox: Outbox,
    activation: ActivationScheduler,
}

impl SyncGateway {
    pub fn new(collection: CollectionKind, outbox: Outbox, activation_delay: Duration) -> Self {
        Self {
            collection,
            outbox,
            activation: ActivationScheduler::new(activation_delay),
        }
    }

    pub fn selection_changed(&self, selection: &SelectionState) {
        self.outbox.send(OutboundIntent::SelectionChanged {
            collection: self.collection,
            selection: selection.snapshot(),
        });
    }

    /// Requests a preview of `index`. Deferred activations go through the
    /// coalescing timer; either way an older armed timer is disarmed first.
    pub fn activate(&mut self, index: usize, deferred: bool) {
        let intent = OutboundIntent::Activate {
            collection: self.collection,
            index,
        };
        if deferred {
            self.activation.schedule(index, intent, &self.outbox);
        } else {
            self.activation.cancel();
            self.outbox.send(intent);
        }
    }

    pub fn deactivate(&mut self) {
        self.activation.cancel();
        self.outbox.send(OutboundIntent::Deactivate {
            collection: self.collection,
        });
    }

    pub fn check_changed(&self, checked: &CheckedSet) {
        self.outbox.send(OutboundIntent::CheckChanged {
            collection: self.collection,
            checked: checked.snapshot(),
        });
    }

    /// Returns true if an armed activation was suppressed.
    pub fn cancel_pending_activation(&mut self) -> bool {
        self.activation.cancel().is_some()
    }

    pub fn activation_pending(&self) -> bool {
        self.activation.is_pending()
    }

    pub fn pending_activation_index(&self) -> Option<usize> {
        self.activation.pending_index()
    }
}
