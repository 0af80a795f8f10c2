//! Cancellable, coalescing delay for activations of heavy items.
//!
//! At most one timer is armed per collection. Arming a new one aborts the
//! previous task, so a burst of clicks yields a single activation for the
//! index the burst settled on.

use std::time::Duration;

use shared::protocol::OutboundIntent;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::gateway::Outbox;

struct PendingActivation {
    index: usize,
    task: JoinHandle<()>,
}

pub struct ActivationScheduler {
    delay: Duration,
    pending: Option<PendingActivation>,
}

impl ActivationScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer for `index`, replacing any armed timer. `intent` is
    /// queued on `outbox` once the delay elapses.
    pub fn schedule(&mut self, index: usize, intent: OutboundIntent, outbox: &Outbox) {
        self.cancel();

        let Ok(runtime) = Handle::try_current() else {
            warn!(index, "no async runtime for deferred activation; sending immediately");
            outbox.send(intent);
            return;
        };

        let outbox = outbox.clone();
        let delay = self.delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            outbox.send(intent);
        });
        debug!(index, delay_ms = delay.as_millis() as u64, "deferred activation armed");
        self.pending = Some(PendingActivation { index, task });
    }

    /// Disarms the timer. Returns the index whose activation was suppressed,
    /// if the timer had not fired yet.
    pub fn cancel(&mut self) -> Option<usize> {
        let pending = self.pending.take()?;
        if pending.task.is_finished() {
            return None;
        }
        pending.task.abort();
        debug!(index = pending.index, "deferred activation cancelled");
        Some(pending.index)
    }

    pub fn pending_index(&self) -> Option<usize> {
        self.pending
            .as_ref()
            .filter(|pending| !pending.task.is_finished())
            .map(|pending| pending.index)
    }

    pub fn is_pending(&self) -> bool {
        self.pending_index().is_some()
    }
}

impl Drop for ActivationScheduler {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/activation_tests.rs"]
mod tests;
