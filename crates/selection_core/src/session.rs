//! Editor session: the dependency list and the frame grid of the current
//! preview, each with its own controller.

use shared::{
    domain::{CollectionKind, RegistryItem},
    error::ProtocolError,
    protocol::{Gesture, InboundEvent, OutboundIntent},
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::{collection::CollectionController, config::ControllerConfig, gateway::Outbox};

/// Dependency currently shown in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub index: usize,
    pub filename: String,
    pub frame_count: Option<usize>,
}

pub struct Session {
    dependencies: CollectionController,
    frames: CollectionController,
    outbox: Outbox,
    preview: Option<Preview>,
}

impl Session {
    /// Builds a session and the receiving end of its outbound intent queue.
    pub fn new(config: &ControllerConfig) -> (Self, UnboundedReceiver<OutboundIntent>) {
        let (outbox, rx) = Outbox::channel();
        let session = Self {
            dependencies: CollectionController::new(
                CollectionKind::Dependencies,
                config.clone(),
                outbox.clone(),
            ),
            frames: CollectionController::new(CollectionKind::Frames, config.clone(), outbox.clone()),
            outbox,
            preview: None,
        };
        (session, rx)
    }

    pub fn controller(&self, kind: CollectionKind) -> &CollectionController {
        match kind {
            CollectionKind::Dependencies => &self.dependencies,
            CollectionKind::Frames => &self.frames,
        }
    }

    fn controller_mut(&mut self, kind: CollectionKind) -> &mut CollectionController {
        match kind {
            CollectionKind::Dependencies => &mut self.dependencies,
            CollectionKind::Frames => &mut self.frames,
        }
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Parses and applies one backend push. On error nothing is applied.
    pub fn apply_raw(&mut self, raw: &str) -> Result<(), ProtocolError> {
        let event = InboundEvent::from_json(raw)
            .inspect_err(|err| warn!("dropping inbound push: {err}"))?;
        self.apply(event);
        Ok(())
    }

    /// Applies one typed backend push. Out-of-range pushes are dropped whole.
    pub fn apply(&mut self, event: InboundEvent) {
        if let Err(err) = event.validate() {
            warn!("dropping inbound push: {err}");
            return;
        }
        debug!(event = event.name(), "applying backend push");
        match event {
            InboundEvent::RegistryUpdated { collection, items } => {
                self.controller_mut(collection).registry_updated(items);
            }
            InboundEvent::CheckedUpdated {
                collection,
                indices,
            } => {
                self.controller_mut(collection).checked_updated(indices);
            }
            InboundEvent::Deselect { collection } => {
                self.controller_mut(collection).deselect();
            }
            InboundEvent::DependencyInfo {
                index,
                filename,
                frame_count,
            } => {
                let frames = (0..frame_count.unwrap_or(0))
                    .map(RegistryItem::frame)
                    .collect();
                self.frames.registry_updated(frames);
                self.dependencies.preview_arrived();
                self.preview = Some(Preview {
                    index,
                    filename,
                    frame_count,
                });
            }
        }
    }

    pub fn handle(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Click {
                collection,
                index,
                modifiers,
            } => self.controller_mut(collection).on_click(index, modifiers),
            Gesture::CheckboxClick { collection, index } => {
                self.controller_mut(collection).on_checkbox_click(index)
            }
            Gesture::SelectAll { collection } => self.controller_mut(collection).on_select_all(),
            Gesture::DeselectAll { collection } => {
                self.controller_mut(collection).on_deselect_all()
            }
            Gesture::ExtractSelected => {
                self.send_for_selection(|indices| OutboundIntent::Extract { indices })
            }
            Gesture::ReloadSelected => {
                self.send_for_selection(|indices| OutboundIntent::Reload { indices })
            }
            Gesture::RemoveSelected => {
                self.send_for_selection(|indices| OutboundIntent::Remove { indices })
            }
            Gesture::ExportPreview => self.export_preview(),
        }
    }

    fn send_for_selection(&self, make: impl FnOnce(Vec<usize>) -> OutboundIntent) {
        match self.dependencies.selection_intent(make) {
            Some(intent) => self.outbox.send(intent),
            None => debug!("no dependencies selected; action skipped"),
        }
    }

    fn export_preview(&self) {
        let Some(preview) = &self.preview else {
            debug!("nothing previewed; export skipped");
            return;
        };
        self.outbox.send(OutboundIntent::Export {
            index: preview.index,
            frames: self.frames.current_selection().iter().copied().collect(),
        });
    }
}
