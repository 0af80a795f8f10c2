//! Selection and check-state controller for the editor's dependency list and
//! frame grid, kept in sync with the backend that owns the real data.

pub mod activation;
pub mod check_group;
pub mod collection;
pub mod config;
pub mod gateway;
pub mod registry;
pub mod selection;
pub mod session;

pub use collection::CollectionController;
pub use config::ControllerConfig;
pub use gateway::{Outbox, SyncGateway};
pub use session::{Preview, Session};
pub use shared::{
    domain::{CollectionKind, ItemKind, Modifiers, RegistryItem},
    error::ProtocolError,
    protocol::{Gesture, InboundEvent, OutboundIntent},
};
