//! fOS Modal
//!
//! Declarative element construction and modal overlays on top of `fos-dom`:
//! - Attribute descriptors with nested `style` blocks
//! - Element builders, fragment batches and checked listener binding
//! - Modals with display/fade transitions, key combos and button triggers

pub mod attrs;
mod batch;
mod builder;
mod config;
mod error;
mod keys;
mod listener;
mod modal;
mod preset;
mod value;

pub use batch::ElementBatch;
pub use builder::{ElementBuilder, ElementLike};
pub use config::ModalConfig;
pub use error::{BindError, ModalError, TagError};
pub use keys::KeyCombo;
pub use listener::ListenerBinder;
pub use modal::{KeyBinding, Modal, Transition};
pub use preset::ModalStyle;
pub use value::{AttributeDescriptor, Handler, Value};

pub use fos_dom::{Event, KeyboardEvent, NodeId, SharedDocument};
