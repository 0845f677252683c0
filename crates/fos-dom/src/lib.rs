//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree with the host surface the overlay toolkit builds on:
//! element creation, attributes, inline style, fragments, cloning, event
//! listeners and id lookup.

mod node;
mod tree;
mod document;
mod attributes;
mod style;
mod operations;
mod events;
mod listeners;

pub use node::{Node, NodeData, ElementData};
pub use tree::{DomTree, Children};
pub use document::{Document, SharedDocument, WeakDocument};
pub use attributes::{NamedNodeMap, Attr};
pub use style::{StyleDeclaration, PropertyId};
pub use operations::{DomError, DomResult};
pub use events::{Event, EventDetail, KeyboardEvent, KeyModifiers};
pub use listeners::{EventListenerRegistry, Listener, ListenerFn};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id is not the null link
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
