//! Event listener storage
//!
//! Listeners are keyed by node and event type and compared by identity, so
//! removing needs the same `Listener` handle that was added.

use crate::{Event, NodeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Listener callback signature
pub type ListenerFn = dyn Fn(&Event);

/// Shared handle to a listener callback; clones compare equal
#[derive(Clone)]
pub struct Listener(Rc<ListenerFn>);

impl Listener {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Identity comparison (same allocation)
    pub fn same(&self, other: &Listener) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Event listener storage
#[derive(Debug, Default)]
pub struct EventListenerRegistry {
    /// Map of node ID -> event type -> listeners in registration order
    listeners: HashMap<NodeId, HashMap<String, Vec<Listener>>>,
}

impl EventListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event listener. Adding an already registered pair is a no-op
    /// and returns false.
    pub fn add_listener(&mut self, node_id: NodeId, event_type: &str, listener: Listener) -> bool {
        let list = self
            .listeners
            .entry(node_id)
            .or_default()
            .entry(event_type.to_string())
            .or_default();

        if list.iter().any(|l| l.same(&listener)) {
            return false;
        }
        list.push(listener);
        true
    }

    /// Remove an event listener
    pub fn remove_listener(&mut self, node_id: NodeId, event_type: &str, listener: &Listener) -> bool {
        let Some(list) = self
            .listeners
            .get_mut(&node_id)
            .and_then(|node| node.get_mut(event_type))
        else {
            return false;
        };

        match list.iter().position(|l| l.same(listener)) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Get listeners for a node and event type
    pub fn get_listeners(&self, node_id: NodeId, event_type: &str) -> Vec<Listener> {
        self.listeners
            .get(&node_id)
            .and_then(|node| node.get(event_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of listeners for a node and event type
    pub fn listener_count(&self, node_id: NodeId, event_type: &str) -> usize {
        self.listeners
            .get(&node_id)
            .and_then(|node| node.get(event_type))
            .map_or(0, Vec::len)
    }

    /// Clear all listeners for a node
    pub fn clear_node(&mut self, node_id: NodeId) {
        self.listeners.remove(&node_id);
    }
}
