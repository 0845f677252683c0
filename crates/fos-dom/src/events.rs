//! DOM Events
//!
//! Event objects handed to listeners. Handlers only get `&Event`, so the
//! dispatch flags use `Cell`.

use crate::NodeId;
use std::cell::Cell;

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win on Windows
}

impl KeyModifiers {
    /// Check if any modifier is pressed
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Create from booleans
    pub fn from_flags(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        Self { shift, ctrl, alt, meta }
    }
}

/// Keyboard event payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Key value as reported by the host (`"s"`, `"S"`, `"Escape"`)
    pub key: String,
    /// Physical key code (`"KeyS"`), empty when unknown
    pub code: String,
    pub modifiers: KeyModifiers,
    pub repeat: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: String::new(),
            modifiers: KeyModifiers::default(),
            repeat: false,
        }
    }

    /// Add modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }
}

/// Event-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    Basic,
    Keyboard(KeyboardEvent),
}

/// DOM event
#[derive(Debug)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: EventDetail,
    current_target: Cell<NodeId>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    /// Create a bubbling, cancelable event
    pub fn new(event_type: impl Into<String>, target: NodeId) -> Self {
        Self {
            event_type: event_type.into(),
            target,
            bubbles: true,
            cancelable: true,
            detail: EventDetail::Basic,
            current_target: Cell::new(target),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Create a click event
    pub fn click(target: NodeId) -> Self {
        Self::new("click", target)
    }

    /// Create a keydown event
    pub fn keydown(target: NodeId, key: KeyboardEvent) -> Self {
        Self {
            detail: EventDetail::Keyboard(key),
            ..Self::new("keydown", target)
        }
    }

    /// Don't propagate past the current target
    pub fn non_bubbling(mut self) -> Self {
        self.bubbles = false;
        self
    }

    /// Keyboard payload, if this is a keyboard event
    pub fn keyboard(&self) -> Option<&KeyboardEvent> {
        match &self.detail {
            EventDetail::Keyboard(k) => Some(k),
            EventDetail::Basic => None,
        }
    }

    /// Node whose listeners are currently running
    pub fn current_target(&self) -> NodeId {
        self.current_target.get()
    }

    pub(crate) fn set_current_target(&self, id: NodeId) {
        self.current_target.set(id);
    }

    /// Prevent default action
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        let mods = KeyModifiers::from_flags(true, true, false, false);
        assert!(mods.shift);
        assert!(mods.ctrl);
        assert!(mods.any());
        assert!(!KeyModifiers::default().any());
    }

    #[test]
    fn test_keydown_event() {
        let event = Event::keydown(NodeId::ROOT, KeyboardEvent::new("s").ctrl());
        assert_eq!(event.event_type, "keydown");
        let key = event.keyboard().unwrap();
        assert_eq!(key.key, "s");
        assert!(key.modifiers.ctrl);
        assert!(!key.modifiers.shift);
    }

    #[test]
    fn test_prevent_default_requires_cancelable() {
        let mut event = Event::click(NodeId(3));
        event.cancelable = false;
        event.prevent_default();
        assert!(!event.is_default_prevented());

        let event = Event::click(NodeId(3));
        event.prevent_default();
        event.stop_propagation();
        assert!(event.is_default_prevented());
        assert!(event.is_propagation_stopped());
        assert!(Event::click(NodeId(3)).keyboard().is_none());
    }
}
