//! Modal overlay
//!
//! A `Modal` owns one element and knows how to show and hide it. Showing is
//! either a `display` toggle or an opacity/visibility fade; the strategy is
//! chosen once per modal and reused by every trigger (keys, buttons, direct
//! calls).
//!
//! ```rust,ignore
//! let modal = Modal::new(&doc, "settings").with_transition(Transition::Fade);
//! modal.set_default_modal_style();
//! let binding = modal.open_on_keys(["Control", "k"]);
//! modal.close_on(close_button, "click")?;
//! ```

use crate::{
    attrs, AttributeDescriptor, ElementBuilder, ElementLike, Handler, KeyCombo, ListenerBinder,
    ModalConfig, ModalError, ModalStyle, Value,
};
use fos_dom::{Event, Listener, NodeId, SharedDocument, WeakDocument};
use serde::{Deserialize, Serialize};

/// How a modal is shown and hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// `display: <visible>` to open, `display: none` to close
    Display {
        #[serde(default)]
        visible: String,
    },
    /// `opacity`/`visibility` toggle; `display` is left alone
    Fade,
}

impl Transition {
    pub fn display(visible: impl Into<String>) -> Self {
        Transition::Display { visible: visible.into() }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Display { visible: String::new() }
    }
}

/// A registered key-combo listener. Dropping the binding keeps the listener
/// alive; call [`KeyBinding::cancel`] to remove it.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    doc: WeakDocument,
    listener: Listener,
    combo: KeyCombo,
}

impl KeyBinding {
    /// Deregister the listener. Returns false if it was already removed or
    /// the document is gone.
    pub fn cancel(&self) -> bool {
        let Some(doc) = self.doc.upgrade() else {
            return false;
        };
        let removed = doc.remove_event_listener(doc.root(), "keydown", &self.listener);
        if removed {
            tracing::debug!(combo = %self.combo, "key binding cancelled");
        }
        removed
    }

    pub fn combo(&self) -> &KeyCombo {
        &self.combo
    }
}

/// Overlay element with open/close wiring
#[derive(Debug, Clone)]
pub struct Modal {
    doc: SharedDocument,
    element: NodeId,
    transition: Transition,
}

impl Modal {
    /// Fresh detached `<div>`, with `class` set when `class_name` is not empty
    pub fn new(doc: &SharedDocument, class_name: &str) -> Self {
        let attrs = if class_name.is_empty() {
            AttributeDescriptor::new()
        } else {
            AttributeDescriptor::new().attr("class", class_name)
        };
        let element = ElementBuilder::new(doc, "div", &attrs, Value::Undefined).element();
        tracing::debug!(?element, class_name, "modal created");

        Self {
            doc: doc.clone(),
            element,
            transition: Transition::default(),
        }
    }

    /// Wrap an element already in the document
    pub fn from_id(doc: &SharedDocument, id: &str) -> Result<Self, ModalError> {
        let Some(element) = doc.get_element_by_id(id) else {
            tracing::warn!(id, "modal lookup failed");
            return Err(ModalError::NotFound { id: id.to_string() });
        };

        Ok(Self {
            doc: doc.clone(),
            element,
            transition: Transition::default(),
        })
    }

    /// Build a modal from configuration, returning the installed key bindings
    pub fn from_config(doc: &SharedDocument, config: &ModalConfig) -> (Self, Vec<KeyBinding>) {
        let modal = Self::new(doc, &config.class_name).with_transition(config.transition.clone());

        if let Some(overrides) = &config.style_overrides {
            modal.set_custom_modal_style(overrides);
        } else if config.apply_default_style {
            modal.set_default_modal_style();
        }

        let bindings = [
            modal.open_on_keys(config.open_keys.clone()),
            modal.close_on_keys(config.close_keys.clone()),
        ]
        .into_iter()
        .flatten()
        .collect();

        (modal, bindings)
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    // ------------------------------------------------------------------
    // Show / hide
    // ------------------------------------------------------------------

    pub fn open(&self) -> &Self {
        Self::open_element(&self.doc, self.element, &self.transition);
        self
    }

    pub fn close(&self) -> &Self {
        Self::close_element(&self.doc, self.element, &self.transition);
        self
    }

    /// Show `target` with `transition`. Non-elements are ignored.
    pub fn open_element(doc: &SharedDocument, target: NodeId, transition: &Transition) {
        if !doc.is_element(target) {
            return;
        }
        tracing::debug!(?target, ?transition, "modal open");
        match transition {
            Transition::Display { visible } => {
                doc.set_style(target, "display", visible);
            }
            Transition::Fade => {
                doc.set_style(target, "opacity", "1");
                doc.set_style(target, "visibility", "visible");
            }
        }
    }

    /// Hide `target` with `transition`. Non-elements are ignored.
    pub fn close_element(doc: &SharedDocument, target: NodeId, transition: &Transition) {
        if !doc.is_element(target) {
            return;
        }
        tracing::debug!(?target, ?transition, "modal close");
        match transition {
            Transition::Display { .. } => {
                doc.set_style(target, "display", "none");
            }
            Transition::Fade => {
                doc.set_style(target, "opacity", "0");
                doc.set_style(target, "visibility", "hidden");
            }
        }
    }

    /// Whether the element currently reads as shown under the stored transition
    pub fn is_open(&self) -> bool {
        match self.transition {
            Transition::Display { .. } => {
                self.doc.style_value(self.element, "display").as_deref() != Some("none")
            }
            Transition::Fade => {
                self.doc.style_value(self.element, "visibility").as_deref() == Some("visible")
            }
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Open when exactly `keys` are held. `None` for an empty combo.
    ///
    /// The binding captures the transition in effect when it is created. A
    /// later `with_transition` (on this modal or a clone) does not change how
    /// existing bindings open or close; bind again and cancel the old one.
    pub fn open_on_keys(&self, keys: impl Into<KeyCombo>) -> Option<KeyBinding> {
        self.bind_keys(keys.into(), Self::open_element)
    }

    /// Close when exactly `keys` are held. `None` for an empty combo.
    /// Captures the current transition, as [`Modal::open_on_keys`] does.
    pub fn close_on_keys(&self, keys: impl Into<KeyCombo>) -> Option<KeyBinding> {
        self.bind_keys(keys.into(), Self::close_element)
    }

    fn bind_keys(
        &self,
        combo: KeyCombo,
        action: fn(&SharedDocument, NodeId, &Transition),
    ) -> Option<KeyBinding> {
        if combo.is_empty() {
            return None;
        }

        let weak = self.doc.downgrade();
        let element = self.element;
        let transition = self.transition.clone();
        let wanted = combo.clone();
        let listener = Listener::new(move |event: &Event| {
            let Some(key) = event.keyboard() else {
                return;
            };
            if !wanted.matches(key) {
                return;
            }
            tracing::debug!(combo = %wanted, "key combo matched");
            if let Some(doc) = weak.upgrade() {
                action(&doc, element, &transition);
            }
        });

        self.doc.add_event_listener(self.doc.root(), "keydown", listener.clone());
        Some(KeyBinding {
            doc: self.doc.downgrade(),
            listener,
            combo,
        })
    }

    // ------------------------------------------------------------------
    // Triggers and listeners
    // ------------------------------------------------------------------

    /// On `event` at `trigger`, set the modal's `display` to `block`
    pub fn open_on(&self, trigger: impl Into<ElementLike>, event: impl Into<Value>) -> Result<&Self, ModalError> {
        self.bind_display(trigger.into(), event.into(), "block")
    }

    /// On `event` at `trigger`, set the modal's `display` to `none`
    pub fn close_on(&self, trigger: impl Into<ElementLike>, event: impl Into<Value>) -> Result<&Self, ModalError> {
        self.bind_display(trigger.into(), event.into(), "none")
    }

    fn bind_display(&self, trigger: ElementLike, event: Value, display: &'static str) -> Result<&Self, ModalError> {
        let weak = self.doc.downgrade();
        let element = self.element;
        let handler = Handler::new(move |_| {
            if let Some(doc) = weak.upgrade() {
                doc.set_style(element, "display", display);
            }
        });

        ListenerBinder::new(&self.doc, trigger)?.bind(event, handler)?;
        Ok(self)
    }

    /// Bind a listener on the modal's own element
    pub fn add_event(&self, event: impl Into<Value>, handler: impl Into<Value>) -> Result<&Self, ModalError> {
        ListenerBinder::new(&self.doc, self.element)?.bind(event, handler)?;
        Ok(self)
    }

    /// Unbind a listener from any element
    pub fn remove_event(
        &self,
        target: impl Into<ElementLike>,
        event: impl Into<Value>,
        handler: impl Into<Value>,
    ) -> Result<&Self, ModalError> {
        ListenerBinder::new(&self.doc, target)?.unbind(event, handler)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    pub fn set_default_modal_style(&self) -> &Self {
        attrs::apply(&self.doc, self.element, &ModalStyle::default_style());
        self
    }

    pub fn set_custom_modal_style<'a>(&self, overrides: impl Into<Option<&'a AttributeDescriptor>>) -> &Self {
        attrs::apply(&self.doc, self.element, &ModalStyle::custom_style(overrides));
        self
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}
