//! Listener binder
//!
//! Binds and unbinds `(event, handler)` pairs on one resolved element.
//! Arguments are checked at runtime: the event must be a string and the
//! handler a function.

use crate::{BindError, ElementLike, Handler, TagError, Value};
use fos_dom::{NodeId, SharedDocument};

/// Registers listeners on one element
#[derive(Debug, Clone)]
pub struct ListenerBinder {
    doc: SharedDocument,
    target: NodeId,
}

impl ListenerBinder {
    pub fn new(doc: &SharedDocument, target: impl Into<ElementLike>) -> Result<Self, TagError> {
        let target = target.into().resolve(doc)?;
        Ok(Self { doc: doc.clone(), target })
    }

    /// Point the binder at another element
    pub fn change_target(&mut self, target: impl Into<ElementLike>) -> Result<&mut Self, TagError> {
        self.target = target.into().resolve(&self.doc)?;
        Ok(self)
    }

    /// Register `handler` for `event` on the target
    pub fn bind(&mut self, event: impl Into<Value>, handler: impl Into<Value>) -> Result<&mut Self, BindError> {
        let (event, handler): (Value, Value) = (event.into(), handler.into());
        let (event, handler) = validate(&event, &handler)?;
        self.doc.add_event_listener(self.target, event, handler.clone());
        Ok(self)
    }

    /// Remove a previously bound pair. Unknown pairs are ignored.
    pub fn unbind(&mut self, event: impl Into<Value>, handler: impl Into<Value>) -> Result<&mut Self, BindError> {
        let (event, handler): (Value, Value) = (event.into(), handler.into());
        let (event, handler) = validate(&event, &handler)?;
        self.doc.remove_event_listener(self.target, event, handler);
        Ok(self)
    }

    /// The resolved target
    pub fn element(&self) -> NodeId {
        self.target
    }
}

fn validate<'v>(event: &'v Value, handler: &'v Value) -> Result<(&'v str, &'v Handler), BindError> {
    match (event, handler) {
        (Value::String(event), Value::Function(handler)) => Ok((event.as_str(), handler)),
        _ => Err(BindError::TypeArgument {
            event: event.type_name(),
            callback: handler.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::Event;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Handler) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, Handler::new(move |_| h.set(h.get() + 1)))
    }

    #[test]
    fn test_bind_and_fire() {
        let doc = SharedDocument::default();
        let button = doc.create_element("button");
        let (hits, handler) = counter();

        ListenerBinder::new(&doc, button).unwrap().bind("click", &handler).unwrap();
        doc.dispatch_event(&Event::click(button));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unbind() {
        let doc = SharedDocument::default();
        let button = doc.create_element("button");
        let (hits, handler) = counter();

        let mut binder = ListenerBinder::new(&doc, button).unwrap();
        binder.bind("click", &handler).unwrap().unbind("click", &handler).unwrap();
        doc.dispatch_event(&Event::click(button));
        assert_eq!(hits.get(), 0);

        // Removing again is fine
        assert!(binder.unbind("click", &handler).is_ok());
    }

    #[test]
    fn test_type_errors() {
        let doc = SharedDocument::default();
        let mut binder = ListenerBinder::new(&doc, doc.create_element("a")).unwrap();
        let (_, handler) = counter();

        let err = binder.bind("click", "not-a-function").unwrap_err();
        assert_eq!(err, BindError::TypeArgument { event: "string", callback: "string" });
        assert_eq!(
            err.to_string(),
            "event: Only 'string' => string, callback: Only 'function' => string"
        );

        let err = binder.bind(123, &handler).unwrap_err();
        assert_eq!(err, BindError::TypeArgument { event: "number", callback: "function" });

        assert!(binder.unbind(Value::Null, Value::Undefined).is_err());
        assert_eq!(doc.listener_count(binder.element(), "click"), 0);
    }

    #[test]
    fn test_change_target() {
        let doc = SharedDocument::default();
        let first = doc.create_element("button");
        let second = doc.create_element("button");
        let (hits, handler) = counter();

        let mut binder = ListenerBinder::new(&doc, first).unwrap();
        binder.change_target(second).unwrap().bind("click", &handler).unwrap();
        assert_eq!(binder.element(), second);

        doc.dispatch_event(&Event::click(first));
        assert_eq!(hits.get(), 0);
        doc.dispatch_event(&Event::click(second));
        assert_eq!(hits.get(), 1);

        let text = doc.create_text("t");
        assert!(binder.change_target(text).is_err());
        assert_eq!(binder.element(), second);
    }

    #[test]
    fn test_new_rejects_non_element() {
        let doc = SharedDocument::default();
        assert!(matches!(
            ListenerBinder::new(&doc, doc.create_fragment()),
            Err(TagError::InvalidTag(_))
        ));
    }
}
