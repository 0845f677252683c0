//! Document - High-level document API
//!
//! `Document` owns the tree and the listener registry. `SharedDocument` is
//! the single-threaded handle the rest of the toolkit passes around; every
//! call borrows for the duration of one operation only, so listeners are free
//! to mutate the document while an event is being dispatched.

use crate::{DomResult, DomTree, Event, EventListenerRegistry, Listener, NodeId};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Registered event listeners
    pub listeners: EventListenerRegistry,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with `<html><head></head><body></body></html>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh detached elements: these appends cannot fail
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            listeners: EventListenerRegistry::new(),
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element (falls back to the document node when absent)
    pub fn body(&self) -> NodeId {
        if self.body_element.is_valid() {
            self.body_element
        } else {
            self.tree.root()
        }
    }

    /// Get a connected element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.find_element_with_id(self.tree.root(), id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

/// Shared, single-threaded document handle
#[derive(Debug, Clone)]
pub struct SharedDocument(Rc<RefCell<Document>>);

/// Non-owning document handle, for closures stored inside the document
#[derive(Debug, Clone)]
pub struct WeakDocument(Weak<RefCell<Document>>);

impl WeakDocument {
    pub fn upgrade(&self) -> Option<SharedDocument> {
        self.0.upgrade().map(SharedDocument)
    }
}

impl Default for SharedDocument {
    fn default() -> Self {
        Self::from(Document::default())
    }
}

impl From<Document> for SharedDocument {
    fn from(doc: Document) -> Self {
        Self(Rc::new(RefCell::new(doc)))
    }
}

impl SharedDocument {
    /// Create a shared document with the basic html/head/body structure
    pub fn new(url: &str) -> Self {
        Self::from(Document::new(url))
    }

    pub fn borrow(&self) -> Ref<'_, Document> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Document> {
        self.0.borrow_mut()
    }

    pub fn downgrade(&self) -> WeakDocument {
        WeakDocument(Rc::downgrade(&self.0))
    }

    /// Whether both handles point at the same document
    pub fn ptr_eq(&self, other: &SharedDocument) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The document node (target of document-level listeners)
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn body(&self) -> NodeId {
        self.borrow().body()
    }

    // ------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------

    pub fn create_element(&self, tag: &str) -> NodeId {
        self.borrow_mut().tree.create_element(tag)
    }

    pub fn create_text(&self, text: &str) -> NodeId {
        self.borrow_mut().tree.create_text(text)
    }

    pub fn create_fragment(&self) -> NodeId {
        self.borrow_mut().tree.create_fragment()
    }

    // ------------------------------------------------------------------
    // Node mutation and inspection
    // ------------------------------------------------------------------

    pub fn append_child(&self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.borrow_mut().tree.append_child(parent, child)
    }

    pub fn remove_child(&self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.borrow_mut().tree.remove_child(parent, child)
    }

    pub fn clone_node(&self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        self.borrow_mut().tree.clone_node(id, deep)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.borrow().tree.parent(id)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.borrow().tree.children(id).map(|(c, _)| c).collect()
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.borrow().tree.is_element(id)
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.borrow().tree.is_connected(id)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        let doc = self.borrow();
        doc.tree.get(id)?.as_element().map(|e| e.tag.clone())
    }

    pub fn set_attribute(&self, id: NodeId, name: &str, value: &str) -> bool {
        self.borrow_mut().tree.set_attribute(id, name, value)
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.borrow().tree.get_attribute(id, name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    pub fn set_style(&self, id: NodeId, property: &str, value: &str) -> bool {
        self.borrow_mut().tree.set_style(id, property, value)
    }

    pub fn style_value(&self, id: NodeId, property: &str) -> Option<String> {
        self.borrow().tree.style_value(id, property).map(str::to_string)
    }

    pub fn set_text_content(&self, id: NodeId, text: &str) -> DomResult<()> {
        self.borrow_mut().tree.set_text_content(id, text)
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.borrow().tree.text_content(id)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.borrow().get_element_by_id(id)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub fn add_event_listener(&self, target: NodeId, event_type: &str, listener: Listener) -> bool {
        tracing::trace!(?target, event_type, "addEventListener");
        self.borrow_mut().listeners.add_listener(target, event_type, listener)
    }

    pub fn remove_event_listener(&self, target: NodeId, event_type: &str, listener: &Listener) -> bool {
        tracing::trace!(?target, event_type, "removeEventListener");
        self.borrow_mut().listeners.remove_listener(target, event_type, listener)
    }

    pub fn listener_count(&self, target: NodeId, event_type: &str) -> usize {
        self.borrow().listeners.listener_count(target, event_type)
    }

    /// Dispatch `event` at its target, then up through the ancestors when it
    /// bubbles. Returns false if a listener called `prevent_default`.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        let path = self.propagation_path(event);

        for node in path {
            event.set_current_target(node);
            // Snapshot: listeners may add/remove listeners or mutate the tree
            let listeners = self.borrow().listeners.get_listeners(node, &event.event_type);
            for listener in listeners {
                listener.call(event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        !event.is_default_prevented()
    }

    fn propagation_path(&self, event: &Event) -> Vec<NodeId> {
        let doc = self.borrow();
        let mut path = vec![event.target];
        if event.bubbles {
            let mut current = event.target;
            while let Some(parent) = doc.tree.parent(current) {
                path.push(parent);
                current = parent;
            }
        }
        path
    }
}
