//! Element batch
//!
//! Collects elements and hands them back inside one fragment so they can be
//! inserted with a single append.

use crate::{ElementLike, TagError};
use fos_dom::{DomResult, NodeId, SharedDocument};

/// Ordered collection of elements realized into a document fragment
#[derive(Debug, Clone)]
pub struct ElementBatch {
    doc: SharedDocument,
    fragment: Option<NodeId>,
    elements: Vec<NodeId>,
}

impl ElementBatch {
    pub fn new(doc: &SharedDocument) -> Self {
        Self {
            doc: doc.clone(),
            fragment: None,
            elements: Vec::new(),
        }
    }

    /// Queue an element or builder
    pub fn add(&mut self, element: impl Into<ElementLike>) -> Result<&mut Self, TagError> {
        let id = element.into().resolve(&self.doc)?;
        self.elements.push(id);
        Ok(self)
    }

    /// Move every queued element into the batch fragment and return it.
    ///
    /// The originals are reparented, not copied.
    pub fn realize_moved(&mut self) -> DomResult<NodeId> {
        let fragment = match self.fragment {
            Some(f) => f,
            None => *self.fragment.insert(new_fragment(&self.doc)),
        };
        for &element in &self.elements {
            self.doc.append_child(fragment, element)?;
        }
        tracing::trace!(?fragment, count = self.elements.len(), "batch realized (moved)");
        Ok(fragment)
    }

    /// Deep-copy every queued element into a fresh fragment. The originals
    /// and the queue are left as they are.
    pub fn realize_cloned(&self) -> DomResult<NodeId> {
        let fragment = new_fragment(&self.doc);
        for &element in &self.elements {
            let copy = self.doc.clone_node(element, true)?;
            self.doc.append_child(fragment, copy)?;
        }
        tracing::trace!(?fragment, count = self.elements.len(), "batch realized (cloned)");
        Ok(fragment)
    }

    /// Drop the queue and the fragment
    pub fn reset(&mut self) -> &mut Self {
        self.fragment = None;
        self.elements.clear();
        self
    }

    /// Number of queued elements
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }
}

fn new_fragment(doc: &SharedDocument) -> NodeId {
    doc.create_fragment()
}
