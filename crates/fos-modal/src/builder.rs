//! Element builder
//!
//! ```rust,ignore
//! let card = ElementBuilder::new(
//!     &doc,
//!     "div",
//!     &AttributeDescriptor::new()
//!         .attr("class", "container")
//!         .style([("width", "10rem"), ("height", "10rem")]),
//!     "hello",
//! );
//! ```

use crate::{attrs, AttributeDescriptor, TagError, Value};
use fos_dom::{NodeId, SharedDocument};

/// Anything that can stand in for an element: a raw node handle or a builder
#[derive(Debug, Clone)]
pub enum ElementLike {
    Node(NodeId),
    Builder(ElementBuilder),
}

impl ElementLike {
    /// Resolve to an element of `doc`, or fail with `InvalidTag`
    pub fn resolve(&self, doc: &SharedDocument) -> Result<NodeId, TagError> {
        match self {
            ElementLike::Node(id) if doc.is_element(*id) => Ok(*id),
            ElementLike::Node(id) => Err(TagError::InvalidTag(format!("{id:?} is not an element"))),
            ElementLike::Builder(b) if b.doc.ptr_eq(doc) => Ok(b.element),
            ElementLike::Builder(b) => Err(TagError::InvalidTag(format!(
                "builder element {:?} belongs to another document",
                b.element
            ))),
        }
    }
}

impl From<NodeId> for ElementLike {
    fn from(id: NodeId) -> Self {
        ElementLike::Node(id)
    }
}

impl From<ElementBuilder> for ElementLike {
    fn from(b: ElementBuilder) -> Self {
        ElementLike::Builder(b)
    }
}

impl From<&ElementBuilder> for ElementLike {
    fn from(b: &ElementBuilder) -> Self {
        ElementLike::Builder(b.clone())
    }
}

/// Wraps one element; cloning the builder shares the element
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    doc: SharedDocument,
    element: NodeId,
}

impl ElementBuilder {
    /// Create `<tag>`, apply `attrs`, then set its text.
    ///
    /// Falsy text (`Undefined`, `Null`, `""`, `0`, `false`) yields an empty
    /// element rather than the literal `"null"`.
    pub fn new<'a>(
        doc: &SharedDocument,
        tag: &str,
        attrs: impl Into<Option<&'a AttributeDescriptor>>,
        text: impl Into<Value>,
    ) -> Self {
        let element = doc.create_element(tag);
        attrs::apply(doc, element, attrs);

        let text = text.into();
        if text.is_truthy() {
            // Fresh element node: text assignment cannot fail
            let _ = doc.set_text_content(element, &text.to_text());
        }

        Self { doc: doc.clone(), element }
    }

    /// Bare `<tag>` with no attributes or text
    pub fn tag(doc: &SharedDocument, tag: &str) -> Self {
        Self::new(doc, tag, None, Value::Undefined)
    }

    /// Apply more attributes after construction
    pub fn add_attributes<'a>(&mut self, attrs: impl Into<Option<&'a AttributeDescriptor>>) -> &mut Self {
        attrs::apply(&self.doc, self.element, attrs);
        self
    }

    /// Append an element or another builder's element as the last child
    pub fn add_child(&mut self, child: impl Into<ElementLike>) -> Result<&mut Self, TagError> {
        let child = child.into().resolve(&self.doc)?;
        self.doc.append_child(self.element, child)?;
        Ok(self)
    }

    /// The wrapped element
    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_attrs_and_text() {
        let doc = SharedDocument::default();
        let b = ElementBuilder::new(
            &doc,
            "div",
            &AttributeDescriptor::new().attr("class", "container").style([("width", "10rem")]),
            "text",
        );

        let el = b.element();
        assert_eq!(doc.tag_name(el).as_deref(), Some("div"));
        assert_eq!(doc.get_attribute(el, "class").as_deref(), Some("container"));
        assert_eq!(doc.style_value(el, "width").as_deref(), Some("10rem"));
        assert_eq!(doc.text_content(el), "text");
    }

    #[test]
    fn test_falsy_text_is_empty() {
        let doc = SharedDocument::default();
        for text in [Value::Null, Value::Undefined, Value::from(0), Value::from("")] {
            let b = ElementBuilder::new(&doc, "p", None, text);
            assert_eq!(doc.text_content(b.element()), "");
        }
        let b = ElementBuilder::new(&doc, "p", None, 42);
        assert_eq!(doc.text_content(b.element()), "42");
    }

    #[test]
    fn test_add_child_chain() {
        let doc = SharedDocument::default();
        let li = doc.create_element("li");
        let inner = ElementBuilder::tag(&doc, "li");

        let mut list = ElementBuilder::tag(&doc, "ul");
        list.add_child(li).unwrap().add_child(&inner).unwrap();

        assert_eq!(doc.children(list.element()), vec![li, inner.element()]);
    }

    #[test]
    fn test_add_child_rejects_non_element() {
        let doc = SharedDocument::default();
        let text = doc.create_text("loose");
        let mut b = ElementBuilder::tag(&doc, "div");

        assert!(matches!(b.add_child(text), Err(TagError::InvalidTag(_))));
        assert!(matches!(b.add_child(NodeId::NONE), Err(TagError::InvalidTag(_))));
    }

    #[test]
    fn test_builder_from_other_document_rejected() {
        let doc = SharedDocument::default();
        let other = SharedDocument::default();
        let foreign = ElementBuilder::tag(&other, "span");

        let mut b = ElementBuilder::tag(&doc, "div");
        assert!(matches!(b.add_child(foreign), Err(TagError::InvalidTag(_))));
    }

    #[test]
    fn test_add_child_hierarchy_error() {
        let doc = SharedDocument::default();
        let mut outer = ElementBuilder::tag(&doc, "div");
        let mut inner = ElementBuilder::tag(&doc, "div");
        outer.add_child(&inner).unwrap();

        assert!(matches!(inner.add_child(&outer), Err(TagError::Dom(_))));
    }

    #[test]
    fn test_element_handle_is_shared() {
        let doc = SharedDocument::default();
        let b = ElementBuilder::tag(&doc, "div");
        doc.set_attribute(b.element(), "id", "via-handle");

        let mut b2 = b.clone();
        b2.add_attributes(&AttributeDescriptor::from([("class", "x")]));
        assert_eq!(doc.get_attribute(b.element(), "id").as_deref(), Some("via-handle"));
        assert_eq!(doc.get_attribute(b.element(), "class").as_deref(), Some("x"));
    }
}
