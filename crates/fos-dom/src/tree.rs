//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; detaching only unlinks them. Slot 0 is always the
//! document node.

use crate::{DomError, DomResult, Node, NodeData, NodeId};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is allocated up front
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text.to_string()))
    }

    /// Create an empty document fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.push(Node::fragment())
    }

    /// Check whether `id` is an element node
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }

    /// Parent of `id`, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate the direct children of `id`
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Check if `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Whether `id` is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    /// Unlink `id` from its parent (no-op when detached)
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The child is first removed from its current parent. Appending a
    /// fragment moves the fragment's children and leaves it empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;

        if parent_node.is_text() {
            return Err(DomError::InvalidNodeType(parent));
        }
        if matches!(child_node.data, NodeData::Document) {
            return Err(DomError::InvalidNodeType(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if child_node.is_fragment() {
            let moved: Vec<NodeId> = self.children(child).map(|(id, _)| id).collect();
            for id in moved {
                self.append_child(parent, id)?;
            }
            return Ok(child);
        }

        self.detach(child);
        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let node = self.get(child).ok_or(DomError::NotFound(child))?;
        if node.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(child)
    }

    /// Clone a node. The copy is detached; `deep` copies the whole subtree.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> DomResult<NodeId> {
        let node = self.get(id).ok_or(DomError::NotFound(id))?;
        if matches!(node.data, NodeData::Document) {
            return Err(DomError::InvalidNodeType(id));
        }

        let data = node.data.clone();
        let copy = self.push(Node {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        });

        if deep {
            let children: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
            for child in children {
                let child_copy = self.clone_node(child, true)?;
                self.append_child(copy, child_copy)?;
            }
        }
        Ok(copy)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id) {
            Some(node) if node.is_text() => out.push_str(node.as_text().unwrap_or_default()),
            Some(_) => {
                for (child, _) in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Replace the children of `id` with a single text node (none if empty)
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        if let NodeData::Text(content) = &mut node.data {
            *content = text.to_string();
            return Ok(());
        }

        let children: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        for child in children {
            self.detach(child);
        }
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node)?;
        }
        Ok(())
    }

    /// Set an attribute on an element. Returns false if `id` is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        match self.get_mut(id).and_then(Node::as_element_mut) {
            Some(elem) => {
                elem.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    /// Get an attribute. `style` reflects the inline declaration.
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let elem = self.get(id)?.as_element()?;
        if name.eq_ignore_ascii_case("style") {
            return (!elem.style.is_empty()).then(|| elem.style.css_text());
        }
        elem.get_attr(name).map(str::to_string)
    }

    /// Remove an attribute, returning whether it existed
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        self.get_mut(id)
            .and_then(Node::as_element_mut)
            .and_then(|e| e.attrs.remove_named_item(name))
            .is_some()
    }

    /// Assign one inline style property. Returns false if nothing was written.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> bool {
        self.get_mut(id)
            .and_then(Node::as_element_mut)
            .is_some_and(|e| e.style.set_property(property, value))
    }

    /// Read one inline style property
    pub fn style_value(&self, id: NodeId, property: &str) -> Option<&str> {
        self.get(id)?.as_element()?.style.get_property_value(property)
    }

    /// Depth-first search below `start` for an element with `id`
    pub fn find_element_with_id(&self, start: NodeId, id: &str) -> Option<NodeId> {
        for (node_id, node) in self.children(start) {
            if node.as_element().and_then(|e| e.id()) == Some(id) {
                return Some(node_id);
            }
            if let Some(found) = self.find_element_with_id(node_id, id) {
                return Some(found);
            }
        }
        None
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_ids(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
        tree.children(id).map(|(c, _)| c).collect()
    }

    #[test]
    fn test_append_and_reparent() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("span");

        tree.append_child(a, c).unwrap();
        assert_eq!(tree.parent(c), Some(a));

        tree.append_child(b, c).unwrap();
        assert_eq!(tree.parent(c), Some(b));
        assert!(child_ids(&tree, a).is_empty());
        assert_eq!(child_ids(&tree, b), vec![c]);
    }

    #[test]
    fn test_append_ancestor_rejected() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { parent: inner, child: outer })
        );
        assert!(tree.append_child(outer, outer).is_err());
    }

    #[test]
    fn test_fragment_moves_children() {
        let mut tree = DomTree::new();
        let frag = tree.create_fragment();
        let x = tree.create_element("li");
        let y = tree.create_element("li");
        tree.append_child(frag, x).unwrap();
        tree.append_child(frag, y).unwrap();

        let list = tree.create_element("ul");
        tree.append_child(list, frag).unwrap();

        assert_eq!(child_ids(&tree, list), vec![x, y]);
        assert!(child_ids(&tree, frag).is_empty());
    }

    #[test]
    fn test_detach_middle_child() {
        let mut tree = DomTree::new();
        let p = tree.create_element("div");
        let kids: Vec<_> = (0..3).map(|_| tree.create_element("p")).collect();
        for &k in &kids {
            tree.append_child(p, k).unwrap();
        }

        tree.remove_child(p, kids[1]).unwrap();
        assert_eq!(child_ids(&tree, p), vec![kids[0], kids[2]]);
        assert_eq!(
            tree.remove_child(p, kids[1]),
            Err(DomError::NotAChild { parent: p, child: kids[1] })
        );
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attribute(div, "class", "box");
        tree.set_style(div, "color", "red");
        tree.set_text_content(div, "hi").unwrap();

        let copy = tree.clone_node(div, true).unwrap();
        assert_ne!(copy, div);
        assert_eq!(tree.parent(copy), None);
        assert_eq!(tree.text_content(copy), "hi");
        assert_eq!(tree.get_attribute(copy, "class").as_deref(), Some("box"));

        tree.set_style(copy, "color", "blue");
        assert_eq!(tree.style_value(div, "color"), Some("red"));
    }

    #[test]
    fn test_shallow_clone_has_no_children() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_text_content(div, "hi").unwrap();

        let copy = tree.clone_node(div, false).unwrap();
        assert_eq!(tree.text_content(copy), "");
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let span = tree.create_element("span");
        tree.append_child(div, span).unwrap();

        tree.set_text_content(div, "plain").unwrap();
        assert_eq!(tree.text_content(div), "plain");
        assert_eq!(tree.parent(span), None);

        tree.set_text_content(div, "").unwrap();
        assert_eq!(tree.children(div).count(), 0);
    }

    #[test]
    fn test_style_attribute_reflection() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        assert_eq!(tree.get_attribute(div, "style"), None);

        tree.set_style(div, "display", "none");
        assert_eq!(tree.get_attribute(div, "style").as_deref(), Some("display: none;"));
    }

    #[test]
    fn test_text_node_rejects_attributes() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        assert!(!tree.set_attribute(text, "id", "a"));
        assert!(!tree.set_style(text, "color", "red"));
        assert_eq!(tree.append_child(text, NodeId::ROOT), Err(DomError::InvalidNodeType(text)));
    }
}
