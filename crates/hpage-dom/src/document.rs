//! Document - High-level document API
//!
//! Wraps the raw [`DomTree`] and keeps the [`IdIndex`] consistent: every
//! mutation that can change which connected element carries which `id`
//! goes through here.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{DomError, DomResult, DomTree, ElementData, ElementKind, IdIndex, Node, NodeId};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique document identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    fn next() -> Self {
        Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    tree: DomTree,
    ids: IdIndex,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document (document node only)
    pub fn new() -> Self {
        Self {
            id: DocumentId::next(),
            tree: DomTree::new(),
            ids: IdIndex::new(),
        }
    }

    /// Create a document with the usual `html > (head, body)` skeleton
    pub fn with_skeleton() -> Self {
        let mut doc = Self::new();
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        // Fresh nodes under the root cannot violate the hierarchy.
        let _ = doc.append_child(NodeId::ROOT, html);
        let _ = doc.append_child(html, head);
        let _ = doc.append_child(html, body);
        doc
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Read-only access to the tree; mutate through the document
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn id_index(&self) -> &IdIndex {
        &self.ids
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.tree.create_text(text)
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.tree.create_comment(text)
    }

    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.tree.push(Node::doctype(name, public_id, system_id))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> DomResult<()> {
        let was_connected = self.tree.is_connected(child);
        if was_connected {
            self.unregister_subtree(child);
        }
        if let Err(err) = self.tree.insert_before(parent, child, reference) {
            if was_connected {
                self.register_subtree(child);
            }
            return Err(err);
        }
        if self.tree.is_connected(child) {
            self.register_subtree(child);
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.tree.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(child)
    }

    /// Detach a node (and its subtree) from the tree
    pub fn detach(&mut self, node: NodeId) {
        if self.tree.is_connected(node) {
            self.unregister_subtree(node);
        }
        self.tree.detach(node);
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.tree.element(node)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.get_attr(name)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        let is_id = name.eq_ignore_ascii_case("id");
        let connected = is_id && self.tree.is_connected(node);
        let element = self.tree.element_mut(node).ok_or(DomError::InvalidNode(node))?;
        let old = element.attrs.set_attribute(name, value);
        if connected {
            if let Some(old) = old {
                self.ids.unregister(&old, node);
            }
            self.ids.register(value, node);
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> DomResult<Option<String>> {
        let connected = self.tree.is_connected(node);
        let element = self.tree.element_mut(node).ok_or(DomError::InvalidNode(node))?;
        let removed = element.attrs.remove_named_item(name);
        if let Some(attr) = &removed {
            if attr.is_id() && connected {
                self.ids.unregister(&attr.value, node);
            }
        }
        Ok(removed.map(|a| a.value))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Element registered under `id`
    pub fn element_by_id(&self, id: &str) -> DomResult<NodeId> {
        self.ids.lookup(id)
    }

    /// All connected elements in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .descendants(NodeId::ROOT)
            .filter(move |&n| self.tree.element(n).is_some())
    }

    /// Connected elements whose tag is one of `tags`, in document order
    pub fn elements_by_tag(&self, tags: &[&str]) -> Vec<NodeId> {
        self.elements()
            .filter(|&n| self.tree.element(n).is_some_and(|e| tags.contains(&e.tag.as_str())))
            .collect()
    }

    pub fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements()
            .find(|&n| self.tree.element(n).is_some_and(|e| e.tag == tag))
    }

    /// Connected elements whose kind satisfies `pred`, in document order
    pub fn elements_by_kind(&self, pred: impl Fn(ElementKind) -> bool) -> Vec<NodeId> {
        self.elements()
            .filter(|&n| self.tree.element(n).is_some_and(|e| pred(e.kind)))
            .collect()
    }

    pub fn first_element_by_kind(&self, pred: impl Fn(ElementKind) -> bool) -> Option<NodeId> {
        self.elements()
            .find(|&n| self.tree.element(n).is_some_and(|e| pred(e.kind)))
    }

    /// The `<html>` element
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree.children(NodeId::ROOT).find(|&n| self.tree.element(n).is_some())
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    fn register_subtree(&mut self, node: NodeId) {
        for n in self.tree.subtree(node) {
            if let Some(id) = self.tree.element(n).and_then(ElementData::id) {
                self.ids.register(id, n);
            }
        }
    }

    fn unregister_subtree(&mut self, node: NodeId) {
        for n in self.tree.subtree(node) {
            if let Some(id) = self.tree.element(n).and_then(ElementData::id) {
                self.ids.unregister(id, n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_id(doc: &mut Document, id: &str) -> NodeId {
        let node = doc.create_element("input");
        doc.set_attribute(node, "id", id).unwrap();
        node
    }

    #[test]
    fn test_skeleton() {
        let doc = Document::with_skeleton();
        let html = doc.document_element().unwrap();
        assert_eq!(doc.element(html).unwrap().tag, "html");
        assert!(doc.first_element_by_tag("body").is_some());
    }

    #[test]
    fn test_query_by_kind() {
        let mut doc = Document::with_skeleton();
        let head = doc.first_element_by_tag("head").unwrap();
        let body = doc.first_element_by_tag("body").unwrap();
        let base = doc.create_element("BASE");
        let frame = doc.create_element("iframe");
        doc.append_child(head, base).unwrap();
        doc.append_child(body, frame).unwrap();

        assert_eq!(doc.first_element_by_kind(ElementKind::is_base), Some(base));
        assert_eq!(doc.elements_by_kind(ElementKind::is_frame), [frame]);
        assert_eq!(doc.elements_by_kind(|kind| kind == ElementKind::Body), [body]);

        doc.detach(base);
        assert_eq!(doc.first_element_by_kind(ElementKind::is_base), None);
    }

    #[test]
    fn test_detached_elements_are_not_indexed() {
        let mut doc = Document::with_skeleton();
        let node = input_with_id(&mut doc, "a");
        assert!(doc.element_by_id("a").is_err());

        let body = doc.first_element_by_tag("body").unwrap();
        doc.append_child(body, node).unwrap();
        assert_eq!(doc.element_by_id("a"), Ok(node));
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut doc = Document::with_skeleton();
        let body = doc.first_element_by_tag("body").unwrap();
        let first = input_with_id(&mut doc, "x");
        let second = input_with_id(&mut doc, "x");
        doc.append_child(body, first).unwrap();
        doc.append_child(body, second).unwrap();

        assert_eq!(doc.element_by_id("x"), Ok(first));

        doc.detach(first);
        assert_eq!(doc.element_by_id("x"), Err(DomError::NotFound("x".into())));
        assert_eq!(doc.attribute(second, "id"), Some("x"));
    }

    #[test]
    fn test_changing_id_reindexes() {
        let mut doc = Document::with_skeleton();
        let body = doc.first_element_by_tag("body").unwrap();
        let node = input_with_id(&mut doc, "old");
        doc.append_child(body, node).unwrap();

        doc.set_attribute(node, "id", "new").unwrap();
        assert!(doc.element_by_id("old").is_err());
        assert_eq!(doc.element_by_id("new"), Ok(node));

        doc.remove_attribute(node, "id").unwrap();
        assert!(doc.element_by_id("new").is_err());
    }

    #[test]
    fn test_detaching_subtree_unregisters_descendants() {
        let mut doc = Document::with_skeleton();
        let body = doc.first_element_by_tag("body").unwrap();
        let form = doc.create_element("form");
        let field = input_with_id(&mut doc, "field");
        doc.append_child(form, field).unwrap();
        doc.append_child(body, form).unwrap();
        assert_eq!(doc.element_by_id("field"), Ok(field));

        doc.remove_child(body, form).unwrap();
        assert!(doc.element_by_id("field").is_err());
        assert!(doc.id_index().is_empty());
    }
}
