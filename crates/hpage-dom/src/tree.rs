//! DOM Tree (arena-based allocation)
//!
//! Raw structural operations. Nothing here knows about ids; use
//! [`Document`](crate::Document) to mutate a tree that has an id index.

use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Arena-based DOM tree. Slot 0 is always the document node.
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
        Self {
            nodes: vec![Node::document()],
        }
    }

    #[inline]
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

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its document node, so this is never true
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// True when `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(n) => n.parent,
                None => return false,
            };
        }
        false
    }

    /// Attached (directly or transitively) to the document node
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(NodeId::ROOT, node)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.get(parent).ok_or(DomError::InvalidNode(parent))?;
        if self.get(child).is_none() {
            return Err(DomError::InvalidNode(child));
        }
        if !parent_node.is_container() || child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if it already
    /// has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.check_insert(parent, child)?;
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let c = &mut self.nodes[child.index()];
            c.parent = parent;
            c.prev_sibling = last;
            c.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(())
    }

    /// Insert `child` before `reference`, or append when there is none
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> DomResult<()> {
        let Some(reference) = reference else {
            return self.append_child(parent, child);
        };
        if reference == child {
            return Ok(());
        }
        self.check_insert(parent, child)?;
        if self.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild { parent, child: reference });
        }
        self.detach(child);

        let prev = self.nodes[reference.index()].prev_sibling;
        {
            let c = &mut self.nodes[child.index()];
            c.parent = parent;
            c.prev_sibling = prev;
            c.next_sibling = reference;
        }
        self.nodes[reference.index()].prev_sibling = child;
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        Ok(())
    }

    /// Unlink a node from its parent. The subtree stays in the arena.
    pub fn detach(&mut self, node: NodeId) {
        let Some(n) = self.get(node) else { return };
        let (parent, prev, next) = (n.parent, n.prev_sibling, n.next_sibling);
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

        let n = &mut self.nodes[node.index()];
        n.parent = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
    }

    /// Direct children in order
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(node).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// All descendants of `node` in document (pre-)order, excluding `node`
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: node,
            next: self.get(node).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// `node` followed by its descendants
    pub fn subtree(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(node)
            .filter(move |&n| self.get(n).is_some())
            .chain(self.descendants(node))
    }

    /// Next node in pre-order without leaving the subtree of `root`
    fn following(&self, node: NodeId, root: NodeId) -> NodeId {
        let first_child = self.nodes[node.index()].first_child;
        if first_child.is_valid() {
            return first_child;
        }
        let mut current = node;
        while current != root && current.is_valid() {
            let n = &self.nodes[current.index()];
            if n.next_sibling.is_valid() {
                return n.next_sibling;
            }
            current = n.parent;
        }
        NodeId::NONE
    }

    /// Concatenated text of all text descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in self.subtree(node) {
            if let Some(text) = self.nodes[id.index()].as_text() {
                out.push_str(text);
            }
        }
        out
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;
        self.next = node.next_sibling;
        Some(current)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        if !current.is_valid() {
            return None;
        }
        self.next = self.tree.following(current, self.root);
        Some(current)
    }
}
