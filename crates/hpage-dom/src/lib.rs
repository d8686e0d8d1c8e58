//! hpage DOM - Document Object Model
//!
//! Arena-allocated element tree. The [`Document`] is the mutation layer: it
//! keeps the [`IdIndex`] in sync whenever an `id` attribute changes or a
//! subtree is attached or detached.

mod attributes;
mod document;
mod id_index;
mod kind;
mod node;
mod operations;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::{Document, DocumentId};
pub use id_index::IdIndex;
pub use kind::ElementKind;
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An element identified across documents.
///
/// Node ids are only unique inside one arena, so anything that must tell
/// elements of different pages apart (focus, for one) carries the document
/// id as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub document: DocumentId,
    pub node: NodeId,
}

impl ElementRef {
    pub fn new(document: DocumentId, node: NodeId) -> Self {
        Self { document, node }
    }
}
