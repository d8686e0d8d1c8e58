//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element is registered under this id
    #[error("no element with id `{0}`")]
    NotFound(String),

    /// Inserting a node into its own subtree, or under a leaf node
    #[error("hierarchy request error: cannot insert {child} under {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Reference node is not a child of the given parent
    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Node does not exist, or is not an element where one is required
    #[error("invalid node {0}")]
    InvalidNode(NodeId),
}
