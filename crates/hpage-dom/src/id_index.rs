//! Id index
//!
//! Maps `id` attribute values to the element that claimed them first.
//! Later claimants are ignored, and removal only succeeds for the current
//! holder, so a lookup never falls through to a second element.

use std::collections::HashMap;

use crate::{DomError, DomResult, NodeId};

#[derive(Debug, Default, Clone)]
pub struct IdIndex {
    map: HashMap<String, NodeId>,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `id` unless the id is already taken.
    ///
    /// Returns true when the entry was inserted.
    pub fn register(&mut self, id: &str, node: NodeId) -> bool {
        if id.is_empty() {
            return false;
        }
        if let Some(holder) = self.map.get(id) {
            if *holder != node {
                tracing::debug!("Duplicate id [{}] on {}, keeping {}", id, node, holder);
            }
            return false;
        }
        self.map.insert(id.to_string(), node);
        true
    }

    /// Remove the entry for `id` if `node` is the element holding it.
    pub fn unregister(&mut self, id: &str, node: NodeId) -> bool {
        if self.map.get(id) == Some(&node) {
            self.map.remove(id);
            true
        } else {
            false
        }
    }

    pub fn lookup(&self, id: &str) -> DomResult<NodeId> {
        self.get(id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.map.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
