//! Access keys

use hpage_dom::{Document, NodeId};

/// Elements whose `accesskey` is `key`, ignoring case, in document order.
/// Only elements that accept access keys are considered.
pub fn elements_with_access_key(doc: &Document, key: char) -> Vec<NodeId> {
    doc.elements()
        .filter(|&node| {
            doc.element(node).is_some_and(|e| {
                e.kind.accepts_access_key() && e.get_attr("accesskey").is_some_and(|k| matches_key(k, key))
            })
        })
        .collect()
}

pub fn element_with_access_key(doc: &Document, key: char) -> Option<NodeId> {
    elements_with_access_key(doc, key).into_iter().next()
}

fn matches_key(attr: &str, key: char) -> bool {
    let mut chars = attr.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().eq(key.to_lowercase()),
        _ => false,
    }
}
