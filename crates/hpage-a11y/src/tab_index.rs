//! Tab Index
//!
//! Effective tab index of an element and the tab order it induces.

use std::cmp::Ordering;

use hpage_dom::{Document, ElementData, NodeId};

/// Effective tab index of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex` absent or empty
    Unspecified,
    /// `tabindex` outside [0, 32767] or not a number
    OutOfBounds,
    Value(i32),
}

impl TabIndex {
    pub const UNSPECIFIED: i32 = -10;
    pub const OUT_OF_BOUNDS: i32 = -20;
    pub const MAX: i32 = 32767;

    /// Parse a raw `tabindex` attribute value
    pub fn parse(value: Option<&str>) -> Self {
        let value = match value.map(str::trim) {
            None | Some("") => return Self::Unspecified,
            Some(v) => v,
        };
        match value.parse::<i64>() {
            Ok(n) if (0..=Self::MAX as i64).contains(&n) => Self::Value(n as i32),
            _ => Self::OutOfBounds,
        }
    }

    pub fn of(element: &ElementData) -> Self {
        Self::parse(element.get_attr("tabindex"))
    }

    /// Numeric form, sentinels included
    pub fn value(self) -> i32 {
        match self {
            Self::Unspecified => Self::UNSPECIFIED,
            Self::OutOfBounds => Self::OUT_OF_BOUNDS,
            Self::Value(n) => n,
        }
    }

    pub fn is_out_of_bounds(self) -> bool {
        self == Self::OutOfBounds
    }
}

/// Tab order between two indexes.
///
/// Positive indexes come first, ascending. Among the rest the larger value
/// goes first, so `0` precedes unspecified; equal values tie.
pub fn compare_tab_indexes(a: TabIndex, b: TabIndex) -> Ordering {
    let (a, b) = (a.value(), b.value());
    match (a > 0, b > 0) {
        (true, true) => a.cmp(&b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.cmp(&a),
    }
}

/// Elements reachable with the tab key, in tab order.
///
/// Ties keep document order.
pub fn tabbable_elements(doc: &Document) -> Vec<NodeId> {
    let mut tabbable: Vec<(NodeId, TabIndex)> = doc
        .elements()
        .filter_map(|node| {
            let element = doc.element(node)?;
            if !element.kind.is_tabbable() || element.is_disabled() {
                return None;
            }
            let index = TabIndex::of(element);
            (!index.is_out_of_bounds()).then_some((node, index))
        })
        .collect();

    tabbable.sort_by(|(_, a), (_, b)| compare_tab_indexes(*a, *b));
    tracing::trace!("{} tabbable elements", tabbable.len());
    tabbable.into_iter().map(|(node, _)| node).collect()
}

/// `id` attributes of [`tabbable_elements`], "" where unset
pub fn tabbable_element_ids(doc: &Document) -> Vec<String> {
    tabbable_elements(doc)
        .into_iter()
        .map(|node| doc.attribute(node, "id").unwrap_or("").to_string())
        .collect()
}
