//! Focus Management
//!
//! Keyboard navigation through the tab order.

use hpage_dom::{Document, ElementRef};

use crate::tabbable_elements;

/// Tab direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Element that should get focus after one tab press from `current`.
///
/// Navigation wraps around both ends. A `current` element that is not in
/// this document's tab order (another page's, or one that became disabled)
/// counts as no focus. `None` means nothing on the page can take focus.
pub fn advance_focus(doc: &Document, current: Option<ElementRef>, direction: Direction) -> Option<ElementRef> {
    let order = tabbable_elements(doc);
    let last = order.len().checked_sub(1)?;

    let position = current
        .filter(|c| c.document == doc.id())
        .and_then(|c| order.iter().position(|&node| node == c.node));

    let next = match (position, direction) {
        (None, Direction::Forward) => 0,
        (None, Direction::Backward) => last,
        (Some(p), Direction::Forward) if p == last => 0,
        (Some(p), Direction::Forward) => p + 1,
        (Some(0), Direction::Backward) => last,
        (Some(p), Direction::Backward) => p - 1,
    };

    Some(ElementRef::new(doc.id(), order[next]))
}

/// Focus manager
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<ElementRef>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus element
    pub fn focus(&mut self, element: ElementRef) {
        self.focused = Some(element);
    }

    /// Get focused element
    pub fn focused(&self) -> Option<ElementRef> {
        self.focused
    }

    /// Focus next element
    pub fn tab_next(&mut self, doc: &Document) -> Option<ElementRef> {
        self.focused = advance_focus(doc, self.focused, Direction::Forward);
        self.focused
    }

    /// Focus previous element
    pub fn tab_prev(&mut self, doc: &Document) -> Option<ElementRef> {
        self.focused = advance_focus(doc, self.focused, Direction::Backward);
        self.focused
    }

    /// Blur current focus
    pub fn blur(&mut self) {
        self.focused = None;
    }
}
