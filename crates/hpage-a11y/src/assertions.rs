//! Document assertions
//!
//! Checks that report through an [`AssertionSink`] so the embedder picks
//! the policy: log and carry on, fail hard, or collect for inspection.

use std::cell::RefCell;
use std::collections::HashSet;

use hpage_dom::Document;

use crate::TabIndex;

/// Receives failed document assertions
pub trait AssertionSink {
    fn assertion_failed(&self, message: &str);
}

/// Log failures as warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAssertions;

impl AssertionSink for LogAssertions {
    fn assertion_failed(&self, message: &str) {
        tracing::warn!("Assertion failed: {}", message);
    }
}

/// Panic on the first failure
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicAssertions;

impl AssertionSink for PanicAssertions {
    fn assertion_failed(&self, message: &str) {
        panic!("Assertion failed: {message}");
    }
}

/// Keep every failure message
#[derive(Debug, Default)]
pub struct RecordAssertions {
    messages: RefCell<Vec<String>>,
}

impl RecordAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl AssertionSink for RecordAssertions {
    fn assertion_failed(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Report every access key used by more than one element
pub fn assert_unique_access_keys(doc: &Document, sink: &dyn AssertionSink) {
    let mut seen = HashSet::new();
    for node in doc.elements() {
        let Some(key) = doc.attribute(node, "accesskey").filter(|k| !k.is_empty()) else {
            continue;
        };
        if !seen.insert(key) {
            sink.assertion_failed(&format!("Duplicate access key: {key}"));
        }
    }
}

/// Report tabbable-kind elements without a usable tab index.
///
/// Disabled elements are checked too.
pub fn assert_tab_indexes_set(doc: &Document, sink: &dyn AssertionSink) {
    for node in doc.elements() {
        let Some(element) = doc.element(node).filter(|e| e.kind.is_tabbable()) else {
            continue;
        };
        match TabIndex::of(element) {
            TabIndex::OutOfBounds => sink.assertion_failed(&format!(
                "Illegal value for tab index: {}",
                element.attr_or_empty("tabindex")
            )),
            TabIndex::Unspecified => sink.assertion_failed(&format!("tabindex not set for <{}>", element.tag)),
            TabIndex::Value(_) => {}
        }
    }
}

/// Report every `id` carried by more than one element
pub fn assert_unique_ids(doc: &Document, sink: &dyn AssertionSink) {
    let mut seen = HashSet::new();
    for node in doc.elements() {
        let Some(id) = doc.element(node).and_then(|e| e.id()) else {
            continue;
        };
        if !seen.insert(id) {
            sink.assertion_failed(&format!("Duplicate ID: {id}"));
        }
    }
}
