//! hpage Accessibility
//!
//! Keyboard navigation for a loaded document.
//!
//! Features:
//! - Tab index parsing and tab order
//! - Cyclic focus navigation
//! - Access keys
//! - Document assertions (tab indexes, access keys, ids)

mod access_key;
mod assertions;
mod focus;
mod tab_index;

pub use access_key::{element_with_access_key, elements_with_access_key};
pub use assertions::{
    assert_tab_indexes_set, assert_unique_access_keys, assert_unique_ids, AssertionSink, LogAssertions,
    PanicAssertions, RecordAssertions,
};
pub use focus::{advance_focus, Direction, FocusManager};
pub use tab_index::{compare_tab_indexes, tabbable_element_ids, tabbable_elements, TabIndex};
