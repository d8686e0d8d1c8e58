//! Pending navigation tracking
//!
//! One [`NavigationStack`] per thread. Script calls push through a
//! [`NavigationGuard`]; window owners report loads with
//! [`record_navigation`].

use std::cell::RefCell;
use std::rc::Rc;

use hpage_js::{NavigationStack, NavigationState};

use crate::WindowRef;

thread_local! {
    static PENDING: RefCell<NavigationStack<WindowRef>> = RefCell::new(NavigationStack::new());
}

/// Report that `window` now shows a new page.
///
/// Returns whether a running script call took note; outside script this is
/// a no-op.
pub fn record_navigation(window: &WindowRef) -> bool {
    let recorded = PENDING.with(|stack| stack.borrow_mut().record_navigation(Rc::clone(window)));
    if recorded {
        tracing::debug!("Navigation of {} recorded during script", window.id());
    }
    recorded
}

/// State of the innermost script call on this thread
pub fn navigation_state() -> NavigationState {
    PENDING.with(|stack| stack.borrow().state())
}

/// Keeps one entry pushed for the length of a script call
pub(crate) struct NavigationGuard {
    active: bool,
}

impl NavigationGuard {
    pub(crate) fn push(origin: Option<WindowRef>) -> Self {
        PENDING.with(|stack| stack.borrow_mut().push(origin));
        Self { active: true }
    }

    /// Pop the entry; the window navigated during the call, if any
    pub(crate) fn finish(mut self) -> Option<WindowRef> {
        self.active = false;
        PENDING
            .with(|stack| stack.borrow_mut().pop())
            .and_then(|entry| entry.navigated)
    }
}

impl Drop for NavigationGuard {
    fn drop(&mut self) {
        if self.active {
            PENDING.with(|stack| stack.borrow_mut().pop());
        }
    }
}
