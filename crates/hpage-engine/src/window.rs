//! Window container contract
//!
//! Windows and their owner live outside the page model. A page keeps only a
//! weak reference to the window it is shown in.

use std::fmt;
use std::rc::Rc;

use hpage_net::{Method, Url};

use crate::{PageRef, PageResult};

/// Window identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// A window or frame that shows one page at a time
pub trait WebWindow {
    fn id(&self) -> WindowId;

    fn name(&self) -> String;

    /// Page currently shown, if any
    fn enclosed_page(&self) -> Option<PageRef>;
}

pub type WindowRef = Rc<dyn WebWindow>;

/// Creates pages in windows and tears windows down.
///
/// `load_page` runs while the page that requested it may still be borrowed
/// by a script call, so implementations must not borrow that page. After
/// the new page is in place they call [`crate::record_navigation`].
pub trait WindowOwner {
    fn load_page(&self, window: &WindowRef, url: &Url, method: Method, params: &[(String, String)]) -> PageResult<()>;

    fn deregister_window(&self, window: &WindowRef);
}
