//! Navigation detection
//!
//! While script runs, the window owner may load a new page into some
//! window. Each script call pushes an entry; the owner records the first
//! window it navigates while that entry is on top; popping the entry tells
//! the caller which window (if any) now shows a different page.
//!
//! Entries nest strictly LIFO with host calls. A navigation recorded in an
//! inner call is handed to the enclosing entry when the inner one pops, so
//! every call on the path learns that the page went away.

/// State of the innermost script call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// No script call in flight
    Idle,
    /// A call is running and nothing navigated yet
    Running,
    /// A window was navigated during the running call
    Navigated,
}

/// One in-flight script call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<W> {
    /// Window of the page the call started on (None for unattached pages)
    pub origin: Option<W>,
    /// First window navigated while this call was on top
    pub navigated: Option<W>,
}

#[derive(Debug)]
pub struct NavigationStack<W> {
    entries: Vec<Pending<W>>,
}

impl<W> Default for NavigationStack<W> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<W: Clone> NavigationStack<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A script call begins
    pub fn push(&mut self, origin: Option<W>) {
        self.entries.push(Pending { origin, navigated: None });
    }

    /// `window` loaded a new page. Only the first navigation per call is
    /// kept; with no call in flight this is a no-op.
    pub fn record_navigation(&mut self, window: W) -> bool {
        match self.entries.last_mut() {
            Some(top) if top.navigated.is_none() => {
                top.navigated = Some(window);
                true
            }
            _ => false,
        }
    }

    /// The innermost script call ended
    pub fn pop(&mut self) -> Option<Pending<W>> {
        let entry = self.entries.pop()?;
        if let (Some(window), Some(parent)) = (&entry.navigated, self.entries.last_mut()) {
            if parent.navigated.is_none() {
                parent.navigated = Some(window.clone());
            }
        }
        Some(entry)
    }

    pub fn state(&self) -> NavigationState {
        match self.entries.last() {
            None => NavigationState::Idle,
            Some(Pending { navigated: None, .. }) => NavigationState::Running,
            Some(_) => NavigationState::Navigated,
        }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }
}
