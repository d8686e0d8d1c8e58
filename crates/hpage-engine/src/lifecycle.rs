//! Page lifecycle: load handlers, refresh and frame cleanup

use hpage_dom::ElementKind;
use hpage_net::Method;

use crate::{Handler, Page, PageError, PageResult, ScriptResult};

const REFRESH_URL_MARKER: &str = "url=";

impl Page {
    /// Run once the page is in its window: the page's onload handler, each
    /// frame's `onload`, then any refresh directive.
    pub fn initialize(&mut self) -> PageResult<()> {
        let onload = self.effective_onload()?;
        self.run_lifecycle_handler(&onload)?;

        for frame in self.frame_elements() {
            let onload = self.document().attribute(frame, "onload").unwrap_or("").to_string();
            self.run_lifecycle_handler(&Handler::Source(onload))?;
        }

        if self.window().is_some() {
            self.execute_refresh();
        }
        Ok(())
    }

    /// The explicit onload handler, else the body's `onload` attribute.
    /// A frameset document has no body and so no page onload.
    fn effective_onload(&self) -> PageResult<Handler> {
        if let Some(handler) = self.onload() {
            return Ok(handler.clone());
        }
        match self.document().elements_by_kind(|kind| kind == ElementKind::Body).as_slice() {
            [] => Ok(Handler::Source(String::new())),
            [body] => Ok(Handler::Source(
                self.document().attribute(*body, "onload").unwrap_or("").to_string(),
            )),
            bodies => Err(PageError::MultipleBodies(bodies.len())),
        }
    }

    fn run_lifecycle_handler(&mut self, handler: &Handler) -> PageResult<Option<ScriptResult>> {
        if handler.is_empty() {
            return Ok(None);
        }
        match self.dispatch_handler(handler) {
            Ok(result) => Ok(Some(result)),
            Err(PageError::Script(e)) if !self.engine().config().raise_script_errors => {
                tracing::error!("Error running load handler of {}: {}", self.url(), e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// `content` of the refresh meta element, else the Refresh header
    fn refresh_directive(&self) -> Option<String> {
        self.meta_content("refresh")
            .or_else(|| self.response().header("Refresh"))
            .map(str::to_string)
    }

    fn execute_refresh(&self) {
        let Some(refresh) = self.refresh_directive() else {
            return;
        };
        let Some(index) = refresh.to_ascii_lowercase().find(REFRESH_URL_MARKER) else {
            if !refresh.trim().is_empty() {
                tracing::error!("Malformed refresh string (no 'URL=' found): {}", refresh);
            }
            return;
        };

        let target = refresh[index + REFRESH_URL_MARKER.len()..].trim().trim_matches(['"', '\'']);
        let url = match self.resolve_url(target) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Malformed URL in refresh string: {}", e);
                return;
            }
        };
        let (Some(window), Some(owner)) = (self.window(), self.engine().window_owner()) else {
            return;
        };

        tracing::info!("Refreshing {} to {}", window.id(), url);
        if let Err(e) = owner.load_page(&window, &url, Method::Get, &[]) {
            tracing::error!("Unable to refresh to {}: {}", url, e);
        }
    }

    /// Deregister the windows of this page's frames, depth first
    pub fn clean_up(&self) {
        let owner = self.engine().window_owner();
        for window in self.frames() {
            if let Some(owner) = &owner {
                owner.deregister_window(&window);
            }
            let Some(page) = window.enclosed_page() else {
                continue;
            };
            match page.try_borrow() {
                Ok(page) => page.clean_up(),
                Err(_) => tracing::warn!("Page in {} is busy, frames left registered", window.id()),
            };
        }
    }
}
