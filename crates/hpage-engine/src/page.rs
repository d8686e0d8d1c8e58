//! Page Representation
//!
//! A loaded document with its response, encoding and window.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use hpage_a11y::FocusManager;
use hpage_dom::{Document, DomError, ElementRef, NodeId};
use hpage_net::{Response, Url};

use crate::{CurrentPage, Engine, Handler, PageError, PageResult, ScriptFilter, WebWindow, WindowRef};

pub type PageRef = Rc<RefCell<Page>>;

/// A loaded web page
pub struct Page {
    url: Url,
    response: Rc<Response>,
    /// Resolved on first use, then fixed
    encoding: OnceCell<String>,
    window: Option<Weak<dyn WebWindow>>,
    engine: Rc<Engine>,
    document: Document,
    pub(crate) script_filter: Option<Rc<dyn ScriptFilter>>,
    onload: Option<Handler>,
    /// Last minted handler wrapper number
    pub(crate) wrapper_count: u64,
    frame_windows: HashMap<NodeId, WindowRef>,
}

impl Page {
    /// Build a page from a response: decode the body and parse it
    pub fn load(engine: Rc<Engine>, url: Url, response: Response, window: Option<&WindowRef>) -> Self {
        let charset = response
            .charset
            .clone()
            .unwrap_or_else(|| engine.config().default_charset.clone());
        let html = hpage_net::decode(&response.body, &charset);
        let document = hpage_html::parse(&html);
        tracing::info!("Loaded {} ({} bytes, {})", url, response.body.len(), charset);
        Self::with_document(engine, url, response, document, window)
    }

    /// Wrap an already built document
    pub fn with_document(
        engine: Rc<Engine>,
        url: Url,
        response: Response,
        document: Document,
        window: Option<&WindowRef>,
    ) -> Self {
        Self {
            url,
            response: Rc::new(response),
            encoding: OnceCell::new(),
            window: window.map(Rc::downgrade),
            engine,
            document,
            script_filter: None,
            onload: None,
            wrapper_count: 0,
            frame_windows: HashMap::new(),
        }
    }

    pub fn into_ref(self) -> PageRef {
        Rc::new(RefCell::new(self))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn engine(&self) -> &Rc<Engine> {
        &self.engine
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Window this page is shown in; `None` when unattached or closed
    pub fn window(&self) -> Option<WindowRef> {
        self.window.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_window(&mut self, window: Option<&WindowRef>) {
        self.window = window.map(Rc::downgrade);
    }

    pub fn set_script_filter(&mut self, filter: Option<Rc<dyn ScriptFilter>>) {
        self.script_filter = filter;
    }

    /// Override the body's `onload` attribute
    pub fn set_onload(&mut self, handler: Option<Handler>) {
        self.onload = handler;
    }

    pub fn onload(&self) -> Option<&Handler> {
        self.onload.as_ref()
    }

    /// Character encoding of the page.
    ///
    /// A `<meta http-equiv="content-type">` charset wins over the response
    /// charset; without either the default charset applies.
    pub fn page_encoding(&self) -> &str {
        self.encoding.get_or_init(|| {
            self.meta_charset()
                .or_else(|| self.response.charset.clone())
                .unwrap_or_else(|| self.engine.config().default_charset.clone())
        })
    }

    fn meta_charset(&self) -> Option<String> {
        self.meta_content("content-type").and_then(|content| {
            let lower = content.to_ascii_lowercase();
            let start = lower.find("charset=")? + "charset=".len();
            let charset = content[start..].split(';').next()?.trim().trim_matches(['"', '\'']);
            (!charset.is_empty()).then(|| charset.to_string())
        })
    }

    /// `content` of the first `<meta>` with this `http-equiv` (any case)
    pub(crate) fn meta_content(&self, http_equiv: &str) -> Option<&str> {
        self.document.elements_by_tag(&["meta"]).into_iter().find_map(|meta| {
            let element = self.document.element(meta)?;
            element
                .get_attr("http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(http_equiv))
                .then(|| element.attr_or_empty("content"))
        })
    }

    /// Text of the `<title>` in `<head>`, "" without one
    pub fn title_text(&self) -> String {
        let tree = self.document.tree();
        let child_tagged = |parent: NodeId, tag: &str| {
            tree.children(parent).find(|&n| tree.element(n).is_some_and(|e| e.tag == tag))
        };
        self.document
            .document_element()
            .and_then(|html| child_tagged(html, "head"))
            .and_then(|head| child_tagged(head, "title"))
            .map(|title| self.document.text_content(title).trim().to_string())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Element queries
    // ------------------------------------------------------------------

    pub fn element_by_id(&self, id: &str) -> PageResult<NodeId> {
        self.document
            .element_by_id(id)
            .map_err(|_| PageError::not_found("element", "id", id))
    }

    pub fn anchors(&self) -> Vec<NodeId> {
        self.document.elements_by_tag(&["a"])
    }

    pub fn anchor_by_name(&self, name: &str) -> PageResult<NodeId> {
        self.find_by_attribute(self.anchors(), "anchor", "name", name)
    }

    pub fn anchor_by_href(&self, href: &str) -> PageResult<NodeId> {
        self.find_by_attribute(self.anchors(), "anchor", "href", href)
    }

    /// First anchor whose trimmed text is `text`
    pub fn first_anchor_by_text(&self, text: &str) -> PageResult<NodeId> {
        self.anchors()
            .into_iter()
            .find(|&a| self.document.text_content(a).trim() == text)
            .ok_or_else(|| PageError::not_found("anchor", "text", text))
    }

    pub fn forms(&self) -> Vec<NodeId> {
        self.document.elements_by_tag(&["form"])
    }

    pub fn form_by_name(&self, name: &str) -> PageResult<NodeId> {
        self.find_by_attribute(self.forms(), "form", "name", name)
    }

    fn find_by_attribute(
        &self,
        candidates: Vec<NodeId>,
        kind: &'static str,
        attribute: &'static str,
        value: &str,
    ) -> PageResult<NodeId> {
        candidates
            .into_iter()
            .find(|&n| self.document.attribute(n, attribute) == Some(value))
            .ok_or_else(|| PageError::not_found(kind, attribute, value))
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// `<frame>` and `<iframe>` elements, in document order
    pub fn frame_elements(&self) -> Vec<NodeId> {
        self.document
            .elements()
            .filter(|&n| self.document.element(n).is_some_and(|e| e.kind.is_frame()))
            .collect()
    }

    /// Windows attached to this page's frames, in document order
    pub fn frames(&self) -> Vec<WindowRef> {
        self.frame_elements()
            .into_iter()
            .filter_map(|n| self.frame_windows.get(&n).cloned())
            .collect()
    }

    /// Record the window the container created for a frame element
    pub fn attach_frame_window(&mut self, frame: NodeId, window: WindowRef) -> PageResult<()> {
        let is_frame = self.document.element(frame).is_some_and(|e| e.kind.is_frame());
        if !is_frame {
            return Err(DomError::NotFound(format!("frame element {frame}")).into());
        }
        self.frame_windows.insert(frame, window);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn tabbable_elements(&self) -> Vec<NodeId> {
        hpage_a11y::tabbable_elements(&self.document)
    }

    pub fn tabbable_element_ids(&self) -> Vec<String> {
        hpage_a11y::tabbable_element_ids(&self.document)
    }

    pub fn element_by_access_key(&self, key: char) -> Option<NodeId> {
        hpage_a11y::element_with_access_key(&self.document, key)
    }

    pub fn elements_by_access_key(&self, key: char) -> Vec<NodeId> {
        hpage_a11y::elements_with_access_key(&self.document, key)
    }

    pub fn tab_to_next(&self, focus: &mut FocusManager) -> Option<ElementRef> {
        focus.tab_next(&self.document)
    }

    pub fn tab_to_previous(&self, focus: &mut FocusManager) -> Option<ElementRef> {
        focus.tab_prev(&self.document)
    }

    /// Focus and click the element bound to `key`.
    ///
    /// The click runs the element's `onclick`. If that replaces the page the
    /// focus is cleared again.
    pub fn press_access_key(&mut self, focus: &mut FocusManager, key: char) -> PageResult<CurrentPage> {
        let Some(node) = self.element_by_access_key(key) else {
            tracing::debug!("No element for access key {}", key);
            return Ok(CurrentPage::Unchanged);
        };
        let target = ElementRef::new(self.document.id(), node);
        focus.focus(target);

        let onclick = match self.document.element(node) {
            Some(e) if !e.is_disabled() => e.attr_or_empty("onclick").to_string(),
            _ => String::new(),
        };
        if onclick.is_empty() {
            return Ok(CurrentPage::Unchanged);
        }

        let result = self.execute(&onclick, "onclick", true, Some(node))?;
        if result.page.is_navigated() && focus.focused() == Some(target) {
            focus.blur();
        }
        Ok(result.page)
    }

    // ------------------------------------------------------------------
    // Assertions
    // ------------------------------------------------------------------

    pub fn assert_unique_access_keys(&self) {
        hpage_a11y::assert_unique_access_keys(&self.document, self.engine.assertions());
    }

    pub fn assert_tab_indexes_set(&self) {
        hpage_a11y::assert_tab_indexes_set(&self.document, self.engine.assertions());
    }

    pub fn assert_unique_ids(&self) {
        hpage_a11y::assert_unique_ids(&self.document, self.engine.assertions());
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url.as_str())
            .field("status", &self.response.status)
            .field("document", &self.document.id())
            .field("attached", &self.window().is_some())
            .finish_non_exhaustive()
    }
}
