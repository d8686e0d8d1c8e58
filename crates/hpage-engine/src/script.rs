//! Script execution
//!
//! Runs script against a page through the engine's [`ScriptHost`] and
//! reports which page is current afterwards.

use std::fmt;

use hpage_dom::{ElementKind, NodeId};
use hpage_js::{FunctionHandle, JsValue};
use hpage_net::{Method, Response};

use crate::navigation::NavigationGuard;
use crate::{Page, PageRef, PageResult};

/// Event handler value: source text or a host function
#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    Source(String),
    Function(FunctionHandle),
}

impl Handler {
    pub fn is_empty(&self) -> bool {
        matches!(self, Handler::Source(s) if s.is_empty())
    }
}

impl From<&str> for Handler {
    fn from(source: &str) -> Self {
        Handler::Source(source.to_string())
    }
}

/// Page shown once a script call returned
#[derive(Clone)]
pub enum CurrentPage {
    /// Still the page the script ran on
    Unchanged,
    /// The script loaded a new page into some window
    Navigated(PageRef),
}

impl CurrentPage {
    pub fn is_navigated(&self) -> bool {
        matches!(self, CurrentPage::Navigated(_))
    }

    pub fn navigated(&self) -> Option<&PageRef> {
        match self {
            CurrentPage::Navigated(page) => Some(page),
            CurrentPage::Unchanged => None,
        }
    }
}

impl fmt::Debug for CurrentPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentPage::Unchanged => f.write_str("Unchanged"),
            CurrentPage::Navigated(page) => match page.try_borrow() {
                Ok(page) => write!(f, "Navigated({})", page.url()),
                Err(_) => f.write_str("Navigated(<busy>)"),
            },
        }
    }
}

/// Result of running script
#[derive(Debug, Clone)]
pub struct ScriptResult {
    pub value: JsValue,
    pub page: CurrentPage,
}

impl ScriptResult {
    fn unchanged(value: JsValue) -> Self {
        Self {
            value,
            page: CurrentPage::Unchanged,
        }
    }
}

/// Rewrites script before it runs. `None` vetoes execution.
pub trait ScriptFilter {
    fn filter(&self, source: &str, source_name: &str) -> Option<String>;
}

impl<F> ScriptFilter for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn filter(&self, source: &str, source_name: &str) -> Option<String> {
        self(source, source_name)
    }
}

impl Page {
    /// Run `source` against this page.
    ///
    /// With `wrap_in_function` the code becomes the body of a fresh
    /// zero-argument function which is then called, so handler code may
    /// `return`. `context` is the element the code runs for.
    pub fn execute(
        &mut self,
        source: &str,
        source_name: &str,
        wrap_in_function: bool,
        context: Option<NodeId>,
    ) -> PageResult<ScriptResult> {
        let Some(host) = self.engine().script_host() else {
            return Ok(ScriptResult::unchanged(JsValue::Null));
        };

        let source = hpage_js::strip_javascript_prefix(source);
        let source = match &self.script_filter {
            Some(filter) => match filter.filter(source, source_name) {
                Some(filtered) => filtered,
                None => {
                    tracing::debug!("Script filter vetoed {}", source_name);
                    return Ok(ScriptResult::unchanged(JsValue::Null));
                }
            },
            None => source.to_string(),
        };

        let guard = NavigationGuard::push(self.window());
        let value = if wrap_in_function {
            self.wrapper_count += 1;
            let name = hpage_js::wrapper_name(self.wrapper_count);
            let definition = format!("Wrapper definition for {source_name}");
            host.execute(self, &hpage_js::wrap_in_function(&name, &source), &definition, context)?;
            host.execute(self, &format!("{name}()"), source_name, context)?
        } else {
            host.execute(self, &source, source_name, context)?
        };

        let page = match guard.finish().and_then(|window| window.enclosed_page()) {
            Some(page) => {
                tracing::debug!("Script {} replaced the page", source_name);
                CurrentPage::Navigated(page)
            }
            None => CurrentPage::Unchanged,
        };
        Ok(ScriptResult { value, page })
    }

    /// Load script from `src` and run it.
    ///
    /// Loading is best effort: a bad URL, a transport failure or a non-200
    /// status is logged and yields `Ok(None)`. Faults of the script itself
    /// are returned.
    pub fn execute_external_source(&mut self, src: &str, charset_hint: &str) -> PageResult<Option<ScriptResult>> {
        let url = match self.resolve_url(src) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Unable to build URL for script src [{}]: {}", src, e);
                return Ok(None);
            }
        };
        let Some(transport) = self.engine().transport() else {
            tracing::error!("No transport to load script from [{}]", url);
            return Ok(None);
        };
        let response = match transport.fetch(&url, Method::Get, &[]) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error loading JavaScript from [{}]: {}", url, e);
                return Ok(None);
            }
        };
        if !response.is_ok() {
            tracing::error!(
                "Error loading JavaScript from [{}] status=[{} {}]",
                url,
                response.status,
                response.status_text
            );
            return Ok(None);
        }

        let content_type = response.content_type.as_str();
        if content_type != "text/javascript" && content_type != "application/x-javascript" {
            tracing::warn!(
                "Expected content type of text/javascript or application/x-javascript for remotely loaded \
                 JavaScript element at {}, but got [{}]",
                url,
                content_type
            );
        }

        let charset = self.script_charset(charset_hint, &response);
        let source = hpage_net::decode(&response.body, &charset);
        self.execute(&source, url.as_str(), false, None).map(Some)
    }

    /// Charset for an external script: the element's hint, then the
    /// response charset, then the page encoding. The default charset only
    /// counts as a last resort.
    pub(crate) fn script_charset(&self, hint: &str, response: &Response) -> String {
        if !hint.is_empty() {
            return hint.to_string();
        }
        let default = self.engine().config().default_charset.as_str();
        if let Some(charset) = response.charset.as_deref().filter(|c| !c.eq_ignore_ascii_case(default)) {
            return charset.to_string();
        }
        let page = self.page_encoding();
        if !page.eq_ignore_ascii_case(default) {
            return page.to_string();
        }
        default.to_string()
    }

    /// Run an event handler.
    ///
    /// Source that evaluates to a function value has that function called
    /// with no arguments, even when the source already navigated. The
    /// latest navigation wins.
    pub fn dispatch_handler(&mut self, handler: &Handler) -> PageResult<ScriptResult> {
        match handler {
            Handler::Source(source) if source.is_empty() => Ok(ScriptResult::unchanged(JsValue::Undefined)),
            Handler::Source(source) => {
                let result = self.execute(source, "event handler", false, None)?;
                let Some(function) = result.value.as_function() else {
                    return Ok(result);
                };
                let called = self.call_function(function, &[])?;
                if called.page.is_navigated() {
                    return Ok(called);
                }
                Ok(ScriptResult {
                    value: called.value,
                    page: result.page,
                })
            }
            Handler::Function(function) => self.call_function(*function, &[]),
        }
    }

    /// Invoke a host function with this page current
    pub fn call_function(&mut self, function: FunctionHandle, args: &[JsValue]) -> PageResult<ScriptResult> {
        let Some(host) = self.engine().script_host() else {
            return Ok(ScriptResult::unchanged(JsValue::Null));
        };

        let guard = NavigationGuard::push(self.window());
        let value = host.call_function(self, function, None, args, None)?;
        let page = match guard.finish().and_then(|window| window.enclosed_page()) {
            Some(page) => CurrentPage::Navigated(page),
            None => CurrentPage::Unchanged,
        };
        Ok(ScriptResult { value, page })
    }

    /// Run a `<script>` element: its `src` if set, otherwise its text.
    /// Elements in other scripting languages are skipped.
    pub fn execute_script_element(&mut self, node: NodeId) -> PageResult<Option<ScriptResult>> {
        let Some(element) = self.document().element(node).filter(|e| e.kind == ElementKind::Script) else {
            return Ok(None);
        };
        if !hpage_js::is_javascript(element.get_attr("type"), element.get_attr("language")) {
            tracing::debug!("Skipping non-JavaScript script element {}", node);
            return Ok(None);
        }

        let src = element.attr_or_empty("src").to_string();
        if !src.is_empty() {
            let charset = element.attr_or_empty("charset").to_string();
            return self.execute_external_source(&src, &charset);
        }

        let source = self.document().text_content(node);
        let name = format!("{} script {}", self.url(), node);
        self.execute(&source, &name, false, None).map(Some)
    }
}
