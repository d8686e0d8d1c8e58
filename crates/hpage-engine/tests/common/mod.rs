//! Fakes for the collaborators a page talks to

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use hpage_dom::NodeId;
use hpage_engine::net::NetError;
use hpage_engine::{
    Config, Engine, FunctionHandle, JsError, JsValue, Method, Page, PageRef, PageResult, Response, ScriptHost,
    Transport, Url, WebWindow, WindowId, WindowOwner, WindowRef,
};

pub const PAGE_URL: &str = "http://example.com/dir/page.html";

// ============================================================================
// WINDOWS
// ============================================================================

pub struct FakeWindow {
    id: WindowId,
    name: String,
    page: RefCell<Option<PageRef>>,
}

impl FakeWindow {
    pub fn new(id: u64, name: &str) -> Rc<Self> {
        Rc::new(Self {
            id: WindowId(id),
            name: name.to_string(),
            page: RefCell::new(None),
        })
    }

    pub fn set_page(&self, page: PageRef) {
        *self.page.borrow_mut() = Some(page);
    }
}

impl WebWindow for FakeWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn enclosed_page(&self) -> Option<PageRef> {
        self.page.borrow().clone()
    }
}

/// Loads a fixed document into windows it knows about and records every
/// call it gets.
#[derive(Default)]
pub struct FakeOwner {
    windows: RefCell<HashMap<WindowId, Rc<FakeWindow>>>,
    pub loads: RefCell<Vec<(WindowId, String, Method)>>,
    pub deregistered: RefCell<Vec<WindowId>>,
}

impl FakeOwner {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn add_window(&self, window: &Rc<FakeWindow>) {
        self.windows.borrow_mut().insert(window.id(), Rc::clone(window));
    }

    pub fn load_urls(&self) -> Vec<String> {
        self.loads.borrow().iter().map(|(_, url, _)| url.clone()).collect()
    }
}

impl WindowOwner for FakeOwner {
    fn load_page(&self, window: &WindowRef, url: &Url, method: Method, _params: &[(String, String)]) -> PageResult<()> {
        self.loads.borrow_mut().push((window.id(), url.to_string(), method));

        let engine = Rc::new(Engine::default());
        let response = Response::ok("text/html", "<p>next</p>");
        let page = Page::load(engine, url.clone(), response, Some(window)).into_ref();
        let known = self.windows.borrow().get(&window.id()).cloned();
        if let Some(known) = known {
            known.set_page(page);
        }

        hpage_engine::record_navigation(window);
        Ok(())
    }

    fn deregister_window(&self, window: &WindowRef) {
        self.deregistered.borrow_mut().push(window.id());
    }
}

// ============================================================================
// TRANSPORT
// ============================================================================

#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<HashMap<String, Response>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn serve(&self, url: &str, response: Response) {
        self.responses.borrow_mut().insert(url.to_string(), response);
    }
}

impl Transport for FakeTransport {
    fn fetch(&self, url: &Url, _method: Method, _params: &[(String, String)]) -> Result<Response, NetError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .borrow()
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| NetError::Network(format!("connection refused: {url}")))
    }
}

// ============================================================================
// SCRIPT HOST
// ============================================================================

/// Host that understands function definitions plus a few statements:
/// - `navigate()` loads `target` into the page's window
/// - `fail()` throws
/// - `reenter()` runs `navigate()` through a nested `Page::execute`
/// - `callback()` makes the script evaluate to [`CALLBACK`]
pub struct NavigatingHost {
    target: String,
    functions: RefCell<HashMap<String, String>>,
    pub executed: RefCell<Vec<String>>,
    pub source_names: RefCell<Vec<String>>,
    pub contexts: RefCell<Vec<Option<NodeId>>>,
    pub called: RefCell<Vec<FunctionHandle>>,
    pub nested: RefCell<Vec<bool>>,
}

pub const CALLBACK: FunctionHandle = FunctionHandle::new(7);

impl NavigatingHost {
    pub fn new(target: &str) -> Rc<Self> {
        Rc::new(Self {
            target: target.to_string(),
            functions: RefCell::new(HashMap::new()),
            executed: RefCell::new(Vec::new()),
            source_names: RefCell::new(Vec::new()),
            contexts: RefCell::new(Vec::new()),
            called: RefCell::new(Vec::new()),
            nested: RefCell::new(Vec::new()),
        })
    }

    fn run(&self, page: &mut Page, code: &str, source_name: &str) -> Result<JsValue, JsError> {
        if code.contains("fail()") {
            return Err(JsError::Runtime {
                source_name: source_name.to_string(),
                message: "fail is not defined".to_string(),
            });
        }
        if code.contains("navigate()") {
            let window = page.window().ok_or_else(|| JsError::TypeError("no window".into()))?;
            let owner = page
                .engine()
                .window_owner()
                .ok_or_else(|| JsError::TypeError("no window owner".into()))?;
            let url = page
                .resolve_url(&self.target)
                .map_err(|e| JsError::TypeError(e.to_string()))?;
            owner
                .load_page(&window, &url, Method::Get, &[])
                .map_err(|e| JsError::TypeError(e.to_string()))?;
        }
        if code.contains("reenter()") {
            let inner = page
                .execute("navigate()", "nested", false, None)
                .map_err(|e| JsError::TypeError(e.to_string()))?;
            self.nested.borrow_mut().push(inner.page.is_navigated());
        }
        if code.contains("callback()") {
            return Ok(JsValue::Function(CALLBACK));
        }
        Ok(JsValue::Undefined)
    }
}

impl ScriptHost<Page> for NavigatingHost {
    fn execute(&self, page: &mut Page, source: &str, name: &str, context: Option<NodeId>) -> Result<JsValue, JsError> {
        self.executed.borrow_mut().push(source.to_string());
        self.source_names.borrow_mut().push(name.to_string());
        self.contexts.borrow_mut().push(context);

        if let Some(rest) = source.strip_prefix("function ") {
            let (name, body) = rest.split_once("()").unwrap_or((rest, ""));
            self.functions.borrow_mut().insert(name.to_string(), body.to_string());
            return Ok(JsValue::Undefined);
        }
        let body = source
            .strip_suffix("()")
            .and_then(|callee| self.functions.borrow().get(callee).cloned());
        match body {
            Some(body) => self.run(page, &body, name),
            None => self.run(page, source, name),
        }
    }

    fn call_function(
        &self,
        _page: &mut Page,
        function: FunctionHandle,
        _this: Option<NodeId>,
        _args: &[JsValue],
        _context: Option<NodeId>,
    ) -> Result<JsValue, JsError> {
        self.called.borrow_mut().push(function);
        Ok(JsValue::String("called".into()))
    }
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Run `f` with everything it logs captured
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// PAGES
// ============================================================================

pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

pub fn html_response(html: &str) -> Response {
    Response::ok("text/html; charset=utf-8", html)
}

pub fn load(engine: Engine, html: &str) -> Page {
    Page::load(Rc::new(engine), url(PAGE_URL), html_response(html), None)
}

/// Page shown in `window`, registered with `owner`
pub fn load_in_window(engine: Engine, html: &str, window: &Rc<FakeWindow>, owner: &FakeOwner) -> PageRef {
    owner.add_window(window);
    let window_ref: WindowRef = window.clone();
    let page = Page::load(Rc::new(engine), url(PAGE_URL), html_response(html), Some(&window_ref)).into_ref();
    window.set_page(Rc::clone(&page));
    page
}

pub fn engine_with(host: Rc<dyn ScriptHost<Page>>, owner: Rc<FakeOwner>) -> Engine {
    Engine::new(Config::default()).with_script_host(host).with_window_owner(owner)
}
