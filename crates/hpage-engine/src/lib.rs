//! hpage Engine
//!
//! Headless page model: a loaded document, the script run against it, its
//! focus order and its lifecycle inside a window.
//!
//! # Example
//! ```rust,ignore
//! use hpage_engine::{Config, Engine, Page, Response, StubHost, Url};
//!
//! let engine = Rc::new(Engine::new(Config::default()).with_script_host(Rc::new(StubHost::new())));
//! let url = Url::parse("http://example.com/")?;
//! let mut page = Page::load(engine, url, Response::ok("text/html", html), None);
//! page.initialize()?;
//! let result = page.execute("1", "inline", false, None)?;
//! ```

mod config;
mod engine;
mod error;
mod lifecycle;
mod navigation;
mod page;
mod resolve;
mod script;
mod window;

pub use config::Config;
pub use engine::Engine;
pub use error::{PageError, PageResult};
pub use navigation::{navigation_state, record_navigation};
pub use page::{Page, PageRef};
pub use script::{CurrentPage, Handler, ScriptFilter, ScriptResult};
pub use window::{WebWindow, WindowId, WindowOwner, WindowRef};

pub use hpage_a11y::{AssertionSink, FocusManager, LogAssertions, PanicAssertions, RecordAssertions};
pub use hpage_js::{FunctionHandle, JsError, JsValue, NavigationState, ScriptHost, StubHost};
pub use hpage_net::{Method, Response, Transport, Url};

// Re-export sub-crates for advanced usage
pub use hpage_a11y as a11y;
pub use hpage_dom as dom;
pub use hpage_html as html;
pub use hpage_js as js;
pub use hpage_net as net;
