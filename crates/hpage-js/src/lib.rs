//! hpage JavaScript contract
//!
//! The script engine itself lives outside this workspace. This crate defines
//! what a page needs from one:
//! - [`ScriptHost`]: execute source, call a function value
//! - [`JsValue`]: opaque results, with callables as [`FunctionHandle`]s
//! - [`NavigationStack`]: detects that a script replaced the current page
//! - source helpers (`javascript:` prefix, handler wrapping, type sniffing)
//! - [`StubHost`], a literal-only host for tests and script-less embedding

mod navigation;
mod source;
mod stub_host;

pub use navigation::{NavigationStack, NavigationState, Pending};
pub use source::{is_javascript, strip_javascript_prefix, wrap_in_function, wrapper_name, WRAPPER_PREFIX};
pub use stub_host::StubHost;

use hpage_dom::NodeId;

/// Opaque reference to a function owned by the script host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionHandle(u64);

impl FunctionHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// JavaScript value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object,
    Function(FunctionHandle),
}

impl JsValue {
    pub fn is_function(&self) -> bool {
        matches!(self, JsValue::Function(_))
    }

    pub fn as_function(&self) -> Option<FunctionHandle> {
        match self {
            JsValue::Function(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }
}

/// JavaScript error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsError {
    #[error("JavaScript error in {source_name}: {message}")]
    Runtime { source_name: String, message: String },

    #[error("Syntax error in {source_name}: {message}")]
    Syntax { source_name: String, message: String },

    #[error("Type error: {0}")]
    TypeError(String),
}

/// The script engine as seen by a page.
///
/// `P` is the page type; hosts get mutable access to it for the duration of
/// a call so script can mutate the document. Calls may re-enter the page
/// (a handler that runs more script), so implementations must not hold
/// internal borrows across the call.
pub trait ScriptHost<P: ?Sized> {
    /// Run `source`. `name` labels the code in error messages; `context` is
    /// the element the code runs for, if any.
    fn execute(&self, page: &mut P, source: &str, name: &str, context: Option<NodeId>) -> Result<JsValue, JsError>;

    /// Invoke a function value previously returned by the host
    fn call_function(
        &self,
        page: &mut P,
        function: FunctionHandle,
        this: Option<NodeId>,
        args: &[JsValue],
        context: Option<NodeId>,
    ) -> Result<JsValue, JsError>;
}
