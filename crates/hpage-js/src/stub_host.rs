//! Stub script host
//!
//! Minimal [`ScriptHost`] that understands just enough to drive a page
//! without a real engine:
//! - literals (`undefined`, `null`, booleans, numbers, quoted strings)
//! - `function name() { body }` definitions
//! - `name()` calls, where the body may `return` a literal
//! - a bare defined name, which evaluates to its function value
//!
//! Every executed source is kept in a log so callers can see what ran.

use std::cell::RefCell;

use hpage_dom::NodeId;

use crate::{FunctionHandle, JsError, JsValue, ScriptHost};

#[derive(Debug, Default)]
struct StubState {
    functions: Vec<(String, String)>,
    log: Vec<String>,
}

/// Stub JavaScript host
#[derive(Debug, Default)]
pub struct StubHost {
    state: RefCell<StubState>,
}

impl StubHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources executed so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.state.borrow().log.clone()
    }

    /// Names of the functions defined so far
    pub fn function_names(&self) -> Vec<String> {
        self.state.borrow().functions.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Evaluate one chunk of source
    pub fn eval(&self, code: &str, source_name: &str) -> Result<JsValue, JsError> {
        self.state.borrow_mut().log.push(code.to_string());
        self.evaluate(code, source_name)
    }

    fn evaluate(&self, code: &str, source_name: &str) -> Result<JsValue, JsError> {
        let code = code.trim().trim_end_matches(';').trim();

        if code.is_empty() {
            return Ok(JsValue::Undefined);
        }
        if let Some(rest) = code.strip_prefix("function ") {
            self.define(rest, source_name)?;
            return Ok(JsValue::Undefined);
        }
        if let Some(callee) = code.strip_suffix("()") {
            if let Some(handle) = self.lookup(callee.trim()) {
                return self.invoke(handle);
            }
            return Err(JsError::Runtime {
                source_name: source_name.to_string(),
                message: format!("{} is not defined", callee.trim()),
            });
        }
        if let Some(handle) = self.lookup(code) {
            return Ok(JsValue::Function(handle));
        }
        if let Some(value) = parse_literal(code) {
            return Ok(value);
        }

        tracing::debug!("[StubHost] Cannot evaluate: {}", code);
        Ok(JsValue::Undefined)
    }

    fn define(&self, rest: &str, source_name: &str) -> Result<(), JsError> {
        let syntax = |message: &str| JsError::Syntax {
            source_name: source_name.to_string(),
            message: message.to_string(),
        };
        let open_paren = rest.find('(').ok_or_else(|| syntax("expected ( after function name"))?;
        let name = rest[..open_paren].trim().to_string();
        let open = rest.find('{').ok_or_else(|| syntax("expected function body"))?;
        let close = rest.rfind('}').filter(|&c| c > open).ok_or_else(|| syntax("unterminated function body"))?;
        let body = rest[open + 1..close].trim().to_string();

        let functions = &mut self.state.borrow_mut().functions;
        match functions.iter().position(|(n, _)| *n == name) {
            Some(i) => functions[i].1 = body,
            None => functions.push((name, body)),
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<FunctionHandle> {
        self.state
            .borrow()
            .functions
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| FunctionHandle::new(i as u64))
    }

    fn invoke(&self, function: FunctionHandle) -> Result<JsValue, JsError> {
        let body = self
            .state
            .borrow()
            .functions
            .get(function.raw() as usize)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| JsError::TypeError(format!("{function:?} is not a function")))?;

        let body = body.trim().trim_end_matches(';').trim();
        match body.strip_prefix("return") {
            Some(expr) => self.evaluate(expr, "function body"),
            None => {
                self.evaluate(body, "function body")?;
                Ok(JsValue::Undefined)
            }
        }
    }
}

impl<P: ?Sized> ScriptHost<P> for StubHost {
    fn execute(&self, _page: &mut P, source: &str, name: &str, _context: Option<NodeId>) -> Result<JsValue, JsError> {
        self.eval(source, name)
    }

    fn call_function(
        &self,
        _page: &mut P,
        function: FunctionHandle,
        _this: Option<NodeId>,
        _args: &[JsValue],
        _context: Option<NodeId>,
    ) -> Result<JsValue, JsError> {
        self.invoke(function)
    }
}

/// Parse a simple literal value from code
fn parse_literal(code: &str) -> Option<JsValue> {
    match code {
        "undefined" => return Some(JsValue::Undefined),
        "null" => return Some(JsValue::Null),
        "true" => return Some(JsValue::Bool(true)),
        "false" => return Some(JsValue::Bool(false)),
        _ => {}
    }
    if let Ok(n) = code.parse::<f64>() {
        return Some(JsValue::Number(n));
    }
    let quoted = code.len() >= 2
        && ((code.starts_with('"') && code.ends_with('"')) || (code.starts_with('\'') && code.ends_with('\'')));
    quoted.then(|| JsValue::String(code[1..code.len() - 1].to_string()))
}
