//! Edge case tests for hpage-js
//!
//! The stub host driven through the `ScriptHost` trait, and deep nesting of
//! navigation entries.

use hpage_js::*;

/// Stand-in page; the stub host never looks at it
struct Blank;

// ============================================================================
// STUB HOST THROUGH THE TRAIT
// ============================================================================

#[test]
fn test_wrapped_handler_roundtrip() {
    let host = StubHost::new();
    let mut page = Blank;
    let name = wrapper_name(1);

    host.execute(&mut page, &wrap_in_function(&name, "return true"), "onclick", None)
        .unwrap();
    let value = host.execute(&mut page, &format!("{name}()"), "onclick", None).unwrap();
    assert_eq!(value, JsValue::Bool(true));
}

#[test]
fn test_call_function_value() {
    let host = StubHost::new();
    let mut page = Blank;
    host.execute(&mut page, "function f() {return 3}", "setup", None).unwrap();

    let f = host.execute(&mut page, "f", "lookup", None).unwrap();
    let handle = f.as_function().unwrap();
    let value = host.call_function(&mut page, handle, None, &[], None).unwrap();
    assert_eq!(value, JsValue::Number(3.0));
}

#[test]
fn test_unknown_function_handle() {
    let host = StubHost::new();
    let err = host
        .call_function(&mut Blank, FunctionHandle::new(99), None, &[], None)
        .unwrap_err();
    assert!(matches!(err, JsError::TypeError(_)));
}

#[test]
fn test_redefinition_replaces_body() {
    let host = StubHost::new();
    host.eval("function f() {return 1}", "a").unwrap();
    host.eval("function f() {return 2}", "b").unwrap();
    assert_eq!(host.function_names(), ["f"]);
    assert_eq!(host.eval("f()", "c").unwrap(), JsValue::Number(2.0));
}

#[test]
fn test_unterminated_function_is_syntax_error() {
    let host = StubHost::new();
    assert!(matches!(host.eval("function f() {", "bad"), Err(JsError::Syntax { .. })));
}

// ============================================================================
// NAVIGATION STACK
// ============================================================================

#[test]
fn test_deep_nesting_reaches_outermost() {
    let mut stack = NavigationStack::new();
    for depth in 0..50 {
        stack.push(Some(depth));
    }
    stack.record_navigation(49);

    let mut last = None;
    while let Some(entry) = stack.pop() {
        assert_eq!(entry.navigated, Some(49));
        last = Some(entry);
    }
    assert_eq!(last.unwrap().origin, Some(0));
    assert!(stack.is_idle());
}
