//! Tab order, access keys and document assertions through the page

mod common;

use std::rc::Rc;

use common::*;
use hpage_engine::{Config, CurrentPage, Engine, FocusManager, RecordAssertions, StubHost};

fn ids(page: &hpage_engine::Page, focus: Option<hpage_engine::dom::ElementRef>) -> String {
    focus
        .and_then(|f| page.document().attribute(f.node, "id"))
        .unwrap_or("")
        .to_string()
}

#[test]
fn test_tab_order_scenario() {
    let page = load(
        Engine::default(),
        r#"<body>
            <input id="five" tabindex="5">
            <input id="two" tabindex="2">
            <a id="link" href="x">x</a>
            <button id="zero" tabindex="0">b</button>
        </body>"#,
    );
    assert_eq!(page.tabbable_element_ids(), ["two", "five", "zero", "link"]);

    let mut focus = FocusManager::new();
    let mut seen = Vec::new();
    for _ in 0..5 {
        let next = page.tab_to_next(&mut focus);
        seen.push(ids(&page, next));
    }
    assert_eq!(seen, ["two", "five", "zero", "link", "two"]);

    assert_eq!(ids(&page, page.tab_to_previous(&mut focus)), "link");
}

#[test]
fn test_focus_on_other_page_restarts_order() {
    let first = load(Engine::default(), r#"<input id="a"><input id="b">"#);
    let second = load(Engine::default(), r#"<input id="c"><input id="d">"#);

    let mut focus = FocusManager::new();
    first.tab_to_next(&mut focus);
    first.tab_to_next(&mut focus);
    assert_eq!(ids(&second, second.tab_to_next(&mut focus)), "c");
}

#[test]
fn test_access_key_focuses_and_clicks() {
    let host = Rc::new(StubHost::new());
    let engine = Engine::new(Config::default()).with_script_host(host.clone());
    let mut page = load(engine, r#"<button id="save" accesskey="s" onclick="return 'saved'">Save</button>"#);

    let mut focus = FocusManager::new();
    let current = page.press_access_key(&mut focus, 'S').unwrap();

    assert!(matches!(current, CurrentPage::Unchanged));
    assert_eq!(ids(&page, focus.focused()), "save");
    assert_eq!(host.function_names().len(), 1);
}

#[test]
fn test_access_key_navigation_clears_focus() {
    let owner = FakeOwner::new();
    let window = FakeWindow::new(1, "main");
    let host = NavigatingHost::new("next.html");
    let page = load_in_window(
        engine_with(host.clone(), owner.clone()),
        r#"<a id="go" href="next.html" accesskey="g" onclick="navigate()">go</a>"#,
        &window,
        &owner,
    );

    let mut focus = FocusManager::new();
    let current = page.borrow_mut().press_access_key(&mut focus, 'g').unwrap();

    assert!(current.is_navigated());
    assert_eq!(focus.focused(), None);

    let go = page.borrow().element_by_id("go").unwrap();
    assert!(host.contexts.borrow().iter().all(|c| *c == Some(go)));
}

#[test]
fn test_unknown_access_key_changes_nothing() {
    let page_engine = Engine::default();
    let mut page = load(page_engine, r#"<a accesskey="a" href="x">x</a>"#);
    let mut focus = FocusManager::new();
    assert!(matches!(page.press_access_key(&mut focus, 'q').unwrap(), CurrentPage::Unchanged));
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_assertions_report_through_engine_sink() {
    let sink = Rc::new(RecordAssertions::new());
    let engine = Engine::default().with_assertions(sink.clone());
    let page = load(
        engine,
        r##"<a id="x" accesskey="k" tabindex="1" href="#">1</a>
           <button id="x" accesskey="k" tabindex="-4">2</button>"##,
    );

    page.assert_unique_ids();
    page.assert_unique_access_keys();
    page.assert_tab_indexes_set();
    assert_eq!(
        sink.messages(),
        [
            "Duplicate ID: x",
            "Duplicate access key: k",
            "Illegal value for tab index: -4",
        ]
    );
}

#[test]
fn test_id_index_follows_mutation() {
    let mut page = load(Engine::default(), r#"<p id="x">first</p><p id="x">second</p>"#);
    let first = page.element_by_id("x").unwrap();
    assert_eq!(page.document().text_content(first), "first");

    // The second claimant is not promoted when the first goes away
    page.document_mut().detach(first);
    assert!(page.element_by_id("x").is_err());

    let body = page.document().first_element_by_tag("body").unwrap();
    let fresh = page.document_mut().create_element("div");
    page.document_mut().set_attribute(fresh, "id", "y").unwrap();
    assert!(page.element_by_id("y").is_err());
    page.document_mut().append_child(body, fresh).unwrap();
    assert_eq!(page.element_by_id("y").unwrap(), fresh);
}
