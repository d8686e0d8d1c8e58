//! Edge case tests for hpage-html
//!
//! Malformed markup and the id index the builder leaves behind.

use hpage_html::HtmlParser;

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_parse_empty() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.document_element().is_some());
    assert!(doc.id_index().is_empty());
}

#[test]
fn test_parse_only_doctype() {
    let doc = HtmlParser::new().parse("<!DOCTYPE html>");
    assert!(doc.first_element_by_tag("body").is_some());
}

// ============================================================================
// MALFORMED HTML
// ============================================================================

#[test]
fn test_unclosed_tags_keep_ids() {
    let doc = HtmlParser::new().parse(r#"<div id="outer"><p id="inner"><span>text"#);
    let outer = doc.element_by_id("outer").unwrap();
    let inner = doc.element_by_id("inner").unwrap();
    assert!(doc.tree().is_inclusive_ancestor(outer, inner));
}

#[test]
fn test_empty_id_not_indexed() {
    let doc = HtmlParser::new().parse(r#"<p id="">a</p><p id="b">b</p>"#);
    assert_eq!(doc.id_index().len(), 1);
    assert!(doc.element_by_id("").is_err());
}

#[test]
fn test_uppercase_markup_is_lowercased() {
    let doc = HtmlParser::new().parse(r#"<INPUT TabIndex="4" ID="q">"#);
    let input = doc.element_by_id("q").unwrap();
    let element = doc.element(input).unwrap();
    assert_eq!(element.tag, "input");
    assert_eq!(element.get_attr("tabindex"), Some("4"));
}

// ============================================================================
// FRAMES
// ============================================================================

#[test]
fn test_frameset_document_has_no_body() {
    let doc = HtmlParser::new().parse(
        r#"<html><head></head><frameset cols="50%,50%"><frame name="left"><frame name="right"></frameset></html>"#,
    );
    assert!(doc.first_element_by_tag("body").is_none());
    assert_eq!(doc.elements_by_tag(&["frame"]).len(), 2);
}
