//! hpage HTML
//!
//! Builds hpage documents from markup using html5ever.

mod parser;

pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> hpage_dom::Document {
    HtmlParser::new().parse(html)
}
