//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to an hpage [`Document`]. Nodes
//! are appended through the document's mutation layer in document order, so
//! the id index ends up holding the first element for every id.

use hpage_dom::{Document, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML text into a Document
    pub fn parse(&self, html: &str) -> Document {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::new();
        let root = document.root();
        self.convert_node(&dom.document, &mut document, root);

        tracing::debug!(
            "Parsed {} nodes, {} ids",
            document.tree().len(),
            document.id_index().len()
        );
        document
    }

    fn convert_node(&self, handle: &Handle, doc: &mut Document, parent: NodeId) {
        let id = match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, doc, parent);
                }
                return;
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                doc.create_doctype(name, public_id, system_id)
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if text.trim().is_empty() {
                    return;
                }
                doc.create_text(&text)
            }
            RcNodeData::Comment { contents } => doc.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let id = doc.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    // A freshly created element always accepts attributes.
                    let _ = doc.set_attribute(id, &attr.name.local, &attr.value);
                }
                id
            }
            RcNodeData::ProcessingInstruction { .. } => return,
        };

        if let Err(err) = doc.append_child(parent, id) {
            tracing::warn!("Dropping node {} from parse tree: {}", id, err);
            return;
        }

        for child in handle.children.borrow().iter() {
            self.convert_node(child, doc, id);
        }
    }
}
