//! Minimal element tree built on quick-xml
//!
//! Resource scripts only use elements and text, so attributes, comments and
//! processing instructions are dropped while reading.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ScriptError, Span};

/// One XML element with its trimmed text and child elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub text: String,
    pub children: Vec<Node>,
    /// Bytes from the start tag through the end tag
    pub span: Span,
}

impl Node {
    fn open(start: &BytesStart<'_>, span: Span) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            text: String::new(),
            children: Vec::new(),
            span,
        }
    }

    /// Every element named `name` in this subtree, in document order
    ///
    /// The node itself is included when it matches.
    pub fn descendants(&self, name: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Node>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }
}

/// Parse XML source into its root element
pub fn parse_document(source: &str) -> Result<Node, ScriptError> {
    let mut reader = Reader::from_str(source);
    reader.trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;
    let mut buf = Vec::new();

    loop {
        let start = reader.buffer_position();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(Node::open(e, start..reader.buffer_position()));
            }
            Ok(Event::Empty(ref e)) => {
                let node = Node::open(e, start..reader.buffer_position());
                attach(node, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let mut node = stack
                    .pop()
                    .ok_or_else(|| ScriptError::xml(start..reader.buffer_position(), "unmatched end tag"))?;
                node.span.end = reader.buffer_position();
                attach(node, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref t)) => {
                if let Some(node) = stack.last_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| ScriptError::xml(start..reader.buffer_position(), e.to_string()))?;
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref t)) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(t));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                let pos = reader.buffer_position();
                return Err(ScriptError::xml(start..pos.max(start), e.to_string()));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        let message = format!("element <{}> is never closed", open.name);
        return Err(ScriptError::xml(open.span, message));
    }
    root.ok_or_else(|| ScriptError::xml(0..source.len(), "document has no root element"))
}

fn attach(node: Node, stack: &mut [Node], root: &mut Option<Node>) -> Result<(), ScriptError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_some() => {
            return Err(ScriptError::xml(node.span, "document has more than one root element"));
        }
        None => *root = Some(node),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements_and_text() {
        let doc = parse_document("<root><a> hello </a><b><c>1</c></b></root>").unwrap();
        assert_eq!(doc.name, "root");
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.children[0].name, "a");
        assert_eq!(doc.children[0].text, "hello");
        assert_eq!(doc.children[1].children[0].text, "1");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let doc = parse_document("<a>left&amp;right</a>").unwrap();
        assert_eq!(doc.text, "left&right");
    }

    #[test]
    fn test_declaration_and_comments_skipped() {
        let source = r#"<?xml version="1.0"?>
<!-- materials -->
<root><name>x</name></root>"#;
        let doc = parse_document(source).unwrap();
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn test_empty_element() {
        let doc = parse_document("<root><children/></root>").unwrap();
        let children = &doc.children[0];
        assert_eq!(children.name, "children");
        assert!(children.children.is_empty());
        assert!(children.text.is_empty());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let doc = parse_document(
            "<root><font><name>a</name></font><group><font><name>b</name></font></group></root>",
        )
        .unwrap();
        let names: Vec<&str> = doc
            .descendants("font")
            .into_iter()
            .flat_map(|f| f.descendants("name"))
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_span_covers_element() {
        let source = "<root><a>1</a></root>";
        let doc = parse_document(source).unwrap();
        let a = &doc.children[0];
        assert_eq!(&source[a.span.clone()], "<a>1</a>");
    }

    #[test]
    fn test_mismatched_tags() {
        let result = parse_document("<root><a></b></root>");
        assert!(matches!(result, Err(ScriptError::Xml { .. })));
    }

    #[test]
    fn test_unclosed_element() {
        let result = parse_document("<root><a>1</a>");
        assert!(matches!(result, Err(ScriptError::Xml { .. })));
    }

    #[test]
    fn test_empty_document() {
        let result = parse_document("   ");
        assert!(matches!(result, Err(ScriptError::Xml { .. })));
    }
}
