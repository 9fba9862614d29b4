//! Font scripts

use super::xml::parse_document;
use super::{parse_number, Node};
use crate::error::ScriptError;

/// A font file to load at a given point size
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontDefinition {
    pub name: String,
    pub path: String,
    pub size: u32,
}

impl FontDefinition {
    fn from_node(node: &Node) -> Result<Self, ScriptError> {
        let mut def = Self::default();
        for item in &node.children {
            match item.name.as_str() {
                "name" => def.name = item.text.clone(),
                "file" => def.path = item.text.clone(),
                "size" => def.size = parse_number(item, "a non-negative integer")?,
                _ => {}
            }
        }
        Ok(def)
    }
}

/// Parse every `<font>` element of a font script
pub fn parse_fonts(source: &str) -> Result<Vec<FontDefinition>, ScriptError> {
    let doc = parse_document(source)?;
    doc.descendants("font")
        .into_iter()
        .map(FontDefinition::from_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fonts() {
        let source = r#"
<fonts>
  <font><name>title</name><file>fonts/title.ttf</file><size>32</size></font>
  <font><name>body</name><file>fonts/body.ttf</file><size>12</size></font>
</fonts>"#;
        let defs = parse_fonts(source).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(
            defs[0],
            FontDefinition {
                name: "title".to_string(),
                path: "fonts/title.ttf".to_string(),
                size: 32,
            }
        );
        assert_eq!(defs[1].size, 12);
    }

    #[test]
    fn test_invalid_size() {
        let result = parse_fonts("<font><size>large</size></font>");
        assert!(matches!(result, Err(ScriptError::InvalidValue { .. })));
    }
}
