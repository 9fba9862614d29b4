//! Parsers for the XML resource scripts
//!
//! Each script kind has its own module producing plain definitions; the
//! engine side consumes them through [`crate::loader::ResourceSink`].

pub mod font;
pub mod gui;
pub mod light;
pub mod material;
pub mod music;
pub mod xml;

pub use font::{parse_fonts, FontDefinition};
pub use gui::{parse_views, ContainerDefinition, WidgetDefinition, WidgetKind};
pub use light::{parse_lights, LightDefinition, Position};
pub use material::{parse_materials, MaterialDefinition};
pub use music::{parse_playlists, MusicDefinition, PlaylistDefinition};
pub use xml::{parse_document, Node};

use std::str::FromStr;

use crate::error::ScriptError;

/// Parse the text of `node` as a number, reporting the node name as the field
fn parse_number<T: FromStr>(node: &Node, expected: &str) -> Result<T, ScriptError> {
    node.text.parse().map_err(|_| {
        ScriptError::invalid_value(&node.name, &node.text, format!("expected {}", expected), node.span.clone())
    })
}

/// Text of `node`, refusing an empty value
fn required_text(node: &Node) -> Result<String, ScriptError> {
    if node.text.is_empty() {
        return Err(ScriptError::invalid_value(&node.name, "", "must not be empty", node.span.clone()));
    }
    Ok(node.text.clone())
}

/// Text of `node` if it is one of `allowed`
fn one_of(node: &Node, allowed: &[&str]) -> Result<String, ScriptError> {
    if allowed.contains(&node.text.as_str()) {
        return Ok(node.text.clone());
    }
    Err(ScriptError::invalid_value(
        &node.name,
        &node.text,
        format!("expected one of {}", allowed.join(", ")),
        node.span.clone(),
    ))
}
