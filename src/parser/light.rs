//! Light scripts

use super::xml::parse_document;
use super::{one_of, parse_number, required_text, Node};
use crate::error::ScriptError;

const LIGHT_TYPES: &[&str] = &["point"];

/// World-space position of a light
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A point light with its billboard materials
#[derive(Debug, Clone, PartialEq)]
pub struct LightDefinition {
    pub name: String,
    pub kind: String,
    pub position: Position,
    pub light_material: String,
    pub halo_material: String,
    pub burst_material: String,
}

impl Default for LightDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: "point".to_string(),
            position: Position::default(),
            light_material: String::new(),
            halo_material: String::new(),
            burst_material: String::new(),
        }
    }
}

impl LightDefinition {
    fn from_node(node: &Node) -> Result<Self, ScriptError> {
        let mut def = Self::default();
        for item in &node.children {
            match item.name.as_str() {
                "name" => def.name = required_text(item)?,
                "type" => def.kind = one_of(item, LIGHT_TYPES)?,
                "x" => def.position.x = parse_number(item, "a number")?,
                "y" => def.position.y = parse_number(item, "a number")?,
                "z" => def.position.z = parse_number(item, "a number")?,
                "lightMaterial" => def.light_material = required_text(item)?,
                "haloMaterial" => def.halo_material = required_text(item)?,
                "burstMaterial" => def.burst_material = required_text(item)?,
                _ => {}
            }
        }
        Ok(def)
    }
}

/// Parse every `<light>` element of a light script
pub fn parse_lights(source: &str) -> Result<Vec<LightDefinition>, ScriptError> {
    let doc = parse_document(source)?;
    doc.descendants("light")
        .into_iter()
        .map(LightDefinition::from_node)
        .collect()
}
