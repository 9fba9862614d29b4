//! Material scripts
//!
//! ```xml
//! <materials>
//!   <material>
//!     <name>menu-bg</name>
//!     <file>textures/menu.png</file>
//!     <transparency>alpha</transparency>
//!     <light>false</light>
//!     <sceneBlend>src_alpha&amp;one_minus_src_alpha</sceneBlend>
//!   </material>
//! </materials>
//! ```

use super::xml::parse_document;
use super::{one_of, Node};
use crate::error::ScriptError;

const TRANSPARENCY: &[&str] = &["alpha", "color", "none"];
const BLEND: &[&str] = &["add", "subtract", "none", "min", "max"];
const NONE: &str = "none";

/// A texture-backed material, passed through to the engine as declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDefinition {
    pub name: String,
    pub path: String,
    /// Texture of an optional second pass; empty when absent
    pub path2: String,
    /// Glow texture; empty when absent
    pub glow_file: String,
    pub transparency: String,
    pub affected_by_light: bool,
    pub blend: String,
    /// Source and destination scene blend factors
    pub scene_blend: (String, String),
}

impl Default for MaterialDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            path2: String::new(),
            glow_file: String::new(),
            transparency: NONE.to_string(),
            affected_by_light: true,
            blend: NONE.to_string(),
            scene_blend: (NONE.to_string(), NONE.to_string()),
        }
    }
}

impl MaterialDefinition {
    pub fn has_second_pass(&self) -> bool {
        !self.path2.is_empty()
    }

    pub fn has_glow(&self) -> bool {
        !self.glow_file.is_empty()
    }

    fn from_node(node: &Node) -> Result<Self, ScriptError> {
        let mut def = Self::default();
        for item in &node.children {
            match item.name.as_str() {
                "name" => def.name = item.text.clone(),
                "file" => def.path = item.text.clone(),
                "file2" => def.path2 = item.text.clone(),
                "glowFile" => def.glow_file = item.text.clone(),
                "transparency" => def.transparency = one_of(item, TRANSPARENCY)?,
                "light" => def.affected_by_light = parse_flag(item)?,
                "blend" => def.blend = one_of(item, BLEND)?,
                "sceneBlend" => def.scene_blend = parse_scene_blend(item)?,
                _ => {}
            }
        }
        Ok(def)
    }
}

fn parse_flag(node: &Node) -> Result<bool, ScriptError> {
    match node.text.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ScriptError::invalid_value(
            &node.name,
            other,
            "expected 'true' or 'false'",
            node.span.clone(),
        )),
    }
}

fn parse_scene_blend(node: &Node) -> Result<(String, String), ScriptError> {
    match node.text.split_once('&') {
        Some((source, dest)) if !source.is_empty() && !dest.is_empty() => {
            Ok((source.to_lowercase(), dest.to_lowercase()))
        }
        _ => Err(ScriptError::invalid_value(
            &node.name,
            &node.text,
            "expected 'source&destination'",
            node.span.clone(),
        )),
    }
}

/// Parse every `<material>` element of a material script
pub fn parse_materials(source: &str) -> Result<Vec<MaterialDefinition>, ScriptError> {
    let doc = parse_document(source)?;
    doc.descendants("material")
        .into_iter()
        .map(MaterialDefinition::from_node)
        .collect()
}
