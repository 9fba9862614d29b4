//! View scripts: containers and their widgets
//!
//! ```xml
//! <view>
//!   <container>
//!     <name>menu</name>
//!     <x>center</x><y>bottom</y>
//!     <width>400</width><height>full-200</height>
//!     <z>1</z>
//!     <material>menu-bg</material>
//!     <children>
//!       <button>
//!         <name>play</name>
//!         <x>right#menu</x><y>100</y><width>120</width><height>40</height>
//!         <material>btn</material><materialH>btn-h</materialH><font>title</font>
//!       </button>
//!     </children>
//!   </container>
//! </view>
//! ```
//!
//! Geometry children are fed to the layout resolver in document order. A
//! container is registered before its children are read, and each widget
//! as soon as its own declaration is complete.

use tracing::debug;

use super::xml::parse_document;
use super::{parse_number, Node};
use crate::error::{ScriptError, Span};
use crate::layout::{Bounds, Element, LayoutError, LayoutSession};

const GEOMETRY: &[&str] = &["name", "x", "y", "width", "height"];

/// What a widget is, with the resources it draws with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    Image {
        material: String,
    },
    TextLine {
        font: String,
    },
    TextArea {
        material: String,
        font: String,
    },
    Button {
        material: String,
        highlight: String,
        font: String,
    },
    InputBox {
        material: String,
        highlight: String,
        font: String,
    },
}

impl WidgetKind {
    /// Element name used for this widget in view scripts
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetKind::Image { .. } => "image",
            WidgetKind::TextLine { .. } => "textline",
            WidgetKind::TextArea { .. } => "textarea",
            WidgetKind::Button { .. } => "button",
            WidgetKind::InputBox { .. } => "input",
        }
    }
}

/// A positioned widget inside a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefinition {
    pub name: String,
    pub bounds: Bounds,
    pub kind: WidgetKind,
}

/// A top-level container with its widgets in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerDefinition {
    pub name: String,
    pub bounds: Bounds,
    pub material: String,
    pub z: i32,
    pub widgets: Vec<WidgetDefinition>,
}

impl ContainerDefinition {
    /// Widgets whose script tag is `tag`
    pub fn widgets_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a WidgetDefinition> {
        self.widgets.iter().filter(move |w| w.kind.tag() == tag)
    }

    /// Look up a widget by name
    pub fn widget(&self, name: &str) -> Option<&WidgetDefinition> {
        self.widgets.iter().find(|w| w.name == name)
    }
}

/// Resource names shared by the widget kinds
#[derive(Default)]
struct Skin {
    material: String,
    highlight: String,
    font: String,
}

/// Parse every `<container>` of a view script
///
/// Names are registered in `session`, so containers in later files can be
/// positioned against widgets declared here. A script that fails leaves
/// `session` untouched.
pub fn parse_views(
    source: &str,
    session: &mut LayoutSession,
) -> Result<Vec<ContainerDefinition>, ScriptError> {
    let doc = parse_document(source)?;
    let mut staged = session.clone();
    let views = doc
        .descendants("container")
        .into_iter()
        .map(|node| parse_container(node, &mut staged))
        .collect::<Result<Vec<_>, _>>()?;
    *session = staged;
    Ok(views)
}

fn parse_container(
    node: &Node,
    session: &mut LayoutSession,
) -> Result<ContainerDefinition, ScriptError> {
    let (name, bounds) = resolve_geometry(node, session)?;
    let mut def = ContainerDefinition {
        name,
        bounds,
        ..ContainerDefinition::default()
    };

    for item in &node.children {
        match item.name.as_str() {
            "z" => def.z = parse_number(item, "an integer")?,
            "material" => def.material = item.text.clone(),
            "children" => {
                for child in &item.children {
                    if let Some(widget) = parse_widget(child, session)? {
                        def.widgets.push(widget);
                    }
                }
            }
            _ => {}
        }
    }

    debug!(container = %def.name, widgets = def.widgets.len(), "parsed container");
    Ok(def)
}

/// Parse one entry of `<children>`; unknown tags are skipped
fn parse_widget(
    node: &Node,
    session: &mut LayoutSession,
) -> Result<Option<WidgetDefinition>, ScriptError> {
    let strict = match node.name.as_str() {
        "button" => true,
        "image" | "textline" | "textarea" | "input" => false,
        _ => return Ok(None),
    };

    let skin = read_skin(node, strict)?;
    let kind = match node.name.as_str() {
        "image" => WidgetKind::Image {
            material: skin.material,
        },
        "textline" => WidgetKind::TextLine { font: skin.font },
        "textarea" => WidgetKind::TextArea {
            material: skin.material,
            font: skin.font,
        },
        "button" => WidgetKind::Button {
            material: skin.material,
            highlight: skin.highlight,
            font: skin.font,
        },
        _ => WidgetKind::InputBox {
            material: skin.material,
            highlight: skin.highlight,
            font: skin.font,
        },
    };

    let (name, bounds) = resolve_geometry(node, session)?;
    Ok(Some(WidgetDefinition { name, bounds, kind }))
}

/// Collect material, highlight and font; `strict` rejects any other child
fn read_skin(node: &Node, strict: bool) -> Result<Skin, ScriptError> {
    let mut skin = Skin::default();
    for item in &node.children {
        match item.name.as_str() {
            "material" => skin.material = item.text.clone(),
            "materialH" => skin.highlight = item.text.clone(),
            "font" => skin.font = item.text.clone(),
            other if strict && !GEOMETRY.contains(&other) => {
                return Err(ScriptError::unexpected(other, &node.name, item.span.clone()));
            }
            _ => {}
        }
    }
    Ok(skin)
}

/// Feed the geometry children of `node` to a fresh element, then register it
fn resolve_geometry(
    node: &Node,
    session: &mut LayoutSession,
) -> Result<(String, Bounds), ScriptError> {
    let mut element = Element::new();

    for item in &node.children {
        let value = item.text.as_str();
        let resolved = match item.name.as_str() {
            "name" => {
                element.set_name(value);
                Ok(())
            }
            "x" => element.resolve_left(value, session),
            "y" => element.resolve_top(value, session),
            "width" => element.resolve_width(value, session),
            "height" => element.resolve_height(value, session),
            _ => Ok(()),
        };
        resolved.map_err(|error| layout_error(node, &element, item.span.clone(), error))?;
    }

    let bounds = element
        .finish()
        .map_err(|error| layout_error(node, &element, node.span.clone(), error))?;

    if !element.name().is_empty() {
        session
            .register(element.name(), &element)
            .map_err(|error| layout_error(node, &element, node.span.clone(), error))?;
    }

    Ok((element.name().to_string(), bounds))
}

fn layout_error(node: &Node, element: &Element, span: Span, error: LayoutError) -> ScriptError {
    let label = if element.name().is_empty() {
        node.name.clone()
    } else {
        format!("{} {}", node.name, element.name())
    };
    ScriptError::layout(label, span, error)
}
