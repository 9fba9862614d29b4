//! In-memory sink that keeps every loaded definition

use std::fmt::Write;

use crate::loader::ResourceSink;
use crate::parser::{
    ContainerDefinition, FontDefinition, LightDefinition, MaterialDefinition, PlaylistDefinition,
};

/// Collects definitions in delivery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub materials: Vec<MaterialDefinition>,
    pub playlists: Vec<PlaylistDefinition>,
    pub fonts: Vec<FontDefinition>,
    pub lights: Vec<LightDefinition>,
    pub views: Vec<ContainerDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a container by name
    pub fn find_view(&self, name: &str) -> Option<&ContainerDefinition> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Render every view as an indented tree of resolved rectangles
    pub fn render_views(&self) -> String {
        let mut out = String::new();
        for view in &self.views {
            let b = view.bounds;
            let _ = writeln!(
                out,
                "container [{}] x={} y={} w={} h={} z={}",
                display_name(&view.name),
                b.left,
                b.top,
                b.width,
                b.height,
                view.z
            );
            for widget in &view.widgets {
                let b = widget.bounds;
                let _ = writeln!(
                    out,
                    "  {} [{}] x={} y={} w={} h={}",
                    widget.kind.tag(),
                    display_name(&widget.name),
                    b.left,
                    b.top,
                    b.width,
                    b.height
                );
            }
        }
        out
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<anon>"
    } else {
        name
    }
}

impl ResourceSink for Catalog {
    fn material(&mut self, def: MaterialDefinition) {
        self.materials.push(def);
    }

    fn playlist(&mut self, def: PlaylistDefinition) {
        self.playlists.push(def);
    }

    fn font(&mut self, def: FontDefinition) {
        self.fonts.push(def);
    }

    fn light(&mut self, def: LightDefinition) {
        self.lights.push(def);
    }

    fn view(&mut self, def: ContainerDefinition) {
        self.views.push(def);
    }
}
