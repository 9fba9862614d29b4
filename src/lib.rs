//! Presentation Loader - resource scripts for a game engine's presentation layer
//!
//! This library parses the XML scripts describing materials, fonts, music
//! playlists, lights and GUI views, resolves widget geometry against the
//! screen, and hands the resulting definitions to the engine.
//!
//! # Example
//!
//! ```rust
//! use presentation_loader::layout::{Element, LayoutSession, ScreenExtent};
//!
//! let mut session = LayoutSession::new(ScreenExtent::new(800, 600));
//! let mut panel = Element::new();
//! panel.resolve_left("right", &session).unwrap();
//! panel.resolve_width("200", &session).unwrap();
//! assert_eq!(panel.left(), 600);
//!
//! session.register("panel", &panel).unwrap();
//! let mut label = Element::new();
//! label.resolve_left("left#panel", &session).unwrap();
//! assert_eq!(label.left(), 400);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod parser;

pub use catalog::Catalog;
pub use config::{ConfigError, Extensions, LoaderConfig};
pub use error::ScriptError;
pub use layout::{Bounds, LayoutConfig, LayoutError, LayoutSession, ScreenExtent};
pub use loader::{LoadError, LoadReport, ResourceKind, ResourceLoader, ResourceSink};

use std::path::Path;

/// Load a resource directory into a fresh [`Catalog`]
///
/// Scripts that fail are listed in the returned report; only a missing or
/// unreadable directory is an error.
pub fn load_catalog(dir: &Path, config: LoaderConfig) -> Result<(Catalog, LoadReport), LoadError> {
    let mut catalog = Catalog::new();
    let report = ResourceLoader::new(config).load(dir, &mut catalog)?;
    Ok((catalog, report))
}
