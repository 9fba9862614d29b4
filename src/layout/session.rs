//! Per-pass layout state: screen extent plus name registry

use super::config::LayoutConfig;
use super::element::Element;
use super::error::LayoutError;
use super::registry::Registry;
use super::types::ScreenExtent;

/// State shared by every element resolved during one loading pass
///
/// A session is owned by whoever drives the pass and handed to each
/// element's resolve calls, so separate passes never see each other's
/// names.
#[derive(Debug, Clone, Default)]
pub struct LayoutSession {
    screen: ScreenExtent,
    registry: Registry,
}

impl LayoutSession {
    pub fn new(screen: ScreenExtent) -> Self {
        Self {
            screen,
            registry: Registry::new(),
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            screen: config.screen,
            registry: Registry::with_policy(config.duplicate_names),
        }
    }

    pub fn screen(&self) -> ScreenExtent {
        self.screen
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Make `element` visible to later `left#name` / `right#name` positions
    pub fn register(&mut self, name: &str, element: &Element) -> Result<(), LayoutError> {
        self.registry.register(name, element.bounds())?;
        Ok(())
    }

    /// Drop all registered names, e.g. before starting a new pass
    pub fn reset(&mut self) {
        self.registry.clear();
    }
}
