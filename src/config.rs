//! Loader configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [screen]
//! width = 1280
//! height = 720
//!
//! [layout]
//! duplicate_names = "reject"
//!
//! [extensions]
//! view = "view"
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{DuplicatePolicy, LayoutConfig, ScreenExtent};
use crate::loader::ResourceKind;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Screen extent must be positive, got {width}x{height}")]
    InvalidScreen { width: i32, height: i32 },
}

/// File extension, without the dot, for each script kind
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Extensions {
    pub material: String,
    pub playlist: String,
    pub font: String,
    pub light: String,
    pub view: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            material: "mat".to_string(),
            playlist: "pll".to_string(),
            font: "fnt".to_string(),
            light: "lgt".to_string(),
            view: "vew".to_string(),
        }
    }
}

impl Extensions {
    pub fn for_kind(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Material => &self.material,
            ResourceKind::Playlist => &self.playlist,
            ResourceKind::Font => &self.font,
            ResourceKind::Light => &self.light,
            ResourceKind::View => &self.view,
        }
    }
}

/// Configuration for a resource loading pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderConfig {
    /// Layout resolution settings
    pub layout: LayoutConfig,
    /// Script extensions per kind
    pub extensions: Extensions,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
struct TomlConfig {
    screen: Option<TomlScreen>,
    layout: Option<TomlLayout>,
    extensions: Option<Extensions>,
}

#[derive(Deserialize)]
struct TomlScreen {
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct TomlLayout {
    duplicate_names: Option<DuplicatePolicy>,
}

impl LoaderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(screen) = parsed.screen {
            config = config.with_screen(ScreenExtent::new(screen.width, screen.height))?;
        }
        if let Some(policy) = parsed.layout.and_then(|l| l.duplicate_names) {
            config.layout.duplicate_names = policy;
        }
        if let Some(extensions) = parsed.extensions {
            config.extensions = extensions;
        }
        Ok(config)
    }

    /// Set the screen extent used for layout
    pub fn with_screen(mut self, screen: ScreenExtent) -> Result<Self, ConfigError> {
        if screen.width <= 0 || screen.height <= 0 {
            return Err(ConfigError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        self.layout.screen = screen;
        Ok(self)
    }

    /// Set the duplicate name policy
    pub fn with_duplicate_names(mut self, policy: DuplicatePolicy) -> Self {
        self.layout.duplicate_names = policy;
        self
    }

    /// Set the script extensions
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.extensions.for_kind(ResourceKind::View), "vew");
        assert_eq!(config.extensions.for_kind(ResourceKind::Material), "mat");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[screen]
width = 1280
height = 720

[layout]
duplicate_names = "reject"

[extensions]
view = "view"
"#;
        let config = LoaderConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.layout.screen, ScreenExtent::new(1280, 720));
        assert_eq!(config.layout.duplicate_names, DuplicatePolicy::Reject);
        assert_eq!(config.extensions.view, "view");
        assert_eq!(config.extensions.font, "fnt");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = LoaderConfig::from_str("").expect("Should parse");
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_invalid_screen() {
        let result = LoaderConfig::from_str("[screen]\nwidth = 0\nheight = 600\n");
        assert!(matches!(result, Err(ConfigError::InvalidScreen { .. })));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = LoaderConfig::from_str("[layout]\nduplicate_names = \"merge\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoaderConfig::new()
            .with_screen(ScreenExtent::new(800, 600))
            .unwrap()
            .with_duplicate_names(DuplicatePolicy::Reject);
        assert_eq!(config.layout.screen, ScreenExtent::new(800, 600));
        assert_eq!(config.layout.duplicate_names, DuplicatePolicy::Reject);
    }
}
