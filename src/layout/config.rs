//! Configuration for the layout resolver

use serde::Deserialize;

use super::types::ScreenExtent;

/// What to do when a name is registered a second time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the earlier entry; later lookups see the newest element
    #[default]
    Overwrite,
    /// Fail the registration with `LayoutError::DuplicateName`
    Reject,
}

/// Configuration options for layout resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Screen the keywords are resolved against
    pub screen: ScreenExtent,

    /// Handling of re-registered element names
    pub duplicate_names: DuplicatePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen: ScreenExtent::default(),
            duplicate_names: DuplicatePolicy::Overwrite,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the screen extent
    pub fn with_screen(mut self, width: i32, height: i32) -> Self {
        self.screen = ScreenExtent::new(width, height);
        self
    }

    /// Set the duplicate name policy
    pub fn with_duplicate_names(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }
}
