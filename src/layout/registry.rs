//! Name registry for relative-position lookups

use std::collections::HashMap;

use tracing::{debug, warn};

use super::config::DuplicatePolicy;
use super::error::{Field, LayoutError};
use super::types::Bounds;

/// Geometry of every named element seen so far in one loading session
///
/// Only consulted by `left#other` and `right#other` positions. Entries are
/// snapshots taken when an element's declaration completes, so referrers
/// must be declared after the element they reference.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Bounds>,
    policy: DuplicatePolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Store `bounds` under `name`
    ///
    /// Returns the entry that was replaced, if any. Under
    /// [`DuplicatePolicy::Reject`] a second registration fails instead and
    /// the earlier entry is kept.
    pub fn register(&mut self, name: &str, bounds: Bounds) -> Result<Option<Bounds>, LayoutError> {
        if self.policy == DuplicatePolicy::Reject && self.entries.contains_key(name) {
            return Err(LayoutError::duplicate(name));
        }

        let previous = self.entries.insert(name.to_string(), bounds);
        match previous {
            Some(old) => warn!(name, ?old, new = ?bounds, "element name registered twice, keeping the newest"),
            None => debug!(name, ?bounds, "registered element"),
        }
        Ok(previous)
    }

    /// Look up a registered element
    pub fn get(&self, name: &str) -> Option<&Bounds> {
        self.entries.get(name)
    }

    /// Look up a reference made from the `field` position spec `value`
    pub(crate) fn resolve_reference(
        &self,
        name: &str,
        field: Field,
        value: &str,
    ) -> Result<Bounds, LayoutError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| LayoutError::unknown_reference(field, value, name))
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry, keeping the policy
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
