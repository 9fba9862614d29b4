//! Position and size resolution for a single element
//!
//! Geometry arrives as raw strings in declaration order, which is not
//! guaranteed to put `width` before `x`. Positions that need the element's
//! own size (`right`, `center`, `bottom`) are parked as [`Placement::Pending`]
//! and recomputed once the size is set.

use tracing::debug;

use super::error::{Field, LayoutError};
use super::session::LayoutSession;
use super::types::Bounds;

const FULL: &str = "full";
const LEFT: &str = "left";
const RIGHT: &str = "right";
const CENTER: &str = "center";
const TOP: &str = "top";
const BOTTOM: &str = "bottom";

/// Resolution state of one position axis
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placement {
    /// Nothing left to compute for this axis
    #[default]
    Resolved,
    /// Raw spec waiting for the matching dimension
    Pending(String),
}

impl Placement {
    pub fn is_pending(&self) -> bool {
        matches!(self, Placement::Pending(_))
    }

    /// The raw spec that will be replayed, if any
    pub fn pending_spec(&self) -> Option<&str> {
        match self {
            Placement::Pending(spec) => Some(spec),
            Placement::Resolved => None,
        }
    }
}

/// A named rectangle whose geometry is being resolved
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    bounds: Bounds,
    left_placement: Placement,
    top_placement: Placement,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn left(&self) -> i32 {
        self.bounds.left
    }

    pub fn top(&self) -> i32 {
        self.bounds.top
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn left_placement(&self) -> &Placement {
        &self.left_placement
    }

    pub fn top_placement(&self) -> &Placement {
        &self.top_placement
    }

    /// Set the width from an integer, `full` or `full-N`
    ///
    /// Replays a pending left position once the width is known.
    pub fn resolve_width(&mut self, spec: &str, session: &LayoutSession) -> Result<(), LayoutError> {
        self.bounds.width = parse_dimension(spec, session.screen().width, Field::Width)?;

        if let Placement::Pending(raw) = std::mem::take(&mut self.left_placement) {
            debug!(element = %self.name, spec = %raw, "replaying deferred left position");
            self.resolve_left(&raw, session)?;
        }
        Ok(())
    }

    /// Set the height from an integer, `full` or `full-N`
    ///
    /// Replays a pending top position once the height is known.
    pub fn resolve_height(&mut self, spec: &str, session: &LayoutSession) -> Result<(), LayoutError> {
        self.bounds.height = parse_dimension(spec, session.screen().height, Field::Height)?;

        if let Placement::Pending(raw) = std::mem::take(&mut self.top_placement) {
            debug!(element = %self.name, spec = %raw, "replaying deferred top position");
            self.resolve_top(&raw, session)?;
        }
        Ok(())
    }

    /// Set the left position
    ///
    /// Accepted forms:
    /// - `left`: 0
    /// - `left#other`: right edge touching the left edge of `other`
    /// - `right`: flush with the right screen edge (needs width)
    /// - `right#other`: left edge touching the right edge of `other`
    /// - `center`: centered horizontally on the screen (needs width)
    /// - an integer
    ///
    /// `center#other` has no effect.
    pub fn resolve_left(&mut self, spec: &str, session: &LayoutSession) -> Result<(), LayoutError> {
        let (keyword, reference) = split_reference(spec);

        match keyword {
            LEFT => {
                self.bounds.left = match reference {
                    Some(name) => {
                        let other = session.registry().resolve_reference(name, Field::Left, spec)?;
                        other.left.saturating_sub(other.width)
                    }
                    None => 0,
                };
            }
            RIGHT => match reference {
                // Does not depend on this element's own width.
                Some(name) => {
                    let other = session.registry().resolve_reference(name, Field::Left, spec)?;
                    self.bounds.left = other.right();
                }
                None if self.bounds.width == 0 => self.defer_left(spec),
                None => {
                    self.bounds.left = session.screen().width.saturating_sub(self.bounds.width);
                }
            },
            CENTER => {
                if self.bounds.width == 0 {
                    self.defer_left(spec);
                } else if reference.is_none() {
                    self.bounds.left = centered(session.screen().width, self.bounds.width);
                }
            }
            literal => {
                self.bounds.left = literal
                    .parse()
                    .map_err(|_| LayoutError::invalid_position(Field::Left, spec))?;
            }
        }
        Ok(())
    }

    /// Set the top position from `top`, `bottom` (needs height) or an integer
    pub fn resolve_top(&mut self, spec: &str, session: &LayoutSession) -> Result<(), LayoutError> {
        match spec {
            TOP => self.bounds.top = 0,
            BOTTOM if self.bounds.height == 0 => self.defer_top(spec),
            BOTTOM => {
                self.bounds.top = session.screen().height.saturating_sub(self.bounds.height);
            }
            literal => {
                self.bounds.top = literal
                    .parse()
                    .map_err(|_| LayoutError::invalid_position(Field::Top, spec))?;
            }
        }
        Ok(())
    }

    /// Check that both dimensions were declared and return the final bounds
    pub fn finish(&self) -> Result<Bounds, LayoutError> {
        if self.bounds.width == 0 {
            return Err(LayoutError::invalid_dimension(Field::Width, "", "width was never declared"));
        }
        if self.bounds.height == 0 {
            return Err(LayoutError::invalid_dimension(Field::Height, "", "height was never declared"));
        }
        Ok(self.bounds)
    }

    fn defer_left(&mut self, spec: &str) {
        debug!(element = %self.name, spec, "deferring left position until width is known");
        self.left_placement = Placement::Pending(spec.to_string());
    }

    fn defer_top(&mut self, spec: &str) {
        debug!(element = %self.name, spec, "deferring top position until height is known");
        self.top_placement = Placement::Pending(spec.to_string());
    }
}

/// Split `keyword#name`; an empty name counts as no reference
fn split_reference(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('#') {
        Some((keyword, name)) if !name.is_empty() => (keyword, Some(name)),
        Some((keyword, _)) => (keyword, None),
        None => (spec, None),
    }
}

fn centered(extent: i32, size: i32) -> i32 {
    extent.div_euclid(2) - size.div_euclid(2)
}

fn parse_dimension(spec: &str, extent: i32, field: Field) -> Result<i32, LayoutError> {
    let value = match spec.strip_prefix(FULL) {
        Some("") => extent,
        Some(rest) => {
            let offset = rest
                .strip_prefix('-')
                .ok_or_else(|| LayoutError::invalid_dimension(field, spec, "expected 'full' or 'full-N'"))?;
            // Unsigned: `full--5` and `full-+5` are errors.
            if !offset.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(LayoutError::invalid_dimension(field, spec, "offset must be a non-negative integer"));
            }
            let offset: i32 = offset
                .parse()
                .map_err(|_| LayoutError::invalid_dimension(field, spec, "offset is not an integer"))?;
            extent
                .checked_sub(offset)
                .ok_or_else(|| LayoutError::invalid_dimension(field, spec, "value out of range"))?
        }
        None => spec
            .parse()
            .map_err(|_| LayoutError::invalid_dimension(field, spec, "not an integer"))?,
    };

    if value == 0 {
        return Err(LayoutError::invalid_dimension(field, spec, "must not be zero"));
    }
    Ok(value)
}
