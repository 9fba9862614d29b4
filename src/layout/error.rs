//! Error types for the layout resolver

use std::fmt;

use thiserror::Error;

/// Geometry field an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Left,
    Top,
    Width,
    Height,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Left => "left",
            Field::Top => "top",
            Field::Width => "width",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving an element's geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Width or height that is not a number, or resolves to zero
    #[error("invalid {field} '{value}': {reason}")]
    InvalidDimension {
        field: Field,
        value: String,
        reason: String,
    },

    /// Left or top that is neither a keyword nor a number
    #[error("invalid {field} position '{value}'")]
    InvalidPosition { field: Field, value: String },

    /// Relative position naming an element that was never registered
    #[error("{field} position '{value}' references unknown element '{name}'")]
    UnknownReference {
        field: Field,
        value: String,
        name: String,
    },

    /// Second registration of a name under the reject policy
    #[error("element name '{name}' is already registered")]
    DuplicateName { name: String },
}

impl LayoutError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(
        field: Field,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimension {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid position error
    pub fn invalid_position(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidPosition {
            field,
            value: value.into(),
        }
    }

    /// Create an unknown reference error
    pub fn unknown_reference(
        field: Field,
        value: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::UnknownReference {
            field,
            value: value.into(),
            name: name.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Get the field the error refers to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidDimension { field, .. }
            | Self::InvalidPosition { field, .. }
            | Self::UnknownReference { field, .. } => Some(*field),
            Self::DuplicateName { .. } => None,
        }
    }

    /// Get the raw geometry string that failed, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidDimension { value, .. }
            | Self::InvalidPosition { value, .. }
            | Self::UnknownReference { value, .. } => Some(value),
            Self::DuplicateName { .. } => None,
        }
    }
}
