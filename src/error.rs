//! Error types for resource script parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::layout::LayoutError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while parsing a single resource script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The file is not well-formed XML
    #[error("malformed XML at {span:?}: {message}")]
    Xml { span: Span, message: String },

    /// A widget or container geometry could not be resolved
    #[error("layout error in <{element}>: {error}")]
    Layout {
        element: String,
        span: Span,
        #[source]
        error: LayoutError,
    },

    /// A scalar field holds a value outside its accepted set
    #[error("invalid {field} value '{value}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
        span: Span,
    },

    /// A child element that is not allowed in its parent
    #[error("unexpected <{name}> in <{parent}>")]
    UnexpectedNode {
        name: String,
        parent: String,
        span: Span,
    },
}

impl ScriptError {
    /// Create a malformed XML error
    pub fn xml(span: Span, message: impl Into<String>) -> Self {
        Self::Xml {
            span,
            message: message.into(),
        }
    }

    /// Wrap a layout error raised inside `element`
    pub fn layout(element: impl Into<String>, span: Span, error: LayoutError) -> Self {
        Self::Layout {
            element: element.into(),
            span,
            error,
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            span,
        }
    }

    /// Create an unexpected node error
    pub fn unexpected(name: impl Into<String>, parent: impl Into<String>, span: Span) -> Self {
        Self::UnexpectedNode {
            name: name.into(),
            parent: parent.into(),
            span,
        }
    }

    /// Get the source span of the offending text
    pub fn span(&self) -> &Span {
        match self {
            Self::Xml { span, .. }
            | Self::Layout { span, .. }
            | Self::InvalidValue { span, .. }
            | Self::UnexpectedNode { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let message = self.to_string();
        let label = match self {
            Self::Layout { error, .. } => error.to_string(),
            Self::InvalidValue { reason, .. } => reason.clone(),
            Self::UnexpectedNode { parent, .. } => format!("not allowed inside <{}>", parent),
            Self::Xml { message, .. } => message.clone(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Field, LayoutError};

    #[test]
    fn test_layout_error_display() {
        let err = ScriptError::layout(
            "button play",
            10..20,
            LayoutError::invalid_position(Field::Left, "abc"),
        );
        let text = err.to_string();
        assert!(text.contains("button play"));
        assert!(text.contains("abc"));
    }

    #[test]
    fn test_span_accessor() {
        let err = ScriptError::unexpected("color", "button", 4..9);
        assert_eq!(err.span(), &(4..9));
    }

    #[test]
    fn test_format_includes_filename_and_message() {
        let source = "<font><size>big</size></font>";
        let err = ScriptError::invalid_value("size", "big", "expected an integer", 6..22);
        let report = err.format(source, "menu.fnt");
        assert!(report.contains("menu.fnt"));
        assert!(report.contains("expected an integer"));
    }
}
