//! Unified error types for deckwright.
use crate::deck::model::PageNumber;
use crate::deck::palette::Role;
use thiserror::Error;

/// Main error type for deckwright operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A renderer asked for a palette role the active theme does not define
    #[error("Style role '{0}' is not defined in the palette")]
    UndefinedRole(Role),

    /// Malformed geometry or table shape
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Colour value that is not a 6-digit hex triplet
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Deck configuration could not be read or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization of the document package failed
    #[cfg(feature = "pptx")]
    #[error("Package error: {0}")]
    Package(crate::ooxml::error::OoxmlError),

    /// A page builder failed; carries the position it was building
    #[error("Page {number} ({name}) failed: {source}")]
    Page {
        number: PageNumber,
        name: String,
        source: Box<Error>,
    },
}

/// The two failure classes of the assembly pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Undefined style role, malformed rect or bad configuration.
    /// Raised at build time, before anything is written.
    Configuration,
    /// The document could not be persisted.
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            #[cfg(feature = "pptx")]
            Error::Package(err) if err.is_io() => ErrorKind::Io,
            Error::Page { source, .. } => source.kind(),
            _ => ErrorKind::Configuration,
        }
    }

    /// Wrap a builder failure with the page it happened on.
    pub(crate) fn in_page(self, number: PageNumber, name: &str) -> Self {
        Error::Page {
            number,
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn layout(msg: impl Into<String>) -> Self {
        Error::InvalidLayout(msg.into())
    }
}

/// Result type for deckwright operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let io = Error::Io(std::io::Error::other("disk full"));
        assert_eq!(io.kind(), ErrorKind::Io);

        assert_eq!(
            Error::UndefinedRole(Role::Highlight).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(Error::layout("zero width").kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_page_error_keeps_source_kind() {
        let number = PageNumber::new(3, 12);
        let err = Error::UndefinedRole(Role::Success).in_page(number, "team");
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let msg = err.to_string();
        assert!(msg.contains("3/12"));
        assert!(msg.contains("team"));
        assert!(msg.contains("success"));
    }
}
