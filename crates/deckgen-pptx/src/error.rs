//! Error types for deck generation.

use thiserror::Error;

/// Result type for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while building or inspecting a deck
#[derive(Error, Debug)]
pub enum DeckError {
    /// A slide record with an empty title
    #[error("Slide {index} has an empty title")]
    MissingTitle { index: usize },

    /// A table-style record without a table
    #[error("Slide {index} is table-style but carries no table")]
    MissingTable { index: usize },

    /// A table with no columns
    #[error("Slide {index}: table has no header columns")]
    EmptyTable { index: usize },

    /// A table row whose length does not match the header row
    #[error("Slide {index}, table row {row}: expected {expected} cells, found {found}")]
    TableShape {
        index: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Deck configuration error
    #[error("Invalid deck configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A generated package part that cannot be read back
    #[error("Malformed package part '{part}': {reason}")]
    MalformedPart { part: String, reason: String },

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error (for deck configuration)
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DeckError {
    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a malformed part error
    pub fn malformed_part(part: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPart {
            part: part.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTitle { .. } => "DECK001",
            Self::MissingTable { .. } => "DECK002",
            Self::EmptyTable { .. } => "DECK003",
            Self::TableShape { .. } => "DECK004",
            Self::InvalidConfig { .. } => "DECK005",
            Self::MalformedPart { .. } => "DECK006",
            Self::Xml(_) => "DECK007",
            Self::Zip(_) => "DECK008",
            Self::Io(_) => "DECK009",
            Self::Toml(_) => "DECK010",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DeckError::MissingTitle { index: 3 };
        assert_eq!(err.code(), "DECK001");
        assert!(err.to_string().contains('3'));

        let err = DeckError::TableShape {
            index: 1,
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.code(), "DECK004");
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_error_display() {
        let err = DeckError::invalid_config("output name is empty");
        assert_eq!(err.code(), "DECK005");
        assert!(err.to_string().contains("output name is empty"));

        let err = DeckError::malformed_part("ppt/slides/slide1.xml", "truncated");
        assert!(err.to_string().contains("slide1.xml"));
        assert!(err.to_string().contains("truncated"));
    }
}
