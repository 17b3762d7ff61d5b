//! Deck metadata configuration.
//!
//! `DeckMeta` configures the document properties baked into the generated
//! package. Every field has a default, so a deck can be generated with no
//! configuration at all; a TOML file can override any subset.

use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deck-level metadata and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckMeta {
    /// Presentation title (docProps/core.xml dc:title)
    #[serde(default = "default_title")]
    pub title: String,

    /// Author (dc:creator and cp:lastModifiedBy)
    #[serde(default = "default_author")]
    pub author: String,

    /// Application name (docProps/app.xml)
    #[serde(default = "default_application")]
    pub application: String,

    /// Locale code stamped on text runs (e.g., "en-US")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Output file name
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_title() -> String {
    "AI-Powered Migration Blueprint".to_string()
}

fn default_author() -> String {
    "deckgen".to_string()
}

fn default_application() -> String {
    "deckgen".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_output() -> String {
    "AI_Migration_Blueprint.pptx".to_string()
}

impl Default for DeckMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: default_author(),
            application: default_application(),
            locale: default_locale(),
            output: default_output(),
        }
    }
}

impl DeckMeta {
    /// Parse metadata from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let meta: DeckMeta = toml::from_str(content)?;
        meta.validate()?;
        Ok(meta)
    }

    /// Load metadata from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject configurations the writer cannot honor
    fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            return Err(DeckError::invalid_config("output file name is empty"));
        }
        if self.locale.trim().is_empty() {
            return Err(DeckError::invalid_config("locale is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let meta = DeckMeta::default();
        assert_eq!(meta.output, "AI_Migration_Blueprint.pptx");
        assert_eq!(meta.locale, "en-US");
        assert_eq!(meta.title, "AI-Powered Migration Blueprint");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let meta = DeckMeta::from_toml_str("author = \"Kanchana\"").unwrap();
        assert_eq!(meta.author, "Kanchana");
        assert_eq!(meta.output, "AI_Migration_Blueprint.pptx");
    }

    #[test]
    fn test_full_toml() {
        let meta = DeckMeta::from_toml_str(
            r#"
title = "Quarterly Review"
author = "PM Team"
application = "deckgen"
locale = "it-IT"
output = "review.pptx"
"#,
        )
        .unwrap();

        assert_eq!(meta.title, "Quarterly Review");
        assert_eq!(meta.locale, "it-IT");
        assert_eq!(meta.output, "review.pptx");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deckgen.toml");
        std::fs::write(&path, "output = \"deck.pptx\"\n").unwrap();

        let meta = DeckMeta::from_file(&path).unwrap();
        assert_eq!(meta.output, "deck.pptx");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = DeckMeta::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.code(), "DECK009");
    }

    #[test]
    fn test_rejects_empty_output() {
        let err = DeckMeta::from_toml_str("output = \"  \"").unwrap_err();
        assert_eq!(err.code(), "DECK005");
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = DeckMeta::from_toml_str("title = [not toml").unwrap_err();
        assert_eq!(err.code(), "DECK010");
    }
}
