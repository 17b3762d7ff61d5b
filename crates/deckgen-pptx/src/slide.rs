//! Slide record data structures.
//!
//! This module defines the intermediate representation consumed by the
//! writer: one record per output slide, tagged with the style that selects
//! its rendering path.

use serde::{Deserialize, Deserializer, Serialize};

/// Rendering style for a slide record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideStyle {
    /// Title slide (centered title, subtitle below)
    Title,

    /// Bulleted content slide
    #[default]
    Bullets,

    /// Title-only slide carrying a table
    Table,
}

impl SlideStyle {
    /// Parse a style tag; unrecognized tags degrade to bullet rendering
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => Self::Title,
            "table" => Self::Table,
            _ => Self::Bullets,
        }
    }
}

impl<'de> Deserialize<'de> for SlideStyle {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A single slide in the deck
#[derive(Debug, Clone, Default)]
pub struct SlideRecord {
    /// Slide title (displayed in the title placeholder)
    pub title: String,

    /// Subtitle text. Carried for completeness; title slides render the
    /// joined bullet list into the subtitle placeholder instead.
    pub subtitle: Option<String>,

    /// Bullet lines (subtitle lines for title slides)
    pub bullets: Vec<String>,

    /// Table content, for table-style slides
    pub table: Option<TableBlock>,

    /// Rendering style
    pub style: SlideStyle,
}

/// Table content: a header row plus data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBlock {
    /// Header cells
    pub headers: Vec<String>,

    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Create a table from header cells and data rows
    pub fn new<S: Into<String>>(
        headers: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<S>>,
    ) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of columns, taken from the header row
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rendered rows: data rows plus the header row
    pub fn rendered_row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Check that every data row matches the header width.
    ///
    /// Returns the 1-based index and length of the first offending row.
    pub fn first_ragged_row(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.headers.len())
            .map(|(i, row)| (i + 1, row.len()))
    }
}

impl SlideRecord {
    /// Create a title slide
    pub fn title_slide(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
            style: SlideStyle::Title,
            ..Default::default()
        }
    }

    /// Create a bulleted content slide
    pub fn bullets(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
            style: SlideStyle::Bullets,
            ..Default::default()
        }
    }

    /// Create a table slide
    pub fn table(title: impl Into<String>, table: TableBlock) -> Self {
        Self {
            title: title.into(),
            table: Some(table),
            style: SlideStyle::Table,
            ..Default::default()
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Check if this is a title slide
    pub fn is_title_slide(&self) -> bool {
        self.style == SlideStyle::Title
    }

    /// The subtitle text a title slide renders: bullet lines joined by
    /// newlines (one paragraph per line in the placeholder)
    pub fn joined_bullets(&self) -> String {
        self.bullets.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_title_slide() {
        let slide = SlideRecord::title_slide(
            "Welcome",
            vec!["Innovation Showcase".to_string(), "2025".to_string()],
        )
        .with_subtitle("An introduction");

        assert_eq!(slide.title, "Welcome");
        assert_eq!(slide.subtitle, Some("An introduction".to_string()));
        assert!(slide.is_title_slide());
        assert_eq!(slide.joined_bullets(), "Innovation Showcase\n2025");
    }

    #[test]
    fn test_create_bullet_slide() {
        let slide = SlideRecord::bullets("Overview", vec!["First point".to_string()]);

        assert_eq!(slide.style, SlideStyle::Bullets);
        assert!(!slide.is_title_slide());
        assert!(slide.table.is_none());
        assert_eq!(slide.bullets.len(), 1);
    }

    #[test]
    fn test_table_block_shape() {
        let table = TableBlock::new(
            ["Task", "Manual", "AI-Assisted"],
            [vec!["Scaffold", "2-3 days", "15 minutes"]],
        );

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rendered_row_count(), 2);
        assert!(table.first_ragged_row().is_none());
    }

    #[test]
    fn test_table_block_ragged_row() {
        let table = TableBlock::new(
            ["A", "B"],
            [vec!["1", "2"], vec!["only one"]],
        );

        assert_eq!(table.first_ragged_row(), Some((2, 1)));
    }

    #[test]
    fn test_default_style_is_bullets() {
        // Records without an explicit tag render as bullet slides
        assert_eq!(SlideStyle::default(), SlideStyle::Bullets);
        assert_eq!(SlideRecord::default().style, SlideStyle::Bullets);
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_bullets() {
        assert_eq!(SlideStyle::from_tag("title"), SlideStyle::Title);
        assert_eq!(SlideStyle::from_tag("table"), SlideStyle::Table);
        assert_eq!(SlideStyle::from_tag("bullets"), SlideStyle::Bullets);
        assert_eq!(SlideStyle::from_tag("sparkles"), SlideStyle::Bullets);
        assert_eq!(SlideStyle::from_tag(""), SlideStyle::Bullets);
    }

    #[test]
    fn test_style_deserialization_uses_fallback() {
        // Unknown tags degrade to bullet rendering when deserialized
        let probe: StyleProbe = toml::from_str("style = \"sparkles\"").unwrap();
        assert_eq!(probe.style, SlideStyle::Bullets);

        let probe: StyleProbe = toml::from_str("style = \"table\"").unwrap();
        assert_eq!(probe.style, SlideStyle::Table);
    }

    #[derive(serde::Deserialize)]
    struct StyleProbe {
        style: SlideStyle,
    }
}
