//! # deckgen-pptx
//!
//! PowerPoint (PPTX) generation from slide records.
//!
//! This crate turns an ordered list of [`SlideRecord`]s into a complete
//! PPTX package. Each record is rendered by one of three paths selected by
//! its [`SlideStyle`]: a centered title slide, a bulleted content slide, or
//! a title-only slide carrying a table.
//!
//! ## Example
//!
//! ```rust,ignore
//! use deckgen_pptx::{DeckMeta, DeckWriter, SlideRecord};
//!
//! let mut writer = DeckWriter::new(DeckMeta::default());
//! writer.add_slide(SlideRecord::title_slide("Welcome", vec!["2025".into()]));
//!
//! let pptx_bytes = writer.generate()?;
//! std::fs::write("output.pptx", pptx_bytes)?;
//! ```

pub mod error;
pub mod inspect;
pub mod meta;
pub mod slide;
pub mod writer;

// Re-exports
pub use error::{DeckError, Result};
pub use inspect::{DeckSummary, SlideSummary, TableSummary};
pub use meta::DeckMeta;
pub use slide::{SlideRecord, SlideStyle, TableBlock};
pub use writer::DeckWriter;

/// PPTX-related constants
pub mod constants {
    /// Default slide width in EMU (914400 EMU = 1 inch, standard 10" width)
    pub const DEFAULT_SLIDE_WIDTH_EMU: i64 = 9_144_000;

    /// Default slide height in EMU (standard 7.5" height for 4:3)
    pub const DEFAULT_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// Table anchor X offset (1 inch)
    pub const TABLE_OFFSET_X_EMU: i64 = EMU_PER_INCH;

    /// Table anchor Y offset (2 inches)
    pub const TABLE_OFFSET_Y_EMU: i64 = 2 * EMU_PER_INCH;

    /// Table extent width (8 inches)
    pub const TABLE_WIDTH_EMU: i64 = 8 * EMU_PER_INCH;

    /// Table extent height (4 inches)
    pub const TABLE_HEIGHT_EMU: i64 = 4 * EMU_PER_INCH;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// DrawingML table graphic data URI
    pub const URI_TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Presentation properties relationship type
    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    /// View properties relationship type
    pub const REL_TYPE_VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";

    /// Table styles relationship type
    pub const REL_TYPE_TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_constants() {
        // 1 inch = 72 points
        assert_eq!(constants::EMU_PER_INCH, 72 * constants::EMU_PER_POINT);
        assert_eq!(constants::EMU_PER_INCH, 914_400);
    }

    #[test]
    fn test_default_slide_dimensions() {
        // Standard 4:3 slide is 10" x 7.5"
        let expected_width = 10 * constants::EMU_PER_INCH;
        let expected_height = (7.5 * constants::EMU_PER_INCH as f64) as i64;

        assert_eq!(constants::DEFAULT_SLIDE_WIDTH_EMU, expected_width);
        assert_eq!(constants::DEFAULT_SLIDE_HEIGHT_EMU, expected_height);
    }

    #[test]
    fn test_table_geometry() {
        // The table occupies an 8x4 inch box anchored one inch in, two down
        assert_eq!(constants::TABLE_OFFSET_X_EMU, 914_400);
        assert_eq!(constants::TABLE_OFFSET_Y_EMU, 1_828_800);
        assert_eq!(
            constants::TABLE_WIDTH_EMU + constants::TABLE_OFFSET_X_EMU,
            9 * constants::EMU_PER_INCH
        );
    }
}
