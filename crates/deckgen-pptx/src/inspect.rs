//! Read-back verification of generated decks.
//!
//! Reopens the bytes produced by [`crate::DeckWriter`] and recovers the
//! rendered text per slide, so callers (mostly the test suite) can check a
//! deck without opening PowerPoint. This reads only the slide parts this
//! crate emits; it is not a general PPTX reader.

use crate::error::{DeckError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Summary of a generated deck
#[derive(Debug, Clone, Default)]
pub struct DeckSummary {
    /// Slides in presentation order
    pub slides: Vec<SlideSummary>,
}

/// Rendered text recovered from one slide part
#[derive(Debug, Clone, Default)]
pub struct SlideSummary {
    /// Text of the title placeholder
    pub title: String,

    /// Paragraph lines of the subtitle or body placeholder
    pub body_lines: Vec<String>,

    /// Table contents, if the slide carries a table
    pub table: Option<TableSummary>,
}

/// Table contents recovered from a slide, header row first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// All rendered rows, including the header row
    pub rows: Vec<Vec<String>>,
}

impl DeckSummary {
    /// Number of slides in the deck
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide titles in order
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.title.as_str()).collect()
    }
}

impl SlideSummary {
    /// Subtitle/body text as the placeholder reads it: lines joined by
    /// newlines
    pub fn body_text(&self) -> String {
        self.body_lines.join("\n")
    }
}

impl TableSummary {
    /// Number of rendered rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The header row
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Data rows (everything below the header)
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// True when every row has the header's column count
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }
}

/// Summarize a generated deck from its bytes
pub fn summarize(bytes: &[u8]) -> Result<DeckSummary> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut slides = Vec::new();

    for n in 1.. {
        let name = format!("ppt/slides/slide{}.xml", n);
        let xml = match archive.by_name(&name) {
            Ok(mut part) => {
                let mut content = String::new();
                part.read_to_string(&mut content)?;
                content
            }
            Err(zip::result::ZipError::FileNotFound) => break,
            Err(e) => return Err(e.into()),
        };

        slides.push(parse_slide(&name, &xml)?);
    }

    Ok(DeckSummary { slides })
}

/// Placeholder region currently being read
enum Region {
    None,
    Title,
    Body,
    Table,
}

/// Recover rendered text from one slide part
fn parse_slide(part: &str, xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut summary = SlideSummary::default();

    let mut region = Region::None;
    let mut in_text = false;
    let mut in_cell = false;
    let mut para = String::new();
    let mut para_has_text = false;
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    loop {
        match reader
            .read_event()
            .map_err(|e| DeckError::malformed_part(part, e.to_string()))?
        {
            Event::Empty(ref e) if e.name().as_ref() == b"p:ph" => {
                let mut ph_type = None;
                for attr in e.attributes().flatten() {
                    if attr.key.as_ref() == b"type" {
                        ph_type = Some(String::from_utf8_lossy(&attr.value).to_string());
                    }
                }
                // Untyped placeholders are body content
                region = match ph_type.as_deref() {
                    Some("title") | Some("ctrTitle") => Region::Title,
                    _ => Region::Body,
                };
            }
            Event::Start(ref e) => match e.name().as_ref() {
                b"a:tbl" => {
                    region = Region::Table;
                    rows.clear();
                }
                b"a:tr" => row = Vec::new(),
                b"a:tc" => {
                    in_cell = true;
                    cell.clear();
                }
                b"a:p" => {
                    para.clear();
                    para_has_text = false;
                }
                b"a:t" => in_text = true,
                _ => {}
            },
            Event::Text(ref t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DeckError::malformed_part(part, e.to_string()))?;
                if in_cell {
                    cell.push_str(&text);
                } else {
                    para.push_str(&text);
                    para_has_text = true;
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if para_has_text {
                        match region {
                            Region::Title => {
                                if !summary.title.is_empty() {
                                    summary.title.push('\n');
                                }
                                summary.title.push_str(&para);
                            }
                            Region::Body => summary.body_lines.push(para.clone()),
                            _ => {}
                        }
                    }
                }
                b"a:tc" => {
                    row.push(std::mem::take(&mut cell));
                    in_cell = false;
                }
                b"a:tr" => rows.push(std::mem::take(&mut row)),
                b"a:tbl" => {
                    summary.table = Some(TableSummary {
                        rows: std::mem::take(&mut rows),
                    });
                    region = Region::None;
                }
                b"p:sp" => region = Region::None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::DeckMeta;
    use crate::slide::{SlideRecord, TableBlock};
    use crate::writer::DeckWriter;

    fn sample_deck() -> Vec<u8> {
        let mut writer = DeckWriter::new(DeckMeta::default());
        writer.add_slides([
            SlideRecord::title_slide(
                "AI-Powered Migration Blueprint",
                vec![
                    "Innovation Showcase 2025".to_string(),
                    "December 14, 2025".to_string(),
                ],
            ),
            SlideRecord::bullets(
                "Use Case",
                vec!["Manual migration is slow".to_string()],
            ),
            SlideRecord::table(
                "Impact: Time Saved",
                TableBlock::new(
                    ["Task", "Manual", "AI-Assisted", "Savings"],
                    [
                        vec!["Spring scaffold", "2-3 days", "15 minutes", "95%"],
                        vec!["Node migration", "4-5 days", "20 minutes", "96%"],
                    ],
                ),
            ),
        ]);
        writer.generate().unwrap()
    }

    #[test]
    fn test_slide_count_matches() {
        let summary = summarize(&sample_deck()).unwrap();
        assert_eq!(summary.slide_count(), 3);
    }

    #[test]
    fn test_titles_recovered_in_order() {
        let summary = summarize(&sample_deck()).unwrap();
        assert_eq!(
            summary.titles(),
            vec![
                "AI-Powered Migration Blueprint",
                "Use Case",
                "Impact: Time Saved"
            ]
        );
    }

    #[test]
    fn test_subtitle_is_newline_joined_bullets() {
        let summary = summarize(&sample_deck()).unwrap();
        assert_eq!(
            summary.slides[0].body_text(),
            "Innovation Showcase 2025\nDecember 14, 2025"
        );
    }

    #[test]
    fn test_table_recovered() {
        let summary = summarize(&sample_deck()).unwrap();
        let table = summary.slides[2].table.as_ref().unwrap();

        assert_eq!(table.row_count(), 3);
        assert!(table.is_rectangular());
        assert_eq!(
            table.header().unwrap(),
            ["Task", "Manual", "AI-Assisted", "Savings"]
        );
        assert_eq!(table.data_rows()[1][3], "96%");
    }

    #[test]
    fn test_non_table_slides_have_no_table() {
        let summary = summarize(&sample_deck()).unwrap();
        assert!(summary.slides[0].table.is_none());
        assert!(summary.slides[1].table.is_none());
    }

    #[test]
    fn test_escaped_text_round_trips() {
        let mut writer = DeckWriter::new(DeckMeta::default());
        writer.add_slide(SlideRecord::bullets(
            "Java & Spring <vs> Node",
            vec!["\"quoted\"".to_string()],
        ));

        let summary = summarize(&writer.generate().unwrap()).unwrap();
        assert_eq!(summary.slides[0].title, "Java & Spring <vs> Node");
        assert_eq!(summary.slides[0].body_lines[0], "\"quoted\"");
    }

    #[test]
    fn test_rejects_non_archive_bytes() {
        let err = summarize(b"not a zip archive").unwrap_err();
        assert_eq!(err.code(), "DECK008");
    }
}
