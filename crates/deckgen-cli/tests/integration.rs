//! Integration tests for the deckgen CLI
//!
//! These tests run the full build-save-reopen cycle: assemble the deck from
//! its hardcoded records, save it to disk, then read the file back and check
//! the rendered structure.

use std::fs;
use std::io::Cursor;

use deckgen_cli::content;
use deckgen_pptx::{inspect, DeckMeta, DeckWriter};
use tempfile::TempDir;
use zip::ZipArchive;

fn generate_deck() -> Vec<u8> {
    let mut writer = DeckWriter::new(DeckMeta::default());
    writer.add_slides(content::deck_slides());
    writer.generate().expect("Failed to generate deck")
}

#[test]
fn test_saved_deck_is_a_valid_package() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("AI_Migration_Blueprint.pptx");

    fs::write(&output, generate_deck()).expect("Failed to write deck");

    let bytes = fs::read(&output).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("Output is not a ZIP archive");

    assert!(archive.by_name("[Content_Types].xml").is_ok());
    assert!(archive.by_name("ppt/presentation.xml").is_ok());
    assert!(archive.by_name("ppt/slides/slide13.xml").is_ok());
    assert!(archive.by_name("ppt/slides/slide14.xml").is_err());
}

#[test]
fn test_slide_count_equals_record_count() {
    let summary = inspect::summarize(&generate_deck()).unwrap();
    assert_eq!(summary.slide_count(), content::deck_slides().len());
}

#[test]
fn test_rendered_titles_match_records() {
    let summary = inspect::summarize(&generate_deck()).unwrap();
    let expected: Vec<String> = content::deck_slides().into_iter().map(|s| s.title).collect();

    assert_eq!(summary.titles(), expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_title_slide_subtitle_is_joined_bullets() {
    let summary = inspect::summarize(&generate_deck()).unwrap();
    assert_eq!(
        summary.slides[0].body_text(),
        "Innovation Showcase 2025\nDecember 14, 2025"
    );
}

#[test]
fn test_table_slide_matches_record_shape() {
    let summary = inspect::summarize(&generate_deck()).unwrap();

    // Slide 4 carries the time-saved table
    let table = summary.slides[3]
        .table
        .as_ref()
        .expect("Slide 4 should carry a table");

    assert_eq!(table.row_count(), 6); // header + 5 data rows
    assert!(table.is_rectangular());
    assert_eq!(
        table.header().unwrap(),
        ["Task", "Manual", "AI-Assisted", "Savings"]
    );
    assert_eq!(
        table.data_rows()[4],
        ["TOTAL", "8-11 days", "~50 minutes", "96%"]
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    assert_eq!(generate_deck(), generate_deck());
}

#[test]
fn test_generate_command_writes_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("blueprint.pptx");

    deckgen_cli::generate_command(Some(output.as_path()), None).expect("generate_command failed");

    let bytes = fs::read(&output).expect("Output file was not written");
    let summary = inspect::summarize(&bytes).unwrap();
    assert_eq!(summary.slide_count(), 13);
}

#[test]
fn test_generate_command_honors_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("deckgen.toml");
    let output = temp_dir.path().join("custom.pptx");

    fs::write(&config, "title = \"Custom Deck\"\nauthor = \"QA\"\n").unwrap();

    deckgen_cli::generate_command(Some(output.as_path()), Some(config.as_path()))
        .expect("generate_command failed");
    assert!(output.exists());
}

#[test]
fn test_generate_command_rejects_missing_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("never.pptx");
    let config = temp_dir.path().join("missing.toml");

    let err =
        deckgen_cli::generate_command(Some(output.as_path()), Some(config.as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
    assert!(!output.exists());
}
