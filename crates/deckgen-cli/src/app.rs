//! CLI application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use deckgen_pptx::{DeckMeta, DeckWriter};

use crate::content;

#[derive(Parser)]
#[command(name = "deckgen")]
#[command(author, version, about = "Generate the migration blueprint slide deck", long_about = None)]
struct Cli {
    /// Output PPTX file (defaults to the deck's own name in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Deck configuration TOML (defaults to deckgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    generate_command(cli.output.as_deref(), cli.config.as_deref())
}

/// Execute the generate command
pub fn generate_command(output: Option<&Path>, config: Option<&Path>) -> Result<()> {
    println!("deckgen v{}", env!("CARGO_PKG_VERSION"));

    let meta = load_meta(config)?;

    // Determine output path (default: the deck's own file name)
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(&meta.output),
    };

    let mut writer = DeckWriter::new(meta);
    writer.add_slides(content::deck_slides());
    println!("  Rendering {} slides...", writer.slide_count());

    let pptx_bytes = writer.generate().context("Failed to generate deck")?;

    fs::write(&output_path, &pptx_bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    println!("  {} bytes", pptx_bytes.len());

    println!("Saved {}", output_path.display());

    Ok(())
}

/// Load deck metadata: an explicit config file, else `deckgen.toml` in the
/// current directory, else defaults
fn load_meta(config: Option<&Path>) -> Result<DeckMeta> {
    let path = match config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => {
            let default_path = Path::new("deckgen.toml");
            if !default_path.exists() {
                return Ok(DeckMeta::default());
            }
            default_path
        }
    };

    println!("  Loading config: {}", path.display());
    DeckMeta::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
