//! Inspect command: parse one input without writing any files.

use std::path::Path;

use anyhow::{Result, bail};
use taiko_import_core::tja::{self, TjaDocument};
use taiko_import_core::{OszParser, SongContext};

pub fn run(path: &Path, id: u32, category_id: u32) -> Result<()> {
    let context = SongContext::new(id, category_id);

    let record = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tja") => {
            tja::parse(&TjaDocument::load(path)?, context)?
        }
        Some(ext) if ext.eq_ignore_ascii_case("osz") => {
            OszParser::default().open(path, context)?.record
        }
        _ => bail!("Expected a .tja or .osz file: {}", path.display()),
    };

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
