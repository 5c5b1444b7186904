//! Process command: batch conversion into the output tree.

use std::path::PathBuf;

use anyhow::{Result, bail};
use taiko_import_core::{ProcessorConfig, SongProcessor, discover_sources};
use tracing::info;

use crate::cli_utils::{print_error, print_ok};

pub struct ProcessArgs {
    pub input: PathBuf,
    pub start_id: Option<u32>,
    pub category_id: Option<u32>,
    pub output: Option<PathBuf>,
    pub markers: bool,
    pub config: Option<PathBuf>,
}

/// Settings file values, overridden by command-line flags.
pub fn resolve_config(args: &ProcessArgs) -> Result<ProcessorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let config = ProcessorConfig::load(path)?;
            info!("Loaded config from {:?}", path);
            config
        }
        None => ProcessorConfig::default(),
    };

    if let Some(start_id) = args.start_id {
        config.start_id = start_id;
    }
    if let Some(category_id) = args.category_id {
        config.category_id = category_id;
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if args.markers {
        config.generate_markers = true;
    }

    Ok(config)
}

pub fn run(args: ProcessArgs) -> Result<()> {
    if !args.input.is_dir() {
        bail!("Directory does not exist: {}", args.input.display());
    }

    let config = resolve_config(&args)?;
    println!("Looking in {}...", args.input.display());

    let sources = discover_sources(&args.input)?;
    if sources.is_empty() {
        bail!("Found zero songs to import.");
    }
    for source in &sources {
        println!("Found song {}", source.name());
    }

    let processor = SongProcessor::new(config);
    let summary = processor.process(&sources)?;

    for record in &summary.records {
        print_ok(format!("[{}] {}", record.id, record.title));
    }
    for failure in &summary.failures {
        print_error(format!("{}: {}", failure.source.display(), failure.error));
    }

    println!();
    println!(
        "Done! {} of {} songs written to {}",
        summary.records.len(),
        sources.len(),
        summary.songs_file.display()
    );
    println!("Don't forget to import songs.json into the song database!");

    Ok(())
}
