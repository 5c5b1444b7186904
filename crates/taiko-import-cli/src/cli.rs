//! CLI argument definitions for taiko-import.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taiko-import")]
#[command(about = "Convert chart folders and beatmap archives into a songs.json import", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every song folder and archive in a directory
    Process {
        /// Directory holding song folders (.tja + .mp3) and .osz archives
        #[arg(short, long)]
        input: PathBuf,
        /// Id of the first song; later songs are numbered sequentially
        #[arg(long)]
        start_id: Option<u32>,
        /// Category id assigned to every song (see `categories`)
        #[arg(long)]
        category_id: Option<u32>,
        /// Output root directory
        #[arg(short, long, env = "TAIKO_IMPORT_OUTPUT")]
        output: Option<PathBuf>,
        /// Create an empty marker file named after each song
        #[arg(long)]
        markers: bool,
        /// Settings file (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Parse a single chart or archive and print its record as JSON
    Inspect {
        /// Path to a .tja file or .osz archive
        path: PathBuf,
        /// Id to assign
        #[arg(long, default_value = "1")]
        id: u32,
        /// Category id to assign
        #[arg(long, default_value = "1")]
        category_id: u32,
    },
    /// List the front-end's default categories
    Categories,
}
