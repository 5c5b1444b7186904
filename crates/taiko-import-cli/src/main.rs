mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taiko_import=info,taiko_import_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Process {
            input,
            start_id,
            category_id,
            output,
            markers,
            config,
        } => commands::process::run(commands::process::ProcessArgs {
            input,
            start_id,
            category_id,
            output,
            markers,
            config,
        }),
        Command::Inspect {
            path,
            id,
            category_id,
        } => commands::inspect::run(&path, id, category_id),
        Command::Categories => commands::categories::run(),
    }
}
