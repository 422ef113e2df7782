//! Draftwatch CLI - Turn review emails into tracked drafting issues.

use clap::Parser;
use draftwatch_cli::commands;
use draftwatch_cli::{Cli, Command, Config, Formatter};
use draftwatch_store::SqliteStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, stdout carries command output)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("DRAFTWATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> draftwatch_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; write the defaults out the first time round
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load_or_init(&Config::path()?)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Open the issue database
    let db_path = match &cli.db {
        Some(path) => PathBuf::from(path),
        None => config.database_path()?,
    };
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut store = SqliteStore::new(&db_path)?;

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &mut store, &config, &formatter)?,
        Command::List(args) => commands::execute_list(args, &store, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &store, &formatter)?,
        Command::Review(args) => commands::execute_review(args, &mut store, &config, &formatter)?,
        Command::Move(args) => commands::execute_move(args, &mut store, &formatter)?,
        Command::Edit(args) => commands::execute_edit(args, &mut store, &formatter)?,
        Command::Note(args) => commands::execute_note(args, &mut store, &config, &formatter)?,
        Command::Delete(args) => commands::execute_delete(args, &mut store, &formatter)?,
    }

    Ok(())
}
