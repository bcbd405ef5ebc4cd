//! Simple Checklist Entry Point
//!
//! Opens the checklist panel on the configured data file, applies one
//! command, prints the result and closes the panel again.

mod cli;
mod commands;
mod config;
mod render;

use anyhow::{anyhow, Result};
use clap::Parser;
use std::sync::Arc;

use checklist_core::{ChecklistPanel, JsonFileRepository};
use cli::{Cli, Command};
use commands::Destination;
use config::{AppConfig, APP_NAME};

/// What to print once the command ran
enum Output {
    Checklist,
    Text(String),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    if let Err(e) = rolling_logger::init_logger(config.log_dir.clone(), APP_NAME) {
        eprintln!("warning: logging disabled: {}", e);
    }
    let _ = rolling_logger::info(&format!("Using data file {}", config.data_file.display()));

    let repo = Arc::new(JsonFileRepository::new(&config.data_file));
    let mut panel = ChecklistPanel::open(repo).await;

    let command = cli.command.unwrap_or(Command::Open);
    let result = run_command(&mut panel, command).await;

    match &result {
        Ok(Output::Checklist) if !config.quiet => print!("{}", render::render(panel.store())),
        Ok(Output::Text(text)) => println!("{}", text),
        _ => {}
    }

    if let Err(e) = panel.teardown().await {
        let _ = rolling_logger::error(&format!("Checklist not saved: {}", e));
        return Err(anyhow!("checklist could not be saved: {}", e));
    }

    result.map(|_| ()).map_err(|e| anyhow!(e))
}

async fn run_command(panel: &mut ChecklistPanel, command: Command) -> Result<Output, String> {
    match command {
        Command::Open => {}
        Command::Add { general, text } => {
            commands::add_item(panel, &text, general);
        }
        Command::Toggle { id } => {
            commands::toggle_item(panel, &id);
        }
        Command::Edit { id, text } => {
            commands::edit_item(panel, &id, &text);
        }
        Command::Delete { id } => {
            commands::delete_item(panel, &id);
        }
        Command::Move { id, before, after, to } => {
            let destination = match (before, after, to) {
                (Some(target), _, _) => Destination::Before(target),
                (_, Some(target), _) => Destination::After(target),
                (_, _, Some(category)) => Destination::EndOf(category),
                _ => return Err("move needs one of --before, --after or --to".to_string()),
            };
            commands::move_item(panel, &id, destination);
        }
        Command::Export => return commands::export_view(panel).map(Output::Text),
        Command::Import { file } => {
            if !commands::import_view(panel, &file).await? {
                eprintln!("Nothing imported: the checklist already has items or the file has none");
            }
        }
    }
    Ok(Output::Checklist)
}
