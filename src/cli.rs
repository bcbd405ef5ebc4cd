//! Command Line Definition

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use checklist_core::Category;

#[derive(Debug, Parser)]
#[command(
    name = "simple-checklist",
    version,
    about = "A checklist with two lists: numbered next steps and general notes"
)]
pub struct Cli {
    /// Checklist data file
    #[arg(long, env = "SIMPLE_CHECKLIST_DATA", global = true)]
    pub data_file: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, env = "SIMPLE_CHECKLIST_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Don't print the checklist after the command
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the checklist
    Open,
    /// Add an item. Text starting with `--` goes to General
    Add {
        /// File the item under General
        #[arg(long, short)]
        general: bool,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark an item done, or not done again
    Toggle { id: String },
    /// Replace an item's text
    Edit {
        id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Remove an item
    Delete { id: String },
    /// Move an item next to another one, or to the end of a list
    #[command(group(ArgGroup::new("destination").required(true).args(["before", "after", "to"])))]
    Move {
        id: String,
        /// Place right before this item
        #[arg(long)]
        before: Option<String>,
        /// Place right after this item
        #[arg(long)]
        after: Option<String>,
        /// Place at the end of this list (next-steps or general)
        #[arg(long)]
        to: Option<Category>,
    },
    /// Print the checklist as JSON
    Export,
    /// Load a checklist exported earlier; only applies while the list is empty
    Import { file: PathBuf },
}
