//! Runtime Configuration
//!
//! Resolves where data and logs live: command line flag, then environment
//! (handled by clap), then the platform data directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::Cli;

const APP_DIR: &str = "simple-checklist";
const DATA_FILE: &str = "data.json";
const LOG_DIR: &str = "logs";
pub const APP_NAME: &str = "SimpleChecklist";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub quiet: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_file = match &cli.data_file {
            Some(path) => path.clone(),
            None => app_data_dir()?.join(DATA_FILE),
        };
        let log_dir = match &cli.log_dir {
            Some(path) => path.clone(),
            None => app_data_dir()?.join(LOG_DIR),
        };
        Ok(Self {
            data_file,
            log_dir,
            quiet: cli.quiet,
        })
    }
}

fn app_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("could not determine the data directory; pass --data-file and --log-dir")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_explicit_paths_win() {
        let cli = Cli::parse_from([
            "simple-checklist",
            "--data-file",
            "/tmp/list.json",
            "--log-dir",
            "/tmp/logs",
            "-q",
        ]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/list.json"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert!(config.quiet);
    }
}
