//! Command-line configuration

use anyhow::{Context, Result};
use clap::Parser;
use folder_template::template::FolderTemplate;
use log::LevelFilter;
use std::path::PathBuf;

/// Create consistent project folder layouts from an editable template
#[derive(Debug, Parser)]
#[command(name = "project-folders", version, about)]
pub struct Config {
    /// Where new projects go when no location is entered [default: current directory]
    #[arg(long, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Start from an empty template instead of the standard layout
    #[arg(long)]
    pub empty: bool,
}

impl Config {
    /// The default project location
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine the current directory"),
        }
    }

    /// The template the session starts with
    pub fn template(&self) -> FolderTemplate {
        if self.empty {
            FolderTemplate::new()
        } else {
            FolderTemplate::create_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["project-folders"]).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.base_dir.is_none());
        assert_eq!(config.template().root_count(), 4);
        assert!(config.base_dir().unwrap().is_absolute());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "project-folders",
            "--base-dir",
            "/srv/projekty",
            "--log-level",
            "debug",
            "--empty",
        ])
        .unwrap();

        assert_eq!(config.base_dir().unwrap(), PathBuf::from("/srv/projekty"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.template().is_empty());
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Config::try_parse_from(["project-folders", "--log-level", "loud"]).is_err());
    }
}
