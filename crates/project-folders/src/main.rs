mod app;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use folder_template::fs::FsDirectoryCreator;
use folder_template::prompt::ConsolePrompt;
use log::info;

use crate::app::App;
use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();

    // RUST_LOG takes precedence over --log-level
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let base_dir = config.base_dir()?;
    info!("Default project location: {}", base_dir.display());

    let mut app = App::new(
        config.template(),
        ConsolePrompt::stdio(),
        FsDirectoryCreator,
        base_dir,
    );

    app.run().context("Console input/output failed")
}
