use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::cli::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::reporter::SUCCESS_MARK;

/// Write a starter `.gleanrc.json` into the working directory.
pub fn run() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);

    Ok(ExitStatus::Success)
}
