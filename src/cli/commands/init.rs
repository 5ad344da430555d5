use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into the current directory.
///
/// An existing config file is left untouched.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
        true
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created }),
    })
}
