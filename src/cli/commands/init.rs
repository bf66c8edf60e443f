use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let path = dir.join(CONFIG_FILE_NAME);
    let already_exists = path.exists();

    if !already_exists {
        fs::write(&path, default_config_json()?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path,
            already_exists,
        }),
    })
}
