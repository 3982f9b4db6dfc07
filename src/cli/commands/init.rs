use std::fs;

use ideas_lib::codec;

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE, Config};
use crate::error::{AppError, Result};

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the ideas file already exists (without `--force`),
/// the seed file cannot be read, or the workspace cannot be written.
pub fn execute(args: &InitArgs, config: &Config, json: bool) -> Result<()> {
    if config.data_file.exists() && !args.force {
        return Err(AppError::AlreadyInitialized {
            path: config.data_file.clone(),
        });
    }

    fs::create_dir_all(&config.workspace_dir)?;

    let ideas = match &args.from {
        Some(seed) => codec::read_file(seed)?,
        None => Vec::new(),
    };
    codec::write_file(&config.data_file, &ideas)?;
    codec::write_highlight(&config.data_file, None)?;

    let config_path = config.workspace_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    tracing::info!(path = %config.data_file.display(), count = ideas.len(), "Initialized");

    if json {
        super::print_json(&serde_json::json!({
            "data_file": config.data_file,
            "count": ideas.len(),
        }))?;
    } else {
        println!(
            "Initialized {} with {} idea(s)",
            config.data_file.display(),
            ideas.len()
        );
    }
    Ok(())
}
