//! Configuration management for `idea_randomizer`.
//!
//! Configuration is resolved from, in order of precedence:
//! - CLI flags (each also readable from an environment variable)
//! - Workspace config (`.ideas/config.yaml`)
//! - Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Workspace directory, relative to the working directory.
pub const WORKSPACE_DIR: &str = ".ideas";
/// Config file name inside the workspace directory.
pub const CONFIG_FILE: &str = "config.yaml";
/// Data file name used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "Ideas.csv";
/// Pause between announcing a random pick and showing it.
pub const DEFAULT_SELECTION_DELAY_MS: u64 = 300;

/// Template written by `ideas init`.
pub const CONFIG_TEMPLATE: &str = r"# Idea Randomizer configuration
# data_file: Ideas.csv
# selection_delay_ms: 300
";

/// Contents of `.ideas/config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Data file; relative paths resolve against the workspace directory.
    pub data_file: Option<PathBuf>,
    pub selection_delay_ms: Option<u64>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub file: Option<PathBuf>,
    pub selection_delay_ms: Option<u64>,
}

/// Fully resolved settings for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub workspace_dir: PathBuf,
    pub data_file: PathBuf,
    pub selection_delay: Duration,
}

/// Load `config.yaml` from `workspace_dir`.
///
/// A missing file, or one holding only comments, yields the defaults.
///
/// # Errors
///
/// Returns `Io` if the file exists but cannot be read, or `Yaml` if it is
/// not valid configuration.
pub fn load_file_config(workspace_dir: &Path) -> Result<FileConfig> {
    let path = workspace_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => return Err(AppError::Io(e)),
    };

    let has_content = text
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(FileConfig::default());
    }

    let config: FileConfig = serde_yaml::from_str(&text)?;
    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

/// Resolve settings relative to `base_dir` (normally the working directory).
///
/// # Errors
///
/// Returns an error if the workspace config cannot be loaded, or if the
/// data file resolves to an empty path.
pub fn resolve(overrides: &CliOverrides, base_dir: &Path) -> Result<Config> {
    let workspace_dir = base_dir.join(WORKSPACE_DIR);
    let file_config = load_file_config(&workspace_dir)?;

    let data_file = if let Some(file) = &overrides.file {
        base_dir.join(file)
    } else if let Some(file) = &file_config.data_file {
        workspace_dir.join(file)
    } else {
        workspace_dir.join(DEFAULT_DATA_FILE)
    };
    if data_file.file_name().is_none() {
        return Err(AppError::Config(format!(
            "data file must name a file, got {}",
            data_file.display()
        )));
    }

    let delay_ms = overrides
        .selection_delay_ms
        .or(file_config.selection_delay_ms)
        .unwrap_or(DEFAULT_SELECTION_DELAY_MS);

    Ok(Config {
        workspace_dir,
        data_file,
        selection_delay: Duration::from_millis(delay_ms),
    })
}
