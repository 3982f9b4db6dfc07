//! Command implementations.
//!
//! Each command opens a [`Session`] on the resolved data file, applies one
//! transition, and saves through [`Session::suspend`] when the list changed.

pub mod add;
pub mod choose;
pub mod completions;
pub mod current;
pub mod done;
pub mod init;
pub mod list;
pub mod start;
pub mod version;

use ideas_lib::Session;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;

/// Hint printed when there is nothing to show or choose from.
pub const FIRST_RUN_HINT: &str = "No ideas yet. Add one with: ideas add <description>";

pub(crate) fn open_session(config: &Config) -> Session {
    Session::open(&config.data_file)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
