//! `idea_randomizer` - Pick something to work on from a list of ideas.
//!
//! This crate provides the `ideas` CLI on top of `ideas-lib`, which owns
//! the idea list state machine and the `:::`-delimited file format.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Workspace configuration (`.ideas/config.yaml`) and overrides
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - `tracing` subscriber setup
//! - [`validation`] - Checks applied to user-entered descriptions

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod validation;

pub use error::{AppError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
