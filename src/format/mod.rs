//! Output formatting for `idea_randomizer`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! With `--json`, stdout carries only JSON; diagnostics go to stderr.

mod output;
mod text;

pub use output::{CompletionResult, IdeaEntry};
pub use text::{format_idea_line, format_status_icon, truncate_to_width};
