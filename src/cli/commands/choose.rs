//! Choose command implementation.
//!
//! Picks a random idea other than the highlighted one, marks it in
//! progress, and reveals it after the configured selection delay.

use std::io::{self, Write};
use std::thread;

use ideas_lib::IdeaError;

use crate::config::Config;
use crate::error::Result;
use crate::format::{IdeaEntry, format_idea_line};

/// Execute the choose command.
///
/// # Errors
///
/// Returns `EmptyList` if there is nothing to choose from, or an error if
/// the list cannot be saved.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let mut session = super::open_session(config);
    if session.store().is_empty() {
        if !json {
            eprintln!("{}", super::FIRST_RUN_HINT);
        }
        return Err(IdeaError::EmptyList.into());
    }

    let previous = session.current();
    let index = session.choose()?;
    session.suspend()?;
    tracing::info!(index, ?previous, "Chose idea");

    let entry = IdeaEntry::new(index, &session.store().snapshot()[index], true);
    if json {
        return super::print_json(&entry);
    }

    if !config.selection_delay.is_zero() {
        print!("Choosing...");
        io::stdout().flush()?;
        thread::sleep(config.selection_delay);
        println!();
    }
    println!("{}", format_idea_line(index, &entry.idea, true, None));
    Ok(())
}
