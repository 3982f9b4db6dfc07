//! List command implementation.

use ideas_lib::IdeaStatus;

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::{IdeaEntry, format_idea_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be written.
pub fn execute(args: &ListArgs, config: &Config, json: bool) -> Result<()> {
    let session = super::open_session(config);
    let current = session.current();

    let entries: Vec<IdeaEntry> = session
        .store()
        .snapshot()
        .iter()
        .enumerate()
        .filter(|(_, idea)| !args.active || idea.status().is_actionable())
        .map(|(index, idea)| IdeaEntry::new(index, idea, current == Some(index)))
        .collect();

    if json {
        return super::print_json(&entries);
    }

    if session.store().is_empty() {
        println!("{}", super::FIRST_RUN_HINT);
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}",
            format_idea_line(entry.number - 1, &entry.idea, entry.current, args.width)
        );
    }

    let count = |status| {
        session
            .store()
            .snapshot()
            .iter()
            .filter(|idea| idea.status() == status)
            .count()
    };
    println!(
        "\n{} idea(s): {} new, {} in progress, {} complete",
        session.store().len(),
        count(IdeaStatus::New),
        count(IdeaStatus::InProgress),
        count(IdeaStatus::Complete),
    );
    Ok(())
}
