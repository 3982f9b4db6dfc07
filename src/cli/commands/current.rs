use crate::config::Config;
use crate::error::Result;
use crate::format::{IdeaEntry, format_idea_line};

/// Execute the current command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be written.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let session = super::open_session(config);
    let entry = session
        .current()
        .zip(session.current_idea())
        .map(|(index, idea)| IdeaEntry::new(index, idea, true));

    if json {
        return super::print_json(&entry);
    }
    match entry {
        Some(entry) => println!(
            "{}",
            format_idea_line(entry.number - 1, &entry.idea, true, None)
        ),
        None => println!("Nothing in progress. Run: ideas choose"),
    }
    Ok(())
}
