use crate::cli::StartArgs;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::format::{IdeaEntry, format_idea_line};

/// Execute the start command.
///
/// # Errors
///
/// Returns an error if the number does not name an idea or the list cannot
/// be saved.
pub fn execute(args: &StartArgs, config: &Config, json: bool) -> Result<()> {
    let index = args
        .number
        .checked_sub(1)
        .ok_or_else(|| AppError::validation("number", "must be at least 1"))?;

    let mut session = super::open_session(config);
    session.highlight(index)?;
    session.suspend()?;

    let entry = IdeaEntry::new(index, &session.store().snapshot()[index], true);
    if json {
        super::print_json(&entry)?;
    } else {
        println!("{}", format_idea_line(index, &entry.idea, true, None));
    }
    Ok(())
}
