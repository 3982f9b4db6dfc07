use crate::cli::AddArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::IdeaEntry;
use crate::validation::IdeaValidator;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the description is invalid or the list cannot be saved.
pub fn execute(args: &AddArgs, config: &Config, json: bool) -> Result<()> {
    let joined = args.description.join(" ");
    let description = joined.trim();
    IdeaValidator::validate_description(description)?;

    let mut session = super::open_session(config);
    let index = session.add(description)?;
    session.suspend()?;

    let entry = IdeaEntry::new(index, &session.store().snapshot()[index], false);
    if json {
        super::print_json(&entry)?;
    } else {
        println!("Added {}: {}", entry.number, entry.idea.description);
    }
    Ok(())
}
