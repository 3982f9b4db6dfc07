//! Done command implementation.
//!
//! Completion matches by exact description. Without an argument the
//! highlighted idea is completed.

use crate::cli::DoneArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::CompletionResult;

/// Execute the done command.
///
/// A description that matches nothing is reported, not treated as an error.
///
/// # Errors
///
/// Returns an error if the list cannot be saved.
pub fn execute(args: &DoneArgs, config: &Config, json: bool) -> Result<()> {
    let mut session = super::open_session(config);

    let result = if args.description.is_empty() {
        session
            .complete_current()
            .map(|description| CompletionResult {
                description,
                found: true,
            })
    } else {
        let description = args.description.join(" ");
        let found = session.complete(&description);
        Some(CompletionResult { description, found })
    };

    if result.as_ref().is_some_and(|r| r.found) {
        session.suspend()?;
    }

    if json {
        return super::print_json(&result);
    }
    match result {
        Some(CompletionResult {
            description,
            found: true,
        }) => println!("Completed: {description}"),
        Some(CompletionResult { description, .. }) => {
            println!("No idea matches \"{description}\"; nothing changed.");
        }
        None => println!("No current idea to complete."),
    }
    Ok(())
}
