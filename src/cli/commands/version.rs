use crate::error::Result;

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be written.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    if json {
        super::print_json(&serde_json::json!({ "name": "ideas", "version": version }))?;
    } else {
        println!("ideas {version}");
    }
    Ok(())
}
