//! `idea_randomizer` (ideas) - Pick a random idea to work on.
//!
//! Ideas live in a plain text file, one per line, with in-progress and
//! complete flags. No daemon, no network, no database.

use idea_randomizer::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
