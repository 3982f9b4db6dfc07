//! Command-line interface for `idea_randomizer`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{self, CliOverrides, Config};
use crate::logging::{self, LogFormat};

/// `idea_randomizer` (ideas) - Pick a random idea to work on.
#[derive(Parser, Debug)]
#[command(name = "ideas")]
#[command(
    author,
    version,
    about = "Pick a random idea to work on from a plain-text list",
    long_about = None,
    after_help = "Ideas are stored in .ideas/Ideas.csv as `description:::in_progress:::complete` lines."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Ideas file to use instead of the workspace default
    #[arg(long, global = true, env = "IDEAS_FILE")]
    pub file: Option<PathBuf>,

    /// Pause before revealing a random choice, in milliseconds
    #[arg(long, global = true, env = "IDEAS_SELECTION_DELAY_MS")]
    pub selection_delay_ms: Option<u64>,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Diagnostic log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, env = "IDEAS_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .ideas workspace
    Init(InitArgs),

    /// Add a new idea
    Add(AddArgs),

    /// List ideas
    #[command(alias = "ls")]
    List(ListArgs),

    /// Pick a random idea (never the current one) and start it
    Choose,

    /// Start a specific idea by number
    Start(StartArgs),

    /// Mark an idea complete (default: the current idea)
    Done(DoneArgs),

    /// Show the idea in progress
    Current,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Seed the list from this file (plain descriptions or saved ideas)
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Overwrite an existing ideas file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Idea description (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Hide completed ideas
    #[arg(long)]
    pub active: bool,

    /// Truncate descriptions to this many columns
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Idea number as shown by `ideas list`
    pub number: usize,
}

#[derive(Args, Debug, Default)]
pub struct DoneArgs {
    /// Exact description of the idea to complete; the first match wins
    #[arg(num_args = 0..)]
    pub description: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            file: self.file.clone(),
            selection_delay_ms: self.selection_delay_ms,
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref(), cli.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(command) = &cli.command else {
        println!("ideas - pick a random idea to work on. Use --help for usage.");
        return Ok(());
    };
    tracing::debug!(command = command.name(), "Running command");

    match command {
        Commands::Version => commands::version::execute(cli.json)?,
        Commands::Completions(args) => commands::completions::execute(args.shell),
        Commands::Init(args) => commands::init::execute(args, &resolve_config(&cli)?, cli.json)?,
        Commands::Add(args) => commands::add::execute(args, &resolve_config(&cli)?, cli.json)?,
        Commands::List(args) => commands::list::execute(args, &resolve_config(&cli)?, cli.json)?,
        Commands::Choose => commands::choose::execute(&resolve_config(&cli)?, cli.json)?,
        Commands::Start(args) => commands::start::execute(args, &resolve_config(&cli)?, cli.json)?,
        Commands::Done(args) => commands::done::execute(args, &resolve_config(&cli)?, cli.json)?,
        Commands::Current => commands::current::execute(&resolve_config(&cli)?, cli.json)?,
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> crate::Result<Config> {
    let cwd = std::env::current_dir()?;
    config::resolve(&cli.overrides(), &cwd)
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Add(_) => "add",
            Self::List(_) => "list",
            Self::Choose => "choose",
            Self::Start(_) => "start",
            Self::Done(_) => "done",
            Self::Current => "current",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_joins_words() {
        let cli = Cli::try_parse_from(["ideas", "add", "Write", "blog", "post"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.description.join(" "), "Write blog post"),
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ideas", "list", "--json", "--file", "x.csv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.overrides().file, Some(PathBuf::from("x.csv")));
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn log_format_json() {
        let cli = Cli::try_parse_from(["ideas", "current", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["ideas", "--log-format", "xml", "current"]).is_err());
    }
}
