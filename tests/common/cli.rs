//! Helpers for driving the `ideas` binary in a scratch directory.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct IdeasWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl IdeasWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(".ideas").join("Ideas.csv")
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_file()).expect("read ideas file")
    }

    pub fn write_data(&self, contents: &str) {
        let path = self.data_file();
        fs::create_dir_all(path.parent().expect("parent")).expect("create .ideas");
        fs::write(path, contents).expect("write ideas file");
    }

    /// A command rooted in the workspace with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ideas").expect("ideas binary");
        cmd.current_dir(&self.root)
            .env_remove("IDEAS_FILE")
            .env_remove("RUST_LOG")
            .env_remove("IDEAS_LOG_FORMAT")
            .env("IDEAS_SELECTION_DELAY_MS", "0");
        cmd
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_ideas<I, S>(workspace: &IdeasWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = workspace
        .command()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run ideas: {e}"));
    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
