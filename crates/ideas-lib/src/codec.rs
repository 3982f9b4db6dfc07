//! Flat text codec for idea lists.
//!
//! Each idea is one line: `<description>:::<in_progress 0|1>:::<complete 0|1>`.
//! Files written by the first release carry a bare description per line;
//! those decode with both flags cleared.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IdeaError, Result};
use crate::model::Idea;

/// Field separator inside a line.
pub const DELIMITER: &str = ":::";

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn parse_flag(field: &str) -> bool {
    field == "1"
}

/// Encode ideas in list order, one newline-terminated line each.
#[must_use]
pub fn encode(ideas: &[Idea]) -> String {
    let mut out = String::new();
    for idea in ideas {
        out.push_str(&encode_line(idea));
        out.push('\n');
    }
    out
}

/// Encode a single idea without the line terminator.
#[must_use]
pub fn encode_line(idea: &Idea) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        idea.description,
        flag(idea.in_progress),
        flag(idea.complete)
    )
}

/// Decode text into ideas, preserving line order.
///
/// Only the single empty segment left by a final terminator is dropped;
/// blank lines elsewhere become ideas with an empty description.
#[must_use]
pub fn decode(text: &str) -> Vec<Idea> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines.into_iter().map(decode_line).collect()
}

/// Decode one line.
///
/// Three or more fields are read as description, in-progress, complete.
/// Anything shorter is a legacy line: the whole line is the description
/// and both flags default to false.
#[must_use]
pub fn decode_line(line: &str) -> Idea {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() > 2 {
        Idea {
            description: fields[0].to_string(),
            in_progress: parse_flag(fields[1]),
            complete: parse_flag(fields[2]),
        }
    } else {
        Idea::new(line)
    }
}

/// Read and decode an ideas file.
///
/// # Errors
///
/// Returns `StorageRead` if the file is missing, unreadable, or not UTF-8.
pub fn read_file(path: &Path) -> Result<Vec<Idea>> {
    let text = fs::read_to_string(path).map_err(|source| IdeaError::StorageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let ideas = decode(&text);
    tracing::debug!(path = %path.display(), count = ideas.len(), "Loaded ideas");
    Ok(ideas)
}

/// Encode and write an ideas file atomically.
///
/// Writes to a sibling temp file, then renames over the target. The
/// parent directory is created if missing.
///
/// # Errors
///
/// Returns `StorageWrite` if any step fails; the previous file is left in
/// place when the rename did not happen.
pub fn write_file(path: &Path, ideas: &[Idea]) -> Result<()> {
    let write_err = |source| IdeaError::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(source) = write_then_rename(&tmp_path, path, &encode(ideas)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }

    tracing::debug!(path = %path.display(), count = ideas.len(), "Saved ideas");
    Ok(())
}

fn write_then_rename(tmp_path: &Path, path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    with_suffix(path, ".tmp")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

// ============================================================================
// Highlight file
// ============================================================================

/// Sibling of the ideas file that remembers the highlighted idea between
/// runs, as one `<index>:::<description>` line.
#[must_use]
pub fn highlight_path_for(path: &Path) -> PathBuf {
    with_suffix(path, ".current")
}

/// Read the highlight saved next to the ideas file at `path`.
///
/// A missing or malformed highlight file reads as `None`.
#[must_use]
pub fn read_highlight(path: &Path) -> Option<(usize, String)> {
    let highlight_path = highlight_path_for(path);
    let text = fs::read_to_string(&highlight_path).ok()?;
    let line = text.strip_suffix('\n').unwrap_or(&text);
    let parsed = line
        .split_once(DELIMITER)
        .and_then(|(index, description)| Some((index.parse().ok()?, description.to_string())));
    if parsed.is_none() {
        tracing::debug!(path = %highlight_path.display(), "Ignoring malformed highlight file");
    }
    parsed
}

/// Save the highlight next to the ideas file at `path`, or remove the
/// highlight file when there is none.
///
/// # Errors
///
/// Returns `StorageWrite` if the highlight file cannot be written or removed.
pub fn write_highlight(path: &Path, highlight: Option<(usize, &str)>) -> Result<()> {
    let highlight_path = highlight_path_for(path);
    let write_err = |source| IdeaError::StorageWrite {
        path: highlight_path.clone(),
        source,
    };

    let Some((index, description)) = highlight else {
        return match fs::remove_file(&highlight_path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(write_err(e)),
            _ => Ok(()),
        };
    };

    let tmp_path = temp_path_for(&highlight_path);
    let contents = format!("{index}{DELIMITER}{description}\n");
    if let Err(source) = write_then_rename(&tmp_path, &highlight_path, &contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }
    Ok(())
}

/// Move the file at `path` to the first free `<path>.bak`, `<path>.bak.1`,
/// ... name and return where it went.
///
/// # Errors
///
/// Returns `StorageWrite` if the file cannot be moved.
pub fn back_up_file(path: &Path) -> Result<PathBuf> {
    let backup = (0_u32..)
        .map(|n| {
            if n == 0 {
                with_suffix(path, ".bak")
            } else {
                with_suffix(path, &format!(".bak.{n}"))
            }
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| with_suffix(path, ".bak"));
    fs::rename(path, &backup).map_err(|source| IdeaError::StorageWrite {
        path: backup.clone(),
        source,
    })?;
    tracing::warn!(
        path = %path.display(),
        backup = %backup.display(),
        "Moved unreadable ideas file aside"
    );
    Ok(backup)
}
