//! Text formatting functions for `idea_randomizer`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Idea line formatting
//! - Width-aware truncation

use std::borrow::Cow;

use ideas_lib::{Idea, IdeaStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Not started (hollow circle).
    pub const NEW: &str = "○";
    /// In progress (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Complete (checkmark).
    pub const COMPLETE: &str = "✓";
    /// Marks the highlighted idea.
    pub const CURRENT: &str = "▶";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: IdeaStatus) -> &'static str {
    match status {
        IdeaStatus::New => icons::NEW,
        IdeaStatus::InProgress => icons::IN_PROGRESS,
        IdeaStatus::Complete => icons::COMPLETE,
    }
}

/// Shorten `text` to at most `max_width` terminal columns, ending in `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    Cow::Owned(out)
}

/// Format a single-line idea summary.
///
/// Format: `{current} {icon} {number}. {description}`
#[must_use]
pub fn format_idea_line(
    index: usize,
    idea: &Idea,
    current: bool,
    max_width: Option<usize>,
) -> String {
    let marker = if current { icons::CURRENT } else { " " };
    let description = match max_width {
        Some(width) => truncate_to_width(&idea.description, width),
        None => Cow::Borrowed(idea.description.as_str()),
    };
    format!(
        "{marker} {} {:>3}. {description}",
        format_status_icon(idea.status()),
        index + 1,
    )
}
