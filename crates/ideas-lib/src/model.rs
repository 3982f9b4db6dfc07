//! Core data types for ideas-lib.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-authored idea with its progress flags.
///
/// `description` doubles as the idea's identity when completing it; it is
/// unique by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Idea {
    pub description: String,
    #[serde(default)]
    pub in_progress: bool,
    #[serde(default)]
    pub complete: bool,
}

impl Idea {
    /// A fresh idea with both flags cleared.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            in_progress: false,
            complete: false,
        }
    }

    #[must_use]
    pub const fn status(&self) -> IdeaStatus {
        if self.complete {
            IdeaStatus::Complete
        } else if self.in_progress {
            IdeaStatus::InProgress
        } else {
            IdeaStatus::New
        }
    }
}

/// Display status derived from the two flags. `complete` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    New,
    InProgress,
    Complete,
}

impl IdeaStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }

    #[must_use]
    pub const fn is_actionable(self) -> bool {
        !matches!(self, Self::Complete)
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
