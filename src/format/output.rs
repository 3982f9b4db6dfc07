use ideas_lib::{Idea, IdeaStatus};
use serde::{Deserialize, Serialize};

/// Idea with its display number for list/choose/current views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaEntry {
    /// 1-based position in the list.
    pub number: usize,
    #[serde(flatten)]
    pub idea: Idea,
    pub status: IdeaStatus,
    /// Whether this is the highlighted idea.
    pub current: bool,
}

impl IdeaEntry {
    #[must_use]
    pub fn new(index: usize, idea: &Idea, current: bool) -> Self {
        Self {
            number: index + 1,
            idea: idea.clone(),
            status: idea.status(),
            current,
        }
    }
}

/// Outcome of `ideas done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub description: String,
    pub found: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_flat() {
        let entry = IdeaEntry::new(0, &Idea::new("Plant tomatoes"), true);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["number"], 1);
        assert_eq!(value["description"], "Plant tomatoes");
        assert_eq!(value["in_progress"], false);
        assert_eq!(value["status"], "new");
        assert_eq!(value["current"], true);
    }
}
