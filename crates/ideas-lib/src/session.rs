//! One editing session over an ideas file.
//!
//! Wraps an [`IdeaStore`] with the backing path and the currently
//! highlighted idea. Read failures start an empty list; write failures
//! always reach the caller. The highlight is kept in a sibling file so the
//! next session picks up where this one stopped.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{IdeaError, Result};
use crate::model::Idea;
use crate::store::IdeaStore;

/// An open ideas file plus the idea the user is looking at.
#[derive(Debug)]
pub struct Session {
    store: IdeaStore,
    path: PathBuf,
    current: Option<usize>,
    first_run: bool,
    /// The file exists but could not be read; move it aside before saving.
    unreadable: bool,
}

impl Session {
    /// Open the file at `path`.
    ///
    /// A file that cannot be read is treated as "no ideas yet": the session
    /// starts empty and [`Self::is_first_run`] reports true. The highlight
    /// saved by the last session is restored when it still names an idea in
    /// progress; otherwise the first in-progress idea is highlighted.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut unreadable = false;
        let (ideas, first_run) = match codec::read_file(&path) {
            Ok(ideas) => (ideas, false),
            Err(IdeaError::StorageRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No ideas file yet");
                (Vec::new(), true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Starting with an empty idea list");
                unreadable = true;
                (Vec::new(), true)
            }
        };

        let mut session = Self::with_ideas(path, ideas, first_run);
        session.unreadable = unreadable;
        if let Some(index) = session.saved_highlight() {
            session.current = Some(index);
        }
        session
    }

    /// Start a session over ideas already in hand.
    #[must_use]
    pub fn with_ideas(path: impl Into<PathBuf>, ideas: Vec<Idea>, first_run: bool) -> Self {
        let store = IdeaStore::from_ideas(ideas);
        let current = store.active_index();
        Self {
            store,
            path: path.into(),
            current,
            first_run,
            unreadable: false,
        }
    }

    fn saved_highlight(&self) -> Option<usize> {
        let (index, description) = codec::read_highlight(&self.path)?;
        let idea = self.store.get(index)?;
        if idea.description == description && idea.in_progress {
            Some(index)
        } else {
            tracing::debug!(index, "Saved highlight no longer matches the list");
            None
        }
    }

    #[must_use]
    pub fn store(&self) -> &IdeaStore {
        &self.store
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the highlighted idea.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn current_idea(&self) -> Option<&Idea> {
        self.current.and_then(|index| self.store.get(index))
    }

    /// True when the backing file could not be read and nothing has been
    /// added since; the caller should offer to create an idea.
    #[must_use]
    pub fn is_first_run(&self) -> bool {
        self.first_run && self.store.is_empty()
    }

    /// Pick a different idea than the highlighted one, mark it in progress,
    /// and highlight it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if there are no ideas.
    pub fn choose(&mut self) -> Result<usize> {
        let index = self.store.pick_random(self.current)?;
        self.highlight(index)?;
        Ok(index)
    }

    /// Mark `index` in progress and highlight it.
    ///
    /// The previously highlighted idea keeps its in-progress flag.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not in the list.
    pub fn highlight(&mut self, index: usize) -> Result<()> {
        self.store.mark_in_progress(index)?;
        self.current = Some(index);
        Ok(())
    }

    /// Complete the first idea with this description.
    ///
    /// Clears the highlight when it pointed at the completed idea. Returns
    /// whether a matching idea was found.
    pub fn complete(&mut self, description: &str) -> bool {
        let found = self.store.mark_complete(description);
        if found && self.current_idea().is_some_and(|idea| idea.complete) {
            self.current = None;
        }
        found
    }

    /// Complete the highlighted idea, returning its description.
    ///
    /// Completes by position, so a duplicate description earlier in the
    /// list is left alone.
    pub fn complete_current(&mut self) -> Option<String> {
        let index = self.current?;
        let description = self.store.get(index)?.description.clone();
        self.store.mark_complete_at(index).ok()?;
        self.current = None;
        Some(description)
    }

    /// Append an idea.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the description is blank.
    pub fn add(&mut self, description: &str) -> Result<usize> {
        self.store.add_idea(description)
    }

    /// Write the whole list and the highlight back to disk.
    ///
    /// A file that existed but could not be read is first moved to a
    /// `.bak` sibling so its contents survive.
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` if the file cannot be backed up or written.
    pub fn save(&mut self) -> Result<()> {
        if self.unreadable && self.path.exists() {
            codec::back_up_file(&self.path)?;
        }
        self.unreadable = false;
        codec::write_file(&self.path, self.store.snapshot())?;
        let highlight = self
            .current
            .zip(self.current_idea())
            .map(|(index, idea)| (index, idea.description.as_str()));
        codec::write_highlight(&self.path, highlight)
    }

    /// Host signal that the session is leaving the foreground.
    ///
    /// Persists through the same path as [`Self::save`].
    ///
    /// # Errors
    ///
    /// Returns `StorageWrite` if the file cannot be written.
    pub fn suspend(&mut self) -> Result<()> {
        self.save()?;
        self.first_run = false;
        tracing::info!(
            path = %self.path.display(),
            count = self.store.len(),
            current = ?self.current,
            "Saved ideas"
        );
        Ok(())
    }
}
