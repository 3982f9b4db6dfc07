//! In-memory idea list and its transition rules.
//!
//! The store knows nothing about files or presentation; callers load a
//! decoded list, mutate it through the operations here, and read it back
//! with [`IdeaStore::snapshot`] to persist or render.

use rand::Rng;

use crate::error::{IdeaError, Result};
use crate::model::Idea;

/// Ordered list of ideas, in file line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaStore {
    ideas: Vec<Idea>,
}

impl IdeaStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { ideas: Vec::new() }
    }

    #[must_use]
    pub fn from_ideas(ideas: Vec<Idea>) -> Self {
        Self { ideas }
    }

    /// Replace the whole list. Records are taken as-is.
    pub fn load(&mut self, records: Vec<Idea>) {
        tracing::debug!(count = records.len(), "Replacing idea list");
        self.ideas = records;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Read-only view of the list for persistence and rendering.
    #[must_use]
    pub fn snapshot(&self) -> &[Idea] {
        &self.ideas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Idea> {
        self.ideas.get(index)
    }

    /// First idea, in list order, flagged in progress.
    #[must_use]
    pub fn find_active_in_progress(&self) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.in_progress)
    }

    /// Position of [`Self::find_active_in_progress`].
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.ideas.iter().position(|idea| idea.in_progress)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Pick a uniformly random index, avoiding `excluding` when possible.
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if there are no ideas.
    pub fn pick_random(&self, excluding: Option<usize>) -> Result<usize> {
        self.pick_random_with(&mut rand::rng(), excluding)
    }

    /// [`Self::pick_random`] with a caller-supplied generator.
    ///
    /// Rejection sampling over `[0, len)`: draws repeat until they differ
    /// from `excluding`. A single-element list ignores the exclusion.
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if there are no ideas.
    pub fn pick_random_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        excluding: Option<usize>,
    ) -> Result<usize> {
        let len = self.ideas.len();
        if len == 0 {
            return Err(IdeaError::EmptyList);
        }
        if len == 1 {
            return Ok(0);
        }

        let mut draws = 0_u32;
        let index = loop {
            draws += 1;
            let candidate = rng.random_range(0..len);
            if Some(candidate) != excluding {
                break candidate;
            }
        };
        tracing::debug!(index, ?excluding, draws, "Picked random idea");
        Ok(index)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Flag the idea at `index` as in progress.
    ///
    /// Other ideas keep their flags, so several may be in progress at once.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the end of the list.
    pub fn mark_in_progress(&mut self, index: usize) -> Result<()> {
        let len = self.ideas.len();
        let idea = self
            .ideas
            .get_mut(index)
            .ok_or(IdeaError::IndexOutOfRange { index, len })?;
        idea.in_progress = true;
        tracing::debug!(index, description = %idea.description, "Marked idea in progress");
        Ok(())
    }

    /// Complete the first idea whose description matches exactly.
    ///
    /// Sets `complete` and clears `in_progress`. Returns `false`, leaving
    /// the list untouched, when nothing matches.
    pub fn mark_complete(&mut self, description: &str) -> bool {
        let Some(index) = self
            .ideas
            .iter()
            .position(|idea| idea.description == description)
        else {
            tracing::debug!(description, "No idea to complete");
            return false;
        };
        self.mark_complete_at(index).is_ok()
    }

    /// Complete the idea at `index`, whatever its description.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the end of the list.
    pub fn mark_complete_at(&mut self, index: usize) -> Result<()> {
        let len = self.ideas.len();
        let idea = self
            .ideas
            .get_mut(index)
            .ok_or(IdeaError::IndexOutOfRange { index, len })?;
        idea.complete = true;
        idea.in_progress = false;
        tracing::debug!(index, description = %idea.description, "Marked idea complete");
        Ok(())
    }

    /// Append a new idea and return its index.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the description is empty or whitespace.
    pub fn add_idea(&mut self, description: &str) -> Result<usize> {
        if description.trim().is_empty() {
            return Err(IdeaError::validation("description", "cannot be empty"));
        }
        self.ideas.push(Idea::new(description));
        let index = self.ideas.len() - 1;
        tracing::debug!(index, description, "Added idea");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store_of(descriptions: &[&str]) -> IdeaStore {
        IdeaStore::from_ideas(descriptions.iter().map(|d| Idea::new(*d)).collect())
    }

    #[test]
    fn test_load_replaces_list() {
        let mut store = store_of(&["old"]);
        store.load(vec![Idea::new("a"), Idea::new("b")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].description, "a");
    }

    #[test]
    fn test_pick_random_empty_list() {
        let store = IdeaStore::new();
        assert!(matches!(store.pick_random(None), Err(IdeaError::EmptyList)));
        assert!(matches!(
            store.pick_random(Some(0)),
            Err(IdeaError::EmptyList)
        ));
    }

    #[test]
    fn test_pick_random_single_idea_ignores_exclusion() {
        let store = store_of(&["only"]);
        assert_eq!(store.pick_random(Some(0)).unwrap(), 0);
        assert_eq!(store.pick_random(Some(7)).unwrap(), 0);
        assert_eq!(store.pick_random(None).unwrap(), 0);
    }

    #[test]
    fn test_pick_random_two_ideas_alternates() {
        let store = store_of(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(store.pick_random_with(&mut rng, Some(0)).unwrap(), 1);
            assert_eq!(store.pick_random_with(&mut rng, Some(1)).unwrap(), 0);
        }
    }

    #[test]
    fn test_pick_random_is_uniform_over_remaining() {
        let store = store_of(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 40_000;
        let mut counts = [0_usize; 5];
        for _ in 0..trials {
            counts[store.pick_random_with(&mut rng, Some(2)).unwrap()] += 1;
        }

        assert_eq!(counts[2], 0);
        let expected = trials as f64 / 4.0;
        for (index, &count) in counts.iter().enumerate() {
            if index == 2 {
                continue;
            }
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "index {index} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_pick_random_out_of_range_exclusion_is_harmless() {
        let store = store_of(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(store.pick_random_with(&mut rng, Some(10)).unwrap() < 3);
        }
    }

    #[test]
    fn test_mark_in_progress_keeps_earlier_flags() {
        let mut store = store_of(&["a", "b", "c"]);
        store.mark_in_progress(0).unwrap();
        store.mark_in_progress(2).unwrap();

        let flags: Vec<bool> = store.snapshot().iter().map(|i| i.in_progress).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(store.find_active_in_progress().unwrap().description, "a");
        assert_eq!(store.active_index(), Some(0));
    }

    #[test]
    fn test_mark_in_progress_out_of_range() {
        let mut store = store_of(&["a"]);
        let err = store.mark_in_progress(3).unwrap_err();
        assert!(matches!(
            err,
            IdeaError::IndexOutOfRange { index: 3, len: 1 }
        ));
        assert!(!store.snapshot()[0].in_progress);
    }

    #[test]
    fn test_mark_complete_clears_in_progress() {
        let mut store = store_of(&["a", "b"]);
        store.mark_in_progress(1).unwrap();

        assert!(store.mark_complete("b"));
        let b = &store.snapshot()[1];
        assert!(b.complete);
        assert!(!b.in_progress);
        assert!(store.find_active_in_progress().is_none());
    }

    #[test]
    fn test_mark_complete_without_match_is_noop() {
        let mut store = store_of(&["a", "b"]);
        store.mark_in_progress(0).unwrap();
        let before = store.clone();

        assert!(!store.mark_complete("X"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_mark_complete_only_first_duplicate() {
        let mut store = store_of(&["dup", "dup"]);
        assert!(store.mark_complete("dup"));
        assert!(store.snapshot()[0].complete);
        assert!(!store.snapshot()[1].complete);
    }

    #[test]
    fn test_mark_complete_at_targets_one_duplicate() {
        let mut store = store_of(&["dup", "dup"]);
        store.mark_in_progress(0).unwrap();
        store.mark_in_progress(1).unwrap();

        store.mark_complete_at(1).unwrap();
        assert!(store.snapshot()[0].in_progress && !store.snapshot()[0].complete);
        assert!(store.snapshot()[1].complete && !store.snapshot()[1].in_progress);
        assert!(matches!(
            store.mark_complete_at(2),
            Err(IdeaError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_add_idea_appends() {
        let mut store = store_of(&["a"]);
        let index = store.add_idea("b").unwrap();
        assert_eq!(index, 1);
        assert_eq!(store.snapshot()[1], Idea::new("b"));
    }

    #[test]
    fn test_add_blank_idea_rejected() {
        let mut store = store_of(&["a"]);
        for blank in ["", "   ", "\t\n"] {
            let err = store.add_idea(blank).unwrap_err();
            assert!(matches!(err, IdeaError::Validation { .. }));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_fresh_legacy_list_has_no_active_idea() {
        let store = IdeaStore::from_ideas(crate::codec::decode("A\nB\nC\n"));
        assert_eq!(store.len(), 3);
        assert!(store.find_active_in_progress().is_none());
        assert_eq!(store.active_index(), None);
    }

    proptest! {
        #[test]
        fn prop_pick_never_returns_excluded(len in 2_usize..50, seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
            let store = IdeaStore::from_ideas((0..len).map(|i| Idea::new(i.to_string())).collect());
            let excluded = pick.index(len);
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..20 {
                let index = store.pick_random_with(&mut rng, Some(excluded)).unwrap();
                prop_assert_ne!(index, excluded);
                prop_assert!(index < len);
            }
        }
    }
}
