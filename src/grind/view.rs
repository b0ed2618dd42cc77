//! Per-session view state: which topic sections are expanded, which note
//! editor is open, and the current random spotlight. None of this is
//! persisted; it exists for a single render pass.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::progress::ProgressKey;

#[derive(Debug, Default)]
pub struct SheetState {
    open_topics: HashSet<u32>,
    active_note: Option<ProgressKey>,
    spotlight: Option<ProgressKey>,
}

impl SheetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the topic to the open set, or removes it if already open.
    /// Every topic starts collapsed.
    pub fn toggle_topic(&mut self, id: u32) {
        if !self.open_topics.insert(id) {
            self.open_topics.remove(&id);
        }
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open_topics.contains(&id)
    }

    pub fn open_all(&mut self, catalog: &Catalog) {
        for topic in &catalog.topics {
            self.open_topics.insert(topic.id);
        }
    }

    /// At most one note editor is open at a time; opening a second one
    /// replaces the first.
    pub fn open_note(&mut self, key: ProgressKey) {
        self.active_note = Some(key);
    }

    pub fn close_note(&mut self) {
        self.active_note = None;
    }

    pub fn active_note(&self) -> Option<ProgressKey> {
        self.active_note
    }

    /// Draws uniformly from the flattened catalog, ignoring any filters.
    /// The pick replaces the previous spotlight and sticks until the next
    /// draw.
    pub fn pick_spotlight<R: Rng>(&mut self, catalog: &Catalog, rng: &mut R) -> Option<ProgressKey> {
        let keys: Vec<ProgressKey> = catalog
            .all_questions()
            .map(|(topic, question)| ProgressKey::new(topic.id, question.id))
            .collect();
        self.spotlight = keys.choose(rng).copied();
        self.spotlight
    }

    pub fn spotlight(&self) -> Option<ProgressKey> {
        self.spotlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn topics_start_collapsed_and_toggle_independently() {
        let mut state = SheetState::new();
        assert!(!state.is_open(1));
        assert!(!state.is_open(2));

        state.toggle_topic(1);
        assert!(state.is_open(1));
        assert!(!state.is_open(2));

        state.toggle_topic(1);
        assert!(!state.is_open(1));
    }

    #[test]
    fn one_note_editor_at_a_time() {
        let mut state = SheetState::new();
        assert!(state.active_note().is_none());

        state.open_note(ProgressKey::new(1, 1));
        state.open_note(ProgressKey::new(2, 3));
        assert_eq!(state.active_note(), Some(ProgressKey::new(2, 3)));

        state.close_note();
        assert!(state.active_note().is_none());
    }

    #[test]
    fn spotlight_picks_a_real_question_and_persists() {
        let catalog = Catalog::builtin();
        let mut state = SheetState::new();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = state.pick_spotlight(catalog, &mut rng).unwrap();
        assert!(catalog.question(&picked).is_some());
        assert_eq!(state.spotlight(), Some(picked));

        // A second draw replaces the spotlight with another valid key.
        let second = state.pick_spotlight(catalog, &mut rng).unwrap();
        assert!(catalog.question(&second).is_some());
        assert_eq!(state.spotlight(), Some(second));
    }

    #[test]
    fn spotlight_on_an_empty_catalog_is_none() {
        let catalog = Catalog { topics: Vec::new() };
        let mut state = SheetState::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(state.pick_spotlight(&catalog, &mut rng).is_none());
        assert!(state.spotlight().is_none());
    }
}
