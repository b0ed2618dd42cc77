use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrindError, Result};
use crate::filter::QuestionRow;
use crate::progress::{ProgressKey, ToggleField};
use crate::store::ProgressStore;

pub fn solved<S: ProgressStore>(
    store: &mut S,
    catalog: &Catalog,
    keys: &[ProgressKey],
) -> Result<CmdResult> {
    toggle(store, catalog, keys, ToggleField::Solved)
}

pub fn revision<S: ProgressStore>(
    store: &mut S,
    catalog: &Catalog,
    keys: &[ProgressKey],
) -> Result<CmdResult> {
    toggle(store, catalog, keys, ToggleField::Revision)
}

fn toggle<S: ProgressStore>(
    store: &mut S,
    catalog: &Catalog,
    keys: &[ProgressKey],
    field: ToggleField,
) -> Result<CmdResult> {
    let mut progress = store.load()?;
    let mut result = CmdResult::default();

    for key in keys {
        let (_, question) = catalog
            .question(key)
            .ok_or(GrindError::QuestionNotFound(*key))?;

        let default = match field {
            ToggleField::Solved => question.is_solved,
            ToggleField::Revision => question.is_marked_for_revision,
        };
        let now_set = progress.toggle(*key, field, default);
        // Full rewrite after every mutation.
        store.save(&progress)?;

        let verb = match (field, now_set) {
            (ToggleField::Solved, true) => "solved",
            (ToggleField::Solved, false) => "unsolved",
            (ToggleField::Revision, true) => "marked for revision",
            (ToggleField::Revision, false) => "unmarked for revision",
        };
        result.add_message(CmdMessage::success(format!(
            "Question {} ({}): {}",
            verb, key, question.title
        )));
        result
            .rows
            .push(QuestionRow::resolved(*key, question, progress.entry(key)));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_catalog;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn solving_persists_and_stamps() {
        let mut store = InMemoryStore::new();
        let catalog = sample_catalog();
        let key = ProgressKey::new(1, 1);

        let result = solved(&mut store, &catalog, &[key]).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert!(result.rows[0].solved);
        assert!(result.rows[0].solved_at.is_some());
        assert!(result.messages[0].content.contains("Two Sum"));

        let saved = store.load().unwrap();
        assert_eq!(saved.entry(&key).unwrap().is_solved, Some(true));
    }

    #[test]
    fn toggling_twice_round_trips_through_the_store() {
        let mut store = InMemoryStore::new();
        let catalog = sample_catalog();
        let key = ProgressKey::new(1, 1);

        solved(&mut store, &catalog, &[key]).unwrap();
        let result = solved(&mut store, &catalog, &[key]).unwrap();
        assert!(!result.rows[0].solved);
        assert!(result.messages[0].content.contains("unsolved"));

        // The stamp from the first toggle survives the second.
        let saved = store.load().unwrap();
        assert!(saved.entry(&key).unwrap().solved_at.is_some());
    }

    #[test]
    fn revision_toggle_is_independent_of_solved() {
        let mut store = InMemoryStore::new();
        let catalog = sample_catalog();
        let key = ProgressKey::new(2, 1);

        let result = revision(&mut store, &catalog, &[key]).unwrap();
        assert!(result.rows[0].marked);
        assert!(!result.rows[0].solved);

        let saved = store.load().unwrap();
        let entry = saved.entry(&key).unwrap();
        assert_eq!(entry.is_marked_for_revision, Some(true));
        assert!(entry.is_solved.is_none());
    }

    #[test]
    fn multiple_keys_toggle_in_one_call() {
        let mut store = InMemoryStore::new();
        let catalog = sample_catalog();
        let keys = [ProgressKey::new(1, 1), ProgressKey::new(2, 2)];

        let result = solved(&mut store, &catalog, &keys).unwrap();
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let mut store = InMemoryStore::new();
        let catalog = sample_catalog();

        let err = solved(&mut store, &catalog, &[ProgressKey::new(9, 9)]).unwrap_err();
        assert!(matches!(err, GrindError::QuestionNotFound(_)));
    }
}
