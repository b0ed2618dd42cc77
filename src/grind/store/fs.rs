use std::fs;
use std::path::PathBuf;

use super::ProgressStore;
use crate::error::{GrindError, Result};
use crate::progress::Progress;

const PROGRESS_FILENAME: &str = "progress.json";

/// Production store: one JSON document under the grind data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn progress_path(&self) -> PathBuf {
        self.root.join(PROGRESS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GrindError::Io)?;
        }
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Result<Progress> {
        let path = self.progress_path();
        if !path.exists() {
            return Ok(Progress::new());
        }

        let raw = fs::read_to_string(&path).map_err(GrindError::Io)?;
        match serde_json::from_str(&raw) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                // Fail open: a corrupt document must not block the sheet.
                log::warn!(
                    "Discarding malformed progress at {}: {}",
                    path.display(),
                    e
                );
                Ok(Progress::new())
            }
        }
    }

    fn save(&mut self, progress: &Progress) -> Result<()> {
        self.ensure_dir()?;
        let raw = serde_json::to_string_pretty(progress).map_err(GrindError::Serialization)?;
        fs::write(self.progress_path(), raw).map_err(GrindError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{ProgressKey, ToggleField};

    #[test]
    fn missing_document_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist-yet"));
        let progress = store.load().unwrap();
        assert!(progress.is_empty());
    }

    #[test]
    fn note_text_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut progress = Progress::new();
        let note = "  two pointers — watch the off-by-one\nsecond line  ";
        progress.set_note(ProgressKey::new(1, 4), note);
        store.save(&progress).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded.entry(&ProgressKey::new(1, 4)).unwrap().note.as_deref(),
            Some(note)
        );
    }

    #[test]
    fn toggles_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut progress = Progress::new();
        progress.toggle(ProgressKey::new(2, 3), ToggleField::Solved, false);
        progress.toggle(ProgressKey::new(2, 3), ToggleField::Revision, false);
        store.save(&progress).unwrap();

        let loaded = store.load().unwrap();
        let entry = loaded.entry(&ProgressKey::new(2, 3)).unwrap();
        assert_eq!(entry.is_solved, Some(true));
        assert_eq!(entry.is_marked_for_revision, Some(true));
        assert!(entry.solved_at.is_some());
    }

    #[test]
    fn malformed_document_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        fs::write(store.progress_path(), "{ this is not json").unwrap();

        let progress = store.load().unwrap();
        assert!(progress.is_empty());
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.save(&Progress::new()).unwrap();
        assert!(root.join(PROGRESS_FILENAME).exists());
    }
}
