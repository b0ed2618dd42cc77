//! The static practice sheet.
//!
//! A [`Catalog`] is an ordered list of topics loaded from a JSON sheet file.
//! It is immutable at runtime: user state lives entirely in the progress
//! store and is layered on top at filter time.

use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;

use crate::error::{GrindError, Result};
use crate::model::{Question, Topic};
use crate::progress::ProgressKey;

const BUILTIN_SHEET: &str = include_str!("../../data/sheet.json");

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_json(BUILTIN_SHEET).expect("built-in sheet is valid"));

#[derive(Debug, Clone)]
pub struct Catalog {
    pub topics: Vec<Topic>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let topics: Vec<Topic> = serde_json::from_str(raw)?;
        Ok(Self { topics })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(GrindError::Io)?;
        Self::from_json(&raw)
            .map_err(|e| GrindError::Sheet(format!("{}: {}", path.display(), e)))
    }

    /// The sheet compiled into the binary, used when no custom sheet is
    /// configured.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn topic(&self, id: u32) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn question(&self, key: &ProgressKey) -> Option<(&Topic, &Question)> {
        let topic = self.topic(key.topic)?;
        let question = topic.questions.iter().find(|q| q.id == key.question)?;
        Some((topic, question))
    }

    /// Flattened view over every question, in sheet order.
    pub fn all_questions(&self) -> impl Iterator<Item = (&Topic, &Question)> {
        self.topics
            .iter()
            .flat_map(|t| t.questions.iter().map(move |q| (t, q)))
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }
}
