//! Per-question override state.
//!
//! A [`ProgressEntry`] layers user state (solved, marked for revision, note,
//! solved-at timestamp) on top of a question's static defaults. Entries are
//! addressed by the composite `"{topicId}-{questionId}"` key and accumulate
//! monotonically: keys are never removed, values are overwritten in place.

use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::model::Question;

/// Composite address of a progress entry, rendered as `"{topic}-{question}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressKey {
    pub topic: u32,
    pub question: u32,
}

impl ProgressKey {
    pub fn new(topic: u32, question: u32) -> Self {
        Self { topic, question }
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.topic, self.question)
    }
}

impl FromStr for ProgressKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (topic, question) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid question key: {}", s))?;
        let topic = topic
            .parse()
            .map_err(|_| format!("Invalid question key: {}", s))?;
        let question = question
            .parse()
            .map_err(|_| format!("Invalid question key: {}", s))?;
        Ok(Self { topic, question })
    }
}

// Serialized as the composite string so it can be a JSON map key.
impl Serialize for ProgressKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProgressKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Override value if present, else the question's static default.
pub fn effective<T>(override_value: Option<T>, default: T) -> T {
    override_value.unwrap_or(default)
}

/// User state for one question. Absent fields fall back to the question's
/// static defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_solved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_marked_for_revision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<DateTime<Utc>>,
}

impl ProgressEntry {
    pub fn effective_solved(&self, question: &Question) -> bool {
        effective(self.is_solved, question.is_solved)
    }

    pub fn effective_revision(&self, question: &Question) -> bool {
        effective(self.is_marked_for_revision, question.is_marked_for_revision)
    }

    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// Which boolean field a toggle operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleField {
    Solved,
    Revision,
}

/// The full override map for a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    entries: BTreeMap<ProgressKey, ProgressEntry>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, key: &ProgressKey) -> Option<&ProgressEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flips the effective value of a boolean field. `default` is the
    /// question's static flag, consulted when no override exists yet.
    ///
    /// A solved transition from false to true stamps `solved_at`; the
    /// reverse transition leaves any existing stamp untouched. Returns the
    /// new effective value. No other key is affected.
    pub fn toggle(&mut self, key: ProgressKey, field: ToggleField, default: bool) -> bool {
        let entry = self.entries.entry(key).or_default();
        match field {
            ToggleField::Solved => {
                let current = effective(entry.is_solved, default);
                entry.is_solved = Some(!current);
                if !current {
                    entry.solved_at = Some(Utc::now());
                }
                !current
            }
            ToggleField::Revision => {
                let current = effective(entry.is_marked_for_revision, default);
                entry.is_marked_for_revision = Some(!current);
                !current
            }
        }
    }

    /// Replaces the note for `key`, leaving the entry's flags untouched.
    pub fn set_note(&mut self, key: ProgressKey, text: impl Into<String>) {
        let entry = self.entries.entry(key).or_default();
        entry.note = Some(text.into());
    }
}
