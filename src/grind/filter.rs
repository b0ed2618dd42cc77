//! # Filter Engine
//!
//! A pure function from (static catalog, progress overrides, filter
//! criteria) to the visible subset of the sheet. Visibility depends on
//! nothing else: re-running the filter with the same inputs always yields
//! the same outcome, and the whole sheet is recomputed on every pass. At
//! sheet sizes of tens to low hundreds of questions this is deliberate;
//! incremental updates would buy nothing.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::model::{Difficulty, Platform, Question};
use crate::progress::{Progress, ProgressEntry, ProgressKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Solved,
    Unsolved,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(StatusFilter::Any),
            "solved" => Ok(StatusFilter::Solved),
            "unsolved" => Ok(StatusFilter::Unsolved),
            other => Err(format!("Unknown status filter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisionFilter {
    #[default]
    Any,
    Marked,
    Unmarked,
}

impl FromStr for RevisionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(RevisionFilter::Any),
            "marked" => Ok(RevisionFilter::Marked),
            "unmarked" => Ok(RevisionFilter::Unmarked),
            other => Err(format!("Unknown revision filter: {}", other)),
        }
    }
}

/// The six filter inputs. Owned by the caller; the engine only consumes
/// them and has no setters.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub difficulty: Option<Difficulty>,
    pub status: StatusFilter,
    pub revision: RevisionFilter,
    pub search: Option<String>,
    pub platform: Option<Platform>,
    pub company: Option<String>,
}

impl FilterCriteria {
    /// All six clauses AND-ed; an unset criterion passes through.
    pub fn matches(&self, question: &Question, entry: Option<&ProgressEntry>) -> bool {
        let solved = entry.map_or(question.is_solved, |e| e.effective_solved(question));
        let marked = entry.map_or(question.is_marked_for_revision, |e| {
            e.effective_revision(question)
        });

        if let Some(difficulty) = self.difficulty {
            if question.difficulty != difficulty {
                return false;
            }
        }
        match self.status {
            StatusFilter::Solved if !solved => return false,
            StatusFilter::Unsolved if solved => return false,
            _ => {}
        }
        match self.revision {
            RevisionFilter::Marked if !marked => return false,
            RevisionFilter::Unmarked if marked => return false,
            _ => {}
        }
        if let Some(term) = &self.search {
            if !question
                .title
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        if let Some(platform) = self.platform {
            if !question.links.contains_key(&platform) {
                return false;
            }
        }
        if let Some(company) = &self.company {
            // A question with no company tags fails any company filter.
            if !question.companies.iter().any(|c| c == company) {
                return false;
            }
        }
        true
    }
}

/// A question prepared for rendering: static data plus resolved effective
/// state, so the presentation layer never consults the store.
#[derive(Debug, Clone)]
pub struct QuestionRow {
    pub key: ProgressKey,
    pub question: Question,
    pub solved: bool,
    pub marked: bool,
    pub note: Option<String>,
    pub solved_at: Option<DateTime<Utc>>,
}

impl QuestionRow {
    pub fn resolved(key: ProgressKey, question: &Question, entry: Option<&ProgressEntry>) -> Self {
        Self {
            key,
            question: question.clone(),
            solved: entry.map_or(question.is_solved, |e| e.effective_solved(question)),
            marked: entry.map_or(question.is_marked_for_revision, |e| {
                e.effective_revision(question)
            }),
            note: entry.and_then(|e| e.note.clone()),
            solved_at: entry.and_then(|e| e.solved_at),
        }
    }

    /// A spotlight row reflects static defaults only.
    pub fn from_defaults(key: ProgressKey, question: &Question) -> Self {
        Self {
            key,
            question: question.clone(),
            solved: question.is_solved,
            marked: question.is_marked_for_revision,
            note: None,
            solved_at: None,
        }
    }

    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// One topic with its matching rows and solve counts. The counts cover the
/// topic's *full* question list (overrides applied), not just the rows that
/// survived filtering.
#[derive(Debug, Clone)]
pub struct TopicSection {
    pub id: u32,
    pub name: String,
    pub rows: Vec<QuestionRow>,
    pub solved: usize,
    pub total: usize,
}

impl TopicSection {
    pub fn completed(&self) -> bool {
        self.solved == self.total
    }
}

/// Result of a filter pass. Zero matches across the whole sheet is a
/// distinct signal so the caller renders a single empty-state block rather
/// than an empty list of sections.
#[derive(Debug, Clone)]
pub enum FilterOutcome {
    NoMatches,
    Matches {
        total: usize,
        sections: Vec<TopicSection>,
    },
}

impl fmt::Display for FilterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOutcome::NoMatches => write!(f, "no matches"),
            FilterOutcome::Matches { total, sections } => {
                write!(f, "{} matches in {} topics", total, sections.len())
            }
        }
    }
}

/// Runs the matching predicate over every question. Topics with no
/// matching question are dropped from the output entirely.
pub fn filter_sheet(
    catalog: &Catalog,
    progress: &Progress,
    criteria: &FilterCriteria,
) -> FilterOutcome {
    let mut sections = Vec::new();
    let mut total = 0;

    for topic in &catalog.topics {
        let rows: Vec<QuestionRow> = topic
            .questions
            .iter()
            .filter_map(|question| {
                let key = ProgressKey::new(topic.id, question.id);
                let entry = progress.entry(&key);
                if criteria.matches(question, entry) {
                    Some(QuestionRow::resolved(key, question, entry))
                } else {
                    None
                }
            })
            .collect();

        if rows.is_empty() {
            continue;
        }
        total += rows.len();

        let solved = topic
            .questions
            .iter()
            .filter(|question| {
                let key = ProgressKey::new(topic.id, question.id);
                progress
                    .entry(&key)
                    .map_or(question.is_solved, |e| e.effective_solved(question))
            })
            .count();

        sections.push(TopicSection {
            id: topic.id,
            name: topic.name.clone(),
            rows,
            solved,
            total: topic.questions.len(),
        });
    }

    if total == 0 {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches { total, sections }
    }
}
