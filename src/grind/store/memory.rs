use super::ProgressStore;
use crate::error::Result;
use crate::progress::Progress;

/// In-memory store for tests. Holds whatever was last saved; nothing
/// outlives the instance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Progress,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: Progress) -> Self {
        Self { saved: progress }
    }
}

impl ProgressStore for InMemoryStore {
    fn load(&self) -> Result<Progress> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, progress: &Progress) -> Result<()> {
        self.saved = progress.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::catalog::Catalog;
    use crate::model::{Difficulty, Platform, Question, Topic};
    use std::collections::BTreeMap;

    pub fn question(id: u32, title: &str, difficulty: Difficulty, solved: bool) -> Question {
        Question {
            id,
            title: title.to_string(),
            difficulty,
            is_solved: solved,
            is_marked_for_revision: false,
            links: BTreeMap::new(),
            solution_link: None,
            companies: Vec::new(),
        }
    }

    /// Two topics, four questions; "Two Sum" carries a leetcode link and a
    /// company tag so platform/company filters have something to bite on.
    pub fn sample_catalog() -> Catalog {
        let mut two_sum = question(1, "Two Sum", Difficulty::Easy, false);
        two_sum.links.insert(
            Platform::Leetcode,
            "https://leetcode.com/problems/two-sum/".to_string(),
        );
        two_sum.companies = vec!["Google".to_string()];

        Catalog {
            topics: vec![
                Topic {
                    id: 1,
                    name: "Arrays".to_string(),
                    questions: vec![
                        two_sum,
                        question(2, "Trapping Rain Water", Difficulty::Hard, true),
                    ],
                },
                Topic {
                    id: 2,
                    name: "Strings".to_string(),
                    questions: vec![
                        question(1, "Valid Anagram", Difficulty::Easy, false),
                        question(2, "Minimum Window Substring", Difficulty::Hard, false),
                    ],
                },
            ],
        }
    }
}
