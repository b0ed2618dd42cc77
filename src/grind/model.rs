use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// The fixed set of practice platforms a question may link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Leetcode,
    Gfg,
    Hackerrank,
    Spoj,
    Ninja,
    Code,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Leetcode => "leetcode",
            Platform::Gfg => "gfg",
            Platform::Hackerrank => "hackerrank",
            Platform::Spoj => "spoj",
            Platform::Ninja => "ninja",
            Platform::Code => "code",
        }
    }

    /// Human-readable name for detail views.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Leetcode => "LeetCode",
            Platform::Gfg => "GeeksforGeeks",
            Platform::Hackerrank => "HackerRank",
            Platform::Spoj => "SPOJ",
            Platform::Ninja => "Coding Ninjas",
            Platform::Code => "Code",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leetcode" => Ok(Platform::Leetcode),
            "gfg" => Ok(Platform::Gfg),
            "hackerrank" => Ok(Platform::Hackerrank),
            "spoj" => Ok(Platform::Spoj),
            "ninja" => Ok(Platform::Ninja),
            "code" => Ok(Platform::Code),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// One practice question. Static, supplied by the sheet file; the
/// `is_solved` and `is_marked_for_revision` fields are only *defaults*,
/// overridden per-user by progress entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_solved: bool,
    #[serde(default)]
    pub is_marked_for_revision: bool,
    #[serde(default)]
    pub links: BTreeMap<Platform, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<String>,
}

/// A named group of questions. Question ids are unique within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: u32,
    pub name: String,
    pub questions: Vec<Question>,
}
