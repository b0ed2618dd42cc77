use crate::config::GrindConfig;
use crate::filter::{FilterOutcome, QuestionRow};

pub mod config;
pub mod list;
pub mod note;
pub mod random;
pub mod toggle;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Filter-pass output; `Some(NoMatches)` is the empty-state signal.
    pub outcome: Option<FilterOutcome>,
    /// Rows a command touched or looked up.
    pub rows: Vec<QuestionRow>,
    /// The random-question pick.
    pub spotlight: Option<QuestionRow>,
    pub config: Option<GrindConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: FilterOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_rows(mut self, rows: Vec<QuestionRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_spotlight(mut self, row: QuestionRow) -> Self {
        self.spotlight = Some(row);
        self
    }

    pub fn with_config(mut self, config: GrindConfig) -> Self {
        self.config = Some(config);
        self
    }
}
