use clap::{Parser, Subcommand};
use std::path::PathBuf;

use grind::filter::{RevisionFilter, StatusFilter};
use grind::model::{Difficulty, Platform};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "grind", version = get_version())]
#[command(about = "Track your progress through a DSA practice sheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a custom sheet file instead of the built-in one
    #[arg(long, global = true)]
    pub sheet: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List topics and their questions
    #[command(alias = "ls")]
    List {
        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Filter by status (solved, unsolved)
        #[arg(long)]
        status: Option<StatusFilter>,

        /// Filter by revision flag (marked, unmarked)
        #[arg(long)]
        revision: Option<RevisionFilter>,

        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Only questions with a link on this platform
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Only questions asked by this company
        #[arg(short, long)]
        company: Option<String>,

        /// Expand a topic by id (repeatable)
        #[arg(short, long = "open")]
        open: Vec<u32>,

        /// Expand every topic
        #[arg(short, long)]
        all: bool,
    },

    /// Toggle the solved flag for one or more questions
    #[command(alias = "s")]
    Solve {
        /// Question keys (e.g. 1-2 3-14)
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Toggle the marked-for-revision flag for one or more questions
    #[command(alias = "r")]
    Revise {
        /// Question keys (e.g. 1-2 3-14)
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Edit the note for a question
    #[command(alias = "n")]
    Note {
        /// Question key (e.g. 1-2)
        key: String,

        /// Set the note text directly instead of opening the editor
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Show full details for one or more questions
    #[command(alias = "v")]
    View {
        /// Question keys (e.g. 1-2 3-14)
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Pick a random question from the whole sheet
    Random,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., sheet)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
