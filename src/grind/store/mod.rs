//! # Storage Layer
//!
//! The [`ProgressStore`] trait is the persistence port for progress
//! overrides. The sheet logic never touches a storage medium directly: it
//! loads one document when a command starts and rewrites that same document
//! after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `progress.json`
//!   document in the grind data directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence
//!
//! ## Failure policy
//!
//! Malformed persisted data must never surface as an error: implementations
//! log a diagnostic, discard the document, and hand back an empty map. The
//! user loses nothing but the corrupt overrides; the sheet always renders.

use crate::error::Result;
use crate::progress::Progress;

pub mod fs;
pub mod memory;

/// Abstract interface for progress persistence.
pub trait ProgressStore {
    /// Load the full override map. A missing document yields an empty map;
    /// a malformed one is discarded with a logged warning.
    fn load(&self) -> Result<Progress>;

    /// Persist the full override map, replacing the previous document.
    /// Every mutation goes through here; there is no partial write.
    fn save(&mut self, progress: &Progress) -> Result<()>;
}
