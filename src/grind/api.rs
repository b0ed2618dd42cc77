//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all grind operations, regardless of the UI driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., `"3-12"` strings into [`ProgressKey`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`), no I/O, and
//! no presentation — it returns data structures, never strings for a
//! terminal.
//!
//! ## Generic Over ProgressStore
//!
//! `GrindApi<S: ProgressStore>` is generic over the persistence port:
//! - Production: `GrindApi<FileStore>`
//! - Testing: `GrindApi<InMemoryStore>`

use std::path::Path;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::commands;
use crate::error::{GrindError, Result};
use crate::filter::FilterCriteria;
use crate::progress::ProgressKey;
use crate::store::ProgressStore;
use crate::view::SheetState;

pub struct GrindApi<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> GrindApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, catalog: &Catalog, criteria: &FilterCriteria) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, catalog, criteria)
    }

    pub fn toggle_solved<I: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        keys: &[I],
    ) -> Result<commands::CmdResult> {
        let keys = parse_keys(keys)?;
        commands::toggle::solved(&mut self.store, catalog, &keys)
    }

    pub fn toggle_revision<I: AsRef<str>>(
        &mut self,
        catalog: &Catalog,
        keys: &[I],
    ) -> Result<commands::CmdResult> {
        let keys = parse_keys(keys)?;
        commands::toggle::revision(&mut self.store, catalog, &keys)
    }

    pub fn set_note(
        &mut self,
        catalog: &Catalog,
        key: &str,
        text: String,
    ) -> Result<commands::CmdResult> {
        let key = parse_key(key)?;
        commands::note::set(&mut self.store, catalog, key, text)
    }

    pub fn view_questions<I: AsRef<str>>(
        &self,
        catalog: &Catalog,
        keys: &[I],
    ) -> Result<commands::CmdResult> {
        let keys = parse_keys(keys)?;
        commands::view::run(&self.store, catalog, &keys)
    }

    pub fn random(&self, catalog: &Catalog, state: &mut SheetState) -> Result<commands::CmdResult> {
        commands::random::run(catalog, state, &mut rand::thread_rng())
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(config_dir, action)
    }
}

fn parse_key(input: &str) -> Result<ProgressKey> {
    ProgressKey::from_str(input).map_err(GrindError::Api)
}

fn parse_keys<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ProgressKey>> {
    inputs.iter().map(|s| parse_key(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
