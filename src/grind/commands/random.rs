use rand::Rng;

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrindError, Result};
use crate::filter::QuestionRow;
use crate::view::SheetState;

/// Draws one question uniformly from the whole sheet, ignoring filters.
/// The spotlight row reflects static defaults only; it never consults the
/// progress store.
pub fn run<R: Rng>(catalog: &Catalog, state: &mut SheetState, rng: &mut R) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match state.pick_spotlight(catalog, rng) {
        Some(key) => {
            let (_, question) = catalog
                .question(&key)
                .ok_or(GrindError::QuestionNotFound(key))?;
            result = result.with_spotlight(QuestionRow::from_defaults(key, question));
        }
        None => result.add_message(CmdMessage::warning("The sheet has no questions.")),
    }

    Ok(result)
}
