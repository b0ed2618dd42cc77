use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrindError, Result};
use crate::filter::QuestionRow;
use crate::progress::ProgressKey;
use crate::store::ProgressStore;

/// Replaces the note for one question. Edits are live: whatever text
/// arrives here is what gets stored, flags untouched.
pub fn set<S: ProgressStore>(
    store: &mut S,
    catalog: &Catalog,
    key: ProgressKey,
    text: String,
) -> Result<CmdResult> {
    let (_, question) = catalog
        .question(&key)
        .ok_or(GrindError::QuestionNotFound(key))?;

    let mut progress = store.load()?;
    progress.set_note(key, text);
    store.save(&progress)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note saved ({}): {}",
        key, question.title
    )));
    result
        .rows
        .push(QuestionRow::resolved(key, question, progress.entry(&key)));
    Ok(result)
}
