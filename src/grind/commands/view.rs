use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{GrindError, Result};
use crate::filter::QuestionRow;
use crate::progress::ProgressKey;
use crate::store::ProgressStore;

pub fn run<S: ProgressStore>(
    store: &S,
    catalog: &Catalog,
    keys: &[ProgressKey],
) -> Result<CmdResult> {
    let progress = store.load()?;
    let mut rows = Vec::with_capacity(keys.len());

    for key in keys {
        let (_, question) = catalog
            .question(key)
            .ok_or(GrindError::QuestionNotFound(*key))?;
        rows.push(QuestionRow::resolved(*key, question, progress.entry(key)));
    }

    Ok(CmdResult::default().with_rows(rows))
}
