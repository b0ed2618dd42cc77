use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_sheet, FilterCriteria};
use crate::store::ProgressStore;

/// One filter pass over the sheet. Visibility is a pure function of the
/// static catalog, the stored overrides, and the criteria.
pub fn run<S: ProgressStore>(
    store: &S,
    catalog: &Catalog,
    criteria: &FilterCriteria,
) -> Result<CmdResult> {
    let progress = store.load()?;
    let outcome = filter_sheet(catalog, &progress, criteria);
    Ok(CmdResult::default().with_outcome(outcome))
}
