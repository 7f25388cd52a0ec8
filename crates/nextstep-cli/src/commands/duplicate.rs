use std::path::Path;

use anyhow::Result;

use super::{open_store, report, row_index};

pub fn execute(config: Option<&Path>, row: usize, json: bool) -> Result<()> {
    let (mut store, _) = open_store(config)?;

    let outcome = store.duplicate_job(row_index(row)?)?;
    report("Duplicated into", &outcome, json)
}
