use std::path::Path;

use anyhow::{bail, Result};
use clap::ValueEnum;

use super::{open_store, row_index};
use nextstep::{open_target, AttachmentKind};

#[derive(Clone, Copy, ValueEnum)]
pub enum Document {
    Resume,
    CoverLetter,
    Snapshot,
    /// The job's document directory
    Folder,
}

pub fn execute(config: Option<&Path>, row: usize, document: Document) -> Result<()> {
    let (store, _) = open_store(config)?;
    let index = row_index(row)?;
    let record = store.get(index)?;

    let kind = match document {
        Document::Resume => AttachmentKind::Resume,
        Document::CoverLetter => AttachmentKind::CoverLetter,
        Document::Snapshot => AttachmentKind::Snapshot,
        Document::Folder => {
            let directory = store.document_directory(index)?;
            open_target(&directory.to_string_lossy())?;
            return Ok(());
        }
    };

    let value = record.attachment(kind);
    if value.is_empty() {
        bail!("No {} attached to row {}", kind, row);
    }
    open_target(value)?;
    Ok(())
}

pub fn execute_link(config: Option<&Path>, row: usize) -> Result<()> {
    let (store, _) = open_store(config)?;
    let record = store.get(row_index(row)?)?;

    if record.candidate_home_link.is_empty() {
        bail!("No candidate home link for row {}", row);
    }
    open_target(&record.candidate_home_link)?;
    Ok(())
}
