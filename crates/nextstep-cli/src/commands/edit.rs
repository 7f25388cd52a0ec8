use std::path::Path;

use anyhow::Result;

use super::{open_store, parse_status, report, row_index, EditArgs};
use nextstep::JobDraft;

/// Fields not given on the command line keep their current value.
pub fn execute(config: Option<&Path>, args: EditArgs, json: bool) -> Result<()> {
    let (mut store, _) = open_store(config)?;
    let index = row_index(args.row)?;

    let mut draft = JobDraft::from_record(store.get(index)?);
    if let Some(position) = args.position {
        draft.position = position;
    }
    if let Some(company) = args.company {
        draft.company = company;
    }
    if let Some(id) = args.id {
        draft.id = id;
    }
    if let Some(link) = args.link {
        draft.candidate_home_link = link;
    }
    if let Some(status) = args.status {
        draft.status = parse_status(&status)?;
    }
    if let Some(snapshot) = args.snapshot {
        draft.snapshot = snapshot;
    }
    if let Some(resume) = args.resume {
        draft.resume = resume;
    }
    if let Some(cover_letter) = args.cover_letter {
        draft.cover_letter = cover_letter;
    }

    let outcome = store.edit_job(index, &draft)?;
    report("Updated", &outcome, json)
}
