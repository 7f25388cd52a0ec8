use std::path::Path;

use anyhow::Result;

use super::{open_store, parse_status, report, AddArgs};
use nextstep::JobDraft;

pub fn execute(config: Option<&Path>, args: AddArgs, json: bool) -> Result<()> {
    let (mut store, _) = open_store(config)?;

    let draft = JobDraft {
        position: args.position,
        company: args.company,
        id: args.id,
        candidate_home_link: args.link,
        status: parse_status(&args.status)?,
        snapshot: args.snapshot,
        resume: args.resume,
        cover_letter: args.cover_letter,
    };

    let outcome = store.add_job(&draft)?;
    report("Added", &outcome, json)
}
