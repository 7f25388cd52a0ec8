use std::path::Path;

use anyhow::Result;
use nextstep::DeleteOutcome;

use super::{describe, open_store, row_index};

pub fn execute(config: Option<&Path>, row: usize, purge: bool, json: bool) -> Result<()> {
    let (mut store, _) = open_store(config)?;

    let outcome = store.delete_job(row_index(row)?, !purge)?;

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        print_outcome(&outcome, purge);
    }

    if let Some(error) = &outcome.removal_error {
        eprintln!(
            "warning: folder {} was not removed: {}",
            outcome.directory.display(),
            error
        );
    }
    Ok(())
}

fn print_outcome(outcome: &DeleteOutcome, purge: bool) {
    println!("Deleted {}", describe(&outcome.record));
    if outcome.directory_removed {
        println!("  removed {}", outcome.directory.display());
    } else if purge && outcome.removal_error.is_none() {
        println!("  no folder at {}", outcome.directory.display());
    } else if purge {
        println!("  folder left at {}", outcome.directory.display());
    } else {
        println!("  kept {}", outcome.directory.display());
    }
}
