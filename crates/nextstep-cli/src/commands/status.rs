use std::path::Path;

use anyhow::Result;

use super::{describe, open_store, parse_status, row_index};

pub fn execute(config: Option<&Path>, row: usize, status: &str, json: bool) -> Result<()> {
    let status = parse_status(status)?;
    let (mut store, _) = open_store(config)?;

    let record = store.set_status(row_index(row)?, status)?;

    if json {
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{}: {}", describe(&record), record.status);
        if let Some(submitted) = record.submitted_date {
            println!("  submitted: {}", submitted);
        }
    }
    Ok(())
}
