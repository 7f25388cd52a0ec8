use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::{open_store, parse_status};
use nextstep::{JobFilter, JobRecord};

#[derive(Serialize)]
struct Row<'a> {
    row: usize,
    #[serde(flatten)]
    record: &'a JobRecord,
}

pub fn execute(
    config: Option<&Path>,
    hide_rejected: bool,
    show_rejected: bool,
    status: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let (store, config) = open_store(config)?;

    let filter = JobFilter {
        hide_rejected: hide_rejected || (config.hide_rejected && !show_rejected),
        status: status.as_deref().map(parse_status).transpose()?,
        search,
    };
    let rows = filter.apply(store.records());

    if json {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|(index, record)| Row {
                row: index + 1,
                record,
            })
            .collect();
        println!("{}", serde_json::to_string(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No jobs found");
        return Ok(());
    }

    println!(
        "{:<4} {:<24} {:<20} {:<12} {:<12} {:<10} {:<10} DOCS",
        "ROW", "POSITION", "COMPANY", "ID", "STATUS", "UPDATED", "SUBMITTED"
    );

    for (index, record) in rows {
        println!(
            "{:<4} {:<24} {:<20} {:<12} {:<12} {:<10} {:<10} {}",
            index + 1,
            truncate(&record.position, 24),
            truncate(&record.company, 20),
            truncate(&record.id, 12),
            record.status.label(),
            date_or_dash(record.last_updated),
            date_or_dash(record.submitted_date),
            documents(record)
        );
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

fn date_or_dash(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Initials of the attached documents: R(esume), C(over letter), S(napshot).
fn documents(record: &JobRecord) -> String {
    let mut docs = String::new();
    for (value, mark) in [
        (&record.resume_path, 'R'),
        (&record.cover_letter_path, 'C'),
        (&record.snapshot_path, 'S'),
    ] {
        docs.push(if value.is_empty() { '-' } else { mark });
    }
    docs
}
