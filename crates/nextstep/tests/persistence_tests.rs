//! Loading records written by older revisions and opening stores from config.

use assert_fs::prelude::*;
use assert_fs::TempDir;

use nextstep::config::resolve_config;
use nextstep::storage::HEADER;
use nextstep::{JobDraft, JobRecordStore, JobStatus, StoreError};

const LEGACY_CSV: &str = "\
Position,Company,ID,Link to Snapshot,Status,Resume,Cover Letter,Date Last Updated,Candidate Home Link
Engineer,Acme,123,job_positions/Engineer-Acme-123/posting.pdf,applied,job_positions/Engineer-Acme-123/cv.pdf,,2024-09-30,https://acme.example
Analyst,Globex,77,,rejection,,,2024-10-02,
";

#[test]
fn legacy_file_loads_and_is_rewritten_with_current_header() {
    let temp = TempDir::new().unwrap();
    temp.child("config.json").write_str("{}").unwrap();
    temp.child("jobs.csv").write_str(LEGACY_CSV).unwrap();

    let config = resolve_config(Some(temp.child("config.json").path())).unwrap();
    let mut store = JobRecordStore::from_config(&config).unwrap();

    assert_eq!(store.records().len(), 2);
    let first = store.get(0).unwrap().clone();
    assert_eq!(first.status, JobStatus::Applied);
    assert_eq!(first.resume_path, "job_positions/Engineer-Acme-123/cv.pdf");
    assert_eq!(first.candidate_home_link, "https://acme.example");
    assert_eq!(first.submitted_date, None);
    assert_eq!(store.get(1).unwrap().status, JobStatus::Rejection);

    store.set_status(1, JobStatus::Offer).unwrap();

    let rewritten = std::fs::read_to_string(temp.child("jobs.csv").path()).unwrap();
    assert_eq!(rewritten.lines().next().unwrap(), HEADER.join(","));

    let reloaded = JobRecordStore::from_config(&config).unwrap();
    assert_eq!(reloaded.get(0).unwrap(), &first);
    assert_eq!(reloaded.get(1).unwrap().status, JobStatus::Offer);
}

#[test]
fn store_from_config_uses_configured_locations() {
    let temp = TempDir::new().unwrap();
    temp.child("config.json")
        .write_str(r#"{ "records_file": "data/applications.csv", "jobs_folder": "docs" }"#)
        .unwrap();
    temp.child("data").create_dir_all().unwrap();

    let config = resolve_config(Some(temp.child("config.json").path())).unwrap();
    let mut store = JobRecordStore::from_config(&config).unwrap();
    store.add_job(&JobDraft::new("Engineer", "Acme", "1")).unwrap();

    assert!(temp.child("data/applications.csv").path().is_file());
    assert!(temp.child("docs/Engineer-Acme-1").path().is_dir());
}

#[test]
fn malformed_file_fails_load_and_is_left_alone() {
    let temp = TempDir::new().unwrap();
    temp.child("config.json").write_str("{}").unwrap();
    let content = "Position,Company,ID,Status\nEngineer,Acme,1,maybe\n";
    temp.child("jobs.csv").write_str(content).unwrap();

    let config = resolve_config(Some(temp.child("config.json").path())).unwrap();
    let result = JobRecordStore::from_config(&config);

    match result {
        Err(StoreError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
        Err(other) => panic!("Expected MalformedRecord, got {:?}", other),
        Ok(_) => panic!("Expected MalformedRecord, got a store"),
    }
    assert_eq!(
        std::fs::read_to_string(temp.child("jobs.csv").path()).unwrap(),
        content
    );
}

#[test]
fn missing_file_opens_empty_store() {
    let temp = TempDir::new().unwrap();
    temp.child("config.json").write_str("{}").unwrap();

    let config = resolve_config(Some(temp.child("config.json").path())).unwrap();
    let store = JobRecordStore::from_config(&config).unwrap();

    assert!(store.records().is_empty());
    assert!(!temp.child("jobs.csv").path().exists());
}
