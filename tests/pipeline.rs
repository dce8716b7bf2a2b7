mod common;

use curbside_postcards::application::services::PostcardBatch;
use curbside_postcards::infrastructure::csv_source::{SourceError, read_csv_file};
use curbside_postcards::rendering::render_card;
use tempfile::TempDir;

#[test]
fn test_blank_rows_yield_one_card_without_items() {
    let csv = common::write_csv(&[
        "2018-01-01,12,Elm St,,,,",
        "2018-01-02,12,Elm St,,,,",
        "2018-01-03,12,Elm St,,,,",
    ]);

    let records = read_csv_file(csv.path()).unwrap();
    let batch = PostcardBatch::from_records(records, 0);

    assert_eq!(batch.card_count(), 1);

    let group = batch.groups().iter().next().unwrap();
    let card = render_card(group);
    assert!(!card.message.contains("\\item"));
    assert!(!card.message.contains("\\begin{itemize}"));
    assert!(!card.message.contains("We had"));
    assert!(!card.message.contains("We have"));
    assert!(card.address.contains("12 Elm St \\\\"));
}

#[test]
fn test_threshold_is_strict() {
    let csv = common::write_csv(&[
        "2018-01-01,12,Elm St,X,,,",
        "2018-01-02,12,Elm St,X,,,",
        "2018-01-03,12,Elm St,X,,,",
        "2018-01-01,9,Oak Ave,,X,,",
        "2018-01-02,9,Oak Ave,,X,,",
        "2018-01-03,9,Oak Ave,,X,,",
        "2018-01-04,9,Oak Ave,,X,,",
    ]);
    let records = read_csv_file(csv.path()).unwrap();

    let batch = PostcardBatch::from_records(records.clone(), 3);
    assert_eq!(batch.total_addresses(), 2);
    assert_eq!(batch.card_count(), 1);
    assert!(batch.groups().get("9Oak Ave").is_some());
    assert!(batch.groups().get("12Elm St").is_none());

    assert_eq!(PostcardBatch::from_records(records.clone(), 2).card_count(), 2);
    assert_eq!(PostcardBatch::from_records(records, 4).card_count(), 0);
}

#[test]
fn test_five_violations_keep_most_recent_four() {
    let csv = common::write_csv(&[
        "2018-01-01,12,Elm St,X,,,",
        "2018-01-02,12,Elm St,X,,,",
        "2018-01-03,12,Elm St,X,,,",
        "2018-01-04,12,Elm St,X,,,",
        "2018-01-05,12,Elm St,X,,,",
    ]);

    let batch = PostcardBatch::from_records(read_csv_file(csv.path()).unwrap(), 3);
    let document = batch.to_document();

    assert!(document.contains(
        "We had 5 problems collecting your trash in the period between \
         2018-01-01 and 2018-01-05, and show only the most recent four here."
    ));
    assert!(!document.contains("\\item 2018-01-01"));
    for day in 2..=5 {
        assert!(document.contains(&format!("\\item 2018-01-0{day} ")));
    }
}

#[test]
fn test_details_disclaimer_spans_whole_group() {
    let csv = common::write_csv(&[
        "2018-01-01,12,Elm St,X,,,",
        "2018-01-02,12,Elm St,,,,bags torn",
        "2018-01-03,12,Elm St,,,,lid open",
        "2018-01-04,12,Elm St,,,,cart tipped",
        "2018-01-05,12,Elm St,X,,,",
    ]);

    let batch = PostcardBatch::from_records(read_csv_file(csv.path()).unwrap(), 3);
    let document = batch.to_document();

    assert!(document.contains(
        "There were 3 comments about your trash pickup reported between \
         2018-01-01 and 2018-01-05, but only the last two are shown here."
    ));
    assert!(!document.contains("bags torn"));
    assert!(document.contains("\\item 2018-01-03 lid open"));
    assert!(document.contains("\\item 2018-01-04 cart tipped"));
}

#[test]
fn test_missing_csv_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    let err = read_csv_file(&missing).unwrap_err();

    assert!(matches!(err, SourceError::InputNotFound(_)));
    assert_eq!(err.to_string(), format!("{} does not exist", missing.display()));
}
