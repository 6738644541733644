//! Shared fixtures for integration tests.

use booksearch::SearchIndex;
use rstest::fixture;
use std::io::Write;
use tempfile::NamedTempFile;

/// A small pre-built index in the on-disk JSON format. Term keys are stored
/// pre-stemmed, as the site generator ships them.
pub const SAMPLE_INDEX_JSON: &str = r#"{
    "version": 1,
    "documents": [
        {
            "reference": "/lessons/ownership/",
            "title": "Ownership",
            "body": "Every value in Rust has an owner. Ownership moves on assignment."
        },
        {
            "reference": "/lessons/borrowing/",
            "title": "References and Borrowing",
            "body": "Borrowing lets code use a value without taking ownership."
        },
        {
            "reference": "/lessons/traits/",
            "title": "Traits",
            "body": "Traits describe shared behavior. Rust traits resemble interfaces."
        },
        {
            "reference": "/misc/draft/",
            "title": "Draft",
            "body": ""
        }
    ],
    "terms": {
        "rust": [
            {"doc": 0, "body_freq": 1},
            {"doc": 2, "body_freq": 1}
        ],
        "ownership": [
            {"doc": 0, "title_freq": 1, "body_freq": 2},
            {"doc": 1, "body_freq": 1}
        ],
        "borrow": [
            {"doc": 1, "title_freq": 1, "body_freq": 1}
        ],
        "trait": [
            {"doc": 2, "title_freq": 1, "body_freq": 2}
        ],
        "draft": [
            {"doc": 3, "title_freq": 1}
        ]
    }
}"#;

/// Writes the sample index to a temporary file, as the generator would.
pub fn sample_index_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp index file");
    file.write_all(SAMPLE_INDEX_JSON.as_bytes())
        .expect("Failed to write sample index");
    file
}

#[fixture]
pub fn sample_index() -> SearchIndex {
    SearchIndex::from_json(SAMPLE_INDEX_JSON).expect("Sample index should parse")
}
