//! Integration tests for loading datasets from a directory.
//!
//! These tests copy the bundled documents into unique directories under the
//! system temp dir and exercise the directory loader against them.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog_data::{Collection, DatasetBundle, DatasetError, DatasetSource};

const MANIFEST: &str = r#"{"version": 1, "name": "local-copy", "updatedAt": "2025-12-01"}"#;

const MINIMAL_DOCUMENTS: [(&str, &str); 6] = [
    ("cards.json", r#"[{"slug": "a"}, {"slug": "b"}]"#),
    ("leaders.json", "[]"),
    ("players.json", r#"[{"nickname": "Feyd"}]"#),
    ("factions.json", "[]"),
    ("sets.json", "[]"),
    ("articles.json", "[]"),
];

#[test]
fn loads_dataset_from_directory() {
    let dir = dataset_dir(MANIFEST, &MINIMAL_DOCUMENTS);

    let bundle = DatasetBundle::from_dir(&dir).expect("dataset loads");

    assert_eq!(bundle.manifest().name(), "local-copy");
    assert_eq!(bundle.len(Collection::Cards), 2);
    assert_eq!(bundle.len(Collection::Players), 1);
    assert!(bundle.is_empty(Collection::Articles));
    cleanup(&dir);
}

#[test]
fn load_dispatches_on_source() {
    let dir = dataset_dir(MANIFEST, &MINIMAL_DOCUMENTS);

    let from_dir = DatasetBundle::load(&DatasetSource::Directory(dir.clone())).expect("dir");
    let bundled = DatasetBundle::load(&DatasetSource::Bundled).expect("bundled");

    assert_eq!(from_dir.manifest().name(), "local-copy");
    assert_ne!(bundled.manifest().name(), "local-copy");
    cleanup(&dir);
}

#[test]
fn missing_document_reports_its_path() {
    let documents: Vec<_> = MINIMAL_DOCUMENTS
        .iter()
        .copied()
        .filter(|(name, _)| *name != "sets.json")
        .collect();
    let dir = dataset_dir(MANIFEST, &documents);

    let result = DatasetBundle::from_dir(&dir);

    match result {
        Err(DatasetError::IoError { path, .. }) => assert!(path.ends_with("sets.json")),
        other => panic!("Expected IoError, got: {other:?}"),
    }
    cleanup(&dir);
}

#[test]
fn unsupported_manifest_version_is_rejected() {
    let dir = dataset_dir(r#"{"version": 2, "name": "next"}"#, &MINIMAL_DOCUMENTS);

    let result = DatasetBundle::from_dir(&dir);

    assert_eq!(
        result,
        Err(DatasetError::UnsupportedVersion {
            expected: 1,
            actual: 2
        })
    );
    cleanup(&dir);
}

#[test]
fn object_document_is_rejected() {
    let mut documents = MINIMAL_DOCUMENTS;
    documents[2] = ("players.json", r#"{"players": []}"#);
    let dir = dataset_dir(MANIFEST, &documents);

    let result = DatasetBundle::from_dir(&dir);

    assert_eq!(
        result,
        Err(DatasetError::NotAnArray {
            collection: Collection::Players
        })
    );
    cleanup(&dir);
}

#[test]
fn missing_directory_is_an_io_error() {
    let path = std::env::temp_dir().join("catalog-data-tests").join("does-not-exist");

    let result = DatasetBundle::from_dir(&path);

    assert!(matches!(result, Err(DatasetError::IoError { .. })));
}

fn dataset_dir(manifest: &str, documents: &[(&str, &str)]) -> PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir()
        .join("catalog-data-tests")
        .join(format!("dataset-{}-{counter}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    fs::write(dir.join("manifest.json"), manifest).expect("write manifest");
    for (name, contents) in documents {
        fs::write(dir.join(name), contents).expect("write document");
    }
    dir
}

fn cleanup(dir: &Path) {
    #[expect(
        clippy::let_underscore_must_use,
        reason = "explicitly ignore cleanup failures in test teardown"
    )]
    let _ = fs::remove_dir_all(dir);
}
