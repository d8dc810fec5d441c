//! Integration tests for loading reference strings from disk.

use std::fs;

use pagesim::input::load_reference_file;
use pagesim::{Error, PolicyKind, SimulationRequest};
use tempfile::tempdir;

#[test]
fn test_load_separated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "7 0 1 2\n0 3 0 4\n2 3 0 3 2 1 2 0 1 7 0 1\n").unwrap();

    let refs = load_reference_file(&path).unwrap();
    assert_eq!(refs.len(), 20);
    assert_eq!(refs[0], "7");
    assert_eq!(refs[19], "1");

    let request = SimulationRequest::new(refs, 3).unwrap();
    assert_eq!(request.run(PolicyKind::Optimal).total_faults(), 9);
}

#[test]
fn test_load_compact_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "ABCBDAFBGBAHAGFA\n").unwrap();

    let refs = load_reference_file(&path).unwrap();
    assert_eq!(SimulationRequest::new(refs, 3).unwrap(), SimulationRequest::default());
}

#[test]
fn test_load_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let refs = load_reference_file(&path).unwrap();
    assert!(refs.is_empty());

    let comparison = SimulationRequest::with_frames(refs, 3).run_all();
    assert!(comparison.outcomes().iter().all(|o| o.total_faults() == 0));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_reference_file(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
