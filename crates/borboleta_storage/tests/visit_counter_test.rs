//! Tests for the file-backed visit counter.

use anyhow::Result;
use borboleta_error::{BorboletaErrorKind, StorageErrorKind};
use borboleta_interface::VisitCounter;
use borboleta_storage::{FileVisitCounter, VISITS_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_missing_file_counts_as_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let counter = FileVisitCounter::new(temp_dir.path());

    assert_eq!(counter.current()?, 0);
    assert!(!counter.path().exists());
    Ok(())
}

#[test]
fn test_increment_creates_directory_and_record() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("nested").join("borboleta");
    let counter = FileVisitCounter::new(&data_dir);

    assert_eq!(counter.increment()?, 1);
    assert_eq!(counter.increment()?, 2);

    let path = data_dir.join(VISITS_FILE_NAME);
    assert_eq!(counter.path(), path.as_path());
    let raw = std::fs::read_to_string(&path)?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(json["count"], 2);
    assert!(json["last_visit"].is_string());
    Ok(())
}

#[test]
fn test_count_survives_new_counter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    FileVisitCounter::new(temp_dir.path()).increment()?;
    FileVisitCounter::new(temp_dir.path()).increment()?;

    let counter = FileVisitCounter::new(temp_dir.path());
    assert_eq!(counter.current()?, 2);
    assert!(counter.load()?.last_visit().is_some());
    Ok(())
}

#[test]
fn test_corrupt_record_is_reported_and_kept() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(VISITS_FILE_NAME);
    std::fs::write(&path, "not json")?;
    let counter = FileVisitCounter::new(temp_dir.path());

    let err = counter.increment().unwrap_err();
    match err.kind() {
        BorboletaErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::Corrupt(_)));
        }
        other => panic!("expected storage error, got {other}"),
    }
    assert_eq!(std::fs::read_to_string(&path)?, "not json");
    Ok(())
}
