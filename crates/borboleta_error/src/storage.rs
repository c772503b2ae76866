//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the data directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the counter file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read the counter file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Counter file exists but is not valid
    #[display("Corrupt visit record: {}", _0)]
    Corrupt(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Corrupt("visits.json".to_string()));
/// assert!(err.to_string().contains("Corrupt visit record"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// Error kind
    pub kind: StorageErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
