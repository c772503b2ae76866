//! Session state machine precondition errors.

/// Why a session operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Operation is not allowed in the current phase
    #[display("Cannot {} while {}", action, phase)]
    InvalidPhase {
        /// Operation that was attempted
        action: &'static str,
        /// Phase the session was in
        phase: String,
    },
    /// Chosen id is not among the current node's choices
    #[display("Unknown choice id '{}'", _0)]
    UnknownChoice(String),
    /// State needed by the operation is absent
    #[display("Session has no {}", _0)]
    MissingContext(&'static str),
}

/// Session error with source location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::InvalidPhase {
///     action: "choose",
///     phase: "Loading".to_string(),
/// });
/// assert!(err.to_string().contains("Cannot choose while Loading"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// Refusal reason
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
