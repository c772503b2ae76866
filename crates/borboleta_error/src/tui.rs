//! Terminal interface error types.

/// Terminal interface failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TuiErrorKind {
    /// Raw mode or alternate screen could not be entered
    #[display("Failed to set up terminal: {}", _0)]
    TerminalSetup(String),
    /// Terminal could not be returned to cooked mode
    #[display("Failed to restore terminal: {}", _0)]
    TerminalRestore(String),
    /// Polling for input failed
    #[display("Failed to poll for events: {}", _0)]
    EventPoll(String),
    /// Reading an input event failed
    #[display("Failed to read event: {}", _0)]
    EventRead(String),
    /// Drawing a frame failed
    #[display("Failed to render: {}", _0)]
    Rendering(String),
    /// Line-mode stdin/stdout failed
    #[display("Console I/O failed: {}", _0)]
    ConsoleIo(String),
}

/// TUI error with source location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{TuiError, TuiErrorKind};
///
/// let err = TuiError::new(TuiErrorKind::TerminalSetup("raw mode refused".to_string()));
/// assert!(err.to_string().contains("set up terminal"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// Error kind
    pub kind: TuiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;
