//! Errors surfaced by story generators.

use crate::{StoryError, StoryErrorKind};

/// The two ways a generation request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The model service could not be reached or rejected the request
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The model answered, but not with a usable story node
    #[display("Malformed response: {}", _0)]
    MalformedResponse(StoryErrorKind),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Transport("timeout".into()));
/// assert!(err.is_transport());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of failure
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a transport failure.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Transport(message.into()))
    }

    /// True when the model service itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::Transport(_))
    }

    /// True when the model answered with something unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::MalformedResponse(_))
    }
}

impl From<StoryError> for GenerationError {
    fn from(err: StoryError) -> Self {
        Self {
            kind: GenerationErrorKind::MalformedResponse(err.kind),
            line: err.line,
            file: err.file,
        }
    }
}

/// Result type for story generation.
pub type GenerationResult<T> = Result<T, GenerationError>;
