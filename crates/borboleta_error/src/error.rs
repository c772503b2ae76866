//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, GenerationError, JsonError, SessionError, StorageError, StoryError,
};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every failure a Borboleta crate can report.
///
/// # Examples
///
/// ```
/// use borboleta_error::{BorboletaError, ConfigError};
///
/// let err: BorboletaError = ConfigError::new("bad tick rate").into();
/// assert!(err.to_string().contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BorboletaErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini client error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Story node validation error
    #[from(StoryError)]
    Story(StoryError),
    /// Story generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Session precondition error
    #[from(SessionError)]
    Session(SessionError),
    /// Visit counter storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Terminal interface error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Borboleta error with kind discrimination.
///
/// # Examples
///
/// ```
/// use borboleta_error::{BorboletaResult, SessionError, SessionErrorKind};
///
/// fn refuse() -> BorboletaResult<()> {
///     Err(SessionError::new(SessionErrorKind::MissingContext("current node")))?
/// }
///
/// assert!(refuse().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Borboleta Error: {}", _0)]
pub struct BorboletaError(Box<BorboletaErrorKind>);

impl BorboletaError {
    /// Create a new error from a kind.
    pub fn new(kind: BorboletaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BorboletaErrorKind {
        &self.0
    }
}

impl<T> From<T> for BorboletaError
where
    T: Into<BorboletaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Borboleta operations.
pub type BorboletaResult<T> = std::result::Result<T, BorboletaError>;
