//! Gemini client error types.

/// Failure conditions of the Gemini REST client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Neither `GEMINI_API_KEY` nor `API_KEY` is set
    #[display("GEMINI_API_KEY (or API_KEY) environment variable not set")]
    MissingApiKey,
    /// Failed to build the underlying HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced an HTTP response (DNS, TLS, timeout)
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status returned by the API
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Body or reason phrase returned with the status
        message: String,
    },
    /// Response body was not the expected `generateContent` envelope
    #[display("Failed to decode Gemini response: {}", _0)]
    ResponseDecode(String),
    /// Response carried no candidate text
    #[display("Gemini returned no text output")]
    EmptyResponse,
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(err.to_string().contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
