//! Configuration error types.

/// Failure while layering or deserializing `borboleta.toml` sources.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create a configuration error at the caller location.
    ///
    /// # Examples
    ///
    /// ```
    /// use borboleta_error::ConfigError;
    ///
    /// let err = ConfigError::new("story.choices_per_node must be at least 1");
    /// assert!(err.message.contains("choices_per_node"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
