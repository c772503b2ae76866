//! Story node validation and extraction errors.

/// Reasons a model response cannot become a story node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// The model response had no text part at all
    #[display("Response carried no text output")]
    NoText,
    /// No JSON object could be located in the response text
    #[display("No JSON found in response (length: {} chars)", _0)]
    NoJson(usize),
    /// JSON was located but did not parse or lacked the story shape
    #[display("Invalid story JSON: {}", _0)]
    InvalidJson(String),
    /// A required text field is present but blank
    #[display("Field '{}' must not be empty", _0)]
    EmptyField(&'static str),
    /// Non-ending node offered the wrong number of choices
    #[display("Expected {} choices, got {}", expected, actual)]
    ChoiceCount {
        /// Configured choices per node
        expected: usize,
        /// Choices present in the response
        actual: usize,
    },
    /// Choice at the given position has a blank id or text
    #[display("Choice {} has an empty id or text", _0)]
    EmptyChoice(usize),
    /// Two choices share an id
    #[display("Duplicate choice id '{}'", _0)]
    DuplicateChoiceId(String),
    /// Ending node still offered choices
    #[display("Ending node must not offer choices (got {})", _0)]
    EndingWithChoices(usize),
    /// Ending node omitted its real-event reference
    #[display("Ending node is missing its real-event reference")]
    MissingEventReference,
    /// Non-ending node carried a real-event reference
    #[display("Non-ending node must not carry a real-event reference")]
    UnexpectedEventReference,
    /// Opening node of a story was marked as an ending
    #[display("Opening node must not end the story")]
    TerminalOpening,
}

/// Story error with source location tracking.
///
/// # Examples
///
/// ```
/// use borboleta_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::ChoiceCount { expected: 3, actual: 2 });
/// assert!(err.to_string().contains("Expected 3 choices, got 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// What was wrong with the node
    pub kind: StoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
