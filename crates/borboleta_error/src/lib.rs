//! Error types for Borboleta.
//!
//! Every crate in the workspace reports failures through the types defined
//! here, following one shape:
//! - a `*ErrorKind` enum names the condition
//! - a `*Error` struct wraps the kind with the source location
//! - constructors are `#[track_caller]` so the location is captured for free
//!
//! # Examples
//!
//! ```
//! use borboleta_error::{BorboletaResult, GenerationError};
//!
//! fn generate() -> BorboletaResult<String> {
//!     Err(GenerationError::transport("connection refused"))?
//! }
//!
//! assert!(generate().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json;
mod config;
mod gemini;
mod story;
mod generation;
mod session;
mod storage;
#[cfg(feature = "tui")]
mod tui;
mod error;

pub use json::JsonError;
pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use story::{StoryError, StoryErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use session::{SessionError, SessionErrorKind, SessionResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use error::{BorboletaError, BorboletaErrorKind, BorboletaResult};
