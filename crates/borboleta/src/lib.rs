//! Efeito Borboleta: an interactive narrative in the terminal.
//!
//! The player picks an identity and a crisis theme; Gemini writes each scene
//! and three choices, and every choice feeds the next scene until the story
//! reaches an ending inspired by a real event.
//!
//! # Architecture
//!
//! - `borboleta_error` - error types
//! - `borboleta_core` - story data types, identities, themes, configuration
//! - `borboleta_interface` - driver, generator, counter and ambience traits
//! - `borboleta_models` - Gemini REST client
//! - `borboleta_narrative` - prompts, response schema, JSON extraction
//! - `borboleta_session` - the story progression state machine
//! - `borboleta_storage` - visit counters
//! - `borboleta_tui` - full-screen and line-mode front-ends
//!
//! This crate re-exports everything for convenience.
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini driver (default)
//! - `tui` - terminal front-end (default)
//! - `api` - enables tests that call the real API

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;

pub use observability::{LogTarget, LoggingConfig, init_logging};

pub use borboleta_core::*;
pub use borboleta_error::*;
pub use borboleta_interface::*;
pub use borboleta_narrative::{
    LlmStoryGenerator, advance_prompt, extract_json, history_transcript, parse_json,
    parse_story_node, start_prompt, story_node_schema, system_instruction,
};
pub use borboleta_session::{
    ADVANCE_FAILED_MESSAGE, Phase, Resolution, START_FAILED_MESSAGE, SessionController,
    SessionState, StoryRequest, StorySession, StoryTicket,
};
pub use borboleta_storage::{FileVisitCounter, InMemoryVisitCounter, VISITS_FILE_NAME, VisitRecord};

#[cfg(feature = "gemini")]
pub use borboleta_models::GeminiClient;

#[cfg(feature = "tui")]
pub use borboleta_tui::{App, KeywordSoundLookup, PlainOptions, run_plain, run_tui};
