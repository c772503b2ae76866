//! Story generation for Borboleta.
//!
//! Turns a theme, an identity and the player's history into Gemini prompts,
//! and turns the model's answer back into a validated [`StoryNode`].
//!
//! [`StoryNode`]: borboleta_core::StoryNode

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod generator;
mod prompts;
mod schema;

pub use extraction::{extract_json, parse_json, parse_story_node};
pub use generator::LlmStoryGenerator;
pub use prompts::{advance_prompt, history_transcript, start_prompt, system_instruction};
pub use schema::story_node_schema;
