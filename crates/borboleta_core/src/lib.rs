//! Core data types for Borboleta.
//!
//! This crate holds the story data model shared by every other crate (player
//! identity, theme, story nodes and history), the provider-neutral request
//! types spoken by model drivers, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod identity;
mod input;
mod message;
mod output;
mod request;
mod role;
mod story;
mod text;

pub use config::{
    BorboletaConfig, GeminiConfig, StorageConfig, StoryConfig, TuiConfig, DEFAULT_MODEL,
};
pub use identity::{GameTheme, PlayerIdentity};
pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use story::{Choice, HistoryItem, StoryNode, StoryNodeBuilder};
pub use text::excerpt;
