//! Google Gemini REST client.
//!
//! [`GeminiClient`] speaks the `models/{model}:generateContent` endpoint
//! directly over `reqwest`. The wire types mirror the JSON the API expects
//! and returns; conversions to and from the provider-neutral request types
//! live next to them.

mod client;
mod wire;

pub use client::GeminiClient;
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
