//! Model provider integrations for Borboleta.
//!
//! Each provider sits behind its own feature flag. Only Google Gemini is
//! provided, enabled by default through the `gemini` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use borboleta_core::{GenerateRequest, Message, Role};
//! use borboleta_interface::BorboletaDriver;
//! use borboleta_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::text(Role::User, "Olá")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.first_text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part,
};
