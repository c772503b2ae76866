//! Messages exchanged with a model.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A single message in a model conversation.
///
/// # Examples
///
/// ```
/// use borboleta_core::{Input, Message, Role};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .content(vec![Input::Text("Olá".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(*message.role(), Role::User);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// Author of the message
    role: Role,
    /// Message parts
    content: Vec<Input>,
}

impl Message {
    /// Creates a builder for Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Single-part text message.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![Input::Text(text.into())],
        }
    }
}
