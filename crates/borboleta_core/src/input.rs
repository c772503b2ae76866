//! Input parts of a message.

use serde::{Deserialize, Serialize};

/// One part of a message sent to a model.
///
/// # Examples
///
/// ```
/// use borboleta_core::Input;
///
/// let prompt = Input::Text("Tema: Crimes Reais".to_string());
/// assert_eq!(prompt.as_text(), "Tema: Crimes Reais");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text.
    Text(String),
}

impl Input {
    /// Text content of the part.
    pub fn as_text(&self) -> &str {
        match self {
            Input::Text(text) => text,
        }
    }
}
