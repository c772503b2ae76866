//! Conversation roles.

use serde::{Deserialize, Serialize};

/// Who authored a message sent to a model.
///
/// # Examples
///
/// ```
/// use borboleta_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(Role::System.to_string(), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Standing instructions for the model
    System,
    /// Prompt written on the player's behalf
    User,
    /// Earlier model output
    Assistant,
}
