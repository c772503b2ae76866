//! Session phases.

use serde::{Deserialize, Serialize};

/// Where a session is in the story loop.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Phase {
    /// No story yet; identity and theme are being picked
    #[default]
    Start,
    /// A generator request is in flight
    Loading,
    /// A node is shown and a choice is awaited
    Playing,
    /// A terminal node was reached
    Ended,
}
