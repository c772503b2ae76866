//! Story nodes and the player's journey.

use borboleta_error::{StoryError, StoryErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An option offered to the player at a node.
///
/// # Examples
///
/// ```
/// use borboleta_core::Choice;
///
/// let choice = Choice::new("A", "Abrir a porta");
/// assert_eq!(choice.id(), "A");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Choice {
    /// Identifier unique within its node ("A", "B", "C")
    id: String,
    /// Text shown to the player
    text: String,
}

impl Choice {
    /// Create a choice.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One generated step of the story.
///
/// Nodes are immutable once built. A node fresh from a model must pass
/// [`StoryNode::validate`] before the session adopts it.
///
/// # Examples
///
/// ```
/// use borboleta_core::{Choice, StoryNode};
///
/// let node = StoryNode::builder()
///     .outcome_text("A chuva começa.")
///     .story_text("Um carro para na esquina.")
///     .choices(vec![
///         Choice::new("A", "Correr"),
///         Choice::new("B", "Esperar"),
///         Choice::new("C", "Gritar"),
///     ])
///     .image_prompt("rainy street at night, neon")
///     .sound_description("chuva forte")
///     .build()
///     .unwrap();
///
/// assert!(node.validate(3).is_ok());
/// assert!(!node.is_end());
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
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct StoryNode {
    /// Consequence of the previous choice, or the introduction on the first node
    outcome_text: String,
    /// The new situation or dilemma
    story_text: String,
    /// Options available next; empty on an ending
    #[builder(default)]
    choices: Vec<Choice>,
    /// Prompt describing an illustration for the scene
    #[builder(default)]
    image_prompt: String,
    /// Short ambience cue ("chuva forte", "sirene")
    #[builder(default)]
    sound_description: String,
    /// Whether this node ends the story
    #[getter(copy)]
    #[builder(default)]
    is_end: bool,
    /// Fictionalized real event the story was based on; only on an ending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    real_event_reference: Option<String>,
}

impl StoryNode {
    /// Creates a builder for StoryNode.
    pub fn builder() -> StoryNodeBuilder {
        StoryNodeBuilder::default()
    }

    /// Look up a choice by id.
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Check the node invariants.
    ///
    /// - outcome and story texts are non-empty after trimming
    /// - an ending has no choices and a non-empty real-event reference
    /// - any other node has exactly `expected_choices` choices with non-empty,
    ///   unique ids and non-empty texts, and no reference
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self, expected_choices: usize) -> Result<(), StoryError> {
        if self.outcome_text.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyField("outcomeText")));
        }
        if self.story_text.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyField("storyText")));
        }

        let reference = self
            .real_event_reference
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty());

        if self.is_end {
            if !self.choices.is_empty() {
                return Err(StoryError::new(StoryErrorKind::EndingWithChoices(
                    self.choices.len(),
                )));
            }
            if reference.is_none() {
                return Err(StoryError::new(StoryErrorKind::MissingEventReference));
            }
            return Ok(());
        }

        if reference.is_some() {
            return Err(StoryError::new(StoryErrorKind::UnexpectedEventReference));
        }
        if self.choices.len() != expected_choices {
            return Err(StoryError::new(StoryErrorKind::ChoiceCount {
                expected: expected_choices,
                actual: self.choices.len(),
            }));
        }

        let mut seen = HashSet::new();
        for (position, choice) in self.choices.iter().enumerate() {
            if choice.id.trim().is_empty() || choice.text.trim().is_empty() {
                return Err(StoryError::new(StoryErrorKind::EmptyChoice(position)));
            }
            if !seen.insert(choice.id.as_str()) {
                return Err(StoryError::new(StoryErrorKind::DuplicateChoiceId(
                    choice.id.clone(),
                )));
            }
        }
        Ok(())
    }
}

/// A committed turn: the node the player saw and what they picked.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct HistoryItem {
    /// Node shown to the player
    node: StoryNode,
    /// Choice made at that node
    choice: Choice,
}

impl HistoryItem {
    /// Pair a node with the choice made at it.
    pub fn new(node: StoryNode, choice: Choice) -> Self {
        Self { node, choice }
    }
}
