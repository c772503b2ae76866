//! Test utilities for front-end tests.

use async_trait::async_trait;
use borboleta_core::{Choice, GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_error::{GenerationError, GenerationResult};
use borboleta_interface::StoryGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Non-terminal node offering choices A, B and C.
#[allow(dead_code)]
pub fn node(story_text: &str) -> StoryNode {
    StoryNode::builder()
        .outcome_text(format!("Depois disso, {story_text}"))
        .story_text(story_text)
        .choices(vec![
            Choice::new("A", "Ficar"),
            Choice::new("B", "Fugir"),
            Choice::new("C", "Confrontar"),
        ])
        .image_prompt("sala escura, estilo noir")
        .sound_description("sirene distante")
        .build()
        .unwrap()
}

/// Terminal node with a real-event reference.
#[allow(dead_code)]
pub fn ending() -> StoryNode {
    StoryNode::builder()
        .outcome_text("A cidade nunca soube seu nome.")
        .story_text("Seu destino está selado.")
        .is_end(true)
        .real_event_reference(Some("Inspirado no caso do Zodíaco.".to_string()))
        .build()
        .unwrap()
}

/// Generator answering from a fixed queue; exhausted queues fail.
pub struct QueueGenerator {
    outcomes: Mutex<VecDeque<GenerationResult<StoryNode>>>,
}

impl QueueGenerator {
    /// Answer with `outcomes` in order.
    #[allow(dead_code)]
    pub fn new(outcomes: Vec<GenerationResult<StoryNode>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }

    fn next(&self) -> GenerationResult<StoryNode> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::transport("queue exhausted")))
    }
}

#[async_trait]
impl StoryGenerator for QueueGenerator {
    async fn request_start(
        &self,
        _theme: GameTheme,
        _identity: PlayerIdentity,
    ) -> GenerationResult<StoryNode> {
        self.next()
    }

    async fn request_advance(
        &self,
        _history: &[HistoryItem],
        _identity: PlayerIdentity,
        _theme: GameTheme,
    ) -> GenerationResult<StoryNode> {
        self.next()
    }
}
