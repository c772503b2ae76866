//! Test utilities for session tests.

pub mod scripted;

#[allow(unused_imports)]
pub use scripted::{Call, ScriptedGenerator};

use borboleta_core::{Choice, StoryNode};

/// Non-terminal node offering choices A, B and C.
#[allow(dead_code)]
pub fn node(story_text: &str) -> StoryNode {
    StoryNode::builder()
        .outcome_text(format!("Consequência antes de {story_text}"))
        .story_text(story_text)
        .choices(vec![
            Choice::new("A", "Ficar"),
            Choice::new("B", "Fugir"),
            Choice::new("C", "Confrontar"),
        ])
        .image_prompt("rua molhada, neon")
        .sound_description("chuva")
        .build()
        .unwrap()
}

/// Terminal node with a real-event reference.
#[allow(dead_code)]
pub fn ending(story_text: &str) -> StoryNode {
    StoryNode::builder()
        .outcome_text("Tudo terminou como a história registrou.")
        .story_text(story_text)
        .is_end(true)
        .real_event_reference(Some("Inspirado no caso do Zodíaco.".to_string()))
        .build()
        .unwrap()
}
