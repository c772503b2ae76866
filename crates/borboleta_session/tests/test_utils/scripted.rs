//! Deterministic story generator for session tests.

use async_trait::async_trait;
use borboleta_core::{GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_error::{GenerationError, GenerationResult};
use borboleta_interface::StoryGenerator;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A recorded generator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// request_start
    Start(GameTheme, PlayerIdentity),
    /// request_advance with the history it received
    Advance(Vec<HistoryItem>),
}

/// Generator answering from a queue of scripted outcomes.
///
/// When gated, each call announces itself on `started` and then waits for
/// `release` before answering.
pub struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<GenerationResult<StoryNode>>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl ScriptedGenerator {
    /// Answer immediately from `outcomes`.
    pub fn new(outcomes: Vec<GenerationResult<StoryNode>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Answer from `outcomes`, but only after each call is released.
    ///
    /// Returns the generator plus the `(started, release)` pair.
    #[allow(dead_code)]
    pub fn gated(
        outcomes: Vec<GenerationResult<StoryNode>>,
    ) -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let generator = Self {
            gate: Some((Arc::clone(&started), Arc::clone(&release))),
            ..Self::new(outcomes)
        };
        (generator, started, release)
    }

    /// Calls received so far.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: Call) -> GenerationResult<StoryNode> {
        self.calls.lock().unwrap().push(call);
        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::transport("script exhausted")))
    }
}

#[async_trait]
impl StoryGenerator for ScriptedGenerator {
    async fn request_start(
        &self,
        theme: GameTheme,
        identity: PlayerIdentity,
    ) -> GenerationResult<StoryNode> {
        self.answer(Call::Start(theme, identity)).await
    }

    async fn request_advance(
        &self,
        history: &[HistoryItem],
        _identity: PlayerIdentity,
        _theme: GameTheme,
    ) -> GenerationResult<StoryNode> {
        self.answer(Call::Advance(history.to_vec())).await
    }
}
