//! Trait definitions for model backends and story collaborators.

use async_trait::async_trait;
use borboleta_core::{GameTheme, GenerateRequest, GenerateResponse, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_error::{BorboletaResult, GenerationResult};

/// Core trait every model backend implements.
#[async_trait]
pub trait BorboletaDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> BorboletaResult<GenerateResponse>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g. "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Produces story nodes.
///
/// Both operations may be repeated freely and are not deterministic. A
/// returned node has already been checked against the node invariants;
/// anything else is reported as a
/// [`GenerationErrorKind`](borboleta_error::GenerationErrorKind).
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Opening node for a new story: an atmospheric introduction as the
    /// outcome text, the first dilemma as the story text, and a full set of
    /// choices.
    async fn request_start(
        &self,
        theme: GameTheme,
        identity: PlayerIdentity,
    ) -> GenerationResult<StoryNode>;

    /// Next node after the latest choice.
    ///
    /// `history` runs oldest to newest and its last entry holds the choice
    /// just made. An empty history is refused without contacting the model.
    async fn request_advance(
        &self,
        history: &[HistoryItem],
        identity: PlayerIdentity,
        theme: GameTheme,
    ) -> GenerationResult<StoryNode>;
}

/// Counts application launches.
///
/// The session never touches it; the binary bumps it once per launch.
pub trait VisitCounter: Send + Sync {
    /// Record a visit and return the new total.
    fn increment(&self) -> BorboletaResult<u64>;

    /// Total visits recorded so far.
    fn current(&self) -> BorboletaResult<u64>;
}

/// Maps a node's ambience cue to a named ambience track.
pub trait SoundLookup: Send + Sync {
    /// Ambience reference for `sound_description` under `theme`.
    fn lookup(&self, sound_description: &str, theme: GameTheme) -> &'static str;
}
