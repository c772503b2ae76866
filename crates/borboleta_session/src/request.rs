//! Generator requests issued by the controller.

use crate::Phase;
use borboleta_core::{GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_error::GenerationResult;
use borboleta_interface::StoryGenerator;
use derive_getters::Getters;
use tracing::instrument;

/// The generator call a ticket stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryRequest {
    /// Opening node for a new story
    Start {
        /// Story theme
        theme: GameTheme,
        /// Protagonist identity
        identity: PlayerIdentity,
    },
    /// Node following the last entry of `history`
    Advance {
        /// Candidate history: committed turns plus the choice just made
        history: Vec<HistoryItem>,
        /// Protagonist identity
        identity: PlayerIdentity,
        /// Story theme
        theme: GameTheme,
    },
}

impl StoryRequest {
    /// Run the request against `generator`.
    #[instrument(skip_all, fields(kind = self.kind()))]
    pub async fn dispatch<G>(&self, generator: &G) -> GenerationResult<StoryNode>
    where
        G: StoryGenerator + ?Sized,
    {
        match self {
            StoryRequest::Start { theme, identity } => {
                generator.request_start(*theme, *identity).await
            }
            StoryRequest::Advance {
                history,
                identity,
                theme,
            } => generator.request_advance(history, *identity, *theme).await,
        }
    }

    /// "start" or "advance".
    pub fn kind(&self) -> &'static str {
        match self {
            StoryRequest::Start { .. } => "start",
            StoryRequest::Advance { .. } => "advance",
        }
    }
}

/// A request tagged with the session generation and request number it
/// belongs to.
///
/// Hand it back to [`SessionController::resolve`](crate::SessionController::resolve)
/// together with the generator's outcome. Only the most recently issued
/// ticket of the current generation is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StoryTicket {
    /// Session generation at issue time
    #[getter(copy)]
    generation: u64,
    /// Controller-wide request number, unique per issued ticket
    #[getter(copy)]
    sequence: u64,
    /// Call to make
    request: StoryRequest,
}

impl StoryTicket {
    pub(crate) fn new(generation: u64, sequence: u64, request: StoryRequest) -> Self {
        Self {
            generation,
            sequence,
            request,
        }
    }

    pub(crate) fn into_request(self) -> StoryRequest {
        self.request
    }
}

/// What [`SessionController::resolve`](crate::SessionController::resolve) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The node was adopted; the session is now in the given phase
    Applied(Phase),
    /// The request failed; the session is parked for a retry with this message
    Failed(String),
    /// The ticket is not the outstanding request and was ignored
    Stale,
}
