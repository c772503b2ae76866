//! The story progression state machine.

use crate::{Phase, Resolution, SessionState, StoryRequest, StoryTicket};
use borboleta_core::{GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use borboleta_error::{GenerationResult, SessionError, SessionErrorKind, SessionResult};
use tracing::{debug, info, instrument, warn};

/// Shown to the player when the opening node could not be generated.
pub const START_FAILED_MESSAGE: &str = "Falha ao iniciar a história. Por favor, tente novamente.";

/// Shown to the player when the next node could not be generated.
pub const ADVANCE_FAILED_MESSAGE: &str = "Falha ao avançar na história. Por favor, tente novamente.";

/// Single-writer owner of a [`SessionState`].
///
/// Refused operations return a [`SessionError`] and leave the state exactly
/// as it was.
///
/// # Examples
///
/// ```
/// use borboleta_core::{Choice, GameTheme, PlayerIdentity, StoryNode};
/// use borboleta_session::{Phase, Resolution, SessionController};
///
/// let mut controller = SessionController::new();
/// let ticket = controller
///     .begin(PlayerIdentity::Homem, GameTheme::Aleatorio)
///     .unwrap();
/// assert_eq!(controller.state().phase(), Phase::Loading);
///
/// let node = StoryNode::builder()
///     .outcome_text("Chove.")
///     .story_text("Três portas.")
///     .choices(vec![
///         Choice::new("A", "Esquerda"),
///         Choice::new("B", "Centro"),
///         Choice::new("C", "Direita"),
///     ])
///     .build()
///     .unwrap();
///
/// let resolution = controller.resolve(ticket, Ok(node));
/// assert_eq!(resolution, Resolution::Applied(Phase::Playing));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
    generation: u64,
    sequence: u64,
}

impl SessionController {
    /// Fresh controller in `Start`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Generation counter; bumped by every restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn issue(&mut self, request: StoryRequest) -> StoryTicket {
        self.sequence += 1;
        StoryTicket::new(self.generation, self.sequence, request)
    }

    fn require_phase(&self, action: &'static str, allowed: Phase) -> SessionResult<()> {
        if self.state.phase() == allowed {
            return Ok(());
        }
        warn!(action, phase = %self.state.phase(), "Operation refused");
        Err(SessionError::new(SessionErrorKind::InvalidPhase {
            action,
            phase: self.state.phase().to_string(),
        }))
    }

    /// Start a story. Allowed only in `Start`.
    ///
    /// Clears any previous history and error, records the selection and
    /// moves to `Loading`.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::InvalidPhase`] outside `Start`.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn begin(
        &mut self,
        identity: PlayerIdentity,
        theme: GameTheme,
    ) -> SessionResult<StoryTicket> {
        self.require_phase("begin", Phase::Start)?;

        self.state.set_history(Vec::new());
        self.state.set_current_node(None);
        self.state.set_pending_choice(None);
        self.state.set_error(None);
        self.state.set_selection(Some(identity), Some(theme));
        self.state.set_phase(Phase::Loading);

        info!("Story requested");
        Ok(self.issue(StoryRequest::Start { theme, identity }))
    }

    /// Pick a choice on the current node. Allowed only in `Playing`.
    ///
    /// History is not touched until the next node arrives; the ticket
    /// carries the candidate history instead.
    ///
    /// # Errors
    ///
    /// - [`SessionErrorKind::InvalidPhase`] outside `Playing`
    /// - [`SessionErrorKind::MissingContext`] without node, identity or theme
    /// - [`SessionErrorKind::UnknownChoice`] if `choice_id` is not offered
    #[instrument(skip(self), fields(generation = self.generation, history_len = self.state.history().len()))]
    pub fn choose(&mut self, choice_id: &str) -> SessionResult<StoryTicket> {
        self.require_phase("choose", Phase::Playing)?;

        let node = self
            .state
            .current_node()
            .as_ref()
            .ok_or_else(|| SessionError::new(SessionErrorKind::MissingContext("current node")))?;
        let identity = self
            .state
            .identity()
            .ok_or_else(|| SessionError::new(SessionErrorKind::MissingContext("identity")))?;
        let theme = self
            .state
            .theme()
            .ok_or_else(|| SessionError::new(SessionErrorKind::MissingContext("theme")))?;
        let choice = node.choice(choice_id).cloned().ok_or_else(|| {
            warn!(choice_id, "Choice not offered by current node");
            SessionError::new(SessionErrorKind::UnknownChoice(choice_id.to_string()))
        })?;

        let mut candidate = self.state.history().clone();
        candidate.push(HistoryItem::new(node.clone(), choice.clone()));

        self.state.set_pending_choice(Some(choice));
        self.state.set_error(None);
        self.state.set_phase(Phase::Loading);

        info!("Advance requested");
        Ok(self.issue(StoryRequest::Advance {
            history: candidate,
            identity,
            theme,
        }))
    }

    /// Return to an empty `Start` state from any phase.
    ///
    /// Bumps the generation so tickets already issued resolve as stale.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn restart(&mut self) {
        self.state.reset();
        self.generation += 1;
        info!(generation = self.generation, "Session restarted");
    }

    /// Apply the outcome of a ticket's request.
    ///
    /// A ticket from an earlier generation, one superseded by a later
    /// request, or one arriving when no request is outstanding changes
    /// nothing and yields [`Resolution::Stale`].
    ///
    /// An opening node that already ends the story is treated as a failed
    /// start.
    #[instrument(skip_all, fields(kind = ticket.request().kind(), ticket_generation = ticket.generation(), ticket_sequence = ticket.sequence(), generation = self.generation))]
    pub fn resolve(
        &mut self,
        ticket: StoryTicket,
        outcome: GenerationResult<StoryNode>,
    ) -> Resolution {
        if ticket.generation() != self.generation
            || ticket.sequence() != self.sequence
            || self.state.phase() != Phase::Loading
        {
            debug!(phase = %self.state.phase(), "Discarding stale response");
            return Resolution::Stale;
        }

        self.state.set_pending_choice(None);

        match (ticket.into_request(), outcome) {
            (StoryRequest::Start { .. }, Ok(node)) if node.is_end() => {
                warn!("Opening node ends the story");
                self.fail_start()
            }
            (StoryRequest::Start { .. }, Ok(node)) => {
                self.state.set_current_node(Some(node));
                self.state.set_phase(Phase::Playing);
                info!("Story started");
                Resolution::Applied(Phase::Playing)
            }
            (StoryRequest::Advance { history, .. }, Ok(node)) => {
                let phase = if node.is_end() {
                    Phase::Ended
                } else {
                    Phase::Playing
                };
                self.state.set_history(history);
                self.state.set_current_node(Some(node));
                self.state.set_phase(phase);
                info!(phase = %phase, history_len = self.state.history().len(), "Story advanced");
                Resolution::Applied(phase)
            }
            (StoryRequest::Start { .. }, Err(e)) => {
                warn!(error = %e, "Story start failed");
                self.fail_start()
            }
            (StoryRequest::Advance { .. }, Err(e)) => {
                warn!(error = %e, "Story advance failed");
                self.state.set_error(Some(ADVANCE_FAILED_MESSAGE.to_string()));
                self.state.set_phase(Phase::Playing);
                Resolution::Failed(ADVANCE_FAILED_MESSAGE.to_string())
            }
        }
    }

    fn fail_start(&mut self) -> Resolution {
        self.state.set_selection(None, None);
        self.state.set_error(Some(START_FAILED_MESSAGE.to_string()));
        self.state.set_phase(Phase::Start);
        Resolution::Failed(START_FAILED_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borboleta_core::Choice;
    use borboleta_error::GenerationError;

    fn node(text: &str) -> StoryNode {
        StoryNode::builder()
            .outcome_text("...")
            .story_text(text)
            .choices(vec![
                Choice::new("A", "a"),
                Choice::new("B", "b"),
                Choice::new("C", "c"),
            ])
            .build()
            .unwrap()
    }

    fn playing() -> SessionController {
        let mut controller = SessionController::new();
        let ticket = controller
            .begin(PlayerIdentity::Mulher, GameTheme::CrimesReais)
            .unwrap();
        controller.resolve(ticket, Ok(node("N0")));
        controller
    }

    #[test]
    fn test_choose_marks_pending_choice() {
        let mut controller = playing();
        controller.choose("B").unwrap();
        assert_eq!(controller.state().phase(), Phase::Loading);
        assert_eq!(
            controller.state().pending_choice().as_ref().map(|c| c.id().as_str()),
            Some("B")
        );
        assert!(controller.state().history().is_empty());
    }

    #[test]
    fn test_resolve_clears_pending_choice() {
        let mut controller = playing();
        let ticket = controller.choose("A").unwrap();
        controller.resolve(ticket, Err(GenerationError::transport("down")));
        assert!(controller.state().pending_choice().is_none());
    }

    #[test]
    fn test_unknown_choice_is_refused() {
        let mut controller = playing();
        let before = controller.state().clone();
        let err = controller.choose("Z").unwrap_err();
        assert_eq!(err.kind, SessionErrorKind::UnknownChoice("Z".to_string()));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_ticket_resolves_once() {
        let mut controller = SessionController::new();
        let ticket = controller
            .begin(PlayerIdentity::Homem, GameTheme::Aleatorio)
            .unwrap();
        let duplicate = ticket.clone();
        assert_eq!(
            controller.resolve(ticket, Ok(node("N0"))),
            Resolution::Applied(Phase::Playing)
        );
        assert_eq!(controller.resolve(duplicate, Ok(node("N1"))), Resolution::Stale);
        assert_eq!(
            controller.state().current_node().as_ref().map(|n| n.story_text().as_str()),
            Some("N0")
        );
    }

    #[test]
    fn test_earlier_ticket_cannot_answer_later_request() {
        let mut controller = SessionController::new();
        let opening = controller
            .begin(PlayerIdentity::Homem, GameTheme::Aleatorio)
            .unwrap();
        let duplicate = opening.clone();
        controller.resolve(opening, Ok(node("N0")));

        let advance = controller.choose("A").unwrap();
        assert_eq!(advance.generation(), duplicate.generation());
        assert_ne!(advance.sequence(), duplicate.sequence());

        assert_eq!(
            controller.resolve(duplicate, Ok(node("OLD START"))),
            Resolution::Stale
        );
        assert_eq!(controller.state().phase(), Phase::Loading);
        assert_eq!(
            controller.resolve(advance, Ok(node("N1"))),
            Resolution::Applied(Phase::Playing)
        );
        assert_eq!(
            controller.state().current_node().as_ref().map(|n| n.story_text().as_str()),
            Some("N1")
        );
        assert_eq!(controller.state().history().len(), 1);
    }

    #[test]
    fn test_ending_as_opening_fails_the_start() {
        let mut controller = SessionController::new();
        let ticket = controller
            .begin(PlayerIdentity::Mulher, GameTheme::PoliticaGlobal)
            .unwrap();
        let ending = StoryNode::builder()
            .outcome_text("Fim.")
            .story_text("Seu destino está selado.")
            .is_end(true)
            .real_event_reference(Some("Watergate".to_string()))
            .build()
            .unwrap();

        assert_eq!(
            controller.resolve(ticket, Ok(ending)),
            Resolution::Failed(START_FAILED_MESSAGE.to_string())
        );
        assert_eq!(controller.state().phase(), Phase::Start);
        assert!(controller.state().current_node().is_none());
        assert!(controller.state().identity().is_none());
        assert_eq!(
            controller.state().error().as_deref(),
            Some(START_FAILED_MESSAGE)
        );
        assert!(controller
            .begin(PlayerIdentity::Mulher, GameTheme::PoliticaGlobal)
            .is_ok());
    }
}
