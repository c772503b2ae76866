//! Session state exposed to front-ends.

use crate::Phase;
use borboleta_core::{Choice, GameTheme, HistoryItem, PlayerIdentity, StoryNode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Read-only view of a session.
///
/// Only [`SessionController`](crate::SessionController) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionState {
    /// Chosen identity
    #[getter(copy)]
    identity: Option<PlayerIdentity>,
    /// Chosen theme
    #[getter(copy)]
    theme: Option<GameTheme>,
    /// Node on screen
    current_node: Option<StoryNode>,
    /// Committed turns, oldest first
    history: Vec<HistoryItem>,
    /// Current phase
    #[getter(copy)]
    phase: Phase,
    /// Player-facing message from the last failed request
    error: Option<String>,
    /// Choice whose consequence is being generated
    pending_choice: Option<Choice>,
}

impl SessionState {
    /// True when nothing has been chosen or generated.
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub(crate) fn set_selection(
        &mut self,
        identity: Option<PlayerIdentity>,
        theme: Option<GameTheme>,
    ) {
        self.identity = identity;
        self.theme = theme;
    }

    pub(crate) fn set_current_node(&mut self, node: Option<StoryNode>) {
        self.current_node = node;
    }

    pub(crate) fn set_history(&mut self, history: Vec<HistoryItem>) {
        self.history = history;
    }

    pub(crate) fn set_pending_choice(&mut self, choice: Option<Choice>) {
        self.pending_choice = choice;
    }
}
