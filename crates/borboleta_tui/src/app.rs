//! Application state and key handling for the terminal front-end.

use borboleta_core::{GameTheme, PlayerIdentity, StoryNode};
use borboleta_error::GenerationResult;
use borboleta_interface::SoundLookup;
use borboleta_session::{Phase, Resolution, SessionController, SessionState, StoryTicket};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

/// Which selector on the start screen has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StartField {
    /// Identity row
    #[default]
    Identity,
    /// Theme row
    Theme,
}

impl StartField {
    fn toggle(self) -> Self {
        match self {
            StartField::Identity => StartField::Theme,
            StartField::Theme => StartField::Identity,
        }
    }
}

/// Main application state.
///
/// Owns the [`SessionController`]; generator calls are returned as tickets
/// from [`App::handle_key`] and their outcomes come back through
/// [`App::apply`].
pub struct App {
    controller: SessionController,
    lookup: Box<dyn SoundLookup>,
    /// Focused start screen selector
    pub focus: StartField,
    /// Identity highlighted on the start screen
    pub identity: PlayerIdentity,
    /// Theme highlighted on the start screen
    pub theme: GameTheme,
    /// Highlighted choice on the game screen
    pub selected_choice: usize,
    /// Launch count shown in the header
    pub visits: Option<u64>,
    /// Transient message for refused input
    pub notice: Option<String>,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Fresh app on the start screen.
    pub fn new(lookup: impl SoundLookup + 'static) -> Self {
        Self {
            controller: SessionController::new(),
            lookup: Box::new(lookup),
            focus: StartField::default(),
            identity: PlayerIdentity::Homem,
            theme: GameTheme::CrimesReais,
            selected_choice: 0,
            visits: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Show `visits` in the header.
    pub fn with_visits(mut self, visits: Option<u64>) -> Self {
        self.visits = visits;
        self
    }

    /// Session state to render.
    pub fn state(&self) -> &SessionState {
        self.controller.state()
    }

    /// Node on screen, if any.
    pub fn node(&self) -> Option<&StoryNode> {
        self.controller.state().current_node().as_ref()
    }

    /// Theme driving colours and ambience: the session's, else the highlighted one.
    pub fn active_theme(&self) -> GameTheme {
        self.controller.state().theme().unwrap_or(self.theme)
    }

    /// Ambience track for the node on screen.
    pub fn ambience(&self) -> Option<&'static str> {
        let theme = self.controller.state().theme()?;
        self.node()
            .map(|node| self.lookup.lookup(node.sound_description(), theme))
    }

    /// Map a key press to a state change.
    ///
    /// Returns the ticket for a generator call the caller must run.
    #[tracing::instrument(skip(self), fields(phase = %self.state().phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<StoryTicket> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return None;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                return None;
            }
            KeyCode::Char('r') => {
                self.restart();
                return None;
            }
            _ => {}
        }

        match self.state().phase() {
            Phase::Start => self.handle_start_key(key.code),
            Phase::Playing => self.handle_playing_key(key.code),
            Phase::Ended => {
                if key.code == KeyCode::Enter {
                    self.restart();
                }
                None
            }
            Phase::Loading => None,
        }
    }

    fn handle_start_key(&mut self, code: KeyCode) -> Option<StoryTicket> {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Left | KeyCode::Char('h') => self.cycle_selection(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_selection(true),
            KeyCode::Enter => return self.begin(),
            _ => {}
        }
        None
    }

    fn handle_playing_key(&mut self, code: KeyCode) -> Option<StoryTicket> {
        let count = self.node().map(|node| node.choices().len()).unwrap_or(0);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_choice = self.selected_choice.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_choice + 1 < count {
                    self.selected_choice += 1;
                }
            }
            KeyCode::Enter => return self.choose_index(self.selected_choice),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let index = (digit as usize).checked_sub(1)?;
                    return self.choose_index(index);
                }
                let index = self.node().and_then(|node| {
                    node.choices()
                        .iter()
                        .position(|choice| choice.id().eq_ignore_ascii_case(&c.to_string()))
                })?;
                return self.choose_index(index);
            }
            _ => {}
        }
        None
    }

    fn cycle_selection(&mut self, forward: bool) {
        match self.focus {
            StartField::Identity => self.identity = cycle(self.identity, forward),
            StartField::Theme => self.theme = cycle(self.theme, forward),
        }
    }

    fn begin(&mut self) -> Option<StoryTicket> {
        match self.controller.begin(self.identity, self.theme) {
            Ok(ticket) => {
                self.notice = None;
                self.selected_choice = 0;
                Some(ticket)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Begin refused");
                self.notice = Some(e.kind.to_string());
                None
            }
        }
    }

    fn choose_index(&mut self, index: usize) -> Option<StoryTicket> {
        let id = self.node()?.choices().get(index)?.id().clone();
        self.selected_choice = index;
        match self.controller.choose(&id) {
            Ok(ticket) => {
                self.notice = None;
                Some(ticket)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Choice refused");
                self.notice = Some(e.kind.to_string());
                None
            }
        }
    }

    /// Feed a finished generator call back into the session.
    pub fn apply(
        &mut self,
        ticket: StoryTicket,
        outcome: GenerationResult<StoryNode>,
    ) -> Resolution {
        let resolution = self.controller.resolve(ticket, outcome);
        if let Resolution::Applied(_) = resolution {
            self.selected_choice = 0;
        }
        resolution
    }

    /// Back to the start screen, orphaning any request in flight.
    pub fn restart(&mut self) {
        self.controller.restart();
        self.selected_choice = 0;
        self.notice = None;
        self.focus = StartField::default();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn cycle<T>(current: T, forward: bool) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let all: Vec<T> = T::iter().collect();
    let position = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % all.len()
    } else {
        (position + all.len() - 1) % all.len()
    };
    all.get(next).copied().unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordSoundLookup;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selectors_cycle_and_wrap() {
        let mut app = App::new(KeywordSoundLookup);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.identity, PlayerIdentity::NaoBinario);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.identity, PlayerIdentity::Homem);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, StartField::Theme);
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.theme, GameTheme::Aleatorio);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.theme, GameTheme::CrimesReais);
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new(KeywordSoundLookup);
            assert!(app.handle_key(event).is_none());
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_enter_on_start_issues_ticket() {
        let mut app = App::new(KeywordSoundLookup);
        app.handle_key(key(KeyCode::Right));
        let ticket = app.handle_key(key(KeyCode::Enter));
        assert!(ticket.is_some());
        assert_eq!(app.state().phase(), Phase::Loading);
        assert_eq!(app.state().identity(), Some(PlayerIdentity::Mulher));
    }
}
