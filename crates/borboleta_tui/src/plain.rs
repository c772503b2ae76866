//! Line-mode front-end over stdin/stdout.

use crate::view::{
    CHOSE_LABEL, END_HEADING, END_TEXT, IDENTITY_LABEL, JOURNEY_HEADING, LOADING_TEXT, TAGLINE,
    THEME_LABEL, TITLE, journey,
};
use borboleta_core::{GameTheme, PlayerIdentity, StoryNode};
use borboleta_error::{BorboletaResult, TuiError, TuiErrorKind, TuiResult};
use borboleta_interface::{SoundLookup, StoryGenerator};
use borboleta_session::{Phase, SessionState, StorySession};
use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// Selection made on the command line; skips the first start prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainOptions {
    /// Preselected identity
    pub identity: Option<PlayerIdentity>,
    /// Preselected theme
    pub theme: Option<GameTheme>,
}

struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn say(&mut self, text: impl AsRef<str>) -> TuiResult<()> {
        self.out
            .write_all(format!("{}\n", text.as_ref()).as_bytes())
            .await
            .map_err(|e| TuiError::new(TuiErrorKind::ConsoleIo(e.to_string())))
    }

    /// Prompt and read one line; `None` at end of input.
    async fn ask(&mut self, prompt: &str) -> TuiResult<Option<String>> {
        self.out
            .write_all(prompt.as_bytes())
            .await
            .map_err(|e| TuiError::new(TuiErrorKind::ConsoleIo(e.to_string())))?;
        self.out
            .flush()
            .await
            .map_err(|e| TuiError::new(TuiErrorKind::ConsoleIo(e.to_string())))?;
        self.lines
            .next_line()
            .await
            .map_err(|e| TuiError::new(TuiErrorKind::ConsoleIo(e.to_string())))
    }

    async fn select<T>(&mut self, label: &str) -> TuiResult<Option<T>>
    where
        T: IntoEnumIterator + Display + FromStr + Copy,
    {
        self.say(label).await?;
        let options: Vec<T> = T::iter().collect();
        for (index, option) in options.iter().enumerate() {
            self.say(format!("  {}) {}", index + 1, option)).await?;
        }
        loop {
            let Some(line) = self.ask("> ").await? else {
                return Ok(None);
            };
            let line = line.trim();
            let picked = match line.parse::<usize>() {
                Ok(n) => n.checked_sub(1).and_then(|i| options.get(i).copied()),
                Err(_) => line.parse::<T>().ok(),
            };
            match picked {
                Some(option) => return Ok(Some(option)),
                None => self.say("Opção inválida.").await?,
            }
        }
    }

    async fn show_journey(&mut self, state: &SessionState) -> TuiResult<()> {
        if state.history().is_empty() {
            return Ok(());
        }
        self.say(format!("-- {} --", JOURNEY_HEADING)).await?;
        for entry in journey(state.history()) {
            self.say(&entry.outcome).await?;
            self.say(format!("  | {} {}", CHOSE_LABEL, entry.choice))
                .await?;
        }
        self.say("").await
    }

    async fn show_node(
        &mut self,
        state: &SessionState,
        node: &StoryNode,
        lookup: &dyn SoundLookup,
    ) -> TuiResult<()> {
        self.say("").await?;
        self.show_journey(state).await?;
        self.say(node.outcome_text()).await?;
        self.say("").await?;
        self.say(node.story_text()).await?;
        self.say("").await?;
        self.say(format!("Imagem: {}", node.image_prompt())).await?;
        if let Some(theme) = state.theme() {
            self.say(format!(
                "Ambiente: {} ({})",
                lookup.lookup(node.sound_description(), theme),
                node.sound_description()
            ))
            .await?;
        }
        self.say("").await?;
        for choice in node.choices() {
            self.say(format!("  {}) {}", choice.id(), choice.text()))
                .await?;
        }
        Ok(())
    }

    async fn show_ending(&mut self, state: &SessionState, node: &StoryNode) -> TuiResult<()> {
        self.say("").await?;
        self.say(format!("=== {} ===", END_HEADING)).await?;
        self.say(node.outcome_text()).await?;
        self.say(node.story_text()).await?;
        if let Some(reference) = node.real_event_reference() {
            self.say("").await?;
            self.say(reference).await?;
        }
        self.say("").await?;
        self.say(END_TEXT).await?;
        self.say("").await?;
        self.show_journey(state).await
    }
}

/// Choice id for what the player typed: an id (any case) or a 1-based index.
fn resolve_choice(node: &StoryNode, typed: &str) -> Option<String> {
    let choices = node.choices();
    let by_index = typed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| choices.get(i));
    by_index
        .or_else(|| {
            choices
                .iter()
                .find(|choice| choice.id().eq_ignore_ascii_case(typed))
        })
        .map(|choice| choice.id().clone())
}

/// Play through `session` reading commands from `input`.
///
/// Returns when the player types `q` or input ends.
///
/// # Errors
///
/// Console I/O failures; session refusals other than an unknown choice.
#[tracing::instrument(skip_all)]
pub async fn run_plain<G, R, W>(
    session: &StorySession<G>,
    lookup: &dyn SoundLookup,
    input: R,
    output: W,
    options: PlainOptions,
) -> BorboletaResult<()>
where
    G: StoryGenerator + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut console = Console {
        lines: input.lines(),
        out: output,
    };
    let mut preset = match (options.identity, options.theme) {
        (Some(identity), Some(theme)) => Some((identity, theme)),
        _ => None,
    };

    console.say(TITLE).await?;
    console.say(TAGLINE).await?;

    loop {
        let state = session.snapshot().await;
        if let Some(message) = state.error() {
            console.say(format!("! {}", message)).await?;
        }

        match state.phase() {
            Phase::Start => {
                let (identity, theme) = match preset.take() {
                    Some(selection) => selection,
                    None => {
                        console.say("").await?;
                        let Some(identity) = console.select(IDENTITY_LABEL).await? else {
                            return Ok(());
                        };
                        let Some(theme) = console.select(THEME_LABEL).await? else {
                            return Ok(());
                        };
                        (identity, theme)
                    }
                };
                console.say(LOADING_TEXT).await?;
                session.begin(identity, theme).await?;
            }
            Phase::Playing => {
                let Some(node) = state.current_node() else {
                    session.restart().await;
                    continue;
                };
                console.show_node(&state, node, lookup).await?;
                let Some(line) = console
                    .ask("Sua escolha (r reinicia, q sai): ")
                    .await?
                else {
                    return Ok(());
                };
                match line.trim() {
                    "q" | "Q" => return Ok(()),
                    "r" | "R" => session.restart().await,
                    typed => match resolve_choice(node, typed) {
                        Some(id) => {
                            console.say(LOADING_TEXT).await?;
                            session.choose(&id).await?;
                        }
                        None => console.say("Escolha inválida.").await?,
                    },
                }
            }
            Phase::Ended => {
                if let Some(node) = state.current_node() {
                    console.show_ending(&state, node).await?;
                }
                let Some(line) = console
                    .ask("Enter: Tentar Outra Realidade | q: sair ")
                    .await?
                else {
                    return Ok(());
                };
                if line.trim().eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                session.restart().await;
            }
            Phase::Loading => tokio::task::yield_now().await,
        }
    }
}
