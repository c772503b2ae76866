//! Full-screen main loop.

use crate::{App, Event, EventHandler};
use borboleta_core::StoryNode;
use borboleta_error::{GenerationResult, TuiError, TuiErrorKind, TuiResult};
use borboleta_interface::StoryGenerator;
use borboleta_session::{Resolution, StoryTicket};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

type Finished = (StoryTicket, GenerationResult<StoryNode>);

/// Run the full-screen interface until the player quits.
///
/// Blocks the calling thread; generator calls are spawned on `runtime` and
/// their outcomes are applied on the next tick. Call it from a blocking
/// context (e.g. `tokio::task::spawn_blocking`).
///
/// # Errors
///
/// Terminal setup, input and drawing failures.
pub fn run_tui<G>(
    runtime: Handle,
    generator: Arc<G>,
    mut app: App,
    tick_rate_ms: u64,
) -> TuiResult<()>
where
    G: StoryGenerator + ?Sized + 'static,
{
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enter alternate screen: {}",
            e
        )))
    })?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    tracing::info!("Terminal interface started");
    let events = EventHandler::new(tick_rate_ms);
    let outcome = event_loop(&mut terminal, &mut app, &events, &runtime, &generator);

    // Restore even when the loop failed.
    let restored = restore(&mut terminal);
    tracing::info!("Terminal interface stopped");
    outcome.and(restored)
}

fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to leave alternate screen: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;
    Ok(())
}

fn event_loop<B, G>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
    runtime: &Handle,
    generator: &Arc<G>,
) -> TuiResult<()>
where
    B: Backend,
    G: StoryGenerator + ?Sized + 'static,
{
    let (tx, mut rx) = unbounded_channel::<Finished>();

    while !app.should_quit {
        apply_finished(app, &mut rx);

        terminal
            .draw(|f| crate::ui::draw(f, app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        if let Some(Event::Key(key)) = events.next()? {
            if let Some(ticket) = app.handle_key(key) {
                spawn_request(runtime, Arc::clone(generator), ticket, tx.clone());
            }
        }
    }
    Ok(())
}

/// Apply every outcome that has arrived since the last tick.
pub(crate) fn apply_finished(app: &mut App, rx: &mut UnboundedReceiver<Finished>) {
    while let Ok((ticket, outcome)) = rx.try_recv() {
        match app.apply(ticket, outcome) {
            Resolution::Stale => tracing::debug!("Dropped response from before restart"),
            Resolution::Failed(message) => tracing::warn!(%message, "Request failed"),
            Resolution::Applied(phase) => tracing::debug!(phase = %phase, "Node shown"),
        }
    }
}

/// Run `ticket` on the runtime and post the outcome to `tx`.
pub(crate) fn spawn_request<G>(
    runtime: &Handle,
    generator: Arc<G>,
    ticket: StoryTicket,
    tx: UnboundedSender<Finished>,
) where
    G: StoryGenerator + ?Sized + 'static,
{
    tracing::debug!(
        kind = ticket.request().kind(),
        generation = ticket.generation(),
        sequence = ticket.sequence(),
        "Dispatching request"
    );
    runtime.spawn(async move {
        let outcome = ticket.request().dispatch(generator.as_ref()).await;
        if tx.send((ticket, outcome)).is_err() {
            tracing::debug!("Interface closed before the response arrived");
        }
    });
}
