//! Async wrapper pairing a controller with a generator.

use crate::{Resolution, SessionController, SessionState, StoryTicket};
use borboleta_core::{GameTheme, PlayerIdentity};
use borboleta_error::SessionResult;
use borboleta_interface::StoryGenerator;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

/// A play session driving a [`StoryGenerator`].
///
/// The controller lock is released while the generator runs, so `restart`
/// and `snapshot` stay responsive during a request and a restart turns the
/// late answer stale.
///
/// # Examples
///
/// ```no_run
/// use borboleta_core::{GameTheme, PlayerIdentity};
/// use borboleta_session::StorySession;
/// # use borboleta_interface::StoryGenerator;
/// # async fn play<G: StoryGenerator>(generator: G) -> Result<(), Box<dyn std::error::Error>> {
/// let session = StorySession::new(std::sync::Arc::new(generator));
/// session.begin(PlayerIdentity::Mulher, GameTheme::ClimaAmbiental).await?;
/// let state = session.snapshot().await;
/// if let Some(node) = state.current_node() {
///     session.choose(node.choices()[0].id()).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StorySession<G: ?Sized> {
    controller: Mutex<SessionController>,
    generator: Arc<G>,
}

impl<G> StorySession<G>
where
    G: StoryGenerator + ?Sized,
{
    /// New session in `Start`.
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            controller: Mutex::new(SessionController::new()),
            generator,
        }
    }

    /// The generator behind this session.
    pub fn generator(&self) -> &Arc<G> {
        &self.generator
    }

    async fn run(&self, ticket: StoryTicket) -> Resolution {
        let outcome = ticket.request().dispatch(self.generator.as_ref()).await;
        self.controller.lock().await.resolve(ticket, outcome)
    }

    /// Start a story and wait for the opening node.
    ///
    /// # Errors
    ///
    /// Precondition failures from [`SessionController::begin`]. Generator
    /// failures are reported as [`Resolution::Failed`].
    #[instrument(skip(self))]
    pub async fn begin(
        &self,
        identity: PlayerIdentity,
        theme: GameTheme,
    ) -> SessionResult<Resolution> {
        let ticket = self.controller.lock().await.begin(identity, theme)?;
        Ok(self.run(ticket).await)
    }

    /// Pick a choice and wait for the next node.
    ///
    /// # Errors
    ///
    /// Precondition failures from [`SessionController::choose`].
    #[instrument(skip(self))]
    pub async fn choose(&self, choice_id: &str) -> SessionResult<Resolution> {
        let ticket = self.controller.lock().await.choose(choice_id)?;
        Ok(self.run(ticket).await)
    }

    /// Return to `Start`, orphaning any request in flight.
    pub async fn restart(&self) {
        self.controller.lock().await.restart();
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> SessionState {
        self.controller.lock().await.state().clone()
    }
}
