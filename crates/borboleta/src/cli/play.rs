//! `borboleta play`.

use borboleta::{
    App, BorboletaConfig, BorboletaResult, GameTheme, GeminiClient, KeywordSoundLookup,
    LlmStoryGenerator, PlainOptions, PlayerIdentity, StorySession, TuiError, TuiErrorKind,
    run_plain, run_tui,
};
use std::sync::Arc;
use tokio::io::BufReader;

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Line mode
    pub plain: bool,
    /// Preselected identity
    pub identity: Option<PlayerIdentity>,
    /// Preselected theme
    pub theme: Option<GameTheme>,
    /// Launch count to show
    pub visits: Option<u64>,
}

/// Build the generator from `config` and run the chosen front-end.
#[tracing::instrument(skip_all, fields(model = %config.gemini().model(), plain = options.plain))]
pub async fn play(config: BorboletaConfig, options: PlayOptions) -> BorboletaResult<()> {
    let client = GeminiClient::from_config(config.gemini())?;
    let generator = Arc::new(LlmStoryGenerator::from_config(client, &config));

    if options.plain {
        let session = StorySession::new(generator);
        if let Some(visits) = options.visits {
            println!("Visitas: {}", visits);
        }
        return run_plain(
            &session,
            &KeywordSoundLookup,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            PlainOptions {
                identity: options.identity,
                theme: options.theme,
            },
        )
        .await;
    }

    let mut app = App::new(KeywordSoundLookup).with_visits(options.visits);
    if let Some(identity) = options.identity {
        app.identity = identity;
    }
    if let Some(theme) = options.theme {
        app.theme = theme;
    }

    let runtime = tokio::runtime::Handle::current();
    let tick_rate_ms = config.tui().tick_rate_ms();
    tokio::task::spawn_blocking(move || run_tui(runtime, generator, app, tick_rate_ms))
        .await
        .map_err(|e| {
            TuiError::new(TuiErrorKind::Rendering(format!(
                "Interface thread failed: {}",
                e
            )))
        })??;
    Ok(())
}
