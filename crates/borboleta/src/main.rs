//! Borboleta CLI binary.
//!
//! - `borboleta play` runs the story in the terminal
//! - `borboleta visits` prints the launch count

use borboleta::{BorboletaConfig, LogTarget, LoggingConfig, init_logging};
use clap::Parser;

mod cli;

const LOG_FILE_NAME: &str = "borboleta.log";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, PlayOptions, play, record_launch, show_visits};

    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BorboletaConfig::from_file(path)?,
        None => BorboletaConfig::load()?,
    };

    let target = match &cli.command {
        Commands::Play {
            plain: false,
            log_file,
            ..
        } => LogTarget::File(
            log_file
                .clone()
                .unwrap_or_else(|| config.storage().resolved_data_dir().join(LOG_FILE_NAME)),
        ),
        _ => LogTarget::Stderr,
    };
    let logging = LoggingConfig::new()
        .with_log_level(if cli.verbose { "debug" } else { "info" })
        .with_json_logs(cli.json_logs)
        .with_target(target);
    init_logging(&logging)?;

    match cli.command {
        Commands::Play {
            plain,
            model,
            identity,
            theme,
            log_file: _,
        } => {
            let config = match model {
                Some(model) => config.with_model(model),
                None => config,
            };
            let visits = record_launch(&config);
            play(
                config,
                PlayOptions {
                    plain,
                    identity,
                    theme,
                    visits,
                },
            )
            .await?;
        }

        Commands::Visits => {
            show_visits(&config)?;
        }
    }

    Ok(())
}
