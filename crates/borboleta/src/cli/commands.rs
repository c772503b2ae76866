//! CLI command definitions.

use borboleta_core::{GameTheme, PlayerIdentity};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Efeito Borboleta - small choices, global consequences
#[derive(Parser, Debug)]
#[command(name = "borboleta")]
#[command(about = "Interactive narrative where every choice ripples into a real-event ending", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Load configuration from this file instead of the layered defaults
    #[arg(long, global = true, env = "BORBOLETA_CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a story
    Play {
        /// Line mode over stdin/stdout instead of the full-screen interface
        #[arg(long)]
        plain: bool,

        /// Gemini model to use
        #[arg(long)]
        model: Option<String>,

        /// Protagonist identity (homem, mulher, nao-binario)
        #[arg(long, requires = "theme")]
        identity: Option<PlayerIdentity>,

        /// Story theme (crimes-reais, clima-ambiental, politica-global, aleatorio)
        #[arg(long, requires = "identity")]
        theme: Option<GameTheme>,

        /// Log file used while the full-screen interface runs
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Show how many times the game has been launched
    Visits,
}
