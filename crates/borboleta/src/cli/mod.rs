//! Command-line interface module.

mod commands;
mod play;
mod visits;

pub use commands::{Cli, Commands};
pub use play::{PlayOptions, play};
pub use visits::{record_launch, show_visits};
