//! Terminal front-end for Borboleta.
//!
//! Two ways to play:
//!
//! - [`run_tui`]: full-screen ratatui interface. The UI thread owns a
//!   [`SessionController`](borboleta_session::SessionController); generator
//!   calls run on the tokio runtime and come back over a channel, so an
//!   answer arriving after a restart is discarded.
//! - [`run_plain`]: line mode over any async reader/writer, driving a
//!   [`StorySession`](borboleta_session::StorySession).
//!
//! Ambience cues are mapped to named tracks by [`KeywordSoundLookup`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod plain;
mod runner;
mod sound;
mod ui;
pub mod view;

pub use app::{App, StartField};
pub use borboleta_error::{TuiError, TuiErrorKind, TuiResult};
pub use events::{Event, EventHandler};
pub use plain::{PlainOptions, run_plain};
pub use runner::run_tui;
pub use sound::{
    CROWD, FIRE, FOREST_WIND, KeywordSoundLookup, NEWS, RAIN_THUNDER, SIREN, SUSPENSE,
    TENSE_DEBATE,
};
pub use ui::{accent, draw};
