//! Story progression for Borboleta.
//!
//! [`SessionController`] is the state machine behind a play session:
//!
//! ```text
//! Start -> Loading -> Playing -> Loading -> Playing | Ended
//!   ^__________________ restart (from anywhere) ______________|
//! ```
//!
//! The controller never performs I/O. `begin` and `choose` hand back a
//! [`StoryTicket`] describing the generator call to make; the caller runs it
//! (see [`StoryRequest::dispatch`]) and feeds the outcome to
//! [`SessionController::resolve`]. Each ticket carries the session generation
//! it was issued under, so an answer that arrives after a restart is dropped.
//!
//! [`StorySession`] wraps that loop for async callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod phase;
mod request;
mod session;
mod state;

pub use controller::{ADVANCE_FAILED_MESSAGE, SessionController, START_FAILED_MESSAGE};
pub use phase::Phase;
pub use request::{Resolution, StoryRequest, StoryTicket};
pub use session::StorySession;
pub use state::SessionState;
