//! Trait definitions for Borboleta.
//!
//! The seams between the story session and the outside world: the model
//! driver, the story generator built on top of it, the visit counter and the
//! ambience lookup used by front-ends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{BorboletaDriver, SoundLookup, StoryGenerator, VisitCounter};
