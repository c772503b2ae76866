//! Visit counters for Borboleta.
//!
//! Two implementations of [`VisitCounter`](borboleta_interface::VisitCounter):
//!
//! - [`InMemoryVisitCounter`] lives as long as the process
//! - [`FileVisitCounter`] keeps a small JSON record in the data directory
//!
//! Neither is read by the story session; front-ends increment them once per
//! launch and show the total.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod memory;
mod record;

pub use file::{FileVisitCounter, VISITS_FILE_NAME};
pub use memory::InMemoryVisitCounter;
pub use record::VisitRecord;
