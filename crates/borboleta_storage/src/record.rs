//! On-disk visit record.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Persisted counter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VisitRecord {
    /// Visits recorded
    #[getter(copy)]
    count: u64,
    /// Time of the latest visit
    #[getter(copy)]
    last_visit: Option<DateTime<Utc>>,
}

impl VisitRecord {
    /// Record one more visit at `at`.
    pub fn bump(mut self, at: DateTime<Utc>) -> Self {
        self.count = self.count.saturating_add(1);
        self.last_visit = Some(at);
        self
    }
}
