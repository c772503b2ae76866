//! Process-lifetime counter.

use borboleta_error::BorboletaResult;
use borboleta_interface::VisitCounter;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter that forgets everything on exit.
#[derive(Debug, Default)]
pub struct InMemoryVisitCounter {
    count: AtomicU64,
}

impl InMemoryVisitCounter {
    /// Counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter starting at `count`.
    pub fn starting_at(count: u64) -> Self {
        Self {
            count: AtomicU64::new(count),
        }
    }
}

impl VisitCounter for InMemoryVisitCounter {
    fn increment(&self) -> BorboletaResult<u64> {
        let total = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(total, "Visit recorded in memory");
        Ok(total)
    }

    fn current(&self) -> BorboletaResult<u64> {
        Ok(self.count.load(Ordering::SeqCst))
    }
}
