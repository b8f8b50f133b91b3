use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Stable task identifier. Fresh ids are millisecond timestamps.
pub type TaskId = i64;

/// Mints timestamp-based task ids that never repeat within a process,
/// even when several are requested in the same millisecond.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: AtomicI64,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        let mut previous = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }

    /// Record an id already in use so later ids are minted above it
    pub fn observe(&self, id: TaskId) {
        self.last.fetch_max(id, Ordering::AcqRel);
    }
}
