//! In-memory sink that retains dispatched events.
//!
//! Intended for tests and demos; the real system forwards events to an
//! external collector and keeps nothing locally.

use super::AnalyticsSink;
use crate::experiment::EventRecord;
use crate::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink that appends every dispatched event to an in-memory list.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<EventRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events dispatched so far, in dispatch order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().clone()
    }

    /// Number of events dispatched so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no events have been dispatched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all retained events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Event data stays valid even if a holder panicked mid-push
    fn lock(&self) -> MutexGuard<'_, Vec<EventRecord>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AnalyticsSink for MemorySink {
    async fn dispatch(&self, event: EventRecord) -> Result<()> {
        self.lock().push(event);
        Ok(())
    }
}
