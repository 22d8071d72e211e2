//! Analytics collaborator
//!
//! Accepts (experiment, variant, action) events. Delivery is best-effort
//! and unordered relative to whatever the host does next; the tracker logs
//! and discards dispatch failures, so a sink outage never reaches the
//! caller.

mod memory;
#[cfg(feature = "tokio")]
mod channel;

pub use memory::MemorySink;
#[cfg(feature = "tokio")]
pub use channel::ChannelSink;

use crate::experiment::EventRecord;
use crate::Result;
use std::future::Future;

/// Destination for tracking events.
///
/// Implementations forward events to an analytics backend. `dispatch`
/// should return quickly; sinks that perform real network delivery are
/// expected to enqueue (see [`ChannelSink`]) rather than block the caller.
pub trait AnalyticsSink: Send + Sync {
    /// Deliver one event, best-effort.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Dispatch`] when the event could not be
    /// handed off. The tracker swallows this error after logging it.
    fn dispatch(&self, event: EventRecord) -> impl Future<Output = Result<()>> + Send;
}

impl<T: AnalyticsSink> AnalyticsSink for std::sync::Arc<T> {
    async fn dispatch(&self, event: EventRecord) -> Result<()> {
        (**self).dispatch(event).await
    }
}
