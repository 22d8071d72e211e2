//! Fire-and-forget sink over an unbounded channel.
//!
//! `dispatch` enqueues and returns immediately; a consumer drains the
//! receiver on its own schedule and may finish (or fail) after the caller
//! has moved on. This is the delivery model of a page firing a beacon and
//! navigating away without waiting.

use super::AnalyticsSink;
use crate::experiment::EventRecord;
use crate::{Error, Result};
use tokio::sync::mpsc;

/// Producer half of an event channel.
///
/// # Example
///
/// ```rust
/// use variant_track::experiment::{EventRecord, Variant};
/// use variant_track::sink::{AnalyticsSink, ChannelSink};
///
/// # async fn example() -> variant_track::Result<()> {
/// let (sink, mut rx) = ChannelSink::new();
///
/// sink.dispatch(EventRecord::new("cta_banner", Variant::B, "click")).await?;
///
/// let event = rx.recv().await.unwrap();
/// assert_eq!(event.action(), "click");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<EventRecord>,
}

impl ChannelSink {
    /// Create a sink and the receiver a collector task drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<EventRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AnalyticsSink for ChannelSink {
    async fn dispatch(&self, event: EventRecord) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|e| Error::Dispatch(format!("event channel closed: {e}")))
    }
}
