//! Event Record - one tracking event dispatched to the analytics sink

use super::Variant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conventional action label for "the visitor saw the experiment surface".
pub const ACTION_IMPRESSION: &str = "impression";

/// Conventional action label for "the visitor converted".
pub const ACTION_CLICK: &str = "click";

/// Event Record represents a single tracking event.
///
/// Events are fire-and-forget: each one is handed to the analytics sink
/// immediately and not retained by the tracker. Custom action labels
/// beyond [`ACTION_IMPRESSION`] and [`ACTION_CLICK`] are allowed; the only
/// constraint is that they are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    experiment: String,
    variant: Variant,
    action: String,
    timestamp: DateTime<Utc>,
}

impl EventRecord {
    /// Create a new event record with the current timestamp.
    ///
    /// # Arguments
    ///
    /// * `experiment` - Name of the experiment the event belongs to
    /// * `variant` - The visitor's assigned variant at dispatch time
    /// * `action` - Action label (e.g. "impression", "click")
    #[must_use]
    pub fn new(experiment: impl Into<String>, variant: Variant, action: impl Into<String>) -> Self {
        Self {
            experiment: experiment.into(),
            variant,
            action: action.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a builder for constructing an event record with optional fields.
    #[must_use]
    pub fn builder(
        experiment: impl Into<String>,
        variant: Variant,
        action: impl Into<String>,
    ) -> EventRecordBuilder {
        EventRecordBuilder::new(experiment, variant, action)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// Get the variant the visitor was assigned when the event fired.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the action label.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Get the timestamp when the event was created.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Builder for `EventRecord`.
#[derive(Debug)]
pub struct EventRecordBuilder {
    experiment: String,
    variant: Variant,
    action: String,
    timestamp: DateTime<Utc>,
}

impl EventRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        experiment: impl Into<String>,
        variant: Variant,
        action: impl Into<String>,
    ) -> Self {
        Self {
            experiment: experiment.into(),
            variant,
            action: action.into(),
            timestamp: Utc::now(),
        }
    }

    /// Set a custom timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Build the `EventRecord`.
    #[must_use]
    pub fn build(self) -> EventRecord {
        EventRecord {
            experiment: self.experiment,
            variant: self.variant,
            action: self.action,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record_new() {
        let event = EventRecord::new("cta_banner", Variant::B, ACTION_CLICK);
        assert_eq!(event.experiment(), "cta_banner");
        assert_eq!(event.variant(), Variant::B);
        assert_eq!(event.action(), "click");
        assert!(event.timestamp().timestamp() > 0);
    }

    #[test]
    fn test_event_record_builder_custom_timestamp() {
        let then = Utc::now() - chrono::Duration::hours(1);
        let event = EventRecord::builder("cta_banner", Variant::A, ACTION_IMPRESSION)
            .timestamp(then)
            .build();

        assert_eq!(event.timestamp(), then);
    }

    #[test]
    fn test_event_record_serialization() {
        let event = EventRecord::new("cta_banner", Variant::B, "hover");

        let json = serde_json::to_string(&event).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(event, back);
    }
}
