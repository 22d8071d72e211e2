//! Tracker - sticky variant assignment and consent-gated event recording

use super::{Assignment, EventRecord, Variant};
use crate::consent::ConsentGate;
use crate::sink::AnalyticsSink;
use crate::store::AssignmentStore;
use crate::{Error, Result};
use dashmap::DashMap;
use tracing::{debug, warn};

/// Visitor experiment tracker.
///
/// One instance per visitor session, constructed explicitly at session
/// start. Holds the persisted assignment store, the analytics sink, and a
/// consent gate; every public operation checks the gate itself, so a
/// caller that forgets to check consent still cannot create or read
/// tracking state.
///
/// Per (visitor, experiment) the state machine is
/// `Unassigned -> Assigned(variant)`: a single one-way transition,
/// reverted only by external storage clearance.
///
/// # Example
///
/// ```rust
/// use variant_track::{ConsentGate, Tracker};
/// use variant_track::sink::MemorySink;
/// use variant_track::store::MemoryAssignmentStore;
///
/// # async fn example() {
/// let tracker = Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
///     .consent(ConsentGate::granted_at_start())
///     .build();
///
/// let variant = tracker.variant("cta_banner").await;
/// tracker.record_impression("cta_banner").await;
/// tracker.record_click("cta_banner").await;
///
/// // Sticky: same variant on every later evaluation
/// assert_eq!(tracker.variant("cta_banner").await, variant);
/// # }
/// ```
pub struct Tracker<S, A> {
    store: S,
    sink: A,
    consent: ConsentGate,
    // Fallback assignments for when the store is unavailable; sticky for
    // this tracker's lifetime only, never persisted.
    ephemeral: DashMap<String, Variant>,
}

impl<S, A> Tracker<S, A>
where
    S: AssignmentStore,
    A: AnalyticsSink,
{
    /// Create a tracker with an explicit consent gate.
    #[must_use]
    pub fn new(store: S, sink: A, consent: ConsentGate) -> Self {
        Self {
            store,
            sink,
            consent,
            ephemeral: DashMap::new(),
        }
    }

    /// Create a builder. The consent gate defaults to denied.
    #[must_use]
    pub fn builder(store: S, sink: A) -> TrackerBuilder<S, A> {
        TrackerBuilder::new(store, sink)
    }

    /// Get the tracker's consent gate.
    #[must_use]
    pub const fn consent(&self) -> &ConsentGate {
        &self.consent
    }

    /// Get the visitor's variant for an experiment, assigning one if none
    /// is stored yet.
    ///
    /// A prior assignment always wins unchanged. A fresh assignment is
    /// drawn uniformly over [`Variant::ALL`] and persisted first-call-wins,
    /// so racing evaluations of the same experiment all observe one
    /// winner. Safe to call any number of times per session.
    ///
    /// Degradations (never errors):
    /// - consent not granted: returns [`Variant::default`], no side effects;
    /// - empty experiment name: logged, returns [`Variant::default`];
    /// - store unavailable: assignment becomes ephemeral for this
    ///   tracker's lifetime and is not persisted.
    pub async fn variant(&self, experiment: &str) -> Variant {
        if !self.consent.granted() {
            return Variant::default();
        }
        if let Err(e) = validate_experiment(experiment) {
            warn!(error = %e, "rejected variant lookup");
            return Variant::default();
        }
        self.resolve(experiment).await
    }

    /// Record a tracking event for an experiment.
    ///
    /// The event carries the visitor's assigned variant, resolved by the
    /// same sticky rule as [`Tracker::variant`]. Dispatch failures are
    /// logged and swallowed; tracking must never break the page.
    ///
    /// No-op when consent is not granted or when `experiment`/`action` is
    /// empty.
    pub async fn record_event(&self, experiment: &str, action: &str) {
        if !self.consent.granted() {
            return;
        }
        if let Err(e) = validate_experiment(experiment).and_then(|()| validate_action(action)) {
            warn!(error = %e, "rejected tracking event");
            return;
        }

        let variant = self.resolve(experiment).await;
        let event = EventRecord::new(experiment, variant, action);
        if let Err(e) = self.sink.dispatch(event).await {
            warn!(experiment, action, error = %e, "analytics dispatch failed");
        }
    }

    /// Record an impression event.
    pub async fn record_impression(&self, experiment: &str) {
        self.record_event(experiment, super::ACTION_IMPRESSION).await;
    }

    /// Record a click (conversion) event.
    pub async fn record_click(&self, experiment: &str) {
        self.record_event(experiment, super::ACTION_CLICK).await;
    }

    /// Peek at an experiment's assignment without creating one.
    ///
    /// Returns `None` for unassigned experiments, when consent is not
    /// granted, or when the store is unreadable.
    pub async fn assignment(&self, experiment: &str) -> Option<Assignment> {
        if !self.consent.granted() || experiment.is_empty() {
            return None;
        }
        if let Some(variant) = self.ephemeral.get(experiment) {
            return Some(Assignment::new(experiment, *variant));
        }
        match self.store.get(experiment).await {
            Ok(Some(label)) => match label.parse::<Variant>() {
                Ok(variant) => Some(Assignment::new(experiment, variant)),
                Err(e) => {
                    warn!(experiment, error = %e, "stored label invalid");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(experiment, error = %e, "assignment store read failed");
                None
            }
        }
    }

    // Sticky-assignment rule, gate and validation already applied.
    async fn resolve(&self, experiment: &str) -> Variant {
        if let Some(variant) = self.ephemeral.get(experiment) {
            return *variant;
        }
        match self.store.get(experiment).await {
            Ok(Some(label)) => match label.parse::<Variant>() {
                Ok(variant) => variant,
                Err(e) => {
                    warn!(experiment, error = %e, "stored label invalid, reassigning");
                    self.reassign(experiment).await
                }
            },
            Ok(None) => self.assign(experiment).await,
            Err(e) => {
                warn!(experiment, error = %e, "assignment store read failed");
                self.assign_ephemeral(experiment)
            }
        }
    }

    // Fresh assignment via first-call-wins insert.
    async fn assign(&self, experiment: &str) -> Variant {
        let fresh = Variant::draw(&mut rand::thread_rng());
        match self
            .store
            .assign_if_absent(experiment, fresh.label().to_string())
            .await
        {
            Ok(winner) => match winner.parse::<Variant>() {
                Ok(variant) => {
                    debug!(experiment, variant = %variant, "assigned variant");
                    variant
                }
                Err(e) => {
                    warn!(experiment, error = %e, "winning label invalid");
                    self.assign_ephemeral(experiment)
                }
            },
            Err(e) => {
                warn!(experiment, error = %e, "assignment store write failed");
                self.assign_ephemeral(experiment)
            }
        }
    }

    // Overwrite a corrupt stored label with a fresh draw.
    async fn reassign(&self, experiment: &str) -> Variant {
        let fresh = Variant::draw(&mut rand::thread_rng());
        if let Err(e) = self.store.set(experiment, fresh.label().to_string()).await {
            warn!(experiment, error = %e, "assignment store write failed");
            return self.assign_ephemeral(experiment);
        }
        debug!(experiment, variant = %fresh, "assigned variant");
        fresh
    }

    fn assign_ephemeral(&self, experiment: &str) -> Variant {
        let entry = self
            .ephemeral
            .entry(experiment.to_string())
            .or_insert_with(|| Variant::draw(&mut rand::thread_rng()));
        *entry
    }
}

fn validate_experiment(experiment: &str) -> Result<()> {
    if experiment.is_empty() {
        return Err(Error::EmptyExperimentName);
    }
    Ok(())
}

fn validate_action(action: &str) -> Result<()> {
    if action.is_empty() {
        return Err(Error::EmptyAction);
    }
    Ok(())
}

/// Builder for [`Tracker`].
#[derive(Debug)]
pub struct TrackerBuilder<S, A> {
    store: S,
    sink: A,
    consent: ConsentGate,
}

impl<S, A> TrackerBuilder<S, A>
where
    S: AssignmentStore,
    A: AnalyticsSink,
{
    /// Create a new builder with the two collaborators.
    #[must_use]
    pub fn new(store: S, sink: A) -> Self {
        Self {
            store,
            sink,
            consent: ConsentGate::new(),
        }
    }

    /// Set the consent gate (defaults to a fresh, denied gate).
    #[must_use]
    pub fn consent(mut self, consent: ConsentGate) -> Self {
        self.consent = consent;
        self
    }

    /// Build the [`Tracker`].
    #[must_use]
    pub fn build(self) -> Tracker<S, A> {
        Tracker::new(self.store, self.sink, self.consent)
    }
}
