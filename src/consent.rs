//! Consent gate - the boolean that every tracking entry point checks.
//!
//! Modelled as a cheaply cloneable shared handle rather than module-level
//! state: the host constructs one gate at session start and hands clones to
//! whatever needs it. The tracker enforces the check internally, so a call
//! site that forgets to check still cannot leak an assignment or an event.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared consent flag for non-essential storage and tracking.
///
/// Starts denied by default. All clones observe the same underlying flag.
///
/// # Example
///
/// ```rust
/// use variant_track::ConsentGate;
///
/// let gate = ConsentGate::new();
/// assert!(!gate.granted());
///
/// gate.grant();
/// assert!(gate.granted());
///
/// let clone = gate.clone();
/// clone.revoke();
/// assert!(!gate.granted());
/// ```
#[derive(Debug, Clone)]
pub struct ConsentGate {
    granted: Arc<AtomicBool>,
}

impl ConsentGate {
    /// Create a gate in the denied state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            granted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a gate already granted (e.g. consent restored from storage).
    #[must_use]
    pub fn granted_at_start() -> Self {
        let gate = Self::new();
        gate.grant();
        gate
    }

    /// Has the visitor consented to non-essential storage/tracking?
    #[must_use]
    pub fn granted(&self) -> bool {
        self.granted.load(Ordering::Relaxed)
    }

    /// Record affirmative consent.
    pub fn grant(&self) {
        self.granted.store(true, Ordering::Relaxed);
    }

    /// Withdraw consent. Already-stored assignments are left for the host
    /// to clear; no new tracking state is created while revoked.
    pub fn revoke(&self) {
        self.granted.store(false, Ordering::Relaxed);
    }
}

impl Default for ConsentGate {
    fn default() -> Self {
        Self::new()
    }
}
