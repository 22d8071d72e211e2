//! In-memory assignment store backed by `DashMap`.
//!
//! This is the default backend - assignments are lost on process restart,
//! which models a visitor whose storage was cleared. Hosts with durable
//! client storage implement `AssignmentStore` over it instead.

use super::AssignmentStore;
use crate::Result;
use dashmap::DashMap;

/// In-memory assignment store using a lock-free concurrent hashmap.
///
/// Thread-safe; `assign_if_absent` is atomic via the `DashMap` entry API,
/// so racing evaluations of the same experiment all observe one winner.
///
/// # Example
///
/// ```rust
/// use variant_track::store::{AssignmentStore, MemoryAssignmentStore};
///
/// # async fn example() -> variant_track::Result<()> {
/// let store = MemoryAssignmentStore::new();
/// store.set("cta_banner", "B".to_string()).await?;
/// assert_eq!(store.get("cta_banner").await?, Some("B".to_string()));
/// # Ok(())
/// # }
/// ```
pub struct MemoryAssignmentStore {
    assignments: DashMap<String, String>,
}

impl MemoryAssignmentStore {
    /// Create a new in-memory assignment store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignments: DashMap::new(),
        }
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: DashMap::with_capacity(capacity),
        }
    }

    /// Get the number of stored assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if the store holds no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Drop every assignment. Models external storage invalidation.
    pub fn clear(&self) {
        self.assignments.clear();
    }
}

impl Default for MemoryAssignmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentStore for MemoryAssignmentStore {
    async fn get(&self, experiment: &str) -> Result<Option<String>> {
        Ok(self.assignments.get(experiment).map(|v| v.value().clone()))
    }

    async fn set(&self, experiment: &str, label: String) -> Result<()> {
        self.assignments.insert(experiment.to_string(), label);
        Ok(())
    }

    async fn remove(&self, experiment: &str) -> Result<()> {
        self.assignments.remove(experiment);
        Ok(())
    }

    async fn exists(&self, experiment: &str) -> Result<bool> {
        Ok(self.assignments.contains_key(experiment))
    }

    async fn assign_if_absent(&self, experiment: &str, label: String) -> Result<String> {
        let entry = self
            .assignments
            .entry(experiment.to_string())
            .or_insert(label);
        Ok(entry.value().clone())
    }
}
