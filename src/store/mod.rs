//! Persisted assignment store
//!
//! Key = experiment name, value = variant label (one of a small closed
//! enumeration). Lifetime = until externally cleared. The tracker is the
//! sole mutator of any given experiment's entry.
//!
//! # Example
//!
//! ```rust
//! use variant_track::store::{AssignmentStore, MemoryAssignmentStore};
//!
//! # async fn example() -> variant_track::Result<()> {
//! let store = MemoryAssignmentStore::new();
//!
//! store.set("cta_banner", "B".to_string()).await?;
//! let label = store.get("cta_banner").await?;
//! assert_eq!(label, Some("B".to_string()));
//!
//! store.remove("cta_banner").await?;
//! assert!(!store.exists("cta_banner").await?);
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::MemoryAssignmentStore;

use crate::Result;
use std::future::Future;

/// Storage backend for sticky variant assignments.
///
/// Implementations map experiment names to variant labels. Backends backed
/// by browser storage, files, or a remote service report outages as
/// [`crate::Error::Store`]; the tracker degrades to an ephemeral assignment
/// instead of surfacing the error.
pub trait AssignmentStore: Send + Sync {
    /// Get the stored variant label for an experiment.
    ///
    /// Returns `None` if no assignment exists.
    fn get(&self, experiment: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Store a variant label for an experiment.
    ///
    /// Overwrites any existing label. The tracker never calls this for an
    /// already-assigned experiment; it exists for hosts that restore state.
    fn set(&self, experiment: &str, label: String) -> impl Future<Output = Result<()>> + Send;

    /// Remove an experiment's assignment.
    ///
    /// No-op if no assignment exists.
    fn remove(&self, experiment: &str) -> impl Future<Output = Result<()>> + Send;

    /// Check whether an assignment exists for an experiment.
    fn exists(&self, experiment: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Store `label` only if the experiment has no assignment yet, and
    /// return the label that ended up stored (first call wins).
    ///
    /// The provided implementation is read-then-write; backends with an
    /// atomic insert should override it.
    fn assign_if_absent(
        &self,
        experiment: &str,
        label: String,
    ) -> impl Future<Output = Result<String>> + Send {
        async move {
            if let Some(existing) = self.get(experiment).await? {
                return Ok(existing);
            }
            self.set(experiment, label.clone()).await?;
            Ok(label)
        }
    }
}

// A session-scoped tracker can share one visitor store with later sessions.
impl<T: AssignmentStore> AssignmentStore for std::sync::Arc<T> {
    async fn get(&self, experiment: &str) -> Result<Option<String>> {
        (**self).get(experiment).await
    }

    async fn set(&self, experiment: &str, label: String) -> Result<()> {
        (**self).set(experiment, label).await
    }

    async fn remove(&self, experiment: &str) -> Result<()> {
        (**self).remove(experiment).await
    }

    async fn exists(&self, experiment: &str) -> Result<bool> {
        (**self).exists(experiment).await
    }

    async fn assign_if_absent(&self, experiment: &str, label: String) -> Result<String> {
        (**self).assign_if_absent(experiment, label).await
    }
}
