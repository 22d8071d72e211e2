//! Assignment - a visitor's stored (experiment, variant) pair

use super::Variant;
use serde::{Deserialize, Serialize};

/// A sticky variant assignment as observed in the store.
///
/// Created on first evaluation of an experiment and never mutated
/// afterward; it disappears only when the underlying storage is cleared.
/// This type is a read-only snapshot, not a handle into the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    experiment: String,
    variant: Variant,
}

impl Assignment {
    /// Create an assignment snapshot.
    #[must_use]
    pub fn new(experiment: impl Into<String>, variant: Variant) -> Self {
        Self {
            experiment: experiment.into(),
            variant,
        }
    }

    /// Get the experiment name.
    #[must_use]
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    /// Get the assigned variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_accessors() {
        let assignment = Assignment::new("cta_banner", Variant::B);
        assert_eq!(assignment.experiment(), "cta_banner");
        assert_eq!(assignment.variant(), Variant::B);
    }

    #[test]
    fn test_assignment_serialization() {
        let assignment = Assignment::new("cta_banner", Variant::A);

        let json = serde_json::to_string(&assignment).unwrap();
        let back: Assignment = serde_json::from_str(&json).unwrap();

        assert_eq!(assignment, back);
    }
}
