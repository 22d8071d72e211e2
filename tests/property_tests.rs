//! Property-based tests for assignment invariants
//!
//! - Sticky assignment holds for arbitrary experiment names
//! - Events always carry the assigned variant
//! - Consent-off means zero side effects for any call sequence
//! - Run with ProptestConfig::with_cases(64) to stay fast

use std::sync::Arc;

use proptest::prelude::*;
use tokio::runtime::Runtime;
use variant_track::sink::MemorySink;
use variant_track::store::MemoryAssignmentStore;
use variant_track::{ConsentGate, Tracker, Variant};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

/// Experiment names as they appear in page code
fn arb_experiment_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,23}"
}

/// Action labels: the conventional two plus custom conversion names
fn arb_action() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("impression".to_string()),
        Just("click".to_string()),
        "[a-z][a-z_]{0,11}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: repeated evaluations return the first call's variant
    #[test]
    fn prop_assignment_is_sticky(name in arb_experiment_name(), repeats in 1usize..20) {
        runtime().block_on(async {
            let tracker = Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
                .consent(ConsentGate::granted_at_start())
                .build();

            let first = tracker.variant(&name).await;
            for _ in 0..repeats {
                prop_assert_eq!(tracker.variant(&name).await, first);
            }
            Ok(())
        })?;
    }

    /// Property: every assignment comes from the defined variant set
    #[test]
    fn prop_assignment_within_defined_set(names in prop::collection::vec(arb_experiment_name(), 1..10)) {
        runtime().block_on(async {
            let tracker = Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
                .consent(ConsentGate::granted_at_start())
                .build();

            for name in &names {
                let variant = tracker.variant(name).await;
                prop_assert!(Variant::ALL.contains(&variant));
            }
            Ok(())
        })?;
    }

    /// Property: events report exactly the variant the sticky rule assigns
    #[test]
    fn prop_events_match_assignment(
        name in arb_experiment_name(),
        actions in prop::collection::vec(arb_action(), 1..8),
    ) {
        runtime().block_on(async {
            let sink = Arc::new(MemorySink::new());
            let tracker = Tracker::builder(MemoryAssignmentStore::new(), Arc::clone(&sink))
                .consent(ConsentGate::granted_at_start())
                .build();

            let assigned = tracker.variant(&name).await;
            for action in &actions {
                tracker.record_event(&name, action).await;
            }

            let events = sink.events();
            prop_assert_eq!(events.len(), actions.len());
            for (event, action) in events.iter().zip(&actions) {
                prop_assert_eq!(event.experiment(), name.as_str());
                prop_assert_eq!(event.variant(), assigned);
                prop_assert_eq!(event.action(), action.as_str());
            }
            Ok(())
        })?;
    }

    /// Property: without consent, no call sequence leaves a trace
    #[test]
    fn prop_no_consent_no_side_effects(
        calls in prop::collection::vec((arb_experiment_name(), arb_action()), 1..20),
    ) {
        runtime().block_on(async {
            let store = Arc::new(MemoryAssignmentStore::new());
            let sink = Arc::new(MemorySink::new());
            let tracker = Tracker::builder(Arc::clone(&store), Arc::clone(&sink)).build();

            for (name, action) in &calls {
                let variant = tracker.variant(name).await;
                prop_assert_eq!(variant, Variant::default());
                tracker.record_event(name, action).await;
            }

            prop_assert!(store.is_empty());
            prop_assert!(sink.is_empty());
            Ok(())
        })?;
    }
}
