//! Basic Usage Demo - sticky assignment and consent gating
//!
//! Run with: `cargo run --example basic_usage`

use variant_track::sink::MemorySink;
use variant_track::store::{AssignmentStore, MemoryAssignmentStore};
use variant_track::{ConsentGate, Tracker};

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "variant_track=debug".into()),
        )
        .init();

    println!("=== variant-track Basic Usage ===\n");

    let store = Arc::new(MemoryAssignmentStore::new());
    let sink = Arc::new(MemorySink::new());
    let consent = ConsentGate::new();

    let tracker = Tracker::builder(Arc::clone(&store), Arc::clone(&sink))
        .consent(consent.clone())
        .build();

    // 1. Before consent, nothing is tracked
    println!("1. Before consent:");
    let v = tracker.variant("cta_banner").await;
    println!("   variant(cta_banner) = {v} (fallback, not persisted)");
    println!("   stored assignments  = {}", store.len());

    // 2. Visitor accepts the cookie banner
    consent.grant();
    println!("\n2. Consent granted:");
    let v = tracker.variant("cta_banner").await;
    println!("   variant(cta_banner) = {v}");
    println!(
        "   stored label        = {:?}",
        store.get("cta_banner").await.unwrap()
    );

    // 3. Sticky: every further evaluation agrees
    println!("\n3. Sticky assignment:");
    for i in 1..=3 {
        println!("   call {i}: {}", tracker.variant("cta_banner").await);
    }

    // 4. Events carry the assigned variant
    tracker.record_impression("cta_banner").await;
    tracker.record_click("cta_banner").await;
    println!("\n4. Dispatched events:");
    for event in sink.events() {
        println!(
            "   {{experiment: {}, variant: {}, action: {}}}",
            event.experiment(),
            event.variant(),
            event.action()
        );
    }

    // 5. Clearing storage reopens the draw for the next session
    store.clear();
    let tracker = Tracker::builder(Arc::clone(&store), sink)
        .consent(consent)
        .build();
    println!("\n5. After storage clearance:");
    println!("   variant(cta_banner) = {}", tracker.variant("cta_banner").await);
}
