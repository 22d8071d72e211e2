//! Conversion Funnel Demo - fire-and-forget dispatch over a channel sink
//!
//! Run with: `cargo run --example conversion_funnel`
//!
//! A collector task drains the event channel on its own schedule, the way
//! a beacon endpoint receives events after the page has moved on.

use variant_track::sink::ChannelSink;
use variant_track::store::MemoryAssignmentStore;
use variant_track::{ConsentGate, Tracker};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "variant_track=debug".into()),
        )
        .init();

    println!("=== variant-track Conversion Funnel ===\n");

    let (sink, mut rx) = ChannelSink::new();

    // Collector: counts impressions and clicks per (experiment, variant)
    let collector = tokio::spawn(async move {
        let mut impressions = 0u32;
        let mut clicks = 0u32;
        while let Some(event) = rx.recv().await {
            match event.action() {
                "impression" => impressions += 1,
                "click" => clicks += 1,
                other => println!("   custom action: {other}"),
            }
            println!(
                "   collected {{experiment: {}, variant: {}, action: {}}}",
                event.experiment(),
                event.variant(),
                event.action()
            );
        }
        (impressions, clicks)
    });

    let tracker = Tracker::builder(MemoryAssignmentStore::new(), sink)
        .consent(ConsentGate::granted_at_start())
        .build();

    // Ten page views, three of which convert
    println!("Simulating 10 visits to the CTA banner:");
    for visit in 0..10 {
        tracker.record_impression("cta_banner").await;
        if visit % 3 == 0 {
            tracker.record_click("cta_banner").await;
        }
    }

    // Dropping the tracker closes the channel; the collector drains what
    // was already enqueued.
    let variant = tracker.variant("cta_banner").await;
    drop(tracker);

    let (impressions, clicks) = collector.await.unwrap();
    println!("\nFunnel for variant {variant}:");
    println!("   impressions = {impressions}");
    println!("   clicks      = {clicks}");
    let rate = f64::from(clicks) / f64::from(impressions) * 100.0;
    println!("   conversion  = {rate:.1}%");
}
