//! Assignment path benchmarks
//!
//! - Sticky lookup (hot path: assignment already stored)
//! - Fresh assignment (draw + first-call-wins insert)
//! - Event dispatch through the memory sink

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;
use variant_track::sink::MemorySink;
use variant_track::store::MemoryAssignmentStore;
use variant_track::{ConsentGate, Tracker};

fn granted_tracker() -> Tracker<MemoryAssignmentStore, MemorySink> {
    Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
        .consent(ConsentGate::granted_at_start())
        .build()
}

fn bench_sticky_lookup(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tracker = granted_tracker();
    rt.block_on(tracker.variant("cta_banner"));

    c.bench_function("sticky_lookup", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(tracker.variant(black_box("cta_banner")).await) });
    });
}

fn bench_fresh_assignment(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut n = 0u64;
    c.bench_function("fresh_assignment", |b| {
        let tracker = granted_tracker();
        b.to_async(&rt).iter(|| {
            n += 1;
            let name = format!("exp_{n}");
            let tracker = &tracker;
            async move { black_box(tracker.variant(&name).await) }
        });
    });
}

fn bench_record_event(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tracker = granted_tracker();
    rt.block_on(tracker.variant("cta_banner"));

    c.bench_function("record_event", |b| {
        b.to_async(&rt)
            .iter(|| async { tracker.record_event(black_box("cta_banner"), "click").await });
    });
}

criterion_group!(
    benches,
    bench_sticky_lookup,
    bench_fresh_assignment,
    bench_record_event
);
criterion_main!(benches);
