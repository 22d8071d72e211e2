//! Visitor experiment tracking
//!
//! Sticky A/B assignment and conversion events, gated on consent.
//!
//! ## Model
//!
//! ```text
//! Tracker ──> AssignmentStore   (experiment name -> variant label, sticky)
//!        └──> AnalyticsSink     (EventRecord, fire-and-forget)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use variant_track::{ConsentGate, Tracker};
//! use variant_track::sink::MemorySink;
//! use variant_track::store::MemoryAssignmentStore;
//!
//! # async fn example() {
//! let consent = ConsentGate::new();
//! let tracker = Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
//!     .consent(consent.clone())
//!     .build();
//!
//! // Nothing is tracked until the visitor consents
//! consent.grant();
//!
//! let variant = tracker.variant("cta_banner").await;
//! tracker.record_impression("cta_banner").await;
//! # let _ = variant;
//! # }
//! ```

mod assignment;
mod event;
mod tracker;
mod variant;

pub use assignment::Assignment;
pub use event::{EventRecord, EventRecordBuilder, ACTION_CLICK, ACTION_IMPRESSION};
pub use tracker::{Tracker, TrackerBuilder};
pub use variant::Variant;
