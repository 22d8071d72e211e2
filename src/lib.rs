//! # variant-track: Sticky A/B Assignment and Conversion Tracking
//!
//! variant-track assigns each visitor to one variant of a named experiment,
//! keeps that assignment sticky for the lifetime of the persisted store,
//! and records impression/conversion events tagged with the (experiment,
//! variant) pair. Every entry point is gated on an affirmative consent
//! flag, enforced inside the tracker rather than at call sites.
//!
//! ## Design
//!
//! - **Sticky assignment**: a prior assignment always wins; fresh draws
//!   are uniform over the defined variants and persisted first-call-wins.
//! - **Never breaks the host**: storage outages degrade to ephemeral
//!   per-session assignments, analytics failures are logged and swallowed,
//!   invalid input is a logged no-op.
//! - **Explicit collaborators**: the store, sink, and consent gate are
//!   passed in at construction; no module-level mutable state.
//!
//! ## Example
//!
//! ```rust
//! use variant_track::{ConsentGate, Tracker, Variant};
//! use variant_track::sink::MemorySink;
//! use variant_track::store::MemoryAssignmentStore;
//!
//! # async fn example() {
//! let tracker = Tracker::builder(MemoryAssignmentStore::new(), MemorySink::new())
//!     .consent(ConsentGate::granted_at_start())
//!     .build();
//!
//! let variant = tracker.variant("cta_banner").await;
//! assert!(Variant::ALL.contains(&variant));
//!
//! tracker.record_impression("cta_banner").await;
//! tracker.record_click("cta_banner").await;
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod consent;
pub mod error;
pub mod experiment;
pub mod sink;
pub mod store;

pub use consent::ConsentGate;
pub use error::{Error, Result};
pub use experiment::{Assignment, EventRecord, Tracker, TrackerBuilder, Variant};
