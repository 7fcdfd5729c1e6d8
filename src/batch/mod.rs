//! Concurrent batch execution of user-details queries.
//!
//! This module owns the work queue for one batch invocation: it keeps a
//! bounded number of fetches in flight, folds each response's rate-limit
//! observation into a single snapshot, and collates per-username outcomes
//! into one [`BatchReport`].
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`run`] | Drive a batch of fetches through a self-refilling pool |
//! | [`FetchOutcome`] | Tagged per-username outcome (success or failure) |
//! | [`BatchReport`] | Collated result: counters plus success/failure maps |
//! | [`BatchMeta`] | Aggregate counters for a completed batch |
//!
//! A per-username failure (for example an unknown username) is data, not an
//! error: it lands in [`BatchReport::failures`] and the batch continues. A
//! fetch that fails without producing a rate-limit observation is fatal and
//! aborts the whole batch.

mod orchestrator;

pub use orchestrator::{run, BatchMeta, BatchReport, FetchOutcome};
