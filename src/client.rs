//! Client interface for batch user-details queries.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::UserDetailsClientBuilder;
pub use core::{BatchOutcome, UserDetailsClient};
