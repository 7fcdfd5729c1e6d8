//! # github-user-details
//!
//! Concurrent batch retrieval of GitHub user profile details with
//! rate-limit tracking.
//!
//! ## Overview
//!
//! Given a list of usernames, this crate fetches each user's public profile
//! from the GitHub REST API while keeping a bounded number of requests in
//! flight, and collates the per-username outcomes into a single report. The
//! rate-limit state reported by every response is folded into one snapshot
//! that tolerates out-of-order arrival of concurrent responses.
//!
//! ## Key Features
//!
//! - **Bounded concurrency**: a self-refilling pool keeps up to N requests
//!   in flight regardless of individual latency variance
//! - **One report per batch**: every requested username resolves to exactly
//!   one of `data` (detail payload) or `failures` (error message)
//! - **Rate-limit tracking**: a single snapshot of the API's rate-limit
//!   budget that never rolls backwards within a window
//! - **Fail-fast on fatal errors**: transport-level failures abort the batch
//!   immediately; unknown usernames do not
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_user_details::{fetch_user_details, FetchOptions};
//!
//! #[tokio::main]
//! async fn main() -> github_user_details::Result<()> {
//!     let opts = FetchOptions::new(vec![
//!         "kgryte".to_string(),
//!         "planeshifter".to_string(),
//!     ])
//!     .useragent("beep-boop-bop");
//!
//!     let outcome = fetch_user_details(opts).await?;
//!     println!("{:?}", outcome.report.meta);
//!     if let Some(rate_limit) = outcome.rate_limit {
//!         println!("remaining: {}", rate_limit.remaining);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`batch`] | Concurrent batch orchestration and result collation |
//! | [`ratelimit`] | Rate-limit snapshot type and merge policy |
//! | [`client`] | Client and builder |
//! | [`options`] | Query options, validation, and defaults |
//! | [`transport`] | HTTP transport (reqwest) |

pub mod batch;
pub mod client;
pub mod options;
pub mod ratelimit;
pub mod transport;

/// Error type for the library
pub mod error;
pub use error::Error;

// Re-export main types for convenience
pub use batch::{BatchMeta, BatchReport, FetchOutcome};
pub use client::{BatchOutcome, UserDetailsClient, UserDetailsClientBuilder};
pub use options::FetchOptions;
pub use ratelimit::RateLimit;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Fetch user details for each username in `options`.
///
/// One-shot convenience wrapper: validates the options, builds a
/// [`UserDetailsClient`], and runs a single batch query.
pub async fn fetch_user_details(options: FetchOptions) -> Result<BatchOutcome> {
    options.validate()?;

    let mut builder = UserDetailsClient::builder();
    if let Some(token) = options.token {
        builder = builder.token(token);
    }
    if let Some(useragent) = options.useragent {
        builder = builder.useragent(useragent);
    }
    if let Some(concurrency) = options.concurrency {
        builder = builder.concurrency(concurrency);
    }

    builder.build()?.fetch_details(options.usernames).await
}
