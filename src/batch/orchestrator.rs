//! Batch fetch orchestrator.

use std::collections::HashMap;
use std::future::Future;

use futures::StreamExt;
use serde::Serialize;
use tracing::debug;

use crate::ratelimit::{self, RateLimit};
use crate::Result;

/// Outcome of a single user-details fetch.
///
/// Both arms carry the rate-limit observation reported alongside the
/// response. A fetch that cannot produce one failed at the transport or
/// application level and is surfaced as the `Err` arm of the fetch result,
/// which aborts the batch.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The username resolved to a detail payload.
    Success {
        details: serde_json::Value,
        rate_limit: RateLimit,
    },
    /// The username could not be resolved (for example, not found). The
    /// batch records the message and moves on.
    Failure {
        message: String,
        rate_limit: RateLimit,
    },
}

/// Aggregate counters for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchMeta {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
}

/// Collated result of a batch query.
///
/// Every requested username appears in exactly one of `data` or `failures`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub meta: BatchMeta,
    /// Detail payloads keyed by username.
    pub data: HashMap<String, serde_json::Value>,
    /// Failure messages keyed by username.
    pub failures: HashMap<String, String>,
}

impl BatchReport {
    fn new(total: usize) -> Self {
        Self {
            meta: BatchMeta {
                total,
                success: 0,
                failure: 0,
            },
            data: HashMap::new(),
            failures: HashMap::new(),
        }
    }
}

/// Drive a batch of single-username fetches through a bounded pool.
///
/// Up to `min(pool_size, usernames.len())` fetches are in flight at any
/// instant; each completed request frees a slot for the next pending
/// username, so the pool stays full until the tail of the queue. Responses
/// may complete in any order; the rate-limit snapshot is merged per response
/// via [`ratelimit::merge`], which tolerates reordering.
///
/// The first fatal error (an `Err` from `fetch_one`) ends the batch: no
/// further usernames are dispatched, outcomes of requests still settling are
/// discarded, and the error is returned as-is. Otherwise the future resolves
/// once with the complete report and the final rate-limit snapshot (`None`
/// for an empty input, which completes immediately).
pub async fn run<F, Fut>(
    usernames: Vec<String>,
    pool_size: usize,
    fetch_one: F,
) -> Result<(BatchReport, Option<RateLimit>)>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<FetchOutcome>>,
{
    let total = usernames.len();
    let mut report = BatchReport::new(total);
    let mut rate_limit: Option<RateLimit> = None;

    if total == 0 {
        debug!("no usernames to query");
        return Ok((report, None));
    }

    // Dispatching more concurrent slots than usernames is wasted work.
    let pool = pool_size.max(1).min(total);
    debug!(total, pool, "beginning queries");

    let fetch_one = &fetch_one;
    let mut responses = futures::stream::iter(usernames.into_iter().enumerate().map(
        |(idx, username)| async move {
            debug!(username = username.as_str(), idx, "querying user details");
            let outcome = fetch_one(username.clone()).await;
            (username, idx, outcome)
        },
    ))
    .buffer_unordered(pool);

    while let Some((username, idx, outcome)) = responses.next().await {
        debug!(username = username.as_str(), idx, "response received");
        // A fatal error propagates immediately; dropping the stream ceases
        // all further dispatch and discards outcomes still settling.
        match outcome? {
            FetchOutcome::Success {
                details,
                rate_limit: observed,
            } => {
                rate_limit = Some(ratelimit::merge(rate_limit, observed));
                report.data.insert(username, details);
                report.meta.success += 1;
            }
            FetchOutcome::Failure {
                message,
                rate_limit: observed,
            } => {
                rate_limit = Some(ratelimit::merge(rate_limit, observed));
                debug!(
                    username = username.as_str(),
                    idx,
                    message = message.as_str(),
                    "failed to resolve username"
                );
                report.failures.insert(username, message);
                report.meta.failure += 1;
            }
        }
        debug!(
            completed = report.meta.success + report.meta.failure,
            total, "request complete"
        );
    }

    debug!("finished all queries");
    Ok((report, rate_limit))
}
