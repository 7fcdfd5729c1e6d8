//! Rate-limit bookkeeping for a batch query.
//!
//! Every GitHub API response reports the caller's current rate-limit budget.
//! Because batch requests run concurrently, those reports can arrive in any
//! order relative to dispatch. [`merge`] folds each observation into the
//! best-known snapshot so that the value returned at the end of a batch is
//! the most pessimistic view the server actually expressed.

use tracing::debug;

/// Snapshot of the API rate limit as reported by response headers.
///
/// `reset` is a Unix timestamp (UTC seconds) marking the end of the current
/// rate-limit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

/// Fold a new rate-limit observation into the current best-known snapshot.
///
/// Pure and deterministic. The cases are evaluated in order:
///
/// 1. no current snapshot: the observation seeds it;
/// 2. older `reset`: the observation predates the current window, keep the
///    snapshot;
/// 3. newer `reset`: the window rolled over during the query sequence, the
///    observation supersedes the snapshot regardless of `remaining`;
/// 4. same `reset`, lower `remaining`: a response processed later by the
///    server arrived out of order, take the lower count;
/// 5. otherwise the observation carries no new information.
pub fn merge(current: Option<RateLimit>, observed: RateLimit) -> RateLimit {
    let Some(curr) = current else {
        debug!(reset = observed.reset, remaining = observed.remaining, "rate limit seeded");
        return observed;
    };
    // Only consider responses having the latest reset time.
    if observed.reset < curr.reset {
        debug!(
            reset = curr.reset,
            remaining = curr.remaining,
            "response has an old reset time; no new rate limit information"
        );
        return curr;
    }
    // Account for the rate limit being reset during a query sequence.
    if observed.reset > curr.reset {
        debug!(
            reset = observed.reset,
            remaining = observed.remaining,
            "rate limit was reset during query sequence"
        );
        return observed;
    }
    // Same window: responses can arrive out-of-order, so a higher remaining
    // count after a lower one was observed must not roll the snapshot back.
    if observed.remaining < curr.remaining {
        debug!(reset = observed.reset, remaining = observed.remaining, "rate limit updated");
        return observed;
    }
    curr
}
