use std::sync::Arc;

use tracing::debug;

use crate::batch::{self, BatchReport};
use crate::client::builder::UserDetailsClientBuilder;
use crate::options::validate_usernames;
use crate::ratelimit::RateLimit;
use crate::transport::HttpTransport;
use crate::Result;

/// Result of one batch query: the collated report plus the best-known
/// rate-limit snapshot (`None` when no request was made).
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub report: BatchReport,
    pub rate_limit: Option<RateLimit>,
}

/// Client for fetching user details in bulk.
pub struct UserDetailsClient {
    transport: Arc<HttpTransport>,
    concurrency: usize,
}

impl UserDetailsClient {
    /// Create a builder for a client with custom configuration.
    pub fn builder() -> UserDetailsClientBuilder {
        UserDetailsClientBuilder::new()
    }

    pub(crate) fn from_parts(transport: Arc<HttpTransport>, concurrency: usize) -> Self {
        Self {
            transport,
            concurrency,
        }
    }

    /// Fetch details for each username concurrently and collate the results.
    ///
    /// Per-username failures (unknown usernames and other resolvable
    /// non-success responses) land in the report's failure map; the first
    /// fatal error aborts the batch and is returned instead. An empty
    /// username list resolves immediately with zero counts.
    pub async fn fetch_details(&self, usernames: Vec<String>) -> Result<BatchOutcome> {
        validate_usernames(&usernames)?;
        debug!(count = usernames.len(), "fetching user details");

        let transport = &self.transport;
        let (report, rate_limit) = batch::run(usernames, self.concurrency, |username| {
            let transport = transport.clone();
            async move { transport.fetch_user(&username).await }
        })
        .await?;

        Ok(BatchOutcome { report, rate_limit })
    }
}
