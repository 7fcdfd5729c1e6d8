//! Batch User-Details Example
//!
//! Fetches public profile details for a handful of usernames and prints the
//! collated report plus the final rate-limit snapshot.
//!
//! Usage:
//!   cargo run --example fetch_user_details
//!
//! Set `GITHUB_TOKEN` to run authenticated (larger rate-limit budget), and
//! `RUST_LOG=github_user_details=debug` to watch the pool at work.

use github_user_details::{fetch_user_details, FetchOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut opts = FetchOptions::new(vec![
        "kgryte".to_string(),
        "planeshifter".to_string(),
        "rgizz".to_string(),
    ])
    .useragent("beep-boop-bop");

    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        opts = opts.token(token);
    }

    let outcome = fetch_user_details(opts).await?;

    if let Some(rate_limit) = outcome.rate_limit {
        eprintln!(
            "rate limit: {}/{} remaining (resets at {})",
            rate_limit.remaining, rate_limit.limit, rate_limit.reset
        );
    }
    println!("{}", serde_json::to_string_pretty(&outcome.report)?);

    Ok(())
}
