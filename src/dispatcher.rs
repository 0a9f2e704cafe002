use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{Client, redirect};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;

use crate::config::ProbeOptions;
use crate::prober::{ProbeResult, probe_one};

const USER_AGENT: &str = concat!("http-frequency/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Probe every target with at most `opts.concurrency` requests in flight.
///
/// One shared client serves the whole run so connections are reused across
/// probes. Returns exactly one `ProbeResult` per input URL (duplicates
/// included); the order of the returned results is unspecified. An empty
/// input yields an empty result set.
///
/// Individual probe failures never abort the batch. The only hard errors are
/// invalid options, rejected before any request is issued.
pub async fn run_probe(urls: &[String], opts: &ProbeOptions) -> Result<Vec<ProbeResult>> {
    opts.validate()?;
    if urls.is_empty() {
        return Ok(Vec::new());
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(opts.timeout)
        .connect_timeout(opts.timeout)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .context("building HTTP client")?;

    let gate = Arc::new(Semaphore::new(opts.concurrency));
    let mut tasks = JoinSet::new();

    for url in urls {
        let client = client.clone();
        let gate = gate.clone();
        let method = opts.method.clone();
        let url = url.clone();
        tasks.spawn(async move {
            // Permit held for the duration of the probe, released on drop
            // whether the probe succeeded or not. The gate is never closed.
            let _permit = gate
                .acquire_owned()
                .await
                .expect("probe admission gate closed");
            debug!(%url, "probing");
            probe_one(&client, &url, &method).await
        });
    }

    let mut results = Vec::with_capacity(urls.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("probe task panicked")?);
    }
    Ok(results)
}
