use reqwest::{Client, Method};
use tokio::time::Instant;

use super::{ErrorClass, ProbeResult};

/// Probe a single target: issue one request, follow redirects, time the full
/// exchange and materialize the body to measure its size.
///
/// Transport failures are folded into the returned `ProbeResult`; this never
/// fails outright. An HTTP status >= 400 is a completed probe of an unhealthy
/// endpoint, not a failure of the probe.
pub async fn probe_one(client: &Client, url: &str, method: &Method) -> ProbeResult {
    let start = Instant::now();

    let resp = match client.request(method.clone(), url).send().await {
        Ok(resp) => resp,
        Err(e) => return ProbeResult::transport_failure(url, classify(&e)),
    };

    let status = resp.status().as_u16();
    let final_url = resp.url().to_string();

    // Full-body download, even when the caller only wants the byte count.
    // Also the point where a mid-body timeout or truncation surfaces.
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => return ProbeResult::transport_failure(url, classify(&e)),
    };
    let elapsed = start.elapsed();

    ProbeResult::completed(url, status, elapsed, body.len() as u64, final_url)
}

/// Map a client error onto the stable error taxonomy. DNS failures come
/// through `is_connect`, so they share the connect class.
fn classify(e: &reqwest::Error) -> ErrorClass {
    if e.is_timeout() {
        ErrorClass::Timeout
    } else if e.is_connect() {
        ErrorClass::ConnectError
    } else if e.is_redirect() {
        ErrorClass::TooManyRedirects
    } else if e.is_builder() || e.is_request() {
        ErrorClass::RequestError
    } else {
        // body/decode errors and anything else the server garbled
        ErrorClass::ProtocolError
    }
}
