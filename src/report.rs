use std::fmt::Write;

use anyhow::Result;

use crate::prober::ProbeResult;
use crate::util::millis;

/// Render the ranked text report: successes sorted fastest-first, then
/// failures with their error class or HTTP status.
pub fn render(results: &[ProbeResult]) -> String {
    let mut ok: Vec<&ProbeResult> = results
        .iter()
        .filter(|r| r.ok && r.elapsed.is_some())
        .collect();
    let failed: Vec<&ProbeResult> = results.iter().filter(|r| !r.ok).collect();

    ok.sort_by(|a, b| a.elapsed.cmp(&b.elapsed));

    let mut out = String::new();
    let _ = writeln!(out, "=== http-frequency — results ===");

    if ok.is_empty() {
        let _ = writeln!(out, "\nNo target responded successfully.");
    } else {
        let _ = writeln!(out, "\nFastest responders:");
        for (i, r) in ok.iter().enumerate() {
            // elapsed is present for every completed probe
            let elapsed_ms = r.elapsed.map(millis).unwrap_or_default();
            let status = r.status.unwrap_or_default();
            let _ = writeln!(
                out,
                "{:>2}. {:<40} {:>7.1} ms  (HTTP {})",
                i + 1,
                r.url,
                elapsed_ms,
                status
            );
        }
    }

    if !failed.is_empty() {
        let _ = writeln!(out, "\nFailures:");
        for r in &failed {
            let reason = match (&r.error, r.status) {
                (Some(err), _) => err.to_string(),
                (None, Some(status)) => format!("HTTP {status}"),
                (None, None) => "unknown".to_string(),
            };
            let _ = writeln!(out, " - {}  ->  {}", r.url, reason);
        }
    }

    out
}

/// Machine-readable alternative to the text report.
pub fn render_json(results: &[ProbeResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
