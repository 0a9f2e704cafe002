use std::time::Duration;

use anyhow::Result;
use reqwest::Method;

pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;
pub const DEFAULT_METHOD: &str = "GET";

/// Per-run probe configuration. Built once by the CLI layer and handed to the
/// dispatcher; never mutated mid-run.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Maximum number of simultaneously in-flight requests.
    pub concurrency: usize,
    /// Applied uniformly per request: connect plus the whole exchange.
    pub timeout: Duration,
    /// HTTP verb used for every target.
    pub method: Method,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            method: Method::GET,
        }
    }
}

impl ProbeOptions {
    /// Build options from raw CLI values, rejecting anything that would make
    /// the run misbehave before a single request is issued.
    pub fn from_args(concurrency: usize, timeout_secs: f64, method: &str) -> Result<Self> {
        if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
            anyhow::bail!("timeout must be a positive number of seconds, got {timeout_secs}");
        }
        let method = Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|_| anyhow::anyhow!("invalid HTTP method: {method}"))?;
        let opts = Self {
            concurrency,
            timeout: Duration::from_secs_f64(timeout_secs),
            method,
        };
        opts.validate()?;
        Ok(opts)
    }

    /// Configuration errors are fatal to the whole run and are detected here,
    /// before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency < 1 {
            anyhow::bail!("concurrency must be at least 1, got {}", self.concurrency);
        }
        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = ProbeOptions::default();
        assert_eq!(opts.concurrency, 5);
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.method, Method::GET);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        assert!(ProbeOptions::from_args(0, 5.0, "GET").is_err());
    }

    #[test]
    fn non_positive_timeout_is_rejected() {
        assert!(ProbeOptions::from_args(5, 0.0, "GET").is_err());
        assert!(ProbeOptions::from_args(5, -1.0, "GET").is_err());
        assert!(ProbeOptions::from_args(5, f64::NAN, "GET").is_err());
    }

    #[test]
    fn method_is_parsed_case_insensitively() {
        let opts = ProbeOptions::from_args(5, 5.0, "head").unwrap();
        assert_eq!(opts.method, Method::HEAD);
        assert!(ProbeOptions::from_args(5, 5.0, "NOT A VERB").is_err());
    }
}
