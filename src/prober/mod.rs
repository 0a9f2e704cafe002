use std::time::Duration;

use serde::Serialize;

pub mod http;

pub use http::probe_one;

/// Classification of a transport-level failure: the probe itself could not
/// complete. An unfavorable HTTP status is not a transport failure and never
/// carries one of these.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Timeout,
    ConnectError,
    TooManyRedirects,
    ProtocolError,
    RequestError,
}

impl ErrorClass {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Timeout => "timeout",
            ErrorClass::ConnectError => "connect_error",
            ErrorClass::TooManyRedirects => "too_many_redirects",
            ErrorClass::ProtocolError => "protocol_error",
            ErrorClass::RequestError => "request_error",
        }
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of probing a single target. Exactly one is produced per input URL.
///
/// Two shapes exist, enforced by the constructors:
/// - completed probe: `status`, `elapsed`, `bytes_received` and `final_url`
///   are all present, `error` is absent, `ok == (status < 400)`;
/// - transport failure: only `url`, `ok == false` and `error` are set.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub url: String,
    pub ok: bool,
    pub status: Option<u16>,
    #[serde(serialize_with = "crate::util::serialize_opt_duration_secs")]
    pub elapsed: Option<Duration>,
    pub bytes_received: Option<u64>,
    pub final_url: Option<String>,
    pub error: Option<ErrorClass>,
}

impl ProbeResult {
    /// The server answered; favorably or not is encoded in `ok`.
    pub fn completed(
        url: &str,
        status: u16,
        elapsed: Duration,
        bytes_received: u64,
        final_url: String,
    ) -> Self {
        Self {
            url: url.to_string(),
            ok: status < 400,
            status: Some(status),
            elapsed: Some(elapsed),
            bytes_received: Some(bytes_received),
            final_url: Some(final_url),
            error: None,
        }
    }

    /// The probe never got an HTTP response out of the server.
    pub fn transport_failure(url: &str, error: ErrorClass) -> Self {
        Self {
            url: url.to_string(),
            ok: false,
            status: None,
            elapsed: None,
            bytes_received: None,
            final_url: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_below_400_is_ok() {
        let r = ProbeResult::completed(
            "https://example.com",
            200,
            Duration::from_millis(42),
            128,
            "https://example.com/".to_string(),
        );
        assert!(r.ok);
        assert_eq!(r.status, Some(200));
        assert!(r.elapsed.is_some() && r.bytes_received.is_some() && r.final_url.is_some());
        assert!(r.error.is_none());
    }

    #[test]
    fn completed_at_or_above_400_is_not_ok_but_keeps_status() {
        let r = ProbeResult::completed(
            "https://example.com",
            500,
            Duration::from_millis(30),
            0,
            "https://example.com/".to_string(),
        );
        assert!(!r.ok);
        assert_eq!(r.status, Some(500));
        assert!(r.error.is_none());
    }

    #[test]
    fn transport_failure_has_error_and_nothing_else() {
        let r = ProbeResult::transport_failure("https://example.com", ErrorClass::Timeout);
        assert!(!r.ok);
        assert!(r.status.is_none());
        assert!(r.elapsed.is_none());
        assert!(r.bytes_received.is_none());
        assert!(r.final_url.is_none());
        assert_eq!(r.error, Some(ErrorClass::Timeout));
    }

    #[test]
    fn error_class_strings_are_stable() {
        assert_eq!(ErrorClass::Timeout.as_str(), "timeout");
        assert_eq!(ErrorClass::ConnectError.as_str(), "connect_error");
        assert_eq!(ErrorClass::TooManyRedirects.as_str(), "too_many_redirects");
        assert_eq!(ErrorClass::ProtocolError.as_str(), "protocol_error");
        assert_eq!(ErrorClass::RequestError.as_str(), "request_error");
        assert_eq!(
            serde_json::to_string(&ErrorClass::ConnectError).unwrap(),
            "\"connect_error\""
        );
    }
}
