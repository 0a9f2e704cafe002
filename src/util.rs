use std::time::Duration;

use serde::Serializer;

/// Serialize an optional duration as fractional seconds, the shape the JSON
/// output documents for `elapsed`.
pub fn serialize_opt_duration_secs<S>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match d {
        Some(d) => s.serialize_some(&d.as_secs_f64()),
        None => s.serialize_none(),
    }
}

pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
