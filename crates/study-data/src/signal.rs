//! Lenient parsing of request bodies into a [`UserSignal`].
//!
//! The web client sends whatever it has: sometimes nothing, sometimes a
//! half-filled object, occasionally plain garbage. None of that is an
//! error. A body that is not a JSON object behaves like "no signal", a
//! numeric field with the wrong JSON type is treated as missing, and the
//! flags accept any truthy value.

use crate::types::UserSignal;
use serde_json::{Map, Value};

/// Parse raw request bytes into a JSON object.
///
/// Empty, non-UTF-8, malformed and non-object bodies all come back as an
/// empty map.
pub fn parse_body(bytes: &[u8]) -> Map<String, Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Map::new();
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Read a [`UserSignal`] out of an already-parsed JSON object.
pub fn signal_from_map(map: &Map<String, Value>) -> UserSignal {
    UserSignal {
        completion_rate: map.get("completion_rate").and_then(Value::as_f64),
        average_session_time_minutes: map
            .get("average_session_time_minutes")
            .or_else(|| map.get("average_session_time"))
            .and_then(Value::as_f64),
        consistent_schedule: map.get("consistent_schedule").map(truthy),
        regular_breaks: map.get("regular_breaks").map(truthy),
    }
}

/// Empty and zero values are false, everything else is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Parse a request body into an optional signal.
///
/// Returns `None` unless the body is a non-empty JSON object, so that an
/// empty `{}` does not trigger personalization.
pub fn optional_signal(bytes: &[u8]) -> Option<UserSignal> {
    let map = parse_body(bytes);
    if map.is_empty() {
        None
    } else {
        Some(signal_from_map(&map))
    }
}
