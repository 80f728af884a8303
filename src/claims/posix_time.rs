//! Lenient decoding of POSIX timestamps
//!
//! Issuers disagree on how to write `iat`, `exp` and `nbf`. Accepted forms:
//! integers, floats (the fraction is dropped), and numeric strings. `null`,
//! `""` and `"null"` in any letter case leave the field unset.

use crate::error::{Error, Result};

use serde_json::Value;

/// Decode the timestamp stored under `key`
pub(crate) fn from_value(key: &str, value: &Value) -> Result<Option<i64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(seconds) = number.as_i64() {
                return Ok(Some(seconds));
            }
            number
                .as_f64()
                .and_then(truncate)
                .map(Some)
                .ok_or_else(|| invalid(key, value))
        }
        Value::String(text) => from_str(text).ok_or_else(|| invalid(key, value)),
        _ => Err(invalid(key, value)),
    }
}

fn from_str(text: &str) -> Option<Option<i64>> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        return Some(None);
    }

    if let Ok(seconds) = text.parse::<i64>() {
        return Some(Some(seconds));
    }
    text.parse::<f64>().ok().and_then(truncate).map(Some)
}

fn truncate(seconds: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound
    if seconds.is_finite() && seconds >= i64::MIN as f64 && seconds < i64::MAX as f64 {
        Some(seconds.trunc() as i64)
    } else {
        None
    }
}

fn invalid(key: &str, value: &Value) -> Error {
    Error::BadClaims(format!("{key} is not a POSIX time: {value}"))
}
