//! Clock formatting and duration resolution.

use serde_json::Value;
use tracing::warn;

/// Duration used when the setting is missing, unparseable or not positive.
pub const DEFAULT_DURATION_SECS: u32 = 900;

/// Format remaining seconds as `m:ss`.
///
/// Minutes are unpadded and may exceed 59: `900 -> "15:00"`, `65 -> "1:05"`,
/// `0 -> "0:00"`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Resolve the configured timer duration.
///
/// Accepts a JSON number (fraction truncated) or a string whose leading
/// integer is used, so `"120s"` means 120. Anything else, and any value that
/// is not positive, yields [`DEFAULT_DURATION_SECS`]. Large values saturate.
pub fn resolve_duration(raw: Option<&Value>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_DURATION_SECS;
    };

    let parsed = match raw {
        Value::Null => return DEFAULT_DURATION_SECS,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    };

    match parsed {
        Some(secs) if secs > 0 => u32::try_from(secs).unwrap_or(u32::MAX),
        _ => {
            warn!(timer_time = %raw, "invalid timer duration, using default");
            DEFAULT_DURATION_SECS
        }
    }
}

/// Parse the leading base-10 integer of `s`, after optional whitespace and
/// sign. Returns `None` when no digit follows.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(2), "0:02");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(900), "15:00");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn test_format_is_pure() {
        assert_eq!(format_time(431), format_time(431));
    }

    #[test]
    fn test_missing_duration_defaults() {
        assert_eq!(resolve_duration(None), DEFAULT_DURATION_SECS);
        assert_eq!(resolve_duration(Some(&Value::Null)), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn test_numeric_duration() {
        assert_eq!(resolve_duration(Some(&json!(120))), 120);
        assert_eq!(resolve_duration(Some(&json!(90.9))), 90);
        assert_eq!(resolve_duration(Some(&json!(1e12))), u32::MAX);
    }

    #[test]
    fn test_string_duration() {
        assert_eq!(resolve_duration(Some(&json!("300"))), 300);
        assert_eq!(resolve_duration(Some(&json!("  45 seconds"))), 45);
        assert_eq!(resolve_duration(Some(&json!("+7"))), 7);
    }

    #[test]
    fn test_invalid_duration_defaults() {
        for raw in [json!(0), json!(-5), json!("abc"), json!(""), json!("-3"), json!(true), json!([1])] {
            assert_eq!(resolve_duration(Some(&raw)), DEFAULT_DURATION_SECS, "input {raw}");
        }
    }
}
