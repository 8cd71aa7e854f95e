//! Best-effort numeric coercion for hand-edited sheet cells.
//!
//! A stock count may arrive as `12`, `"12"`, `"12 units"`, or garbage.
//! These helpers extract what they can and report `None` otherwise so the
//! caller can apply its documented default (usually zero).

use serde_json::Value;

/// Integer coercion with leading-digits semantics: `"12 units"` → 12,
/// `12.7` → 12, `"abc"` → None.
pub(crate) fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Float coercion: numbers pass through, numeric strings parse,
/// everything else is None.
pub(crate) fn value_to_f32(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_i64() {
        assert_eq!(value_to_i64(&json!(12)), Some(12));
        assert_eq!(value_to_i64(&json!(12.7)), Some(12));
        assert_eq!(value_to_i64(&json!("12")), Some(12));
        assert_eq!(value_to_i64(&json!(" 12 units ")), Some(12));
        assert_eq!(value_to_i64(&json!("abc")), None);
        assert_eq!(value_to_i64(&json!(null)), None);
        assert_eq!(value_to_i64(&json!([1])), None);
    }

    #[test]
    fn test_value_to_f32() {
        assert_eq!(value_to_f32(&json!(4.5)), Some(4.5));
        assert_eq!(value_to_f32(&json!("4.5")), Some(4.5));
        assert_eq!(value_to_f32(&json!("bad")), None);
        assert_eq!(value_to_f32(&json!({})), None);
    }
}
