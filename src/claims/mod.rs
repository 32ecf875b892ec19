//! Claim-time validation
//!
//! Claims are an open JSON map. Only `exp` and `nbf` are interpreted, and
//! only when they hold a JSON number; any other value under those names is
//! left alone.

mod validator;

pub use validator::ClaimsValidation;
pub(crate) use validator::validate_claims;

use serde_json::Value;

/// Read a NumericDate claim as whole Unix seconds
///
/// Integers are taken exactly, unsigned values beyond `i64::MAX` saturate,
/// and floating-point values truncate toward zero (saturating at the `i64`
/// bounds). Non-numeric values yield `None`.
pub fn numeric_date(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    number
        .as_i64()
        .or_else(|| number.as_u64().map(|_| i64::MAX))
        .or_else(|| number.as_f64().map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_date_integers() {
        assert_eq!(numeric_date(&json!(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(numeric_date(&json!(-5)), Some(-5));
        assert_eq!(numeric_date(&json!(0)), Some(0));
        assert_eq!(numeric_date(&json!(u64::MAX)), Some(i64::MAX));
    }

    #[test]
    fn test_numeric_date_floats_truncate() {
        assert_eq!(numeric_date(&json!(1_700_000_000.999)), Some(1_700_000_000));
        assert_eq!(numeric_date(&json!(-1.5)), Some(-1));
        assert_eq!(numeric_date(&json!(1e300)), Some(i64::MAX));
        assert_eq!(numeric_date(&json!(-1e300)), Some(i64::MIN));
    }

    #[test]
    fn test_numeric_date_non_numbers() {
        assert_eq!(numeric_date(&json!("1700000000")), None);
        assert_eq!(numeric_date(&json!(null)), None);
        assert_eq!(numeric_date(&json!(true)), None);
        assert_eq!(numeric_date(&json!([1])), None);
    }
}
