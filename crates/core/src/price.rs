//! Price coercion.
//!
//! Legacy imports stored prices as currency-formatted strings (`"$1,200"`)
//! while newly inserted records store plain numbers. Two entry points:
//!
//! - [`coerce`] is the lenient read-side path used by price display and the
//!   price range filter. Anything unusable degrades to `0.0` rather than
//!   failing, matching how legacy records have always been read.
//! - [`parse_input`] is the strict write-side path. A price that cannot be
//!   parsed, or that is negative, is a validation error -- writes must not
//!   silently store `0`.
//!
//! Both strip `$` and `,` and trim whitespace before parsing so the range
//! filter and the display path can never disagree about the same record.

use serde_json::Value;

use crate::error::CoreError;

/// Strip currency formatting from a price string.
pub fn strip_currency(raw: &str) -> String {
    raw.replace(['$', ','], "").trim().to_string()
}

/// Lenient coercion of a stored price value to a number.
///
/// - Absent or null -> `0.0`
/// - Number -> unchanged
/// - String -> stripped of `$`/`,`, trimmed, parsed as `f64`; `0.0` on failure
/// - Any other JSON type -> `0.0`
pub fn coerce(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => strip_currency(s).parse().unwrap_or(0.0),
        Some(_) => 0.0,
    }
}

/// Strict parse of a submitted price (create/update input).
///
/// Accepts a JSON number or a currency-formatted string. Rejects anything
/// unparseable, non-finite, or negative.
pub fn parse_input(value: &Value) -> Result<f64, CoreError> {
    let parsed = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CoreError::Validation("price is not a valid number".into()))?,
        Value::String(s) => strip_currency(s)
            .parse::<f64>()
            .map_err(|_| CoreError::Validation(format!("price {s:?} is not a valid number")))?,
        _ => return Err(CoreError::Validation("price must be a number".into())),
    };

    if !parsed.is_finite() {
        return Err(CoreError::Validation("price must be finite".into()));
    }
    if parsed < 0.0 {
        return Err(CoreError::Validation("price must be non-negative".into()));
    }
    Ok(parsed)
}
