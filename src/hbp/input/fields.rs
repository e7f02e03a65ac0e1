use crate::Money;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Reads a loosely typed field as text. Null, blank strings, and non-scalar
/// values count as absent; numbers and booleans are rendered as text.
pub fn text(value: &Option<Value>) -> Option<String> {
    return match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };
}

/// First present field among `candidates`
pub fn first_text(candidates: &[&Option<Value>]) -> Option<String> {
    return candidates.iter().find_map(|value| text(value));
}

/// Reads an amount from either a JSON number or a formatted string; never fails
pub fn money(value: &Option<Value>) -> Money {
    return match value {
        Some(Value::Number(n)) => {
            let decimal = match n.as_i64() {
                Some(i) => Some(Decimal::from(i)),
                None => n.as_f64().and_then(Decimal::from_f64),
            };

            match decimal {
                Some(d) => Money(d.normalize()),
                None => {
                    log::warn!("Amount {n} is out of range, counting it as 0");
                    Money::ZERO
                }
            }
        }
        Some(Value::String(s)) => Money::coerce(s),
        _ => Money::ZERO,
    };
}

/// Short description of a JSON value for log lines
pub fn kind(value: &Value) -> &'static str {
    return match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn text_treats_blank_and_null_as_absent() {
        assert_eq!(text(&None), None);
        assert_eq!(text(&Some(json!(null))), None);
        assert_eq!(text(&Some(json!(""))), None);
        assert_eq!(text(&Some(json!("   "))), None);
        assert_eq!(text(&Some(json!({ "nested": true }))), None);
    }

    #[test]
    fn text_renders_scalars() {
        assert_eq!(text(&Some(json!("abc"))), Some("abc".to_string()));
        assert_eq!(text(&Some(json!(1042))), Some("1042".to_string()));
        assert_eq!(text(&Some(json!(true))), Some("true".to_string()));
    }

    #[test]
    fn first_text_falls_through() {
        let missing = None;
        let blank = Some(json!(""));
        let present = Some(json!("x"));

        assert_eq!(first_text(&[&missing, &blank, &present]), Some("x".to_string()));
        assert_eq!(first_text(&[&missing, &blank]), None);
    }

    #[test]
    fn money_from_numbers_and_strings() {
        assert_eq!(money(&Some(json!(200))), Money::from(200));
        assert_eq!(money(&Some(json!(-5))), Money::from(-5));
        assert_eq!(money(&Some(json!(1200.5))), Money::coerce("1200.5"));
        assert_eq!(money(&Some(json!("1200.50"))), Money::coerce("1200.5"));
        assert_eq!(money(&Some(json!("abc"))), Money::ZERO);
        assert_eq!(money(&Some(json!([1, 2]))), Money::ZERO);
        assert_eq!(money(&None), Money::ZERO);
    }

    #[test]
    fn out_of_range_amounts_are_zero() {
        assert_eq!(money(&Some(json!(1e30))), Money::ZERO);
        assert_eq!(money(&Some(json!("99999999999999999999999999999999"))), Money::ZERO);
        assert_eq!(money(&Some(json!(-1e30))), Money::ZERO);
    }
}
