//! Conversion of operator text into typed argument values.

use serde_json::{Number, Value};

use super::catalog::ParamType;
use super::error::CoercionError;

/// Tokens read as `true` for boolean parameters (case-insensitive).
pub const TRUTHY_TOKENS: [&str; 4] = ["true", "yes", "y", "1"];

/// Convert one line of operator input according to the declared type.
///
/// Booleans never fail: anything outside [`TRUTHY_TOKENS`] is `false`.
/// Unknown type tags pass the text through unchanged.
pub fn coerce(raw: &str, kind: &ParamType) -> Result<Value, CoercionError> {
    let fail = |reason: String| CoercionError {
        input: raw.to_string(),
        kind: kind.to_string(),
        reason,
    };

    match kind {
        ParamType::Object | ParamType::Array => {
            let value: Value = serde_json::from_str(raw).map_err(|e| fail(e.to_string()))?;
            let matches = match kind {
                ParamType::Object => value.is_object(),
                _ => value.is_array(),
            };
            if matches {
                Ok(value)
            } else {
                Err(fail(format!("expected a JSON {kind}")))
            }
        }
        ParamType::Number => {
            let parsed: f64 = raw.trim().parse().map_err(|e| fail(format!("{e}")))?;
            Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(|| fail("not a finite number".to_string()))
        }
        ParamType::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| fail(format!("{e}"))),
        ParamType::Boolean => {
            let token = raw.trim().to_lowercase();
            Ok(Value::Bool(TRUTHY_TOKENS.contains(&token.as_str())))
        }
        ParamType::String | ParamType::Other(_) => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer() {
        assert_eq!(coerce("42", &ParamType::Integer).unwrap(), json!(42));
        assert_eq!(coerce(" -7 ", &ParamType::Integer).unwrap(), json!(-7));

        let err = coerce("4.2", &ParamType::Integer).unwrap_err();
        assert_eq!(err.input, "4.2");
        assert_eq!(err.kind, "integer");
    }

    #[test]
    fn test_number() {
        assert_eq!(coerce("2.5", &ParamType::Number).unwrap(), json!(2.5));
        assert_eq!(coerce("3", &ParamType::Number).unwrap(), json!(3.0));
        assert!(coerce("abc", &ParamType::Number).is_err());
        assert!(coerce("NaN", &ParamType::Number).is_err());
    }

    #[test]
    fn test_boolean_tokens() {
        for token in ["true", "YES", "y", "1", "True"] {
            assert_eq!(coerce(token, &ParamType::Boolean).unwrap(), json!(true), "{token}");
        }
        for token in ["false", "no", "0", "", "maybe"] {
            assert_eq!(coerce(token, &ParamType::Boolean).unwrap(), json!(false), "{token}");
        }
    }

    #[test]
    fn test_structured_literals() {
        assert_eq!(
            coerce(r#"{"a": 1}"#, &ParamType::Object).unwrap(),
            json!({ "a": 1 })
        );
        assert_eq!(coerce("[1, 2]", &ParamType::Array).unwrap(), json!([1, 2]));
        assert!(coerce("{not json", &ParamType::Object).is_err());
        assert!(coerce("[1]", &ParamType::Object).is_err());
        assert!(coerce(r#"{"a": 1}"#, &ParamType::Array).is_err());
    }

    #[test]
    fn test_text_passthrough() {
        assert_eq!(coerce(" robot ", &ParamType::String).unwrap(), json!(" robot "));
        assert_eq!(
            coerce("2024-05-01", &ParamType::Other("date".into())).unwrap(),
            json!("2024-05-01")
        );
    }
}
