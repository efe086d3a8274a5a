//! Common JSON utilities for BeerJSON amount members

use serde_json::{json, Map, Value};

use crate::DecodeError;

/// JSON type name, for error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a number member from a JSON object
pub fn extract_number(object: &Map<String, Value>, member: &'static str) -> Result<f64, DecodeError> {
    object
        .get(member)
        .and_then(Value::as_f64)
        .ok_or(DecodeError::BadMember { member, expected: "number" })
}

/// Extract a string member from a JSON object
pub fn extract_text<'a>(object: &'a Map<String, Value>, member: &'static str) -> Result<&'a str, DecodeError> {
    object
        .get(member)
        .and_then(Value::as_str)
        .ok_or(DecodeError::BadMember { member, expected: "string" })
}

/// Read a BeerJSON `{"value": n, "unit": "s"}` member
pub fn read_amount(value: &Value) -> Result<(f64, &str), DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject(type_name(value)))?;
    Ok((extract_number(object, "value")?, extract_text(object, "unit")?))
}

/// Build a BeerJSON `{"value": n, "unit": "s"}` member
pub fn write_amount(value: f64, unit: &str) -> Value {
    json!({ "value": value, "unit": unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_amount() {
        let member = json!({ "value": 4.5, "unit": "kg" });
        assert_eq!(read_amount(&member).unwrap(), (4.5, "kg"));

        let member = json!({ "value": 60, "unit": "min" });
        assert_eq!(read_amount(&member).unwrap(), (60.0, "min"));
    }

    #[test]
    fn test_read_amount_malformed() {
        assert_eq!(read_amount(&json!(4.5)).unwrap_err(), DecodeError::NotAnObject("number"));
        assert_eq!(
            read_amount(&json!({ "value": "4.5", "unit": "kg" })).unwrap_err(),
            DecodeError::BadMember { member: "value", expected: "number" }
        );
        assert_eq!(
            read_amount(&json!({ "value": 4.5 })).unwrap_err(),
            DecodeError::BadMember { member: "unit", expected: "string" }
        );
    }

    #[test]
    fn test_write_amount() {
        assert_eq!(write_amount(1.5, "igal"), json!({ "value": 1.5, "unit": "igal" }));
    }
}
