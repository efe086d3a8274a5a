//! Decode and encode errors for BeerJSON amounts
//!
//! An unrecognized unit string means the document does not follow the
//! schema. It is always reported, never replaced by a default unit.

use brewmeasure_core::codes;
use thiserror::Error;

/// Error reading a `(value, unit string)` pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("Unknown {quantity} unit \"{unit}\", expected one of: {}", expected.join(", "))]
    UnknownUnit {
        unit: String,
        quantity: String,
        expected: Vec<&'static str>,
    },

    #[error("Unit \"{unit}\" is not valid here, only \"{expected}\" is")]
    SingleUnitMismatch { unit: String, expected: &'static str },

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Member \"{member}\" is missing or not a {expected}")]
    BadMember { member: &'static str, expected: &'static str },

    #[error("Field \"{field}\": {source}")]
    Field {
        field: &'static str,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attach the name of the record field being decoded
    pub fn in_field(self, field: &'static str) -> Self {
        DecodeError::Field { field, source: Box::new(self) }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            DecodeError::SingleUnitMismatch { .. } => codes::SINGLE_UNIT_MISMATCH,
            DecodeError::NotAnObject(_) | DecodeError::BadMember { .. } => codes::MALFORMED_FIELD,
            DecodeError::Field { source, .. } => source.code(),
        }
    }
}

/// Error writing an amount as a `(value, unit string)` pair
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("No unit string for {unit} in the {quantity} vocabulary")]
    NoUnitString { unit: &'static str, quantity: String },

    #[error("Field \"{field}\": {source}")]
    Field {
        field: &'static str,
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    pub fn in_field(self, field: &'static str) -> Self {
        EncodeError::Field { field, source: Box::new(self) }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::NoUnitString { .. } => codes::NO_UNIT_STRING,
            EncodeError::Field { source, .. } => source.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit_message() {
        let err = DecodeError::UnknownUnit {
            unit: "zz".to_string(),
            quantity: "Mass".to_string(),
            expected: vec!["mg", "g", "kg", "lb", "oz"],
        };
        assert_eq!(err.to_string(), "Unknown Mass unit \"zz\", expected one of: mg, g, kg, lb, oz");
        assert_eq!(err.code(), codes::UNKNOWN_UNIT);
    }

    #[test]
    fn test_field_context() {
        let err = DecodeError::BadMember { member: "value", expected: "number" }.in_field("amount");
        assert_eq!(err.to_string(), "Field \"amount\": Member \"value\" is missing or not a number");
        assert_eq!(err.code(), codes::MALFORMED_FIELD);
    }

    #[test]
    fn test_encode_error() {
        let err = EncodeError::NoUnitString { unit: "qt", quantity: "Mass".to_string() }.in_field("amount");
        assert_eq!(err.code(), codes::NO_UNIT_STRING);
        assert!(err.to_string().contains("qt"));
    }
}
