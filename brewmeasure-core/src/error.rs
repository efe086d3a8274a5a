//! Structured measurement errors
//!
//! Errors never crash the caller. Every fallible operation in the workspace
//! returns one of these, and each carries a machine-readable code plus an
//! optional hint for fixing the input.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const NO_UNIT_SYSTEM: &str = "NO_UNIT_SYSTEM";
    pub const INCOMPATIBLE_QUANTITIES: &str = "INCOMPATIBLE_QUANTITIES";
    pub const NO_CANONICAL_UNIT: &str = "NO_CANONICAL_UNIT";
    pub const NOT_LOADED: &str = "NOT_LOADED";
    pub const SINGLE_UNIT_MISMATCH: &str = "SINGLE_UNIT_MISMATCH";
    pub const MALFORMED_FIELD: &str = "MALFORMED_FIELD";
    pub const NO_UNIT_STRING: &str = "NO_UNIT_STRING";
}

/// Error type for unit lookup, conversion and parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("Invalid number format: {0}")]
    Parse(String),

    #[error("Unknown unit '{name}' for {quantity}")]
    UnknownUnit { name: String, quantity: String },

    #[error("No {system} unit system for {quantity}")]
    NoUnitSystem { quantity: String, system: String },

    #[error("Cannot convert {from} to {to}: different physical quantities")]
    IncompatibleQuantities { from: String, to: String },

    #[error("No canonical unit registered for {0}")]
    NoCanonicalUnit(String),

    #[error("Display unit systems have not been loaded")]
    DisplayScalesNotLoaded,
}

impl MeasureError {
    pub fn parse(details: impl Into<String>) -> Self {
        Self::Parse(details.into())
    }

    pub fn unknown_unit(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self::UnknownUnit { name: name.into(), quantity: quantity.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => codes::PARSE_ERROR,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::NoUnitSystem { .. } => codes::NO_UNIT_SYSTEM,
            Self::IncompatibleQuantities { .. } => codes::INCOMPATIBLE_QUANTITIES,
            Self::NoCanonicalUnit(_) => codes::NO_CANONICAL_UNIT,
            Self::DisplayScalesNotLoaded => codes::NOT_LOADED,
        }
    }

    /// Suggestion for fixing the error, where one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Parse(_) => Some("Enter a number, optionally followed by a unit (e.g. \"5 lb\")"),
            Self::UnknownUnit { .. } => Some("Check the unit abbreviation"),
            Self::DisplayScalesNotLoaded => Some("Call load_display_scales() first"),
            _ => None,
        }
    }
}
