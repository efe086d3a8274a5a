//! brewmeasure core - fundamental types
//!
//! This crate provides the types shared by every brewmeasure crate:
//! - `MeasureError`: structured errors with machine-readable codes
//! - `Locale`: decimal/group separators for parsing and display

mod error;
mod locale;

pub use error::{codes, MeasureError};
pub use locale::Locale;

/// Default number of decimals shown for an amount
pub const DEFAULT_PRECISION: usize = 3;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Locale, MeasureError, DEFAULT_PRECISION};
}
