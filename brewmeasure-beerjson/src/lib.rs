//! brewmeasure BeerJSON - unit vocabularies and field tables
//!
//! BeerJSON writes every measured value as `{"value": n, "unit": "s"}` with
//! a fixed set of unit strings per quantity. This crate provides:
//! - Static vocabularies mapping those strings to units (`mapping`)
//! - Decode to canonical amounts and encode back (`decode`, `encode`, ...)
//! - Declarative per-record field tables over `serde_json` (`field`, `records`)
//!
//! Display preferences play no part here: an unknown unit string is a
//! decode error, never a fallback.

mod error;
mod helpers;
pub mod mapping;
pub mod field;
pub mod records;

pub use error::{DecodeError, EncodeError};
pub use field::{decode_record, encode_record, FieldDescriptor, FieldKind};
pub use helpers::{read_amount, write_amount};
pub use mapping::{
    decode, decode_from_list, decode_single, encode, encode_from_list, encode_in, encode_single, DecodedAmount,
    JsonMeasureableUnitsMapping, JsonSingleUnitSpecifier, ListOfJsonMeasureableUnitsMappings,
};
pub use records::{Fermentable, Hop, MashStep, Water};
