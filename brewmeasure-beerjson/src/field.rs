//! Table-driven record decoding
//!
//! A record type publishes a static table of [`FieldDescriptor`]s: the JSON
//! member name, the vocabulary its unit string comes from, and plain
//! function pointers to read and write the canonical amount.

use serde_json::{Map, Value};
use tracing::debug;

use brewmeasure_units::Amount;

use crate::helpers::{read_amount, type_name, write_amount};
use crate::mapping::{
    decode, decode_from_list, decode_single, encode, encode_from_list, encode_single, DecodedAmount,
    JsonMeasureableUnitsMapping, JsonSingleUnitSpecifier, ListOfJsonMeasureableUnitsMappings,
};
use crate::{DecodeError, EncodeError};

/// Which vocabulary a field's unit string is checked against
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Measurable(&'static JsonMeasureableUnitsMapping),
    MeasurableList(&'static ListOfJsonMeasureableUnitsMappings),
    SingleUnit(&'static JsonSingleUnitSpecifier),
}

impl FieldKind {
    pub fn decode(&self, value: f64, unit_str: &str) -> Result<DecodedAmount, DecodeError> {
        match self {
            FieldKind::Measurable(mapping) => decode(value, unit_str, mapping),
            FieldKind::MeasurableList(list) => decode_from_list(value, unit_str, list),
            FieldKind::SingleUnit(specifier) => decode_single(value, unit_str, specifier),
        }
    }

    pub fn encode(&self, amount: Amount) -> Result<(f64, &'static str), EncodeError> {
        match self {
            FieldKind::Measurable(mapping) => encode(amount, mapping),
            FieldKind::MeasurableList(list) => encode_from_list(amount, list),
            FieldKind::SingleUnit(specifier) => encode_single(amount, specifier),
        }
    }
}

/// One measurable member of a record type
pub struct FieldDescriptor<T: 'static> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub get: fn(&T) -> Option<Amount>,
    /// Receives the canonical amount
    pub set: fn(&mut T, Amount),
}

/// Decode every member of `json` named in `table`.
///
/// Absent and `null` members are skipped. A present member that is not a
/// well-formed amount, or whose unit is not in the field's vocabulary, fails
/// the whole record.
pub fn decode_record<T: Default>(json: &Value, table: &[FieldDescriptor<T>]) -> Result<T, DecodeError> {
    let object = json.as_object().ok_or(DecodeError::NotAnObject(type_name(json)))?;
    let mut record = T::default();

    for field in table {
        let member = match object.get(field.name) {
            None | Some(Value::Null) => continue,
            Some(member) => member,
        };
        let (value, unit_str) = read_amount(member).map_err(|e| e.in_field(field.name))?;
        let decoded = field.kind.decode(value, unit_str).map_err(|e| e.in_field(field.name))?;
        (field.set)(&mut record, decoded.canonical);
    }

    debug!(fields = table.len(), "decoded record");
    Ok(record)
}

/// Encode every field of `record` that has a value
pub fn encode_record<T>(record: &T, table: &[FieldDescriptor<T>]) -> Result<Map<String, Value>, EncodeError> {
    let mut object = Map::new();
    for field in table {
        if let Some(amount) = (field.get)(record) {
            let (value, unit_str) = field.kind.encode(amount).map_err(|e| e.in_field(field.name))?;
            object.insert(field.name.to_string(), write_amount(value, unit_str));
        }
    }
    Ok(object)
}
