//! BeerJSON unit vocabularies
//!
//! Each mapping pairs the exact unit strings of the BeerJSON schema with
//! our units for one physical quantity. The strings are case-sensitive and
//! must be written back exactly as read.

use std::ptr;

use brewmeasure_units::units;
use brewmeasure_units::{Amount, PhysicalQuantity, Unit};

use crate::{DecodeError, EncodeError};

/// Unit strings accepted for one physical quantity, in schema order
#[derive(Debug)]
pub struct JsonMeasureableUnitsMapping {
    pub quantity: PhysicalQuantity,
    pub entries: &'static [(&'static str, &'static Unit)],
}

impl JsonMeasureableUnitsMapping {
    /// The unit for an exact unit string
    pub fn find(&self, unit_str: &str) -> Option<&'static Unit> {
        self.entries
            .iter()
            .find(|(s, _)| *s == unit_str)
            .map(|&(_, unit)| unit)
    }

    /// The unit string for `unit`; US and Imperial units with the same
    /// name are told apart by identity
    pub fn unit_string(&self, unit: &Unit) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, u)| ptr::eq(*u, unit))
            .map(|&(s, _)| s)
    }

    /// The entry for the canonical unit of this quantity, if the schema has one
    pub fn canonical_entry(&self) -> Option<(&'static str, &'static Unit)> {
        self.entries
            .iter()
            .copied()
            .find(|(_, unit)| ptr::eq(unit.canonical(), *unit))
    }

    pub fn unit_strings(&self) -> Vec<&'static str> {
        self.entries.iter().map(|&(s, _)| s).collect()
    }
}

/// Several mappings tried in order, for fields that accept more than one
/// physical quantity
#[derive(Debug)]
pub struct ListOfJsonMeasureableUnitsMappings(pub &'static [&'static JsonMeasureableUnitsMapping]);

impl ListOfJsonMeasureableUnitsMappings {
    pub fn mappings(&self) -> &'static [&'static JsonMeasureableUnitsMapping] {
        self.0
    }

    /// The first mapping covering `quantity`
    pub fn for_quantity(&self, quantity: PhysicalQuantity) -> Option<&'static JsonMeasureableUnitsMapping> {
        self.0.iter().copied().find(|m| m.quantity == quantity)
    }

    pub fn unit_strings(&self) -> Vec<&'static str> {
        self.0.iter().flat_map(|m| m.unit_strings()).collect()
    }

    fn quantity_names(&self) -> String {
        let names: Vec<&str> = self.0.iter().map(|m| m.quantity.name()).collect();
        names.join(" or ")
    }
}

/// The one legal unit string of a single-unit quantity (pH, %, IBUs)
#[derive(Debug)]
pub struct JsonSingleUnitSpecifier {
    pub unit_string: &'static str,
    pub unit: &'static Unit,
}

/// A decoded amount, plus the unit the document used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedAmount {
    pub canonical: Amount,
    pub source_unit: &'static Unit,
}

impl DecodedAmount {
    fn from_source(value: f64, source_unit: &'static Unit) -> Self {
        DecodedAmount { canonical: source_unit.to_canonical(value), source_unit }
    }

    /// The value as written in the document
    pub fn source_value(&self) -> f64 {
        self.source_unit.from_canonical(self.canonical.quantity)
    }
}

// ========== Vocabularies ==========

pub static MASS: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Mass,
    entries: &[
        ("mg", &units::MILLIGRAMS),
        ("g", &units::GRAMS),
        ("kg", &units::KILOGRAMS),
        ("lb", &units::POUNDS),
        ("oz", &units::OUNCES),
    ],
};

pub static VOLUME: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Volume,
    entries: &[
        ("ml", &units::MILLILITERS),
        ("l", &units::LITERS),
        ("tsp", &units::US_TEASPOONS),
        ("tbsp", &units::US_TABLESPOONS),
        ("floz", &units::US_FLUID_OUNCES),
        ("cup", &units::US_CUPS),
        ("pt", &units::US_PINTS),
        ("qt", &units::US_QUARTS),
        ("gal", &units::US_GALLONS),
        ("bbl", &units::US_BARRELS),
        ("ifloz", &units::IMPERIAL_FLUID_OUNCES),
        ("ipt", &units::IMPERIAL_PINTS),
        ("iqt", &units::IMPERIAL_QUARTS),
        ("igal", &units::IMPERIAL_GALLONS),
        ("ibbl", &units::IMPERIAL_BARRELS),
    ],
};

pub static TEMPERATURE: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Temperature,
    entries: &[("C", &units::CELSIUS), ("F", &units::FAHRENHEIT)],
};

pub static COLOR: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Color,
    entries: &[("EBC", &units::EBC), ("SRM", &units::SRM), ("Lovi", &units::LOVIBOND)],
};

pub static TIME: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Time,
    entries: &[
        ("sec", &units::SECONDS),
        ("min", &units::MINUTES),
        ("hr", &units::HOURS),
        ("day", &units::DAYS),
        ("week", &units::WEEKS),
    ],
};

pub static CARBONATION: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Carbonation,
    entries: &[("vols", &units::CO2_VOLUMES), ("g/l", &units::CO2_GRAMS_PER_LITER)],
};

pub static CONCENTRATION: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Concentration,
    entries: &[
        ("ppm", &units::PARTS_PER_MILLION),
        ("ppb", &units::PARTS_PER_BILLION),
        ("mg/l", &units::MILLIGRAMS_PER_LITER),
    ],
};

pub static DIASTATIC_POWER: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::DiastaticPower,
    entries: &[("Lintner", &units::LINTNER), ("WK", &units::WINDISCH_KOLBACH)],
};

pub static VISCOSITY: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Viscosity,
    entries: &[("cP", &units::CENTIPOISE), ("mPa-s", &units::MILLIPASCAL_SECONDS)],
};

pub static SPECIFIC_HEAT_CAPACITY: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::SpecificHeatCapacity,
    entries: &[
        ("Cal/(g C)", &units::CALORIES_PER_GRAM_CELSIUS),
        ("J/(kg K)", &units::JOULES_PER_KILOGRAM_KELVIN),
        ("BTU/(lb F)", &units::BTU_PER_POUND_FAHRENHEIT),
    ],
};

pub static SPECIFIC_VOLUME: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::SpecificVolume,
    entries: &[
        ("l/kg", &units::LITERS_PER_KILOGRAM),
        ("l/g", &units::LITERS_PER_GRAM),
        ("m^3/kg", &units::CUBIC_METERS_PER_KILOGRAM),
        ("qt/lb", &units::US_QUARTS_PER_POUND),
        ("gal/lb", &units::US_GALLONS_PER_POUND),
        ("gal/oz", &units::US_GALLONS_PER_OUNCE),
        ("floz/oz", &units::US_FLUID_OUNCES_PER_OUNCE),
        ("ft^3/lb", &units::CUBIC_FEET_PER_POUND),
    ],
};

pub static GRAVITY: JsonMeasureableUnitsMapping = JsonMeasureableUnitsMapping {
    quantity: PhysicalQuantity::Density,
    entries: &[
        ("sg", &units::SPECIFIC_GRAVITY),
        ("plato", &units::PLATO),
        ("brix", &units::BRIX),
    ],
};

pub static MASS_OR_VOLUME: ListOfJsonMeasureableUnitsMappings = ListOfJsonMeasureableUnitsMappings(&[&MASS, &VOLUME]);

pub static ACIDITY: JsonSingleUnitSpecifier = JsonSingleUnitSpecifier { unit_string: "pH", unit: &units::PH };
pub static PERCENT: JsonSingleUnitSpecifier = JsonSingleUnitSpecifier { unit_string: "%", unit: &units::PERCENT };
pub static BITTERNESS: JsonSingleUnitSpecifier = JsonSingleUnitSpecifier { unit_string: "IBUs", unit: &units::IBU };

/// Every multi-unit vocabulary
pub static ALL_MAPPINGS: [&JsonMeasureableUnitsMapping; 12] = [
    &MASS,
    &VOLUME,
    &TEMPERATURE,
    &COLOR,
    &TIME,
    &CARBONATION,
    &CONCENTRATION,
    &DIASTATIC_POWER,
    &VISCOSITY,
    &SPECIFIC_HEAT_CAPACITY,
    &SPECIFIC_VOLUME,
    &GRAVITY,
];

// ========== Decoding ==========

/// Turn a document `(value, unit string)` into a canonical amount
pub fn decode(
    value: f64,
    unit_str: &str,
    mapping: &JsonMeasureableUnitsMapping,
) -> Result<DecodedAmount, DecodeError> {
    let unit = mapping.find(unit_str).ok_or_else(|| DecodeError::UnknownUnit {
        unit: unit_str.to_string(),
        quantity: mapping.quantity.name().to_string(),
        expected: mapping.unit_strings(),
    })?;
    Ok(DecodedAmount::from_source(value, unit))
}

/// Like [`decode`], trying each mapping of `list` in order
pub fn decode_from_list(
    value: f64,
    unit_str: &str,
    list: &ListOfJsonMeasureableUnitsMappings,
) -> Result<DecodedAmount, DecodeError> {
    list.mappings()
        .iter()
        .find_map(|mapping| mapping.find(unit_str))
        .map(|unit| DecodedAmount::from_source(value, unit))
        .ok_or_else(|| DecodeError::UnknownUnit {
            unit: unit_str.to_string(),
            quantity: list.quantity_names(),
            expected: list.unit_strings(),
        })
}

pub fn decode_single(
    value: f64,
    unit_str: &str,
    specifier: &JsonSingleUnitSpecifier,
) -> Result<DecodedAmount, DecodeError> {
    if unit_str != specifier.unit_string {
        return Err(DecodeError::SingleUnitMismatch {
            unit: unit_str.to_string(),
            expected: specifier.unit_string,
        });
    }
    Ok(DecodedAmount::from_source(value, specifier.unit))
}

// ========== Encoding ==========

fn no_unit_string(unit: &Unit, quantity: PhysicalQuantity) -> EncodeError {
    EncodeError::NoUnitString { unit: unit.name(), quantity: quantity.name().to_string() }
}

/// Write `amount` in its own unit when the vocabulary has it, otherwise
/// in the canonical unit
pub fn encode(amount: Amount, mapping: &JsonMeasureableUnitsMapping) -> Result<(f64, &'static str), EncodeError> {
    if amount.physical_quantity() != mapping.quantity {
        return Err(no_unit_string(amount.unit, mapping.quantity));
    }
    if let Some(unit_str) = mapping.unit_string(amount.unit) {
        return Ok((amount.quantity, unit_str));
    }
    let (unit_str, _) = mapping
        .canonical_entry()
        .ok_or_else(|| no_unit_string(amount.unit, mapping.quantity))?;
    Ok((amount.to_canonical().quantity, unit_str))
}

/// Write `amount` converted to `unit`
pub fn encode_in(
    amount: Amount,
    unit: &'static Unit,
    mapping: &JsonMeasureableUnitsMapping,
) -> Result<(f64, &'static str), EncodeError> {
    let unit_str = mapping
        .unit_string(unit)
        .ok_or_else(|| no_unit_string(unit, mapping.quantity))?;
    let value = amount
        .unit
        .convert(amount.quantity, unit)
        .map_err(|_| no_unit_string(amount.unit, mapping.quantity))?;
    Ok((value, unit_str))
}

/// Like [`encode`], using the mapping of `list` for the amount's quantity
pub fn encode_from_list(
    amount: Amount,
    list: &ListOfJsonMeasureableUnitsMappings,
) -> Result<(f64, &'static str), EncodeError> {
    let mapping = list.for_quantity(amount.physical_quantity()).ok_or_else(|| {
        EncodeError::NoUnitString { unit: amount.unit.name(), quantity: list.quantity_names() }
    })?;
    encode(amount, mapping)
}

pub fn encode_single(amount: Amount, specifier: &JsonSingleUnitSpecifier) -> Result<(f64, &'static str), EncodeError> {
    let value = amount
        .unit
        .convert(amount.quantity, specifier.unit)
        .map_err(|_| no_unit_string(amount.unit, specifier.unit.physical_quantity()))?;
    Ok((value, specifier.unit_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewmeasure_core::codes;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_decode_mass() {
        let decoded = decode(5.0, "lb", &MASS).unwrap();
        assert!(close(decoded.canonical.quantity, 2.26796185));
        assert!(ptr::eq(decoded.canonical.unit, &units::KILOGRAMS));
        assert!(ptr::eq(decoded.source_unit, &units::POUNDS));
        assert!(close(decoded.source_value(), 5.0));
    }

    #[test]
    fn test_decode_unknown_unit_is_an_error() {
        let err = decode(10.0, "zz", &MASS).unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_UNIT);
        match err {
            DecodeError::UnknownUnit { unit, expected, .. } => {
                assert_eq!(unit, "zz");
                assert_eq!(expected, vec!["mg", "g", "kg", "lb", "oz"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert!(decode(1.0, "KG", &MASS).is_err());
        assert!(decode(1.0, "srm", &COLOR).is_err());
        assert!(decode(1.0, "SRM", &COLOR).is_ok());
    }

    #[test]
    fn test_decode_us_and_imperial() {
        let us = decode(1.0, "gal", &VOLUME).unwrap();
        let imperial = decode(1.0, "igal", &VOLUME).unwrap();
        assert!(close(us.canonical.quantity, 3.7854117840007));
        assert!(close(imperial.canonical.quantity, 4.54609));
    }

    #[test]
    fn test_decode_from_list() {
        let mass = decode_from_list(28.0, "g", &MASS_OR_VOLUME).unwrap();
        assert_eq!(mass.canonical.physical_quantity(), PhysicalQuantity::Mass);

        let volume = decode_from_list(2.0, "tsp", &MASS_OR_VOLUME).unwrap();
        assert_eq!(volume.canonical.physical_quantity(), PhysicalQuantity::Volume);

        let err = decode_from_list(1.0, "C", &MASS_OR_VOLUME).unwrap_err();
        assert!(err.to_string().contains("Mass or Volume"));
    }

    #[test]
    fn test_decode_single() {
        let decoded = decode_single(5.4, "pH", &ACIDITY).unwrap();
        assert!(close(decoded.canonical.quantity, 5.4));
        assert!(decode_single(35.0, "IBUs", &BITTERNESS).is_ok());

        let err = decode_single(35.0, "IBU", &BITTERNESS).unwrap_err();
        assert_eq!(err.code(), codes::SINGLE_UNIT_MISMATCH);
    }

    #[test]
    fn test_vocabulary_round_trip() {
        for mapping in ALL_MAPPINGS {
            for &(unit_str, unit) in mapping.entries {
                assert_eq!(unit.physical_quantity(), mapping.quantity, "{unit_str}");

                let decoded = decode(1.5, unit_str, mapping).unwrap();
                let (value, written) = encode_in(decoded.canonical, decoded.source_unit, mapping).unwrap();
                assert_eq!(written, unit_str);
                assert!(close(value, 1.5), "{unit_str}: {value}");

                let (value, written) = encode(Amount::new(1.5, unit), mapping).unwrap();
                assert_eq!(written, unit_str);
                assert!(close(value, 1.5));
            }
        }
        for specifier in [&ACIDITY, &PERCENT, &BITTERNESS] {
            let decoded = decode_single(4.2, specifier.unit_string, specifier).unwrap();
            let (value, written) = encode_single(decoded.canonical, specifier).unwrap();
            assert_eq!(written, specifier.unit_string);
            assert!(close(value, 4.2));
        }
    }

    #[test]
    fn test_encode_falls_back_to_canonical() {
        let (value, unit_str) = encode(Amount::new(250.0, &units::MILLILITERS), &VOLUME).unwrap();
        assert_eq!((value, unit_str), (250.0, "ml"));

        // The schema has no Imperial cup
        let (value, unit_str) = encode(Amount::new(4.0, &units::IMPERIAL_CUPS), &VOLUME).unwrap();
        assert_eq!(unit_str, "l");
        assert!(close(value, 1.1365225));

        let (_, unit_str) = encode(Amount::new(4.0, &units::JOULES_PER_KILOGRAM_KELVIN), &SPECIFIC_HEAT_CAPACITY).unwrap();
        assert_eq!(unit_str, "J/(kg K)");
    }

    #[test]
    fn test_encode_wrong_quantity() {
        let err = encode(Amount::new(1.0, &units::GRAMS), &VOLUME).unwrap_err();
        assert_eq!(err.code(), codes::NO_UNIT_STRING);
        assert!(encode_in(Amount::new(1.0, &units::GRAMS), &units::US_CUPS, &MASS).is_err());
    }

    #[test]
    fn test_encode_from_list() {
        let (value, unit_str) = encode_from_list(Amount::new(2.0, &units::IMPERIAL_PINTS), &MASS_OR_VOLUME).unwrap();
        assert_eq!((value, unit_str), (2.0, "ipt"));
        assert!(encode_from_list(Amount::new(2.0, &units::CELSIUS), &MASS_OR_VOLUME).is_err());
    }
}
