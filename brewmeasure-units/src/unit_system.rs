//! Unit systems: named groups of units covering one physical quantity
//!
//! A unit system owns a "scale ladder" of units ordered by magnitude. The
//! ladder drives auto-scaling for display; units that are members of the
//! system but not on the ladder (US fluid ounces, pints) are only reached by
//! name.

use std::fmt;
use std::ptr;

use brewmeasure_core::{Locale, MeasureError};

use crate::{Amount, PhysicalQuantity, RelativeScale, SystemOfMeasurement, Unit, UNITS};

/// A named, ordered group of units for one physical quantity
pub struct UnitSystem {
    pub(crate) name: &'static str,
    pub(crate) physical_quantity: PhysicalQuantity,
    pub(crate) system_of_measurement: SystemOfMeasurement,
    pub(crate) default_unit: &'static Unit,
    pub(crate) thickness_unit: Option<&'static Unit>,
    /// Ascending by scale
    pub(crate) scales: &'static [(RelativeScale, &'static Unit)],
    /// Every unit owned by this system, ascending by magnitude
    pub(crate) units: &'static [&'static Unit],
}

impl UnitSystem {
    /// Unique name, also the persisted form
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn physical_quantity(&self) -> PhysicalQuantity {
        self.physical_quantity
    }

    pub fn system_of_measurement(&self) -> SystemOfMeasurement {
        self.system_of_measurement
    }

    /// The default unit, used when input carries no recognizable unit
    pub fn unit(&self) -> &'static Unit {
        self.default_unit
    }

    /// The unit at `scale`, if this system has one
    pub fn scale_unit(&self, scale: RelativeScale) -> Option<&'static Unit> {
        self.scales
            .iter()
            .find(|(s, _)| *s == scale)
            .map(|&(_, unit)| unit)
    }

    /// Mash thickness (volume per mass) unit for volume systems
    pub fn thickness_unit(&self) -> Option<&'static Unit> {
        self.thickness_unit
    }

    pub fn scales(&self) -> &'static [(RelativeScale, &'static Unit)] {
        self.scales
    }

    pub fn units(&self) -> &'static [&'static Unit] {
        self.units
    }

    /// Look up the unit system for `quantity` in `system_of_measurement`
    pub fn get_instance(
        quantity: PhysicalQuantity,
        system_of_measurement: SystemOfMeasurement,
    ) -> Option<&'static UnitSystem> {
        UNITS.unit_system_for(quantity, system_of_measurement)
    }

    pub fn by_name(name: &str) -> Option<&'static UnitSystem> {
        UNITS.unit_system(name)
    }

    pub fn for_quantity(quantity: PhysicalQuantity) -> &'static [&'static UnitSystem] {
        UNITS.unit_systems(quantity)
    }

    /// The system holding the canonical unit of `quantity`
    pub fn default_for(quantity: PhysicalQuantity) -> Result<&'static UnitSystem, MeasureError> {
        UNITS.default_unit_system(quantity)
    }

    /// Pick the unit used to show `canonical_value` when no scale is forced.
    ///
    /// Walks the ladder upwards and stops at the first rung whose boundary,
    /// expressed in canonical units, is larger than the value; the rung below
    /// it wins. The smallest rung is the floor.
    pub fn auto_scale_unit(&self, canonical_value: f64) -> &'static Unit {
        let magnitude = canonical_value.abs();
        let mut chosen: Option<&'static Unit> = None;
        for &(_, unit) in self.scales {
            if chosen.is_some() && magnitude < (unit.to_canonical)(unit.boundary) {
                break;
            }
            chosen = Some(unit);
        }
        chosen.unwrap_or(self.default_unit)
    }

    /// A forced scale this system has no rung for shows the default unit
    fn display_unit(&self, canonical_value: f64, scale: Option<RelativeScale>) -> &'static Unit {
        match scale {
            Some(scale) => self.scale_unit(scale).unwrap_or(self.default_unit),
            None => self.auto_scale_unit(canonical_value),
        }
    }

    /// Parse `<number>[<unit>]` into a canonical amount.
    ///
    /// A recognized unit suffix wins. Otherwise the unit at `scale` is used
    /// if this system has one, and `default_unit` after that.
    pub fn qstring_to_si(
        &self,
        text: &str,
        default_unit: &'static Unit,
        scale: Option<RelativeScale>,
        locale: &Locale,
    ) -> Result<Amount, MeasureError> {
        let (value, suffix) = locale.parse_prefix::<f64>(text)?;
        // Digits after the number mean it was split in the wrong place
        if suffix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(MeasureError::parse(text.trim()));
        }

        let unit = if suffix.is_empty() {
            None
        } else {
            UNITS.get_unit_in_system(suffix, self, true)
        };

        let unit = unit
            .or_else(|| scale.and_then(|s| self.scale_unit(s)))
            .unwrap_or(default_unit);

        Ok(unit.to_canonical(value))
    }

    /// Format `amount` as `"<number> <unit>"` in this system.
    ///
    /// An amount of some other physical quantity is shown in its own unit.
    pub fn display_amount(
        &self,
        amount: Amount,
        precision: usize,
        scale: Option<RelativeScale>,
        locale: &Locale,
    ) -> String {
        if amount.unit.physical_quantity() != self.physical_quantity {
            return format!("{} {}", locale.format_fixed(amount.quantity, precision), amount.unit.name());
        }

        let canonical = amount.to_canonical().quantity;
        let unit = self.display_unit(canonical, scale);
        format!("{} {}", locale.format_fixed(unit.from_canonical(canonical), precision), unit.name())
    }

    /// The number [`display_amount`](Self::display_amount) would show, without the unit
    pub fn amount_display(&self, amount: Amount, scale: Option<RelativeScale>) -> f64 {
        if amount.unit.physical_quantity() != self.physical_quantity {
            return amount.quantity;
        }

        let canonical = amount.to_canonical().quantity;
        self.display_unit(canonical, scale).from_canonical(canonical)
    }
}

impl PartialEq for UnitSystem {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.name == other.name
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units: Vec<&str> = self.units.iter().map(|u| u.name()).collect();
        f.debug_struct("UnitSystem")
            .field("name", &self.name)
            .field("physical_quantity", &self.physical_quantity)
            .field("system_of_measurement", &self.system_of_measurement)
            .field("units", &units)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_scale_unit() {
        assert_eq!(MASS_METRIC.scale_unit(RelativeScale::Small).map(|u| u.name()), Some("g"));
        assert!(MASS_US.scale_unit(RelativeScale::Huge).is_none());
        assert!(ptr::eq(VOLUME_US.scale_unit(RelativeScale::Large).unwrap(), &US_QUARTS));
    }

    #[test]
    fn test_get_instance() {
        let system = UnitSystem::get_instance(PhysicalQuantity::Volume, SystemOfMeasurement::Imperial).unwrap();
        assert!(ptr::eq(system, &VOLUME_IMPERIAL));
        assert!(UnitSystem::get_instance(PhysicalQuantity::Mass, SystemOfMeasurement::Imperial).is_none());
    }

    #[test]
    fn test_lookup_helpers() {
        assert!(ptr::eq(UnitSystem::by_name("mass_UsCustomary").unwrap(), &MASS_US));
        assert_eq!(UnitSystem::for_quantity(PhysicalQuantity::Color).len(), 3);
        assert!(ptr::eq(UnitSystem::default_for(PhysicalQuantity::Volume).unwrap(), &VOLUME_METRIC));
    }

    #[test]
    fn test_thickness_unit() {
        assert_eq!(VOLUME_METRIC.thickness_unit().map(|u| u.name()), Some("L/kg"));
        assert_eq!(VOLUME_US.thickness_unit().map(|u| u.name()), Some("qt/lb"));
        assert!(MASS_METRIC.thickness_unit().is_none());
    }

    #[test]
    fn test_auto_scale_metric_mass() {
        assert_eq!(MASS_METRIC.auto_scale_unit(0.0005).name(), "g");
        assert_eq!(MASS_METRIC.auto_scale_unit(0.5).name(), "g");
        assert_eq!(MASS_METRIC.auto_scale_unit(2.0).name(), "kg");
        assert_eq!(MASS_METRIC.auto_scale_unit(0.00005).name(), "mg");
        // Sign does not change the choice
        assert_eq!(MASS_METRIC.auto_scale_unit(-2.0).name(), "kg");
    }

    #[test]
    fn test_auto_scale_time() {
        assert_eq!(TIME_UNIVERSAL.auto_scale_unit(45.0).name(), "min");
        assert_eq!(TIME_UNIVERSAL.auto_scale_unit(90.0).name(), "min");
        assert_eq!(TIME_UNIVERSAL.auto_scale_unit(120.0).name(), "hr");
        assert_eq!(TIME_UNIVERSAL.auto_scale_unit(0.5).name(), "s");
        assert_eq!(TIME_UNIVERSAL.auto_scale_unit(3.0 * 1440.0).name(), "day");
    }

    #[test]
    fn test_auto_scale_never_steps_down() {
        let mut last_rank = 0;
        let mut value = 1e-7;
        while value < 1e4 {
            let unit = MASS_METRIC.auto_scale_unit(value);
            let rank = MASS_METRIC.scales().iter().position(|&(_, u)| ptr::eq(u, unit)).unwrap();
            assert!(rank >= last_rank, "stepped down at {value}");
            last_rank = rank;
            value *= 1.01;
        }
    }

    #[test]
    fn test_single_unit_system() {
        assert_eq!(ACIDITY_PH.auto_scale_unit(5.2).name(), "pH");
        assert_eq!(ACIDITY_PH.unit().name(), "pH");
    }

    #[test]
    fn test_display_amount() {
        let locale = Locale::english();
        let amount = Amount::new(2.2679618, &KILOGRAMS);
        assert_eq!(MASS_US.display_amount(amount, 3, None, &locale), "5.000 lb");
        assert_eq!(MASS_METRIC.display_amount(Amount::new(0.0005, &KILOGRAMS), 3, None, &locale), "0.500 g");
        assert_eq!(
            MASS_METRIC.display_amount(amount, 1, Some(RelativeScale::Small), &locale),
            "2,268.0 g"
        );
    }

    #[test]
    fn test_display_amount_non_canonical_input() {
        let locale = Locale::english();
        let amount = Amount::new(8.0, &OUNCES);
        assert_eq!(MASS_METRIC.display_amount(amount, 1, None, &locale), "226.8 g");
    }

    #[test]
    fn test_display_amount_other_quantity() {
        let locale = Locale::english();
        let amount = Amount::new(20.0, &LITERS);
        assert_eq!(MASS_METRIC.display_amount(amount, 2, None, &locale), "20.00 L");
        assert!(close(MASS_METRIC.amount_display(amount, None), 20.0));
    }

    #[test]
    fn test_amount_display() {
        let value = VOLUME_US.amount_display(Amount::new(18.9270589, &LITERS), None);
        assert!((value - 5.0).abs() < 1e-6);
        let value = VOLUME_US.amount_display(Amount::new(18.9270589, &LITERS), Some(RelativeScale::Large));
        assert!((value - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_qstring_to_si_with_unit() {
        let locale = Locale::english();
        let amount = MASS_METRIC.qstring_to_si("5 lb", &KILOGRAMS, None, &locale).unwrap();
        assert!(close(amount.quantity, 2.26796185));
        assert!(ptr::eq(amount.unit, &KILOGRAMS));
    }

    #[test]
    fn test_qstring_to_si_default_unit() {
        let locale = Locale::english();
        let amount = MASS_US.qstring_to_si("3", &POUNDS, None, &locale).unwrap();
        assert!(close(amount.quantity, 1.36077711));
    }

    #[test]
    fn test_qstring_to_si_scale() {
        let locale = Locale::english();
        let amount = MASS_METRIC.qstring_to_si("250", &KILOGRAMS, Some(RelativeScale::Small), &locale).unwrap();
        assert!(close(amount.quantity, 0.25));

        // An explicit unit beats the scale
        let amount = MASS_METRIC.qstring_to_si("2 kg", &KILOGRAMS, Some(RelativeScale::Small), &locale).unwrap();
        assert!(close(amount.quantity, 2.0));
    }

    #[test]
    fn test_qstring_to_si_unknown_suffix_falls_back() {
        let locale = Locale::english();
        let amount = MASS_METRIC.qstring_to_si("7 zz", &GRAMS, None, &locale).unwrap();
        assert!(close(amount.quantity, 0.007));
    }

    #[test]
    fn test_qstring_to_si_prefers_own_system() {
        let locale = Locale::english();
        let amount = VOLUME_IMPERIAL.qstring_to_si("1 qt", &IMPERIAL_GALLONS, None, &locale).unwrap();
        assert!(close(amount.quantity, 1.1365225));
        let amount = VOLUME_US.qstring_to_si("1 qt", &US_GALLONS, None, &locale).unwrap();
        assert!(close(amount.quantity, 0.946352946));
    }

    #[test]
    fn test_qstring_to_si_malformed() {
        let locale = Locale::english();
        let err = MASS_METRIC.qstring_to_si("lots", &KILOGRAMS, None, &locale).unwrap_err();
        assert_eq!(err.code(), brewmeasure_core::codes::PARSE_ERROR);
    }

    #[test]
    fn test_qstring_to_si_digits_after_number() {
        let err = MASS_METRIC.qstring_to_si("1 234 g", &KILOGRAMS, None, &Locale::english()).unwrap_err();
        assert_eq!(err.code(), brewmeasure_core::codes::PARSE_ERROR);

        let amount = MASS_METRIC.qstring_to_si("1 234,5 g", &KILOGRAMS, None, &Locale::french()).unwrap();
        assert!(close(amount.quantity, 1.2345));
    }

    #[test]
    fn test_qstring_to_si_misgrouped_number() {
        let err = MASS_METRIC.qstring_to_si("2.5 kg", &KILOGRAMS, None, &Locale::german()).unwrap_err();
        assert_eq!(err.code(), brewmeasure_core::codes::PARSE_ERROR);
        assert!(MASS_METRIC.qstring_to_si("1,5 kg", &KILOGRAMS, None, &Locale::english()).is_err());
    }

    #[test]
    fn test_display_amount_missing_rung_uses_default_unit() {
        let locale = Locale::english();
        let amount = Amount::new(0.5, &LITERS);
        assert_eq!(VOLUME_METRIC.display_amount(amount, 1, Some(RelativeScale::Huge), &locale), "0.5 L");
        assert_eq!(VOLUME_METRIC.display_amount(amount, 1, None, &locale), "500.0 mL");
        assert!(close(MASS_US.amount_display(Amount::new(4.5359237, &KILOGRAMS), Some(RelativeScale::Huge)), 10.0));
    }
}
