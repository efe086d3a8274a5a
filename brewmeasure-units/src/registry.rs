//! Unit registry - name and quantity lookup over every unit
//!
//! The registry is built once, on first use, from the static lists in
//! [`crate::units`] and is read-only afterwards.

use std::collections::HashMap;
use std::ptr;
use std::sync::LazyLock;

use brewmeasure_core::MeasureError;
use tracing::{debug, warn};

use crate::units::{ALL_UNITS, ALL_UNIT_SYSTEMS};
use crate::{PhysicalQuantity, SystemOfMeasurement, Unit, UnitSystem};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Index of all known units and unit systems
pub struct UnitRegistry {
    /// Lower-cased name -> units, in registration order
    by_name: HashMap<String, Vec<&'static Unit>>,
    canonical: HashMap<PhysicalQuantity, &'static Unit>,
    systems: HashMap<&'static str, &'static UnitSystem>,
    systems_by_quantity: HashMap<PhysicalQuantity, Vec<&'static UnitSystem>>,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut registry = UnitRegistry {
            by_name: HashMap::new(),
            canonical: HashMap::new(),
            systems: HashMap::new(),
            systems_by_quantity: HashMap::new(),
        };
        for unit in ALL_UNITS {
            registry.register_unit(unit);
        }
        for system in ALL_UNIT_SYSTEMS {
            registry.register_system(system);
        }
        debug!(units = ALL_UNITS.len(), systems = ALL_UNIT_SYSTEMS.len(), "unit registry initialized");
        registry
    }

    fn register_unit(&mut self, unit: &'static Unit) {
        self.by_name.entry(unit.name().to_lowercase()).or_default().push(unit);

        // Must not call Unit::is_canonical here: it reads UNITS
        if unit.canonical.is_none() {
            let quantity = unit.physical_quantity();
            if let Some(existing) = self.canonical.insert(quantity, unit) {
                warn!(
                    quantity = quantity.key(),
                    first = existing.name(),
                    second = unit.name(),
                    "duplicate canonical unit"
                );
            }
        }
    }

    fn register_system(&mut self, system: &'static UnitSystem) {
        self.systems.insert(system.name(), system);
        self.systems_by_quantity
            .entry(system.physical_quantity())
            .or_default()
            .push(system);
    }

    /// All units called `name`, across every physical quantity
    pub fn get_units(&self, name: &str, case_insensitive: bool) -> Vec<&'static Unit> {
        let Some(units) = self.by_name.get(&name.trim().to_lowercase()) else {
            return Vec::new();
        };
        if case_insensitive {
            units.clone()
        } else {
            units.iter().copied().filter(|u| u.name() == name.trim()).collect()
        }
    }

    /// Look up a unit of `quantity` by name.
    ///
    /// When several units share the name, the one owned by `preferred` wins;
    /// without such a match the last one registered is returned. A single
    /// match of the wrong quantity is logged and rejected.
    pub fn get_unit(
        &self,
        name: &str,
        quantity: PhysicalQuantity,
        case_insensitive: bool,
        preferred: Option<&UnitSystem>,
    ) -> Option<&'static Unit> {
        let candidates = self.get_units(name, case_insensitive);
        match candidates.as_slice() {
            [] => None,
            [only] => {
                if only.physical_quantity() == quantity {
                    Some(*only)
                } else {
                    warn!(
                        unit = only.name(),
                        found = only.physical_quantity().key(),
                        wanted = quantity.key(),
                        "unit name matched a different physical quantity"
                    );
                    None
                }
            }
            _ => {
                let matching: Vec<&'static Unit> = candidates
                    .into_iter()
                    .filter(|u| u.physical_quantity() == quantity)
                    .collect();
                preferred
                    .and_then(|system| matching.iter().copied().find(|u| ptr::eq(u.system(), system)))
                    .or_else(|| matching.last().copied())
            }
        }
    }

    /// Look up a unit by name for parsing within `system`.
    ///
    /// Only units of the system's quantity are considered. A member of the
    /// system wins, otherwise the first match.
    pub fn get_unit_in_system(
        &self,
        name: &str,
        system: &UnitSystem,
        case_insensitive: bool,
    ) -> Option<&'static Unit> {
        let matching: Vec<&'static Unit> = self
            .get_units(name, case_insensitive)
            .into_iter()
            .filter(|u| u.physical_quantity() == system.physical_quantity())
            .collect();
        matching
            .iter()
            .copied()
            .find(|u| ptr::eq(u.system(), system))
            .or_else(|| matching.first().copied())
    }

    /// The canonical unit of `quantity`
    pub fn canonical_unit(&self, quantity: PhysicalQuantity) -> Result<&'static Unit, MeasureError> {
        self.canonical
            .get(&quantity)
            .copied()
            .ok_or_else(|| MeasureError::NoCanonicalUnit(quantity.name().to_string()))
    }

    /// Look up a unit system by its unique name
    pub fn unit_system(&self, name: &str) -> Option<&'static UnitSystem> {
        self.systems.get(name).copied()
    }

    /// Every unit system for `quantity`, in registration order
    pub fn unit_systems(&self, quantity: PhysicalQuantity) -> &[&'static UnitSystem] {
        self.systems_by_quantity
            .get(&quantity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The unit system for `quantity` in one system of measurement
    pub fn unit_system_for(
        &self,
        quantity: PhysicalQuantity,
        system_of_measurement: SystemOfMeasurement,
    ) -> Option<&'static UnitSystem> {
        self.unit_systems(quantity)
            .iter()
            .copied()
            .find(|s| s.system_of_measurement() == system_of_measurement)
    }

    /// The system owning the canonical unit of `quantity`
    pub fn default_unit_system(&self, quantity: PhysicalQuantity) -> Result<&'static UnitSystem, MeasureError> {
        self.canonical_unit(quantity).map(|unit| unit.system())
    }

    pub fn all_units(&self) -> &'static [&'static Unit] {
        ALL_UNITS
    }

    pub fn all_unit_systems(&self) -> &'static [&'static UnitSystem] {
        ALL_UNIT_SYSTEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use std::sync::Barrier;
    use std::thread;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_ambiguous_name_prefers_system() {
        let unit = UNITS.get_unit("qt", PhysicalQuantity::Volume, true, Some(&VOLUME_IMPERIAL)).unwrap();
        assert!(ptr::eq(unit, &IMPERIAL_QUARTS));

        let unit = UNITS.get_unit("qt", PhysicalQuantity::Volume, true, Some(&VOLUME_US)).unwrap();
        assert!(ptr::eq(unit, &US_QUARTS));
    }

    #[test]
    fn test_ambiguous_name_falls_back_to_last() {
        let unit = UNITS.get_unit("gal", PhysicalQuantity::Volume, true, None).unwrap();
        assert!(ptr::eq(unit, &IMPERIAL_GALLONS));

        // A preferred system with no such unit changes nothing
        let unit = UNITS.get_unit("gal", PhysicalQuantity::Volume, true, Some(&VOLUME_METRIC)).unwrap();
        assert!(ptr::eq(unit, &IMPERIAL_GALLONS));
    }

    #[test]
    fn test_ambiguity_is_deterministic() {
        for _ in 0..10 {
            let a = UNITS.get_unit("floz", PhysicalQuantity::Volume, true, Some(&VOLUME_US)).unwrap();
            assert!(ptr::eq(a, &US_FLUID_OUNCES));
        }
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(UNITS.get_unit("KG", PhysicalQuantity::Mass, true, None).is_some());
        assert!(UNITS.get_unit("KG", PhysicalQuantity::Mass, false, None).is_none());
        assert!(UNITS.get_unit("l", PhysicalQuantity::Volume, true, None).is_some());
        assert!(UNITS.get_unit("  kg ", PhysicalQuantity::Mass, false, None).is_some());
    }

    #[test]
    fn test_wrong_quantity() {
        init_tracing();
        assert!(UNITS.get_unit("kg", PhysicalQuantity::Volume, true, None).is_none());
        assert!(UNITS.get_unit("qt", PhysicalQuantity::Mass, true, None).is_none());
        assert!(UNITS.get_unit("nope", PhysicalQuantity::Mass, true, None).is_none());
    }

    #[test]
    fn test_get_unit_in_system() {
        let unit = UNITS.get_unit_in_system("qt", &VOLUME_US, true).unwrap();
        assert!(ptr::eq(unit, &US_QUARTS));
        let unit = UNITS.get_unit_in_system("qt", &VOLUME_IMPERIAL, true).unwrap();
        assert!(ptr::eq(unit, &IMPERIAL_QUARTS));

        // Not a member, but the same quantity: first match
        let unit = UNITS.get_unit_in_system("qt", &VOLUME_METRIC, true).unwrap();
        assert!(ptr::eq(unit, &US_QUARTS));
        let unit = UNITS.get_unit_in_system("kg", &MASS_US, true).unwrap();
        assert!(ptr::eq(unit, &KILOGRAMS));

        assert!(UNITS.get_unit_in_system("L", &MASS_US, true).is_none());
    }

    #[test]
    fn test_get_units_across_quantities() {
        assert_eq!(UNITS.get_units("qt", true).len(), 2);
        assert_eq!(UNITS.get_units("srm", true).len(), 1);
        assert!(UNITS.get_units("furlong", true).is_empty());
    }

    #[test]
    fn test_canonical_units() {
        for quantity in PhysicalQuantity::ALL {
            let unit = UNITS.canonical_unit(quantity).unwrap();
            assert_eq!(unit.physical_quantity(), quantity);
            assert!(unit.is_canonical());
        }
        assert!(ptr::eq(UNITS.canonical_unit(PhysicalQuantity::Time).unwrap(), &MINUTES));
    }

    #[test]
    fn test_unit_systems() {
        assert_eq!(UNITS.unit_systems(PhysicalQuantity::Volume).len(), 3);
        assert!(ptr::eq(UNITS.unit_system("volume_Imperial").unwrap(), &VOLUME_IMPERIAL));
        assert!(UNITS.unit_system("volume_Klingon").is_none());

        let system = UNITS
            .unit_system_for(PhysicalQuantity::Temperature, SystemOfMeasurement::UsCustomary)
            .unwrap();
        assert!(ptr::eq(system, &TEMPERATURE_US));
        assert!(UNITS.unit_system_for(PhysicalQuantity::Mass, SystemOfMeasurement::Imperial).is_none());
    }

    #[test]
    fn test_default_unit_system() {
        for quantity in PhysicalQuantity::ALL {
            let system = UNITS.default_unit_system(quantity).unwrap();
            assert_eq!(system.physical_quantity(), quantity);
        }
        assert!(ptr::eq(UNITS.default_unit_system(PhysicalQuantity::Color).unwrap(), &COLOR_SRM));
    }

    #[test]
    fn test_all_lists() {
        assert_eq!(UNITS.all_units().len(), ALL_UNITS.len());
        assert!(UNITS.all_unit_systems().iter().any(|s| ptr::eq(*s, &DENSITY_PLATO)));
    }

    #[test]
    fn test_concurrent_first_use() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        let registry: &'static UnitRegistry = &UNITS;
                        let quart = UNITS.get_unit("qt", PhysicalQuantity::Volume, true, None).unwrap();
                        let liters = UNITS.canonical_unit(PhysicalQuantity::Volume).unwrap();
                        (registry, quart, liters)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let (registry, quart, liters) = results[0];
        assert!(ptr::eq(quart, &IMPERIAL_QUARTS));
        assert!(ptr::eq(liters, &LITERS));
        for (r, q, l) in &results {
            assert!(ptr::eq(*r, registry));
            assert!(ptr::eq(*q, quart));
            assert!(ptr::eq(*l, liters));
        }
    }
}
