//! Display context: which unit system each quantity is shown in
//!
//! This is where "canonical amount" becomes "text in the user's preferred
//! units" and back. The context is a plain value. Callers own it, load it
//! from a [`SettingsStore`] once, and pass it to whatever formats amounts.

use std::collections::HashMap;

use tracing::{debug, warn};

use brewmeasure_core::{Locale, MeasureError};
use brewmeasure_units::{
    convert_without_context, split_amount, Amount, PhysicalQuantities, PhysicalQuantity, RelativeScale,
    SystemOfMeasurement, Unit, UnitSystem, UNITS,
};

use crate::overrides::{get_forced_relative_scale_for_field, get_forced_system_of_measurement_for_field};
use crate::settings::{display_system_key, SettingsStore};

#[derive(Debug, Clone)]
enum DisplayScales {
    NotLoaded,
    Loaded(HashMap<PhysicalQuantity, &'static UnitSystem>),
}

/// Display preferences plus the locale numbers are written in
#[derive(Debug, Clone)]
pub struct DisplayContext {
    locale: Locale,
    scales: DisplayScales,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl DisplayContext {
    /// A context whose display systems are not loaded yet
    pub fn new(locale: Locale) -> Self {
        Self { locale, scales: DisplayScales::NotLoaded }
    }

    /// A loaded context using the default unit system of every quantity
    pub fn with_defaults(locale: Locale) -> Self {
        Self { locale, scales: DisplayScales::Loaded(default_systems()) }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.scales, DisplayScales::Loaded(_))
    }

    /// Read the display unit system of every quantity from `store`.
    ///
    /// Missing entries use the quantity's default system. Unrecognized
    /// names, or names of a system for another quantity, are logged and
    /// also fall back to the default.
    pub fn load_display_scales(&mut self, store: &dyn SettingsStore) {
        let mut systems = default_systems();
        for (quantity, system) in systems.iter_mut() {
            let Some(stored) = store.get(&display_system_key(*quantity)) else {
                continue;
            };
            match UNITS.unit_system(&stored) {
                Some(found) if found.physical_quantity() == *quantity => *system = found,
                _ => warn!(
                    quantity = quantity.key(),
                    stored = %stored,
                    fallback = system.name(),
                    "unrecognized display unit system"
                ),
            }
        }
        debug!(quantities = systems.len(), "display unit systems loaded");
        self.scales = DisplayScales::Loaded(systems);
    }

    /// Write the display unit system of every quantity to `store`
    pub fn save_display_scales(&self, store: &mut dyn SettingsStore) -> Result<(), MeasureError> {
        let DisplayScales::Loaded(systems) = &self.scales else {
            return Err(MeasureError::DisplayScalesNotLoaded);
        };
        for (quantity, system) in systems {
            store.set(&display_system_key(*quantity), system.name());
        }
        Ok(())
    }

    /// The unit system amounts of `quantity` are displayed in
    pub fn display_unit_system(&self, quantity: PhysicalQuantity) -> Result<&'static UnitSystem, MeasureError> {
        match &self.scales {
            DisplayScales::NotLoaded => Err(MeasureError::DisplayScalesNotLoaded),
            DisplayScales::Loaded(systems) => match systems.get(&quantity) {
                Some(system) => Ok(*system),
                None => UNITS.default_unit_system(quantity),
            },
        }
    }

    /// Make `system` the display system for its quantity.
    ///
    /// On a context that is not loaded, every other quantity starts from
    /// its default system.
    pub fn set_display_unit_system(&mut self, system: &'static UnitSystem) {
        if let DisplayScales::NotLoaded = self.scales {
            self.scales = DisplayScales::Loaded(default_systems());
        }
        if let DisplayScales::Loaded(systems) = &mut self.scales {
            systems.insert(system.physical_quantity(), system);
        }
    }

    /// Resolve the unit system for `quantity`: forced system of measurement
    /// first, then the display system, then the quantity's default
    fn system_for(
        &self,
        quantity: PhysicalQuantity,
        forced_system: Option<SystemOfMeasurement>,
    ) -> Result<&'static UnitSystem, MeasureError> {
        if let Some(forced) = forced_system {
            match UNITS.unit_system_for(quantity, forced) {
                Some(system) => return Ok(system),
                None => warn!(
                    quantity = quantity.key(),
                    system = forced.key(),
                    "no unit system for forced system of measurement"
                ),
            }
        }
        match self.display_unit_system(quantity) {
            Err(MeasureError::DisplayScalesNotLoaded) => {
                warn!(quantity = quantity.key(), "display unit systems used before load_display_scales");
                UNITS.default_unit_system(quantity)
            }
            other => other,
        }
    }

    /// Format `amount` as `"<number> <unit>"`; NaN and infinities give `"-"`
    pub fn display_amount(
        &self,
        amount: Amount,
        precision: usize,
        forced_system: Option<SystemOfMeasurement>,
        forced_scale: Option<RelativeScale>,
    ) -> String {
        if !amount.is_finite() {
            return "-".to_string();
        }
        match self.system_for(amount.physical_quantity(), forced_system) {
            Ok(system) => system.display_amount(amount, precision, forced_scale, &self.locale),
            Err(err) => {
                warn!(error = %err, "showing amount in its own unit");
                format!("{} {}", self.locale.format_fixed(amount.quantity, precision), amount.unit.name())
            }
        }
    }

    /// The number [`display_amount`](Self::display_amount) would show;
    /// NaN and infinities give `-1.0`
    pub fn amount_display(
        &self,
        amount: Amount,
        forced_system: Option<SystemOfMeasurement>,
        forced_scale: Option<RelativeScale>,
    ) -> f64 {
        if !amount.is_finite() {
            return -1.0;
        }
        match self.system_for(amount.physical_quantity(), forced_system) {
            Ok(system) => system.amount_display(amount, forced_scale),
            Err(_) => amount.quantity,
        }
    }

    /// A bare number in this context's locale
    pub fn display_number(&self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return "-".to_string();
        }
        self.locale.format_fixed(value, precision)
    }

    /// Parse user text for `quantity` into a canonical amount.
    ///
    /// Text without a recognizable unit is read in the forced scale's unit
    /// of the resolved system, else in that system's default unit.
    pub fn qstring_to_si(
        &self,
        text: &str,
        quantity: PhysicalQuantity,
        forced_system: Option<SystemOfMeasurement>,
        forced_scale: Option<RelativeScale>,
    ) -> Result<Amount, MeasureError> {
        let system = self.system_for(quantity, forced_system)?;
        let default_unit = forced_scale
            .and_then(|scale| system.scale_unit(scale))
            .unwrap_or_else(|| system.unit());
        system.qstring_to_si(text, default_unit, forced_scale, &self.locale)
    }

    /// Like [`qstring_to_si`](Self::qstring_to_si) for fields that take
    /// either of two quantities.
    ///
    /// A unit suffix belonging only to the second quantity selects it;
    /// anything else is read as the first.
    pub fn qstring_to_si_mixed(
        &self,
        text: &str,
        quantities: PhysicalQuantities,
        forced_system: Option<SystemOfMeasurement>,
        forced_scale: Option<RelativeScale>,
    ) -> Result<Amount, MeasureError> {
        let quantity = match quantities {
            PhysicalQuantities::One(quantity) => quantity,
            PhysicalQuantities::Mixed(first, second) => {
                let (_, suffix) = split_amount(text, &self.locale)?;
                let candidates = UNITS.get_units(suffix, true);
                let names = |quantity: PhysicalQuantity| {
                    candidates.iter().any(|unit| unit.physical_quantity() == quantity)
                };
                if names(second) && !names(first) {
                    second
                } else {
                    first
                }
            }
        };
        self.qstring_to_si(text, quantity, forced_system, forced_scale)
    }

    /// Look up a unit by name, preferring the display system of `quantity`
    /// when the name is ambiguous
    pub fn get_unit(&self, name: &str, quantity: PhysicalQuantity) -> Option<&'static Unit> {
        let preferred = self.display_unit_system(quantity).ok();
        UNITS.get_unit(name, quantity, true, preferred)
    }

    /// Convert `"<number> <unit>"` to the unit named `to_unit_name`,
    /// preferring units of the current display systems
    pub fn convert_without_context(&self, text: &str, to_unit_name: &str) -> String {
        let preferred: Vec<&UnitSystem> = match &self.scales {
            DisplayScales::Loaded(systems) => systems.values().copied().collect(),
            DisplayScales::NotLoaded => Vec::new(),
        };
        convert_without_context(text, to_unit_name, &self.locale, &preferred)
    }

    /// The unit system a field is shown in, honouring its forced system of
    /// measurement
    pub fn unit_system_for_field(
        &self,
        field: &str,
        section: &str,
        quantity: PhysicalQuantity,
        store: &dyn SettingsStore,
    ) -> Result<&'static UnitSystem, MeasureError> {
        let forced = get_forced_system_of_measurement_for_field(field, section, store);
        self.system_for(quantity, forced)
    }

    /// [`display_amount`](Self::display_amount) with the field's overrides
    pub fn display_amount_for_field(
        &self,
        amount: Amount,
        precision: usize,
        field: &str,
        section: &str,
        store: &dyn SettingsStore,
    ) -> String {
        let forced_system = get_forced_system_of_measurement_for_field(field, section, store);
        let forced_scale = get_forced_relative_scale_for_field(field, section, store);
        self.display_amount(amount, precision, forced_system, forced_scale)
    }

    /// Format a mash thickness in the thickness unit of the display volume
    /// system
    pub fn display_thickness(&self, amount: Amount, precision: usize) -> String {
        if !amount.is_finite() {
            return "-".to_string();
        }
        let thickness_unit = self
            .system_for(PhysicalQuantity::Volume, None)
            .ok()
            .and_then(|system| system.thickness_unit());
        match thickness_unit {
            Some(unit) if unit.physical_quantity() == amount.physical_quantity() => {
                let value = unit.from_canonical(amount.to_canonical().quantity);
                format!("{} {}", self.locale.format_fixed(value, precision), unit.name())
            }
            _ => format!("{} {}", self.locale.format_fixed(amount.quantity, precision), amount.unit.name()),
        }
    }
}

fn default_systems() -> HashMap<PhysicalQuantity, &'static UnitSystem> {
    PhysicalQuantity::ALL
        .into_iter()
        .filter_map(|quantity| match UNITS.default_unit_system(quantity) {
            Ok(system) => Some((quantity, system)),
            Err(err) => {
                warn!(quantity = quantity.key(), error = %err, "no default unit system");
                None
            }
        })
        .collect()
}
