//! Per-field display overrides
//!
//! A field (identified by its name and the section it appears in) may force
//! a system of measurement and/or a relative scale, taking precedence over
//! the global display unit system of its quantity.

use tracing::warn;

use brewmeasure_units::{RelativeScale, SystemOfMeasurement};

use crate::settings::{forced_scale_key, forced_system_key, SettingsStore};

pub fn get_forced_system_of_measurement_for_field(
    field: &str,
    section: &str,
    store: &dyn SettingsStore,
) -> Option<SystemOfMeasurement> {
    let stored = store.get(&forced_system_key(section, field))?;
    let system = SystemOfMeasurement::from_key(&stored);
    if system.is_none() {
        warn!(field, section, stored = %stored, "unrecognized forced system of measurement");
    }
    system
}

/// `None` clears the override
pub fn set_forced_system_of_measurement_for_field(
    field: &str,
    section: &str,
    system: Option<SystemOfMeasurement>,
    store: &mut dyn SettingsStore,
) {
    let key = forced_system_key(section, field);
    match system {
        Some(system) => store.set(&key, system.key()),
        None => store.remove(&key),
    }
}

pub fn get_forced_relative_scale_for_field(
    field: &str,
    section: &str,
    store: &dyn SettingsStore,
) -> Option<RelativeScale> {
    let stored = store.get(&forced_scale_key(section, field))?;
    let scale = RelativeScale::from_key(&stored);
    if scale.is_none() {
        warn!(field, section, stored = %stored, "unrecognized forced relative scale");
    }
    scale
}

/// `None` clears the override
pub fn set_forced_relative_scale_for_field(
    field: &str,
    section: &str,
    scale: Option<RelativeScale>,
    store: &mut dyn SettingsStore,
) {
    let key = forced_scale_key(section, field);
    match scale {
        Some(scale) => store.set(&key, scale.key()),
        None => store.remove(&key),
    }
}
