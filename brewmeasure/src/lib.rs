//! brewmeasure - units of measure for brewing recipes
//!
//! Amounts are stored in the canonical unit of their physical quantity and
//! only turned into a user's preferred units at the edges:
//! - [`DisplayContext`] formats and parses amounts in the display unit
//!   system of each quantity, with per-field overrides
//! - [`SettingsStore`] persists those preferences
//! - BeerJSON records decode to canonical amounts ([`decode_record`])
//!
//! The lower layers are re-exported so one dependency is enough.

mod settings;
mod overrides;
mod context;

pub use context::DisplayContext;
pub use overrides::{
    get_forced_relative_scale_for_field, get_forced_system_of_measurement_for_field,
    set_forced_relative_scale_for_field, set_forced_system_of_measurement_for_field,
};
pub use settings::{display_system_key, MemorySettings, SettingsError, SettingsStore};

pub use brewmeasure_core::{codes, Locale, MeasureError, DEFAULT_PRECISION};
pub use brewmeasure_units::{
    convert_without_context, extract_raw_from_string, split_amount, units, Amount, PhysicalQuantities,
    PhysicalQuantity, RelativeScale, SystemOfMeasurement, Unit, UnitRegistry, UnitSystem, UNITS,
};
pub use brewmeasure_beerjson::{
    decode_record, encode_record, mapping, records, DecodeError, EncodeError, FieldDescriptor, FieldKind,
};
