//! brewmeasure units - physical quantities, units and unit systems
//!
//! Every unit converts to and from the single canonical unit of its
//! physical quantity:
//! - Mass (kg), Volume (L), Temperature (C), Time (min)
//! - Color (SRM), Density (sg), Diastatic power (Lintner)
//! - Acidity (pH), Bitterness (IBU), Dimensionless (%)
//! - Carbonation (vol), Concentration (ppm), Viscosity (cP)
//! - Specific heat capacity (c/(g·C)), Specific volume (L/kg)
//!
//! Units and unit systems are statics in [`units`]; [`UNITS`] indexes them
//! by name.

mod physical_quantity;
mod unit;
mod unit_system;
mod amount;
mod registry;
mod parse;
pub mod units;

pub use physical_quantity::{PhysicalQuantities, PhysicalQuantity, RelativeScale, SystemOfMeasurement};
pub use unit::Unit;
pub use unit_system::UnitSystem;
pub use amount::Amount;
pub use registry::{UnitRegistry, UNITS};
pub use parse::{convert_without_context, extract_raw_from_string, split_amount};
