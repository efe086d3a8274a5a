//! Unit representation with conversion functions

use std::fmt;
use std::ptr;

use brewmeasure_core::MeasureError;

use crate::{Amount, PhysicalQuantity, UnitSystem, UNITS};

/// One concrete unit of measure (e.g. "kg", "floz").
///
/// Units are `static` items (see [`crate::units`]) and are always handled
/// as `&'static Unit`. All conversion goes through the canonical unit of the
/// physical quantity; there is no direct A→B path.
pub struct Unit {
    pub(crate) name: &'static str,
    pub(crate) system: &'static UnitSystem,
    pub(crate) to_canonical: fn(f64) -> f64,
    pub(crate) from_canonical: fn(f64) -> f64,
    pub(crate) boundary: f64,
    /// `None` means this unit is itself canonical
    pub(crate) canonical: Option<&'static Unit>,
}

fn identity(x: f64) -> f64 {
    x
}

impl Unit {
    /// Create a unit converted through `canonical`
    pub(crate) const fn new(
        system: &'static UnitSystem,
        name: &'static str,
        to_canonical: fn(f64) -> f64,
        from_canonical: fn(f64) -> f64,
        boundary: f64,
        canonical: &'static Unit,
    ) -> Self {
        Unit { name, system, to_canonical, from_canonical, boundary, canonical: Some(canonical) }
    }

    /// Create the canonical unit of a physical quantity
    pub(crate) const fn new_canonical(system: &'static UnitSystem, name: &'static str, boundary: f64) -> Self {
        Unit {
            name,
            system,
            to_canonical: identity,
            from_canonical: identity,
            boundary,
            canonical: None,
        }
    }

    /// Display name (abbreviation)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The unit system this unit belongs to
    pub fn system(&self) -> &'static UnitSystem {
        self.system
    }

    /// Derived from the owning unit system
    pub fn physical_quantity(&self) -> PhysicalQuantity {
        self.system.physical_quantity()
    }

    /// Threshold used by auto-scaling, in this unit
    pub fn boundary(&self) -> f64 {
        self.boundary
    }

    /// The canonical unit for this unit's physical quantity
    pub fn canonical(&'static self) -> &'static Unit {
        self.canonical.unwrap_or(self)
    }

    /// True iff this is the registered canonical unit for its quantity
    pub fn is_canonical(&self) -> bool {
        UNITS
            .canonical_unit(self.physical_quantity())
            .is_ok_and(|canonical| canonical == self)
    }

    /// Convert `raw` (in this unit) to the canonical unit
    pub fn to_canonical(&'static self, raw: f64) -> Amount {
        Amount::new((self.to_canonical)(raw), self.canonical())
    }

    /// Convert `raw` (in the canonical unit) to this unit
    pub fn from_canonical(&self, raw: f64) -> f64 {
        (self.from_canonical)(raw)
    }

    /// Convert a value in this unit to `target`
    pub fn convert(&'static self, value: f64, target: &Unit) -> Result<f64, MeasureError> {
        if self.physical_quantity() != target.physical_quantity() {
            return Err(MeasureError::IncompatibleQuantities {
                from: self.name.to_string(),
                to: target.name.to_string(),
            });
        }
        Ok(target.from_canonical(self.to_canonical(value).quantity))
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        // Identity first; name + quantity covers a unit defined twice
        ptr::eq(self, other)
            || (self.name == other.name && self.physical_quantity() == other.physical_quantity())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("name", &self.name)
            .field("system", &self.system.name())
            .field("boundary", &self.boundary)
            .finish()
    }
}
