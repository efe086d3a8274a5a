//! Amount type - a value with an associated unit

use std::fmt;

use crate::{PhysicalQuantity, Unit};

/// A numeric quantity expressed in a particular unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub quantity: f64,
    pub unit: &'static Unit,
}

impl Amount {
    pub fn new(quantity: f64, unit: &'static Unit) -> Self {
        Amount { quantity, unit }
    }

    pub fn physical_quantity(&self) -> PhysicalQuantity {
        self.unit.physical_quantity()
    }

    /// The same amount expressed in the canonical unit
    pub fn to_canonical(&self) -> Amount {
        self.unit.to_canonical(self.quantity)
    }

    /// False for NaN and infinities
    pub fn is_finite(&self) -> bool {
        self.quantity.is_finite()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}
