//! Physical quantities, systems of measurement and relative scales
//!
//! Every unit belongs to exactly one [`PhysicalQuantity`]. Fields that accept
//! either of two quantities (hop or misc amounts given by weight or by
//! volume) are described by [`PhysicalQuantities::Mixed`].

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of thing being measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhysicalQuantity {
    Mass,
    Volume,
    Temperature,
    Time,
    Color,
    Density,
    DiastaticPower,
    Acidity,
    Bitterness,
    Carbonation,
    Concentration,
    Viscosity,
    SpecificHeatCapacity,
    SpecificVolume,
    /// Non-physical catch-all (percentages)
    Dimensionless,
}

impl PhysicalQuantity {
    pub const ALL: [PhysicalQuantity; 15] = [
        PhysicalQuantity::Mass,
        PhysicalQuantity::Volume,
        PhysicalQuantity::Temperature,
        PhysicalQuantity::Time,
        PhysicalQuantity::Color,
        PhysicalQuantity::Density,
        PhysicalQuantity::DiastaticPower,
        PhysicalQuantity::Acidity,
        PhysicalQuantity::Bitterness,
        PhysicalQuantity::Carbonation,
        PhysicalQuantity::Concentration,
        PhysicalQuantity::Viscosity,
        PhysicalQuantity::SpecificHeatCapacity,
        PhysicalQuantity::SpecificVolume,
        PhysicalQuantity::Dimensionless,
    ];

    /// Stable key used in persisted settings
    pub fn key(&self) -> &'static str {
        match self {
            PhysicalQuantity::Mass => "mass",
            PhysicalQuantity::Volume => "volume",
            PhysicalQuantity::Temperature => "temperature",
            PhysicalQuantity::Time => "time",
            PhysicalQuantity::Color => "color",
            PhysicalQuantity::Density => "density",
            PhysicalQuantity::DiastaticPower => "diastatic_power",
            PhysicalQuantity::Acidity => "acidity",
            PhysicalQuantity::Bitterness => "bitterness",
            PhysicalQuantity::Carbonation => "carbonation",
            PhysicalQuantity::Concentration => "concentration",
            PhysicalQuantity::Viscosity => "viscosity",
            PhysicalQuantity::SpecificHeatCapacity => "specific_heat_capacity",
            PhysicalQuantity::SpecificVolume => "specific_volume",
            PhysicalQuantity::Dimensionless => "dimensionless",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PhysicalQuantity::Mass => "Mass",
            PhysicalQuantity::Volume => "Volume",
            PhysicalQuantity::Temperature => "Temperature",
            PhysicalQuantity::Time => "Time",
            PhysicalQuantity::Color => "Color",
            PhysicalQuantity::Density => "Density",
            PhysicalQuantity::DiastaticPower => "Diastatic Power",
            PhysicalQuantity::Acidity => "Acidity",
            PhysicalQuantity::Bitterness => "Bitterness",
            PhysicalQuantity::Carbonation => "Carbonation",
            PhysicalQuantity::Concentration => "Concentration",
            PhysicalQuantity::Viscosity => "Viscosity",
            PhysicalQuantity::SpecificHeatCapacity => "Specific Heat Capacity",
            PhysicalQuantity::SpecificVolume => "Specific Volume",
            PhysicalQuantity::Dimensionless => "Dimensionless",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pq| pq.key() == key)
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One physical quantity, or a choice between two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalQuantities {
    One(PhysicalQuantity),
    /// Alternatives in preference order
    Mixed(PhysicalQuantity, PhysicalQuantity),
}

impl PhysicalQuantities {
    pub const MASS_OR_VOLUME: PhysicalQuantities =
        PhysicalQuantities::Mixed(PhysicalQuantity::Mass, PhysicalQuantity::Volume);

    /// The preferred (or only) quantity
    pub fn first(&self) -> PhysicalQuantity {
        match self {
            PhysicalQuantities::One(pq) | PhysicalQuantities::Mixed(pq, _) => *pq,
        }
    }

    pub fn contains(&self, quantity: PhysicalQuantity) -> bool {
        match self {
            PhysicalQuantities::One(pq) => *pq == quantity,
            PhysicalQuantities::Mixed(a, b) => *a == quantity || *b == quantity,
        }
    }

    pub fn quantities(&self) -> Vec<PhysicalQuantity> {
        match self {
            PhysicalQuantities::One(pq) => vec![*pq],
            PhysicalQuantities::Mixed(a, b) => vec![*a, *b],
        }
    }
}

impl From<PhysicalQuantity> for PhysicalQuantities {
    fn from(quantity: PhysicalQuantity) -> Self {
        PhysicalQuantities::One(quantity)
    }
}

/// A family of unit systems (Metric, US Customary, ...)
///
/// Several physical quantities can each have a unit system in the same
/// system of measurement, e.g. both Mass and Volume have a Metric one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemOfMeasurement {
    Imperial,
    UsCustomary,
    Metric,
    UniversalStandard,
    StandardReferenceMethod,
    EuropeanBreweryConvention,
    Lovibond,
    SpecificGravity,
    Plato,
    Brix,
    Lintner,
    WindischKolbach,
    CarbonationVolumes,
    CarbonationMassPerVolume,
    PartsPer,
    MassPerVolume,
    MetricAlternate,
    Calories,
    Joules,
    BritishThermalUnits,
    /// Quantities with only one legal unit (pH, IBU, %)
    Single,
}

impl SystemOfMeasurement {
    pub const ALL: [SystemOfMeasurement; 21] = [
        SystemOfMeasurement::Imperial,
        SystemOfMeasurement::UsCustomary,
        SystemOfMeasurement::Metric,
        SystemOfMeasurement::UniversalStandard,
        SystemOfMeasurement::StandardReferenceMethod,
        SystemOfMeasurement::EuropeanBreweryConvention,
        SystemOfMeasurement::Lovibond,
        SystemOfMeasurement::SpecificGravity,
        SystemOfMeasurement::Plato,
        SystemOfMeasurement::Brix,
        SystemOfMeasurement::Lintner,
        SystemOfMeasurement::WindischKolbach,
        SystemOfMeasurement::CarbonationVolumes,
        SystemOfMeasurement::CarbonationMassPerVolume,
        SystemOfMeasurement::PartsPer,
        SystemOfMeasurement::MassPerVolume,
        SystemOfMeasurement::MetricAlternate,
        SystemOfMeasurement::Calories,
        SystemOfMeasurement::Joules,
        SystemOfMeasurement::BritishThermalUnits,
        SystemOfMeasurement::Single,
    ];

    /// Stable key used in persisted settings
    pub fn key(&self) -> &'static str {
        match self {
            SystemOfMeasurement::Imperial => "Imperial",
            SystemOfMeasurement::UsCustomary => "UsCustomary",
            SystemOfMeasurement::Metric => "Metric",
            SystemOfMeasurement::UniversalStandard => "UniversalStandard",
            SystemOfMeasurement::StandardReferenceMethod => "StandardReferenceMethod",
            SystemOfMeasurement::EuropeanBreweryConvention => "EuropeanBreweryConvention",
            SystemOfMeasurement::Lovibond => "Lovibond",
            SystemOfMeasurement::SpecificGravity => "SpecificGravity",
            SystemOfMeasurement::Plato => "Plato",
            SystemOfMeasurement::Brix => "Brix",
            SystemOfMeasurement::Lintner => "Lintner",
            SystemOfMeasurement::WindischKolbach => "WindischKolbach",
            SystemOfMeasurement::CarbonationVolumes => "CarbonationVolumes",
            SystemOfMeasurement::CarbonationMassPerVolume => "CarbonationMassPerVolume",
            SystemOfMeasurement::PartsPer => "PartsPer",
            SystemOfMeasurement::MassPerVolume => "MassPerVolume",
            SystemOfMeasurement::MetricAlternate => "MetricAlternate",
            SystemOfMeasurement::Calories => "Calories",
            SystemOfMeasurement::Joules => "Joules",
            SystemOfMeasurement::BritishThermalUnits => "BritishThermalUnits",
            SystemOfMeasurement::Single => "Single",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|som| som.key() == key)
    }
}

impl fmt::Display for SystemOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Magnitude tier within a unit system, smallest first.
///
/// "No particular scale" (auto-scale) is expressed as `Option::None`
/// wherever a scale is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelativeScale {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Huge,
}

impl RelativeScale {
    pub const ALL: [RelativeScale; 6] = [
        RelativeScale::ExtraSmall,
        RelativeScale::Small,
        RelativeScale::Medium,
        RelativeScale::Large,
        RelativeScale::ExtraLarge,
        RelativeScale::Huge,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RelativeScale::ExtraSmall => "ExtraSmall",
            RelativeScale::Small => "Small",
            RelativeScale::Medium => "Medium",
            RelativeScale::Large => "Large",
            RelativeScale::ExtraLarge => "ExtraLarge",
            RelativeScale::Huge => "Huge",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.key() == key)
    }
}

impl fmt::Display for RelativeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for pq in PhysicalQuantity::ALL {
            assert_eq!(PhysicalQuantity::from_key(pq.key()), Some(pq));
        }
        for som in SystemOfMeasurement::ALL {
            assert_eq!(SystemOfMeasurement::from_key(som.key()), Some(som));
        }
        for scale in RelativeScale::ALL {
            assert_eq!(RelativeScale::from_key(scale.key()), Some(scale));
        }
        assert_eq!(PhysicalQuantity::from_key("weight"), None);
    }

    #[test]
    fn test_scale_ordering() {
        assert!(RelativeScale::ExtraSmall < RelativeScale::Small);
        assert!(RelativeScale::Large < RelativeScale::Huge);
    }

    #[test]
    fn test_mixed() {
        let mixed = PhysicalQuantities::MASS_OR_VOLUME;
        assert_eq!(mixed.first(), PhysicalQuantity::Mass);
        assert!(mixed.contains(PhysicalQuantity::Volume));
        assert!(!mixed.contains(PhysicalQuantity::Time));
        assert_eq!(mixed.quantities(), vec![PhysicalQuantity::Mass, PhysicalQuantity::Volume]);

        let one: PhysicalQuantities = PhysicalQuantity::Color.into();
        assert_eq!(one.quantities(), vec![PhysicalQuantity::Color]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PhysicalQuantity::DiastaticPower), "Diastatic Power");
        assert_eq!(format!("{}", SystemOfMeasurement::UsCustomary), "UsCustomary");
    }
}
