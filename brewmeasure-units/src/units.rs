//! Unit and unit system definitions
//!
//! Every unit and unit system is a `static`, so `&'static Unit` handles are
//! valid for the whole program and can be compared by address. Units point
//! at their system and systems point back at their units.
//!
//! Boundary values are tuned display thresholds (see
//! [`UnitSystem::auto_scale_unit`]). They are deliberately uneven, e.g.
//! seconds 90 against hours 2, and must not be "tidied".

use crate::{PhysicalQuantity, RelativeScale, SystemOfMeasurement, Unit, UnitSystem};

const POUND_KG: f64 = 0.45359237;
const OUNCE_KG: f64 = 0.028349523125;

const US_TEASPOON_L: f64 = 0.00492892159375;
const US_TABLESPOON_L: f64 = 0.01478676478125;
const US_FLUID_OUNCE_L: f64 = 0.0295735295625;
const US_CUP_L: f64 = 0.2365882365;
const US_PINT_L: f64 = 0.473176473;
const US_QUART_L: f64 = 0.946352946;
const US_GALLON_L: f64 = 3.7854117840007;
const US_BARREL_L: f64 = 117.347765304;

const IMPERIAL_TEASPOON_L: f64 = 0.00591938802083;
const IMPERIAL_TABLESPOON_L: f64 = 0.0177581640625;
const IMPERIAL_FLUID_OUNCE_L: f64 = 0.0284130625;
const IMPERIAL_CUP_L: f64 = 0.284130625;
const IMPERIAL_PINT_L: f64 = 0.56826125;
const IMPERIAL_QUART_L: f64 = 1.1365225;
const IMPERIAL_GALLON_L: f64 = 4.54609;
const IMPERIAL_BARREL_L: f64 = 163.65924;

const CUBIC_FOOT_L: f64 = 28.316846592;

/// Grams of CO2 per litre of beer for one volume of CO2
const CO2_GRAMS_PER_LITER_PER_VOLUME: f64 = 1.96;

const JOULES_PER_CALORIE_KG: f64 = 4184.0;

// sg = 1 + P / (PLATO_A - P * PLATO_B)
const PLATO_A: f64 = 258.6;
const PLATO_B: f64 = 227.1 / 258.2;

fn plato_to_sg(plato: f64) -> f64 {
    1.0 + plato / (PLATO_A - plato * PLATO_B)
}

fn sg_to_plato(sg: f64) -> f64 {
    let excess = sg - 1.0;
    excess * PLATO_A / (1.0 + excess * PLATO_B)
}

// ========== Mass ==========

pub static MASS_METRIC: UnitSystem = UnitSystem {
    name: "mass_Metric",
    physical_quantity: PhysicalQuantity::Mass,
    system_of_measurement: SystemOfMeasurement::Metric,
    default_unit: &KILOGRAMS,
    thickness_unit: None,
    scales: &[
        (RelativeScale::ExtraSmall, &MILLIGRAMS),
        (RelativeScale::Small, &GRAMS),
        (RelativeScale::Medium, &KILOGRAMS),
    ],
    units: &[&MILLIGRAMS, &GRAMS, &KILOGRAMS],
};

pub static MASS_US: UnitSystem = UnitSystem {
    name: "mass_UsCustomary",
    physical_quantity: PhysicalQuantity::Mass,
    system_of_measurement: SystemOfMeasurement::UsCustomary,
    default_unit: &POUNDS,
    thickness_unit: None,
    scales: &[
        (RelativeScale::Small, &OUNCES),
        (RelativeScale::Medium, &POUNDS),
    ],
    units: &[&OUNCES, &POUNDS],
};

pub static KILOGRAMS: Unit = Unit::new_canonical(&MASS_METRIC, "kg", 1.0);
pub static GRAMS: Unit = Unit::new(&MASS_METRIC, "g", |x| x / 1000.0, |y| y * 1000.0, 0.1, &KILOGRAMS);
pub static MILLIGRAMS: Unit = Unit::new(&MASS_METRIC, "mg", |x| x / 1_000_000.0, |y| y * 1_000_000.0, 1.0, &KILOGRAMS);
pub static POUNDS: Unit = Unit::new(&MASS_US, "lb", |x| x * POUND_KG, |y| y / POUND_KG, 1.0, &KILOGRAMS);
pub static OUNCES: Unit = Unit::new(&MASS_US, "oz", |x| x * OUNCE_KG, |y| y / OUNCE_KG, 1.0, &KILOGRAMS);

// ========== Volume ==========

pub static VOLUME_METRIC: UnitSystem = UnitSystem {
    name: "volume_Metric",
    physical_quantity: PhysicalQuantity::Volume,
    system_of_measurement: SystemOfMeasurement::Metric,
    default_unit: &LITERS,
    thickness_unit: Some(&LITERS_PER_KILOGRAM),
    scales: &[
        (RelativeScale::Small, &MILLILITERS),
        (RelativeScale::Medium, &LITERS),
    ],
    units: &[&MILLILITERS, &LITERS],
};

pub static VOLUME_US: UnitSystem = UnitSystem {
    name: "volume_UsCustomary",
    physical_quantity: PhysicalQuantity::Volume,
    system_of_measurement: SystemOfMeasurement::UsCustomary,
    default_unit: &US_GALLONS,
    thickness_unit: Some(&US_QUARTS_PER_POUND),
    scales: &[
        (RelativeScale::ExtraSmall, &US_TEASPOONS),
        (RelativeScale::Small, &US_TABLESPOONS),
        (RelativeScale::Medium, &US_CUPS),
        (RelativeScale::Large, &US_QUARTS),
        (RelativeScale::ExtraLarge, &US_GALLONS),
        (RelativeScale::Huge, &US_BARRELS),
    ],
    units: &[
        &US_TEASPOONS,
        &US_TABLESPOONS,
        &US_FLUID_OUNCES,
        &US_CUPS,
        &US_PINTS,
        &US_QUARTS,
        &US_GALLONS,
        &US_BARRELS,
    ],
};

pub static VOLUME_IMPERIAL: UnitSystem = UnitSystem {
    name: "volume_Imperial",
    physical_quantity: PhysicalQuantity::Volume,
    system_of_measurement: SystemOfMeasurement::Imperial,
    default_unit: &IMPERIAL_GALLONS,
    thickness_unit: Some(&US_QUARTS_PER_POUND),
    scales: &[
        (RelativeScale::ExtraSmall, &IMPERIAL_TEASPOONS),
        (RelativeScale::Small, &IMPERIAL_TABLESPOONS),
        (RelativeScale::Medium, &IMPERIAL_CUPS),
        (RelativeScale::Large, &IMPERIAL_QUARTS),
        (RelativeScale::ExtraLarge, &IMPERIAL_GALLONS),
        (RelativeScale::Huge, &IMPERIAL_BARRELS),
    ],
    units: &[
        &IMPERIAL_TEASPOONS,
        &IMPERIAL_TABLESPOONS,
        &IMPERIAL_FLUID_OUNCES,
        &IMPERIAL_CUPS,
        &IMPERIAL_PINTS,
        &IMPERIAL_QUARTS,
        &IMPERIAL_GALLONS,
        &IMPERIAL_BARRELS,
    ],
};

pub static LITERS: Unit = Unit::new_canonical(&VOLUME_METRIC, "L", 1.0);
pub static MILLILITERS: Unit = Unit::new(&VOLUME_METRIC, "mL", |x| x / 1000.0, |y| y * 1000.0, 1.0, &LITERS);

pub static US_TEASPOONS: Unit =
    Unit::new(&VOLUME_US, "tsp", |x| x * US_TEASPOON_L, |y| y / US_TEASPOON_L, 1.0, &LITERS);
pub static US_TABLESPOONS: Unit =
    Unit::new(&VOLUME_US, "tbsp", |x| x * US_TABLESPOON_L, |y| y / US_TABLESPOON_L, 1.0, &LITERS);
pub static US_FLUID_OUNCES: Unit =
    Unit::new(&VOLUME_US, "floz", |x| x * US_FLUID_OUNCE_L, |y| y / US_FLUID_OUNCE_L, 1.0, &LITERS);
pub static US_CUPS: Unit = Unit::new(&VOLUME_US, "cup", |x| x * US_CUP_L, |y| y / US_CUP_L, 0.25, &LITERS);
pub static US_PINTS: Unit = Unit::new(&VOLUME_US, "pt", |x| x * US_PINT_L, |y| y / US_PINT_L, 1.0, &LITERS);
pub static US_QUARTS: Unit = Unit::new(&VOLUME_US, "qt", |x| x * US_QUART_L, |y| y / US_QUART_L, 1.0, &LITERS);
pub static US_GALLONS: Unit = Unit::new(&VOLUME_US, "gal", |x| x * US_GALLON_L, |y| y / US_GALLON_L, 1.0, &LITERS);
pub static US_BARRELS: Unit = Unit::new(&VOLUME_US, "bbl", |x| x * US_BARREL_L, |y| y / US_BARREL_L, 1.0, &LITERS);

pub static IMPERIAL_TEASPOONS: Unit = Unit::new(
    &VOLUME_IMPERIAL, "tsp", |x| x * IMPERIAL_TEASPOON_L, |y| y / IMPERIAL_TEASPOON_L, 1.0, &LITERS,
);
pub static IMPERIAL_TABLESPOONS: Unit = Unit::new(
    &VOLUME_IMPERIAL, "tbsp", |x| x * IMPERIAL_TABLESPOON_L, |y| y / IMPERIAL_TABLESPOON_L, 1.0, &LITERS,
);
pub static IMPERIAL_FLUID_OUNCES: Unit = Unit::new(
    &VOLUME_IMPERIAL, "floz", |x| x * IMPERIAL_FLUID_OUNCE_L, |y| y / IMPERIAL_FLUID_OUNCE_L, 1.0, &LITERS,
);
pub static IMPERIAL_CUPS: Unit =
    Unit::new(&VOLUME_IMPERIAL, "cup", |x| x * IMPERIAL_CUP_L, |y| y / IMPERIAL_CUP_L, 0.25, &LITERS);
pub static IMPERIAL_PINTS: Unit =
    Unit::new(&VOLUME_IMPERIAL, "pt", |x| x * IMPERIAL_PINT_L, |y| y / IMPERIAL_PINT_L, 1.0, &LITERS);
pub static IMPERIAL_QUARTS: Unit =
    Unit::new(&VOLUME_IMPERIAL, "qt", |x| x * IMPERIAL_QUART_L, |y| y / IMPERIAL_QUART_L, 1.0, &LITERS);
pub static IMPERIAL_GALLONS: Unit =
    Unit::new(&VOLUME_IMPERIAL, "gal", |x| x * IMPERIAL_GALLON_L, |y| y / IMPERIAL_GALLON_L, 1.0, &LITERS);
pub static IMPERIAL_BARRELS: Unit =
    Unit::new(&VOLUME_IMPERIAL, "bbl", |x| x * IMPERIAL_BARREL_L, |y| y / IMPERIAL_BARREL_L, 1.0, &LITERS);

// ========== Temperature ==========

pub static TEMPERATURE_METRIC: UnitSystem = UnitSystem {
    name: "temperature_MetricIsCelsius",
    physical_quantity: PhysicalQuantity::Temperature,
    system_of_measurement: SystemOfMeasurement::Metric,
    default_unit: &CELSIUS,
    thickness_unit: None,
    scales: &[],
    units: &[&CELSIUS],
};

pub static TEMPERATURE_US: UnitSystem = UnitSystem {
    name: "temperature_UsCustomaryIsFahrenheit",
    physical_quantity: PhysicalQuantity::Temperature,
    system_of_measurement: SystemOfMeasurement::UsCustomary,
    default_unit: &FAHRENHEIT,
    thickness_unit: None,
    scales: &[],
    units: &[&FAHRENHEIT],
};

pub static CELSIUS: Unit = Unit::new_canonical(&TEMPERATURE_METRIC, "C", 1.0);
pub static FAHRENHEIT: Unit = Unit::new(
    &TEMPERATURE_US, "F", |x| (x - 32.0) * 5.0 / 9.0, |y| y * 9.0 / 5.0 + 32.0, 1.0, &CELSIUS,
);

// ========== Time ==========

pub static TIME_UNIVERSAL: UnitSystem = UnitSystem {
    name: "time_CoordinatedUniversalTime",
    physical_quantity: PhysicalQuantity::Time,
    system_of_measurement: SystemOfMeasurement::UniversalStandard,
    default_unit: &MINUTES,
    thickness_unit: None,
    scales: &[
        (RelativeScale::ExtraSmall, &SECONDS),
        (RelativeScale::Small, &MINUTES),
        (RelativeScale::Medium, &HOURS),
        (RelativeScale::Large, &DAYS),
        (RelativeScale::ExtraLarge, &WEEKS),
    ],
    units: &[&SECONDS, &MINUTES, &HOURS, &DAYS, &WEEKS],
};

pub static MINUTES: Unit = Unit::new_canonical(&TIME_UNIVERSAL, "min", 1.0);
pub static SECONDS: Unit = Unit::new(&TIME_UNIVERSAL, "s", |x| x / 60.0, |y| y * 60.0, 90.0, &MINUTES);
pub static HOURS: Unit = Unit::new(&TIME_UNIVERSAL, "hr", |x| x * 60.0, |y| y / 60.0, 2.0, &MINUTES);
pub static DAYS: Unit = Unit::new(&TIME_UNIVERSAL, "day", |x| x * 1440.0, |y| y / 1440.0, 1.0, &MINUTES);
pub static WEEKS: Unit = Unit::new(&TIME_UNIVERSAL, "week", |x| x * 10080.0, |y| y / 10080.0, 1.0, &MINUTES);

// ========== Color ==========

pub static COLOR_SRM: UnitSystem = UnitSystem {
    name: "color_StandardReferenceMethod",
    physical_quantity: PhysicalQuantity::Color,
    system_of_measurement: SystemOfMeasurement::StandardReferenceMethod,
    default_unit: &SRM,
    thickness_unit: None,
    scales: &[],
    units: &[&SRM],
};

pub static COLOR_EBC: UnitSystem = UnitSystem {
    name: "color_EuropeanBreweryConvention",
    physical_quantity: PhysicalQuantity::Color,
    system_of_measurement: SystemOfMeasurement::EuropeanBreweryConvention,
    default_unit: &EBC,
    thickness_unit: None,
    scales: &[],
    units: &[&EBC],
};

pub static COLOR_LOVIBOND: UnitSystem = UnitSystem {
    name: "color_Lovibond",
    physical_quantity: PhysicalQuantity::Color,
    system_of_measurement: SystemOfMeasurement::Lovibond,
    default_unit: &LOVIBOND,
    thickness_unit: None,
    scales: &[],
    units: &[&LOVIBOND],
};

pub static SRM: Unit = Unit::new_canonical(&COLOR_SRM, "srm", 1.0);
pub static EBC: Unit = Unit::new(&COLOR_EBC, "ebc", |x| x / 1.97, |y| y * 1.97, 1.0, &SRM);
pub static LOVIBOND: Unit =
    Unit::new(&COLOR_LOVIBOND, "°L", |x| 1.3546 * x - 0.76, |y| (y + 0.76) / 1.3546, 1.0, &SRM);

// ========== Density ==========

pub static DENSITY_SG: UnitSystem = UnitSystem {
    name: "density_SpecificGravity",
    physical_quantity: PhysicalQuantity::Density,
    system_of_measurement: SystemOfMeasurement::SpecificGravity,
    default_unit: &SPECIFIC_GRAVITY,
    thickness_unit: None,
    scales: &[],
    units: &[&SPECIFIC_GRAVITY],
};

pub static DENSITY_PLATO: UnitSystem = UnitSystem {
    name: "density_Plato",
    physical_quantity: PhysicalQuantity::Density,
    system_of_measurement: SystemOfMeasurement::Plato,
    default_unit: &PLATO,
    thickness_unit: None,
    scales: &[],
    units: &[&PLATO],
};

pub static DENSITY_BRIX: UnitSystem = UnitSystem {
    name: "density_Brix",
    physical_quantity: PhysicalQuantity::Density,
    system_of_measurement: SystemOfMeasurement::Brix,
    default_unit: &BRIX,
    thickness_unit: None,
    scales: &[],
    units: &[&BRIX],
};

pub static SPECIFIC_GRAVITY: Unit = Unit::new_canonical(&DENSITY_SG, "sg", 1.0);
pub static PLATO: Unit = Unit::new(&DENSITY_PLATO, "°P", plato_to_sg, sg_to_plato, 1.0, &SPECIFIC_GRAVITY);
pub static BRIX: Unit = Unit::new(&DENSITY_BRIX, "°Bx", plato_to_sg, sg_to_plato, 1.0, &SPECIFIC_GRAVITY);

// ========== Diastatic power ==========

pub static DIASTATIC_POWER_LINTNER: UnitSystem = UnitSystem {
    name: "diastaticPower_Lintner",
    physical_quantity: PhysicalQuantity::DiastaticPower,
    system_of_measurement: SystemOfMeasurement::Lintner,
    default_unit: &LINTNER,
    thickness_unit: None,
    scales: &[],
    units: &[&LINTNER],
};

pub static DIASTATIC_POWER_WK: UnitSystem = UnitSystem {
    name: "diastaticPower_WindischKolbach",
    physical_quantity: PhysicalQuantity::DiastaticPower,
    system_of_measurement: SystemOfMeasurement::WindischKolbach,
    default_unit: &WINDISCH_KOLBACH,
    thickness_unit: None,
    scales: &[],
    units: &[&WINDISCH_KOLBACH],
};

pub static LINTNER: Unit = Unit::new_canonical(&DIASTATIC_POWER_LINTNER, "Lintner", 1.0);
pub static WINDISCH_KOLBACH: Unit =
    Unit::new(&DIASTATIC_POWER_WK, "WK", |x| (x + 16.0) / 3.5, |y| 3.5 * y - 16.0, 1.0, &LINTNER);

// ========== Single-unit quantities ==========

pub static ACIDITY_PH: UnitSystem = UnitSystem {
    name: "acidity_pH",
    physical_quantity: PhysicalQuantity::Acidity,
    system_of_measurement: SystemOfMeasurement::Single,
    default_unit: &PH,
    thickness_unit: None,
    scales: &[],
    units: &[&PH],
};

pub static BITTERNESS_IBU: UnitSystem = UnitSystem {
    name: "bitterness_InternationalBitternessUnits",
    physical_quantity: PhysicalQuantity::Bitterness,
    system_of_measurement: SystemOfMeasurement::Single,
    default_unit: &IBU,
    thickness_unit: None,
    scales: &[],
    units: &[&IBU],
};

pub static DIMENSIONLESS_PERCENT: UnitSystem = UnitSystem {
    name: "dimensionless_Percent",
    physical_quantity: PhysicalQuantity::Dimensionless,
    system_of_measurement: SystemOfMeasurement::Single,
    default_unit: &PERCENT,
    thickness_unit: None,
    scales: &[],
    units: &[&PERCENT],
};

pub static PH: Unit = Unit::new_canonical(&ACIDITY_PH, "pH", 1.0);
pub static IBU: Unit = Unit::new_canonical(&BITTERNESS_IBU, "IBU", 1.0);
pub static PERCENT: Unit = Unit::new_canonical(&DIMENSIONLESS_PERCENT, "%", 1.0);

// ========== Carbonation ==========

pub static CARBONATION_VOLUMES: UnitSystem = UnitSystem {
    name: "carbonation_Volumes",
    physical_quantity: PhysicalQuantity::Carbonation,
    system_of_measurement: SystemOfMeasurement::CarbonationVolumes,
    default_unit: &CO2_VOLUMES,
    thickness_unit: None,
    scales: &[],
    units: &[&CO2_VOLUMES],
};

pub static CARBONATION_MASS_PER_VOLUME: UnitSystem = UnitSystem {
    name: "carbonation_MassPerVolume",
    physical_quantity: PhysicalQuantity::Carbonation,
    system_of_measurement: SystemOfMeasurement::CarbonationMassPerVolume,
    default_unit: &CO2_GRAMS_PER_LITER,
    thickness_unit: None,
    scales: &[],
    units: &[&CO2_GRAMS_PER_LITER],
};

pub static CO2_VOLUMES: Unit = Unit::new_canonical(&CARBONATION_VOLUMES, "vol", 1.0);
pub static CO2_GRAMS_PER_LITER: Unit = Unit::new(
    &CARBONATION_MASS_PER_VOLUME,
    "g/L",
    |x| x / CO2_GRAMS_PER_LITER_PER_VOLUME,
    |y| y * CO2_GRAMS_PER_LITER_PER_VOLUME,
    1.0,
    &CO2_VOLUMES,
);

// ========== Concentration ==========

pub static CONCENTRATION_PARTS_PER: UnitSystem = UnitSystem {
    name: "concentration_PartsPer",
    physical_quantity: PhysicalQuantity::Concentration,
    system_of_measurement: SystemOfMeasurement::PartsPer,
    default_unit: &PARTS_PER_MILLION,
    thickness_unit: None,
    scales: &[
        (RelativeScale::Small, &PARTS_PER_BILLION),
        (RelativeScale::Medium, &PARTS_PER_MILLION),
    ],
    units: &[&PARTS_PER_BILLION, &PARTS_PER_MILLION],
};

pub static CONCENTRATION_MASS_PER_VOLUME: UnitSystem = UnitSystem {
    name: "concentration_MassPerVolume",
    physical_quantity: PhysicalQuantity::Concentration,
    system_of_measurement: SystemOfMeasurement::MassPerVolume,
    default_unit: &MILLIGRAMS_PER_LITER,
    thickness_unit: None,
    scales: &[],
    units: &[&MILLIGRAMS_PER_LITER],
};

pub static PARTS_PER_MILLION: Unit = Unit::new_canonical(&CONCENTRATION_PARTS_PER, "ppm", 1.0);
pub static PARTS_PER_BILLION: Unit =
    Unit::new(&CONCENTRATION_PARTS_PER, "ppb", |x| x / 1000.0, |y| y * 1000.0, 1.0, &PARTS_PER_MILLION);
// Dilute aqueous solutions: 1 mg/L is 1 ppm
pub static MILLIGRAMS_PER_LITER: Unit =
    Unit::new(&CONCENTRATION_MASS_PER_VOLUME, "mg/L", |x| x, |y| y, 1.0, &PARTS_PER_MILLION);

// ========== Viscosity ==========

pub static VISCOSITY_METRIC: UnitSystem = UnitSystem {
    name: "viscosity_Metric",
    physical_quantity: PhysicalQuantity::Viscosity,
    system_of_measurement: SystemOfMeasurement::Metric,
    default_unit: &CENTIPOISE,
    thickness_unit: None,
    scales: &[],
    units: &[&CENTIPOISE],
};

pub static VISCOSITY_METRIC_ALTERNATE: UnitSystem = UnitSystem {
    name: "viscosity_MetricAlternate",
    physical_quantity: PhysicalQuantity::Viscosity,
    system_of_measurement: SystemOfMeasurement::MetricAlternate,
    default_unit: &MILLIPASCAL_SECONDS,
    thickness_unit: None,
    scales: &[],
    units: &[&MILLIPASCAL_SECONDS],
};

pub static CENTIPOISE: Unit = Unit::new_canonical(&VISCOSITY_METRIC, "cP", 1.0);
pub static MILLIPASCAL_SECONDS: Unit =
    Unit::new(&VISCOSITY_METRIC_ALTERNATE, "mPa-s", |x| x, |y| y, 1.0, &CENTIPOISE);

// ========== Specific heat capacity ==========

pub static SPECIFIC_HEAT_CAPACITY_CALORIES: UnitSystem = UnitSystem {
    name: "specificHeatCapacity_Calories",
    physical_quantity: PhysicalQuantity::SpecificHeatCapacity,
    system_of_measurement: SystemOfMeasurement::Calories,
    default_unit: &CALORIES_PER_GRAM_CELSIUS,
    thickness_unit: None,
    scales: &[],
    units: &[&CALORIES_PER_GRAM_CELSIUS],
};

pub static SPECIFIC_HEAT_CAPACITY_JOULES: UnitSystem = UnitSystem {
    name: "specificHeatCapacity_Joules",
    physical_quantity: PhysicalQuantity::SpecificHeatCapacity,
    system_of_measurement: SystemOfMeasurement::Joules,
    default_unit: &JOULES_PER_KILOGRAM_KELVIN,
    thickness_unit: None,
    scales: &[],
    units: &[&JOULES_PER_KILOGRAM_KELVIN],
};

pub static SPECIFIC_HEAT_CAPACITY_BTUS: UnitSystem = UnitSystem {
    name: "specificHeatCapacity_Btus",
    physical_quantity: PhysicalQuantity::SpecificHeatCapacity,
    system_of_measurement: SystemOfMeasurement::BritishThermalUnits,
    default_unit: &BTU_PER_POUND_FAHRENHEIT,
    thickness_unit: None,
    scales: &[],
    units: &[&BTU_PER_POUND_FAHRENHEIT],
};

pub static CALORIES_PER_GRAM_CELSIUS: Unit =
    Unit::new_canonical(&SPECIFIC_HEAT_CAPACITY_CALORIES, "c/(g·C)", 1.0);
pub static JOULES_PER_KILOGRAM_KELVIN: Unit = Unit::new(
    &SPECIFIC_HEAT_CAPACITY_JOULES,
    "J/(kg·K)",
    |x| x / JOULES_PER_CALORIE_KG,
    |y| y * JOULES_PER_CALORIE_KG,
    1.0,
    &CALORIES_PER_GRAM_CELSIUS,
);
pub static BTU_PER_POUND_FAHRENHEIT: Unit = Unit::new(
    &SPECIFIC_HEAT_CAPACITY_BTUS, "BTU/(lb·F)", |x| x, |y| y, 1.0, &CALORIES_PER_GRAM_CELSIUS,
);

// ========== Specific volume ==========

pub static SPECIFIC_VOLUME_METRIC: UnitSystem = UnitSystem {
    name: "specificVolume_Metric",
    physical_quantity: PhysicalQuantity::SpecificVolume,
    system_of_measurement: SystemOfMeasurement::Metric,
    default_unit: &LITERS_PER_KILOGRAM,
    thickness_unit: None,
    scales: &[],
    units: &[&LITERS_PER_KILOGRAM, &LITERS_PER_GRAM, &CUBIC_METERS_PER_KILOGRAM],
};

pub static SPECIFIC_VOLUME_US: UnitSystem = UnitSystem {
    name: "specificVolume_UsCustomary",
    physical_quantity: PhysicalQuantity::SpecificVolume,
    system_of_measurement: SystemOfMeasurement::UsCustomary,
    default_unit: &US_QUARTS_PER_POUND,
    thickness_unit: None,
    scales: &[],
    units: &[
        &US_FLUID_OUNCES_PER_OUNCE,
        &US_QUARTS_PER_POUND,
        &US_GALLONS_PER_POUND,
        &CUBIC_FEET_PER_POUND,
        &US_GALLONS_PER_OUNCE,
    ],
};

pub static LITERS_PER_KILOGRAM: Unit = Unit::new_canonical(&SPECIFIC_VOLUME_METRIC, "L/kg", 1.0);
pub static LITERS_PER_GRAM: Unit =
    Unit::new(&SPECIFIC_VOLUME_METRIC, "L/g", |x| x * 1000.0, |y| y / 1000.0, 1.0, &LITERS_PER_KILOGRAM);
pub static CUBIC_METERS_PER_KILOGRAM: Unit =
    Unit::new(&SPECIFIC_VOLUME_METRIC, "m³/kg", |x| x * 1000.0, |y| y / 1000.0, 1.0, &LITERS_PER_KILOGRAM);
pub static US_QUARTS_PER_POUND: Unit = Unit::new(
    &SPECIFIC_VOLUME_US,
    "qt/lb",
    |x| x * US_QUART_L / POUND_KG,
    |y| y * POUND_KG / US_QUART_L,
    1.0,
    &LITERS_PER_KILOGRAM,
);
pub static US_GALLONS_PER_POUND: Unit = Unit::new(
    &SPECIFIC_VOLUME_US,
    "gal/lb",
    |x| x * US_GALLON_L / POUND_KG,
    |y| y * POUND_KG / US_GALLON_L,
    1.0,
    &LITERS_PER_KILOGRAM,
);
pub static US_GALLONS_PER_OUNCE: Unit = Unit::new(
    &SPECIFIC_VOLUME_US,
    "gal/oz",
    |x| x * US_GALLON_L / OUNCE_KG,
    |y| y * OUNCE_KG / US_GALLON_L,
    1.0,
    &LITERS_PER_KILOGRAM,
);
pub static US_FLUID_OUNCES_PER_OUNCE: Unit = Unit::new(
    &SPECIFIC_VOLUME_US,
    "floz/oz",
    |x| x * US_FLUID_OUNCE_L / OUNCE_KG,
    |y| y * OUNCE_KG / US_FLUID_OUNCE_L,
    1.0,
    &LITERS_PER_KILOGRAM,
);
pub static CUBIC_FEET_PER_POUND: Unit = Unit::new(
    &SPECIFIC_VOLUME_US,
    "ft³/lb",
    |x| x * CUBIC_FOOT_L / POUND_KG,
    |y| y * POUND_KG / CUBIC_FOOT_L,
    1.0,
    &LITERS_PER_KILOGRAM,
);

// ========== Master lists ==========

/// Every unit, in registration order.
///
/// Order matters: name lookups that cannot be disambiguated return the
/// last match, so Imperial volume units are listed after US ones.
pub static ALL_UNITS: &[&Unit] = &[
    &KILOGRAMS,
    &GRAMS,
    &MILLIGRAMS,
    &POUNDS,
    &OUNCES,
    &LITERS,
    &MILLILITERS,
    &US_TEASPOONS,
    &US_TABLESPOONS,
    &US_FLUID_OUNCES,
    &US_CUPS,
    &US_PINTS,
    &US_QUARTS,
    &US_GALLONS,
    &US_BARRELS,
    &IMPERIAL_TEASPOONS,
    &IMPERIAL_TABLESPOONS,
    &IMPERIAL_FLUID_OUNCES,
    &IMPERIAL_CUPS,
    &IMPERIAL_PINTS,
    &IMPERIAL_QUARTS,
    &IMPERIAL_GALLONS,
    &IMPERIAL_BARRELS,
    &CELSIUS,
    &FAHRENHEIT,
    &SECONDS,
    &MINUTES,
    &HOURS,
    &DAYS,
    &WEEKS,
    &SRM,
    &EBC,
    &LOVIBOND,
    &SPECIFIC_GRAVITY,
    &PLATO,
    &BRIX,
    &LINTNER,
    &WINDISCH_KOLBACH,
    &PH,
    &IBU,
    &PERCENT,
    &CO2_VOLUMES,
    &CO2_GRAMS_PER_LITER,
    &PARTS_PER_MILLION,
    &PARTS_PER_BILLION,
    &MILLIGRAMS_PER_LITER,
    &CENTIPOISE,
    &MILLIPASCAL_SECONDS,
    &CALORIES_PER_GRAM_CELSIUS,
    &JOULES_PER_KILOGRAM_KELVIN,
    &BTU_PER_POUND_FAHRENHEIT,
    &LITERS_PER_KILOGRAM,
    &LITERS_PER_GRAM,
    &CUBIC_METERS_PER_KILOGRAM,
    &US_QUARTS_PER_POUND,
    &US_GALLONS_PER_POUND,
    &US_GALLONS_PER_OUNCE,
    &US_FLUID_OUNCES_PER_OUNCE,
    &CUBIC_FEET_PER_POUND,
];

/// Every unit system
pub static ALL_UNIT_SYSTEMS: &[&UnitSystem] = &[
    &MASS_METRIC,
    &MASS_US,
    &VOLUME_METRIC,
    &VOLUME_US,
    &VOLUME_IMPERIAL,
    &TEMPERATURE_METRIC,
    &TEMPERATURE_US,
    &TIME_UNIVERSAL,
    &COLOR_SRM,
    &COLOR_EBC,
    &COLOR_LOVIBOND,
    &DENSITY_SG,
    &DENSITY_PLATO,
    &DENSITY_BRIX,
    &DIASTATIC_POWER_LINTNER,
    &DIASTATIC_POWER_WK,
    &ACIDITY_PH,
    &BITTERNESS_IBU,
    &DIMENSIONLESS_PERCENT,
    &CARBONATION_VOLUMES,
    &CARBONATION_MASS_PER_VOLUME,
    &CONCENTRATION_PARTS_PER,
    &CONCENTRATION_MASS_PER_VOLUME,
    &VISCOSITY_METRIC,
    &VISCOSITY_METRIC_ALTERNATE,
    &SPECIFIC_HEAT_CAPACITY_CALORIES,
    &SPECIFIC_HEAT_CAPACITY_JOULES,
    &SPECIFIC_HEAT_CAPACITY_BTUS,
    &SPECIFIC_VOLUME_METRIC,
    &SPECIFIC_VOLUME_US,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::ptr;

    #[test]
    fn test_round_trip_every_unit() {
        for unit in ALL_UNITS {
            for x in [0.0, 0.001, 0.5, 1.0, 3.7, 42.0, 1234.5] {
                let canonical = unit.to_canonical(x).quantity;
                let back = unit.from_canonical(canonical);
                let tolerance = 1e-9 * x.abs().max(1.0);
                assert!((back - x).abs() <= tolerance, "{} round trip of {x} gave {back}", unit.name());
            }
        }
    }

    #[test]
    fn test_exactly_one_canonical_per_quantity() {
        let mut counts: HashMap<PhysicalQuantity, usize> = HashMap::new();
        for unit in ALL_UNITS {
            if ptr::eq(unit.canonical(), *unit) {
                *counts.entry(unit.physical_quantity()).or_default() += 1;
            }
        }
        for unit in ALL_UNITS {
            assert_eq!(counts.get(&unit.physical_quantity()), Some(&1), "{}", unit.physical_quantity());
            assert_eq!(unit.is_canonical(), ptr::eq(unit.canonical(), *unit), "{}", unit.name());
        }
    }

    #[test]
    fn test_canonical_is_in_same_quantity() {
        for unit in ALL_UNITS {
            assert_eq!(unit.canonical().physical_quantity(), unit.physical_quantity(), "{}", unit.name());
        }
    }

    #[test]
    fn test_system_membership_consistent() {
        for system in ALL_UNIT_SYSTEMS {
            for unit in system.units() {
                assert!(ptr::eq(unit.system(), *system), "{} not owned by {}", unit.name(), system.name());
                assert!(ALL_UNITS.iter().any(|u| ptr::eq(*u, *unit)), "{} not registered", unit.name());
            }
            for (_, unit) in system.scales() {
                assert!(system.units().iter().any(|u| ptr::eq(*u, *unit)));
            }
            assert!(system.units().iter().any(|u| ptr::eq(*u, system.unit())));
        }
        for unit in ALL_UNITS {
            assert!(unit.system().units().iter().any(|u| ptr::eq(*u, *unit)), "{} missing from system", unit.name());
        }
    }

    #[test]
    fn test_scales_ascending() {
        for system in ALL_UNIT_SYSTEMS {
            let scales = system.scales();
            for pair in scales.windows(2) {
                assert!(pair[0].0 < pair[1].0, "{}", system.name());
                assert!(pair[0].1.to_canonical(1.0).quantity < pair[1].1.to_canonical(1.0).quantity);
            }
        }
    }

    #[test]
    fn test_unit_system_names_unique() {
        let names: HashSet<&str> = ALL_UNIT_SYSTEMS.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), ALL_UNIT_SYSTEMS.len());
    }

    #[test]
    fn test_known_factors() {
        assert!((US_GALLONS.to_canonical(1.0).quantity - 3.7854117840007).abs() < 1e-12);
        assert!((IMPERIAL_GALLONS.to_canonical(1.0).quantity - 4.54609).abs() < 1e-12);
        assert!((FAHRENHEIT.to_canonical(212.0).quantity - 100.0).abs() < 1e-9);
        assert!((EBC.to_canonical(19.7).quantity - 10.0).abs() < 1e-9);
        assert!((WINDISCH_KOLBACH.from_canonical(100.0) - 334.0).abs() < 1e-9);
        assert!((HOURS.to_canonical(1.5).quantity - 90.0).abs() < 1e-9);
        assert!((SECONDS.to_canonical(90.0).quantity - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_plato() {
        let sg = PLATO.to_canonical(12.0).quantity;
        assert!((sg - 1.0484).abs() < 1e-3, "12 °P should be about 1.048, got {sg}");
        assert!((PLATO.from_canonical(sg) - 12.0).abs() < 1e-9);
        assert!(PLATO.to_canonical(0.0).quantity == 1.0);
    }

    #[test]
    fn test_specific_volume() {
        let l_per_kg = US_QUARTS_PER_POUND.to_canonical(1.25).quantity;
        assert!((l_per_kg - 2.608).abs() < 1e-3);
        assert!((LITERS_PER_GRAM.to_canonical(0.003).quantity - 3.0).abs() < 1e-12);
    }
}
