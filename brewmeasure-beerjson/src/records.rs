//! Measurable parts of BeerJSON ingredient and mash records
//!
//! Every amount is held in the canonical unit of its quantity. Only the
//! members that carry a unit are modelled here.

use brewmeasure_units::Amount;

use crate::field::{FieldDescriptor, FieldKind};
use crate::mapping::{
    ACIDITY, COLOR, CONCENTRATION, DIASTATIC_POWER, GRAVITY, MASS_OR_VOLUME, PERCENT, SPECIFIC_VOLUME,
    TEMPERATURE, TIME, VOLUME,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fermentable {
    pub amount: Option<Amount>,
    pub color: Option<Amount>,
    pub potential: Option<Amount>,
    pub diastatic_power: Option<Amount>,
    pub moisture: Option<Amount>,
    pub protein: Option<Amount>,
}

pub static FERMENTABLE_FIELDS: [FieldDescriptor<Fermentable>; 6] = [
    FieldDescriptor {
        name: "amount",
        kind: FieldKind::MeasurableList(&MASS_OR_VOLUME),
        get: |f| f.amount,
        set: |f, v| f.amount = Some(v),
    },
    FieldDescriptor {
        name: "color",
        kind: FieldKind::Measurable(&COLOR),
        get: |f| f.color,
        set: |f, v| f.color = Some(v),
    },
    FieldDescriptor {
        name: "potential",
        kind: FieldKind::Measurable(&GRAVITY),
        get: |f| f.potential,
        set: |f, v| f.potential = Some(v),
    },
    FieldDescriptor {
        name: "diastatic_power",
        kind: FieldKind::Measurable(&DIASTATIC_POWER),
        get: |f| f.diastatic_power,
        set: |f, v| f.diastatic_power = Some(v),
    },
    FieldDescriptor {
        name: "moisture",
        kind: FieldKind::SingleUnit(&PERCENT),
        get: |f| f.moisture,
        set: |f, v| f.moisture = Some(v),
    },
    FieldDescriptor {
        name: "protein",
        kind: FieldKind::SingleUnit(&PERCENT),
        get: |f| f.protein,
        set: |f, v| f.protein = Some(v),
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hop {
    pub amount: Option<Amount>,
    pub alpha_acid: Option<Amount>,
    pub beta_acid: Option<Amount>,
    pub time: Option<Amount>,
}

pub static HOP_FIELDS: [FieldDescriptor<Hop>; 4] = [
    FieldDescriptor {
        name: "amount",
        kind: FieldKind::MeasurableList(&MASS_OR_VOLUME),
        get: |h| h.amount,
        set: |h, v| h.amount = Some(v),
    },
    FieldDescriptor {
        name: "alpha_acid",
        kind: FieldKind::SingleUnit(&PERCENT),
        get: |h| h.alpha_acid,
        set: |h, v| h.alpha_acid = Some(v),
    },
    FieldDescriptor {
        name: "beta_acid",
        kind: FieldKind::SingleUnit(&PERCENT),
        get: |h| h.beta_acid,
        set: |h, v| h.beta_acid = Some(v),
    },
    FieldDescriptor {
        name: "time",
        kind: FieldKind::Measurable(&TIME),
        get: |h| h.time,
        set: |h, v| h.time = Some(v),
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MashStep {
    pub amount: Option<Amount>,
    pub step_temperature: Option<Amount>,
    pub step_time: Option<Amount>,
    pub ramp_time: Option<Amount>,
    pub water_grain_ratio: Option<Amount>,
    pub start_ph: Option<Amount>,
    pub end_ph: Option<Amount>,
}

pub static MASH_STEP_FIELDS: [FieldDescriptor<MashStep>; 7] = [
    FieldDescriptor {
        name: "amount",
        kind: FieldKind::Measurable(&VOLUME),
        get: |s| s.amount,
        set: |s, v| s.amount = Some(v),
    },
    FieldDescriptor {
        name: "step_temperature",
        kind: FieldKind::Measurable(&TEMPERATURE),
        get: |s| s.step_temperature,
        set: |s, v| s.step_temperature = Some(v),
    },
    FieldDescriptor {
        name: "step_time",
        kind: FieldKind::Measurable(&TIME),
        get: |s| s.step_time,
        set: |s, v| s.step_time = Some(v),
    },
    FieldDescriptor {
        name: "ramp_time",
        kind: FieldKind::Measurable(&TIME),
        get: |s| s.ramp_time,
        set: |s, v| s.ramp_time = Some(v),
    },
    FieldDescriptor {
        name: "water_grain_ratio",
        kind: FieldKind::Measurable(&SPECIFIC_VOLUME),
        get: |s| s.water_grain_ratio,
        set: |s, v| s.water_grain_ratio = Some(v),
    },
    FieldDescriptor {
        name: "start_ph",
        kind: FieldKind::SingleUnit(&ACIDITY),
        get: |s| s.start_ph,
        set: |s, v| s.start_ph = Some(v),
    },
    FieldDescriptor {
        name: "end_ph",
        kind: FieldKind::SingleUnit(&ACIDITY),
        get: |s| s.end_ph,
        set: |s, v| s.end_ph = Some(v),
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Water {
    pub calcium: Option<Amount>,
    pub bicarbonate: Option<Amount>,
    pub sulfate: Option<Amount>,
    pub chloride: Option<Amount>,
    pub sodium: Option<Amount>,
    pub magnesium: Option<Amount>,
    pub ph: Option<Amount>,
}

pub static WATER_FIELDS: [FieldDescriptor<Water>; 7] = [
    FieldDescriptor {
        name: "calcium",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.calcium,
        set: |w, v| w.calcium = Some(v),
    },
    FieldDescriptor {
        name: "bicarbonate",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.bicarbonate,
        set: |w, v| w.bicarbonate = Some(v),
    },
    FieldDescriptor {
        name: "sulfate",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.sulfate,
        set: |w, v| w.sulfate = Some(v),
    },
    FieldDescriptor {
        name: "chloride",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.chloride,
        set: |w, v| w.chloride = Some(v),
    },
    FieldDescriptor {
        name: "sodium",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.sodium,
        set: |w, v| w.sodium = Some(v),
    },
    FieldDescriptor {
        name: "magnesium",
        kind: FieldKind::Measurable(&CONCENTRATION),
        get: |w| w.magnesium,
        set: |w, v| w.magnesium = Some(v),
    },
    FieldDescriptor {
        name: "pH",
        kind: FieldKind::SingleUnit(&ACIDITY),
        get: |w| w.ph,
        set: |w, v| w.ph = Some(v),
    },
];
