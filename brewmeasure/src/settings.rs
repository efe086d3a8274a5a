//! Persisted display preferences
//!
//! The facade never touches files itself. It reads and writes string keys
//! through a [`SettingsStore`]; [`MemorySettings`] is the in-process store
//! and can be saved as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use brewmeasure_units::PhysicalQuantity;

/// Key/value preference storage
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings held in memory, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySettings {
    values: BTreeMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Key holding the display unit system name for `quantity`
pub fn display_system_key(quantity: PhysicalQuantity) -> String {
    format!("unit_system/{}", quantity.key())
}

pub(crate) fn forced_system_key(section: &str, field: &str) -> String {
    format!("{section}/{field}/system_of_measurement")
}

pub(crate) fn forced_scale_key(section: &str, field: &str) -> String {
    format!("{section}/{field}/relative_scale")
}
