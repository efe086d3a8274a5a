//! Free-text amount parsing - "5 lb", "2,5 gal", "12"
//!
//! Numbers follow the caller's [`Locale`]; the unit suffix, if any, is
//! whatever text follows the number.

use std::ptr;
use std::str::FromStr;

use brewmeasure_core::{Locale, MeasureError, DEFAULT_PRECISION};
use tracing::debug;

use crate::{Unit, UnitSystem, UNITS};

/// Split `text` into its number and the trimmed unit suffix (possibly empty)
pub fn split_amount<'a>(text: &'a str, locale: &Locale) -> Result<(f64, &'a str), MeasureError> {
    locale.parse_prefix::<f64>(text)
}

/// Parse the leading number of `text`, ignoring any unit suffix.
///
/// Callers that want zero on failure use `unwrap_or_default()`.
pub fn extract_raw_from_string<T: FromStr>(text: &str, locale: &Locale) -> Result<T, MeasureError> {
    locale.parse_prefix::<T>(text).map(|(value, _)| value)
}

/// Convert `"<number> <unit>"` to the unit called `to_unit_name` without
/// knowing the physical quantity up front.
///
/// Both names may match units of several quantities. Candidates owned by a
/// system in `preferred` are tried first and the first pair sharing a
/// quantity is used. Without such a pair the result is the original number
/// followed by `?`.
pub fn convert_without_context(
    text: &str,
    to_unit_name: &str,
    locale: &Locale,
    preferred: &[&UnitSystem],
) -> String {
    let (value, from_name) = match split_amount(text, locale) {
        Ok(parts) => parts,
        Err(err) => {
            debug!(text, error = %err, "no number to convert");
            (0.0, "")
        }
    };

    let rank = |unit: &&'static Unit| !preferred.iter().any(|system| ptr::eq(unit.system(), *system));
    let mut from_units = UNITS.get_units(from_name, true);
    let mut to_units = UNITS.get_units(to_unit_name, true);
    from_units.sort_by_key(rank);
    to_units.sort_by_key(rank);

    for from in &from_units {
        let target = to_units
            .iter()
            .find(|to| to.physical_quantity() == from.physical_quantity());
        if let Some(to) = target {
            let converted = to.from_canonical(from.to_canonical(value).quantity);
            return format!("{} {}", locale.format_fixed(converted, DEFAULT_PRECISION), to.name());
        }
    }

    format!("{} ?", locale.format_fixed(value, DEFAULT_PRECISION))
}
