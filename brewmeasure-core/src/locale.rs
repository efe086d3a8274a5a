//! Locale-aware number parsing and formatting
//!
//! Amounts typed by users look like `1,234.5 kg` in one locale and
//! `1.234,5 kg` in another. A [`Locale`] carries the two characters that
//! differ and knows how to split a leading number off a unit suffix.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MeasureError;

const NARROW_NO_BREAK_SPACE: char = '\u{202f}';
const NO_BREAK_SPACE: char = '\u{a0}';

/// Decimal point and digit-group separator used for display and parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub decimal_point: char,
    pub group_separator: char,
}

impl Locale {
    pub const fn new(decimal_point: char, group_separator: char) -> Self {
        Self { decimal_point, group_separator }
    }

    /// `1,234.5`
    pub const fn english() -> Self {
        Self::new('.', ',')
    }

    /// `1.234,5`
    pub const fn german() -> Self {
        Self::new(',', '.')
    }

    /// `1 234,5` (narrow no-break space)
    pub const fn french() -> Self {
        Self::new(',', NARROW_NO_BREAK_SPACE)
    }

    /// `1'234.5`
    pub const fn swiss() -> Self {
        Self::new('.', '\'')
    }

    /// Any space stands in for a space-like separator; users rarely type
    /// the no-break variants
    fn is_group_separator(&self, c: char) -> bool {
        c == self.group_separator || (is_space_like(self.group_separator) && is_space_like(c))
    }

    /// Format `value` with exactly `precision` decimals and grouped thousands.
    ///
    /// Non-finite values are returned as Rust prints them; callers that need
    /// a placeholder handle NaN themselves.
    pub fn format_fixed(&self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let digits = format!("{:.*}", precision, value.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);

        // "-0.000" reads as a bug to users
        let rounds_to_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
        if value.is_sign_negative() && !rounds_to_zero {
            out.push('-');
        }

        let len = int_part.len();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(c);
        }

        if let Some(frac) = frac_part {
            out.push(self.decimal_point);
            out.push_str(frac);
        }
        out
    }

    /// Split `text` into its leading number (as written) and the trimmed
    /// remainder.
    ///
    /// Accepts an optional sign, digits, one decimal point, group
    /// separators between digits, and an exponent. The remainder is whatever
    /// follows, typically a unit name, and may be empty.
    ///
    /// A group separator must be followed by exactly three digits. German
    /// `"2.5"` or English `"1,5"` is an error, not 25 or 15.
    pub fn split_number<'a>(&self, text: &'a str) -> Result<(&'a str, &'a str), MeasureError> {
        let text = text.trim();
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let digit_at = |j: usize| chars.get(j).is_some_and(|&(_, c)| c.is_ascii_digit());

        let mut i = 0;
        if chars.first().is_some_and(|&(_, c)| c == '-' || c == '+') {
            i = 1;
        }

        let mut seen_digit = false;
        let mut seen_decimal = false;
        while let Some(&(_, c)) = chars.get(i) {
            if c.is_ascii_digit() {
                seen_digit = true;
                i += 1;
            } else if c == self.decimal_point && !seen_decimal {
                seen_decimal = true;
                i += 1;
            } else if self.is_group_separator(c) && seen_digit && !seen_decimal && digit_at(i + 1) {
                let three_digits = digit_at(i + 2) && digit_at(i + 3) && !digit_at(i + 4);
                if !three_digits {
                    return Err(MeasureError::parse(text));
                }
                i += 1;
            } else if (c == 'e' || c == 'E') && seen_digit {
                // Only an exponent when digits follow; "5ebc" is 5 EBC
                let mut j = i + 1;
                if chars.get(j).is_some_and(|&(_, s)| s == '+' || s == '-') {
                    j += 1;
                }
                if digit_at(j) {
                    i = j;
                    while digit_at(i) {
                        i += 1;
                    }
                }
                break;
            } else {
                break;
            }
        }

        if !seen_digit {
            return Err(MeasureError::parse(text));
        }

        let end = chars.get(i).map_or(text.len(), |&(pos, _)| pos);
        Ok((&text[..end], text[end..].trim()))
    }

    /// Parse the leading number of `text`, returning it with the remainder.
    pub fn parse_prefix<'a, T: FromStr>(&self, text: &'a str) -> Result<(T, &'a str), MeasureError> {
        let (number, rest) = self.split_number(text)?;
        let normalized = self.normalize(number);
        let value = normalized
            .parse::<T>()
            .map_err(|_| MeasureError::parse(number))?;
        Ok((value, rest))
    }

    /// Parse `text` as a bare number; any trailing text is an error.
    pub fn parse_number(&self, text: &str) -> Result<f64, MeasureError> {
        let (value, rest) = self.parse_prefix::<f64>(text)?;
        if !rest.is_empty() {
            return Err(MeasureError::parse(text.trim()));
        }
        Ok(value)
    }

    fn normalize(&self, number: &str) -> String {
        number
            .chars()
            .filter(|&c| !self.is_group_separator(c))
            .map(|c| if c == self.decimal_point { '.' } else { c })
            .collect()
    }
}

fn is_space_like(c: char) -> bool {
    matches!(c, ' ' | NO_BREAK_SPACE | NARROW_NO_BREAK_SPACE)
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_english() {
        let locale = Locale::english();
        assert_eq!(locale.format_fixed(5.0, 3), "5.000");
        assert_eq!(locale.format_fixed(1234.5, 3), "1,234.500");
        assert_eq!(locale.format_fixed(1234567.0, 0), "1,234,567");
        assert_eq!(locale.format_fixed(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_fixed_other_locales() {
        assert_eq!(Locale::german().format_fixed(1234.5, 3), "1.234,500");
        assert_eq!(Locale::swiss().format_fixed(1234.5, 2), "1'234.50");
        assert_eq!(Locale::french().format_fixed(1234.5, 1), "1\u{202f}234,5");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(Locale::english().format_fixed(-0.0001, 3), "0.000");
    }

    #[test]
    fn test_split_number() {
        let locale = Locale::english();
        assert_eq!(locale.split_number("5 lb").unwrap(), ("5", "lb"));
        assert_eq!(locale.split_number("  2.5gal ").unwrap(), ("2.5", "gal"));
        assert_eq!(locale.split_number("1,234.5 kg").unwrap(), ("1,234.5", "kg"));
        assert_eq!(locale.split_number("-3").unwrap(), ("-3", ""));
        assert_eq!(locale.split_number("5ebc").unwrap(), ("5", "ebc"));
        assert_eq!(locale.split_number("1.5e3 g").unwrap(), ("1.5e3", "g"));
    }

    #[test]
    fn test_split_number_rejects_text() {
        assert!(Locale::english().split_number("abc").is_err());
        assert!(Locale::english().split_number("").is_err());
        assert!(Locale::english().split_number("- lb").is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let (value, rest) = Locale::english().parse_prefix::<f64>("1,234.5 kg").unwrap();
        assert!((value - 1234.5).abs() < 1e-12);
        assert_eq!(rest, "kg");

        let (value, rest) = Locale::german().parse_prefix::<f64>("2,5 l").unwrap();
        assert!((value - 2.5).abs() < 1e-12);
        assert_eq!(rest, "l");

        let (value, _) = Locale::french().parse_prefix::<f64>("1\u{a0}234,5").unwrap();
        assert!((value - 1234.5).abs() < 1e-12);
    }

    #[test]
    fn test_misplaced_group_separator_is_an_error() {
        assert!(Locale::german().parse_prefix::<f64>("2.5 kg").is_err());
        assert!(Locale::english().parse_prefix::<f64>("1,5").is_err());
        assert!(Locale::english().parse_prefix::<f64>("1,2,3").is_err());
        assert!(Locale::english().parse_prefix::<f64>("1,2345").is_err());
        assert!(Locale::swiss().parse_prefix::<f64>("12'34").is_err());

        let (value, _) = Locale::english().parse_prefix::<f64>("1,234,567.25 g").unwrap();
        assert!((value - 1234567.25).abs() < 1e-9);
        let (value, _) = Locale::german().parse_prefix::<f64>("12.345,5").unwrap();
        assert!((value - 12345.5).abs() < 1e-9);
    }

    #[test]
    fn test_plain_space_groups_in_french() {
        let (value, rest) = Locale::french().parse_prefix::<f64>("1 234,5 g").unwrap();
        assert!((value - 1234.5).abs() < 1e-12);
        assert_eq!(rest, "g");

        // A space before the unit still ends the number
        let (value, rest) = Locale::french().parse_prefix::<f64>("5 kg").unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(rest, "kg");

        // English does not group with spaces
        assert_eq!(Locale::english().split_number("1 234").unwrap(), ("1", "234"));
    }

    #[test]
    fn test_parse_prefix_integer() {
        let (value, rest) = Locale::english().parse_prefix::<i32>("12 min").unwrap();
        assert_eq!(value, 12);
        assert_eq!(rest, "min");

        assert!(Locale::english().parse_prefix::<i32>("1.5 min").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert!((Locale::english().parse_number(" 42.25 ").unwrap() - 42.25).abs() < 1e-12);
        assert!(Locale::english().parse_number("42 kg").is_err());
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::german()).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::german());
    }
}
