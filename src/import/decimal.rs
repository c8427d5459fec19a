//! Lenient numeric cells: `" 12,5 "`, `"0.70%"`, `"216 907,00"` and blanks.

use std::num::ParseFloatError;

use serde::{Deserialize, Deserializer, de::Error as _};

/// Strips whitespace (including non-breaking and thin spaces used as
/// thousands separators) and a trailing `%`, and turns a decimal comma into a
/// point. `None` for a blank cell.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

pub fn parse_f64(raw: &str) -> Result<Option<f64>, ParseFloatError> {
    normalize(raw).map(|value| value.parse()).transpose()
}

/// Integer cells sometimes come out of spreadsheets as `"12.0"`.
pub fn parse_i32(raw: &str) -> Result<Option<i32>, String> {
    let Some(value) = normalize(raw) else {
        return Ok(None);
    };
    if let Ok(whole) = value.parse::<i32>() {
        return Ok(Some(whole));
    }
    match value.parse::<f64>() {
        Ok(number) if number.fract() == 0.0 && number.abs() <= f64::from(i32::MAX) => {
            Ok(Some(number as i32))
        }
        _ => Err(format!("`{raw}` is not a whole number")),
    }
}

pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    parse_f64(&raw).map_err(|err| D::Error::custom(format!("`{raw}` is not a number: {err}")))
}

pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    parse_i32(&raw).map_err(D::Error::custom)
}
