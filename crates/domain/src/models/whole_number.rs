//! Integer fields of settings documents.
//!
//! Operators may write whole numbers as `32` or `32.0`; both are accepted.
//! Fractional values are rejected, as are magnitudes above 2^53 - 1 so that
//! every accepted value is exactly representable as a double.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Largest integer a double holds exactly.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// `deserialize_with` target for integer fields.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let number = Number::deserialize(deserializer)?;
    convert(&number)
}

/// `deserialize_with` target for optional integer fields; `null` is `None`.
///
/// Pair it with `#[serde(default)]` so a missing field is `None` too.
pub fn deserialize_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    match Option::<Number>::deserialize(deserializer)? {
        Some(number) => convert(&number).map(Some),
        None => Ok(None),
    }
}

fn convert<T, E>(number: &Number) -> Result<T, E>
where
    T: TryFrom<i64>,
    E: Error,
{
    let whole = match number.as_i64() {
        Some(n) => Some(n),
        None => number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64)
            .map(|f| f as i64),
    };

    match whole {
        Some(n) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) => T::try_from(n)
            .map_err(|_| E::custom(format!("number {} is out of range", number))),
        _ => Err(E::custom(format!(
            "expected a whole number of at most 2^53 - 1 in magnitude, found {}",
            number
        ))),
    }
}
