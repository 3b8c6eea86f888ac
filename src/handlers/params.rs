use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Treat `?field=` the same as an absent field.
///
/// Form-style clients send every input, filled or not; blank values are
/// wildcards rather than parse errors.
pub fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(de)? {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<T>().map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}
