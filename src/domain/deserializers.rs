//! Lenient integer fields.
//!
//! The web client submits select values as strings (`"category": "3"`), so
//! integer fields accept both JSON numbers and integer-valued strings.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i32<E: Error>(self) -> Result<i32, E> {
        match self {
            Self::Int(value) => i32::try_from(value).map_err(|_| {
                E::invalid_value(Unexpected::Signed(value), &"a 32-bit integer")
            }),
            Self::Str(value) => value
                .trim()
                .parse::<i32>()
                .map_err(|_| E::invalid_value(Unexpected::Str(&value), &"an integer")),
        }
    }
}

/// Deserialize a required integer given as a number or a numeric string.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i32()
}

/// Deserialize an optional integer given as a number or a numeric string.
///
/// `null` yields `None`; pair with `#[serde(default)]` so an absent key does too.
pub fn optional_int_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i32)
        .transpose()
}
