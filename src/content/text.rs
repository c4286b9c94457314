//! Lenient scalar fields in content JSON.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserializes a string or a number into its text form.
///
/// Authors write fields like `releaseYear` and track `sequence` both as
/// `"1998"` and `1998`.
pub(super) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    })
}

/// Parses leading decimal digits, ignoring surrounding whitespace.
///
/// Returns 0 when the text does not start with a digit.
pub(super) fn leading_number(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
