//! Serde helpers for item data supplied by the hosting page

use serde::{Deserialize, Deserializer};

/// Deserialize an identifier given either as a string or as a number
///
/// Pages declare ids as `"1"` or `1` interchangeably; both end up as `"1"`.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
        RawId::Float(f) => f.to_string(),
    })
}
