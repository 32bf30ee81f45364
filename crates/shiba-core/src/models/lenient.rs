//! Tolerant field deserializers for hand-authored catalog data.
//!
//! Catalog records are written by hand, so scalar fields show up as strings,
//! numbers or `null` depending on who typed them. These helpers fold those
//! variants into the typed model instead of failing the whole load.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use super::{SubstitutionCandidate, Target};

/// Reads any scalar as text. `null` and absent values become `""`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

/// Reads a week number written either as an integer or a numeric string.
pub(crate) fn week<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("week must be an integer, got {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("week must be an integer, got '{s}'"))),
        Some(other) => Err(D::Error::custom(format!(
            "week must be an integer, got {other}"
        ))),
    }
}

/// Reads a prescription target that may be a number or free text.
pub(crate) fn target<'de, D>(deserializer: D) -> Result<Target, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Target::default(),
        Some(Value::Number(n)) => Target::Number(n),
        Some(Value::String(s)) => Target::Text(s),
        Some(other) => Target::Text(other.to_string()),
    })
}

/// Reads a substitution list, skipping entries that are not objects.
pub(crate) fn candidates<'de, D>(deserializer: D) -> Result<Vec<SubstitutionCandidate>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };

    entries
        .into_iter()
        .filter(Value::is_object)
        .map(|entry| serde_json::from_value(entry).map_err(D::Error::custom))
        .collect()
}
