use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts an identifier sent either as a JSON string or as a JSON number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected a string or number id, found {other}"))),
    }
}
