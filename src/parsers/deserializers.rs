use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::Instant;

/// Custom deserializer for instants that accepts both integers (ms) and timestamp strings
pub fn deserialize_instant<'de, D>(deserializer: D) -> Result<Instant, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            // Unix timestamp in milliseconds
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            Instant::from_millis(ms).map_err(Error::custom)
        }
        Value::String(s) => s.parse::<Instant>().map_err(Error::custom),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Deserializes a duration given in whole milliseconds
pub fn deserialize_millis<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::custom(format!("milliseconds must be a non-negative integer: {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::custom(format!("invalid milliseconds '{}': {}", s, e))),
        _ => Err(Error::custom("milliseconds must be a number or string")),
    }
}
