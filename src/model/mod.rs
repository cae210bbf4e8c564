pub mod attendance;
pub mod calendar;
pub mod leave_request;

/// Display value for a missing employee name
pub const UNKNOWN: &str = "Unknown";
/// Display value for any other missing field
pub const PLACEHOLDER: &str = "—";

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Accepts a JSON string or number and carries it as a string.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string or number identifier, got {other}"
        ))),
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
