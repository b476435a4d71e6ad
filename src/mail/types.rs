//! Backend record types.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// A stored email as reported by the backend.
///
/// The backend is loose about shapes: `id` and `created_at` may arrive as
/// JSON strings or numbers, and `cc`/`bcc`/`created_at` may be null or
/// missing. Deserialization normalizes all of that so downstream consumers
/// never branch on optionality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub to: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub cc: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub bcc: String,
    pub subject: String,
    pub body: String,
    #[serde(default = "now_rfc3339", deserialize_with = "timestamp_or_now")]
    pub created_at: String,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into_string())
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn timestamp_or_now<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_string)
        .unwrap_or_else(now_rfc3339))
}
