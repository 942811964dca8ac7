//! Custom serde helpers for backend wire formats.

use serde::Deserialize;

/// A rate as the backend sends it: a JSON number or a numeric string (`"18.50"`).
///
/// Parsing to `f64` is left to the conversion layer so a bad entry can be reported
/// with its position instead of as an opaque serde error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            RateValue::Number(n) => *n,
            RateValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Deserializes an optional Unix-millis `i64` into `DateTime<Utc>`.
///
/// Response envelopes and exchange-rate records carry `timestamp` as epoch
/// milliseconds, not ISO 8601 strings.
pub mod timestamp_ms_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(None),
            Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
        }
    }
}
