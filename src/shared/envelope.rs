//! The `{success, message, data, timestamp}` envelope every endpoint responds with.
//!
//! Decoding is schema-checked: anything that is not a well-formed envelope, or a
//! successful envelope whose `data` does not match the expected shape, becomes
//! [`SdkError::Malformed`]. A `success: false` envelope becomes
//! [`SdkError::ServiceRejected`] carrying the server message.

use crate::error::SdkError;
use crate::shared::serde_util::timestamp_ms_opt;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Raw response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "timestamp_ms_opt::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ApiEnvelope {
    /// Unwrap the payload, or the rejection message (`fallback` when the server sent none).
    pub fn into_data<T: DeserializeOwned>(self, fallback: &str) -> Result<T, SdkError> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::warn!(message = %message, "Service rejected request");
            return Err(SdkError::ServiceRejected(message));
        }

        match self.data {
            None | Some(serde_json::Value::Null) => {
                Err(SdkError::Malformed("missing data payload".to_string()))
            }
            Some(data) => serde_json::from_value(data).map_err(|e| {
                tracing::warn!(error = %e, "Response payload does not match schema");
                SdkError::Malformed(e.to_string())
            }),
        }
    }
}

/// Decode a response body into `T` through the envelope.
pub fn decode<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, SdkError> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;
    envelope.into_data(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_decode_success_payload() {
        let body = r#"{"success":true,"message":"Success","data":{"USD":"US Dollar"},"timestamp":1700000000000}"#;
        let data: BTreeMap<String, String> = decode(body, "fallback").unwrap();
        assert_eq!(data.get("USD").map(String::as_str), Some("US Dollar"));
    }

    #[test]
    fn test_rejection_carries_server_message() {
        let body = r#"{"success":false,"message":"no data"}"#;
        let err = decode::<serde_json::Value>(body, "fallback").unwrap_err();
        assert!(matches!(err, SdkError::ServiceRejected(ref m) if m == "no data"));
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let body = r#"{"success":false,"message":""}"#;
        let err = decode::<serde_json::Value>(body, "Failed to fetch historical data").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch historical data");

        let body = r#"{"success":false}"#;
        let err = decode::<serde_json::Value>(body, "fallback").unwrap_err();
        assert_eq!(err.to_string(), "fallback");
    }

    #[test]
    fn test_success_without_data_is_malformed() {
        let body = r#"{"success":true,"data":null}"#;
        assert!(decode::<Vec<u8>>(body, "f").unwrap_err().is_malformed());
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let body = r#"{"success":true,"data":{"not":"a list"}}"#;
        assert!(decode::<Vec<u8>>(body, "f").unwrap_err().is_malformed());

        assert!(decode::<Vec<u8>>("<html>", "f").unwrap_err().is_malformed());
        assert!(decode::<Vec<u8>>(r#"{"data":[]}"#, "f").unwrap_err().is_malformed());
    }
}
