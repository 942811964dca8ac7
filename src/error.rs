//! Unified SDK error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level SDK error.
///
/// Every variant is terminal for the query attempt that produced it; nothing in the SDK
/// retries.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Currency catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Network failure: {0}")]
    Network(#[from] HttpError),

    #[error("{0}")]
    ServiceRejected(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl SdkError {
    pub fn is_network(&self) -> bool {
        matches!(self, SdkError::Network(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SdkError::ServiceRejected(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, SdkError::Malformed(_))
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Malformed(e.to_string())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Input rejected before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Currency code is empty")]
    EmptyCurrencyCode,

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_rejected_displays_server_message_verbatim() {
        let err = SdkError::ServiceRejected("no data".to_string());
        assert_eq!(err.to_string(), "no data");
        assert!(err.is_rejected());
        assert!(!err.is_network());
    }

    #[test]
    fn test_json_error_maps_to_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SdkError = json_err.into();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_invalid_range_message_names_both_dates() {
        let err = ValidationError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Start date 2023-02-01 is after end date 2023-01-01"
        );
    }
}
