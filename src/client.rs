//! High-level client — `DovizClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods. The client holds no query
//! state of its own; selection and results live in app-owned
//! [`HistoricalView`](crate::domain::rate_history::HistoricalView) instances.

use crate::domain::currency::client::Currencies;
use crate::domain::rate_history::client::RateHistoryClient;
use crate::domain::rates::client::Rates;
use crate::error::SdkError;
use crate::http::DovizHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::currency::client::Currencies as CurrenciesClient;
pub use crate::domain::rate_history::client::RateHistoryClient as RateHistorySubClient;
pub use crate::domain::rates::client::Rates as RatesClient;

/// Default request timeout (native targets).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the Doviz SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.currencies()`, `client.rate_history()`, `client.rates()`.
#[derive(Clone)]
pub struct DovizClient {
    pub(crate) http: DovizHttp,
}

impl DovizClient {
    pub fn builder() -> DovizClientBuilder {
        DovizClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn currencies(&self) -> Currencies<'_> {
        Currencies { client: self }
    }

    pub fn rate_history(&self) -> RateHistoryClient<'_> {
        RateHistoryClient { client: self }
    }

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DovizClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DovizClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DovizClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Ignored on `wasm32`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DovizClient, SdkError> {
        Ok(DovizClient {
            http: DovizHttp::new(&self.base_url, self.timeout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = DovizClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let client = DovizClient::builder()
            .base_url("http://rates.internal:9000/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://rates.internal:9000");
    }
}
