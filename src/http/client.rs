//! Low-level HTTP client — `DovizHttp`.
//!
//! One method per API endpoint. Every response is unwrapped through the shared envelope
//! decoder and returned as a wire type (conversion to domain types happens in the
//! sub-clients). A request is sent exactly once: no retries, no caching.

use crate::domain::currency::wire::CurrencyListResponse;
use crate::domain::rate_history::wire::RateRangeResponse;
use crate::domain::rate_history::RangeQuery;
use crate::domain::rates::wire::{CurrencyRatesResponse, ExchangeRateResponse};
use crate::error::{HttpError, SdkError};
use crate::network::API_PREFIX;
use crate::shared::{envelope, format_date, CurrencyCode};

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const CURRENCIES_FALLBACK: &str = "Could not fetch currencies";
const RANGE_FALLBACK: &str = "Failed to fetch historical data";
const RATES_FALLBACK: &str = "Could not fetch exchange rates";
const PAIR_FALLBACK: &str = "Could not fetch exchange rate";
const CRYPTO_FALLBACK: &str = "Could not fetch crypto rates";
const HEALTH_FALLBACK: &str = "Service unavailable";

/// Low-level HTTP client for the Doviz REST API.
#[derive(Clone)]
pub struct DovizHttp {
    base_url: String,
    client: Client,
}

impl DovizHttp {
    /// `timeout` applies to native targets only; in the browser `fetch` owns timeouts.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);
        #[cfg(target_arch = "wasm32")]
        let builder = {
            let _ = timeout;
            Client::builder()
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Currencies ───────────────────────────────────────────────────────

    pub async fn get_currencies(&self) -> Result<CurrencyListResponse, SdkError> {
        let url = format!("{}{}/currencies", self.base_url, API_PREFIX);
        self.get(&url, CURRENCIES_FALLBACK).await
    }

    // ── Rate history ─────────────────────────────────────────────────────

    pub async fn get_rate_range(&self, query: &RangeQuery) -> Result<RateRangeResponse, SdkError> {
        let url = format!("{}{}", self.base_url, query.path());
        self.get(&url, RANGE_FALLBACK).await
    }

    // ── Spot rates ───────────────────────────────────────────────────────

    pub async fn get_rates(
        &self,
        base: &CurrencyCode,
        targets: &[CurrencyCode],
    ) -> Result<CurrencyRatesResponse, SdkError> {
        let url = with_targets(
            format!(
                "{}{}/rates/{}",
                self.base_url,
                API_PREFIX,
                urlencoding::encode(base.as_str())
            ),
            targets,
        );
        self.get(&url, RATES_FALLBACK).await
    }

    pub async fn get_minified_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<CurrencyRatesResponse, SdkError> {
        let url = format!(
            "{}{}/rates/{}/min",
            self.base_url,
            API_PREFIX,
            urlencoding::encode(base.as_str())
        );
        self.get(&url, RATES_FALLBACK).await
    }

    pub async fn get_rates_on_date(
        &self,
        base: &CurrencyCode,
        date: &NaiveDate,
    ) -> Result<CurrencyRatesResponse, SdkError> {
        let url = format!(
            "{}{}/rates/{}/{}",
            self.base_url,
            API_PREFIX,
            urlencoding::encode(base.as_str()),
            format_date(date)
        );
        self.get(&url, RATES_FALLBACK).await
    }

    pub async fn get_pair_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<ExchangeRateResponse, SdkError> {
        let url = format!(
            "{}{}/rate?from={}&to={}",
            self.base_url,
            API_PREFIX,
            urlencoding::encode(from.as_str()),
            urlencoding::encode(to.as_str())
        );
        self.get(&url, PAIR_FALLBACK).await
    }

    pub async fn get_crypto_rates(
        &self,
        base: &CurrencyCode,
        targets: &[CurrencyCode],
    ) -> Result<CurrencyRatesResponse, SdkError> {
        let url = with_targets(
            format!(
                "{}{}/crypto/{}",
                self.base_url,
                API_PREFIX,
                urlencoding::encode(base.as_str())
            ),
            targets,
        );
        self.get(&url, CRYPTO_FALLBACK).await
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn health(&self) -> Result<String, SdkError> {
        let url = format!("{}{}/health", self.base_url, API_PREFIX);
        self.get(&url, HEALTH_FALLBACK).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, fallback: &str) -> Result<T, SdkError> {
        let body = self.get_text(url).await?;
        envelope::decode(&body, fallback)
    }

    async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!(url = %url, "GET");

        let resp = self.client.get(url).send().await.map_err(transport_error)?;
        let status = resp.status();

        if status.is_success() {
            return resp.text().await.map_err(transport_error);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

/// Append `?targets=a,b` when a target filter is given.
fn with_targets(url: String, targets: &[CurrencyCode]) -> String {
    if targets.is_empty() {
        return url;
    }
    let joined = targets
        .iter()
        .map(|t| urlencoding::encode(t.as_str()).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}?targets={}", url, joined)
}
