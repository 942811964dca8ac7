//! # Doviz SDK
//!
//! A Rust SDK for the Doviz exchange-rate service: currency catalog, historical rate
//! ranges turned into chart-ready series, and spot rate lookups. Supports both native
//! and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, query building, series decoding, chart shaping, view state
//!    (always available, WASM-safe)
//! 2. **HTTP API** — `DovizHttp`, one method per endpoint, envelope decoding
//! 3. **High-Level Client** — `DovizClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use doviz_sdk::prelude::*;
//!
//! let client = DovizClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let view = async_lock::Mutex::new(HistoricalView::new(today));
//! view.lock().await.apply_catalog(client.currencies().load().await);
//! client.rate_history().refresh(&view).await?;
//!
//! if let Some(config) = view.lock().await.config() {
//!     println!("{}", serde_json::to_string(config)?);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DovizClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CurrencyCode;

    // Domain types — currency
    pub use crate::domain::currency::{Currency, CurrencyCatalog};

    // Domain types — rate history
    pub use crate::domain::rate_history::{
        build_query, DateInterval, RangeQuery, RateSample, RateSeries,
    };

    // Domain types — chart
    pub use crate::domain::chart::{build_chart_config, to_chart_series, ChartConfig, ChartSeries};

    // Domain types — spot rates
    pub use crate::domain::rates::{CurrencyRates, ExchangeRate};

    // Errors
    pub use crate::error::{HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::{API_PREFIX, DEFAULT_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CurrenciesClient, DovizClient, DovizClientBuilder, RateHistorySubClient, RatesClient,
    };

    // State containers
    pub use crate::domain::rate_history::{HistoricalView, RequestId, ViewStatus};
}
