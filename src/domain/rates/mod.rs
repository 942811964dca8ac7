//! Spot rates domain — rate cards by base currency, single-pair lookups, crypto rates.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::fmt::{self, RATE_DECIMALS};
use crate::shared::CurrencyCode;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use convert::RatesDecodeError;

/// Every rate quoted against one base currency on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub base: CurrencyCode,
    pub date: Option<NaiveDate>,
    pub rates: BTreeMap<CurrencyCode, f64>,
}

impl CurrencyRates {
    pub fn rate(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates.get(target).copied()
    }

    /// Card text for `target` with a fixed number of decimals.
    pub fn formatted(&self, target: &CurrencyCode, decimals: usize) -> Option<String> {
        self.rate(target).map(|r| fmt::fixed(r, decimals))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// A single pair conversion factor as quoted by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: Decimal,
    pub date: Option<NaiveDate>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ExchangeRate {
    /// `"1 USD = 18.5000 TRY"`.
    pub fn summary(&self) -> String {
        format!(
            "1 {} = {:.prec$} {}",
            self.base.display_upper(),
            self.rate.round_dp(RATE_DECIMALS as u32),
            self.target.display_upper(),
            prec = RATE_DECIMALS
        )
    }
}
