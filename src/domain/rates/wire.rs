//! Wire types for spot rate responses (REST).

use crate::shared::serde_util::RateValue;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// `data` payload of `/rates/{base}`, `/rates/{base}/{date}` and `/crypto/{base}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyRatesResponse {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<String, RateValue>,
}

/// `data` payload of `/rate?from=..&to=..`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeRateResponse {
    pub base: String,
    pub target: String,
    pub rate: Decimal,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
