//! Conversions from wire types to domain types for spot rates.

use super::wire::{CurrencyRatesResponse, ExchangeRateResponse};
use super::{CurrencyRates, ExchangeRate};
use crate::error::{SdkError, ValidationError};
use crate::shared::{parse_date, CurrencyCode};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatesDecodeError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("rate for {0} is not a number")]
    InvalidRate(String),

    #[error("invalid timestamp {0}")]
    InvalidTimestamp(i64),
}

impl From<RatesDecodeError> for SdkError {
    fn from(e: RatesDecodeError) -> Self {
        SdkError::Malformed(e.to_string())
    }
}

fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, RatesDecodeError> {
    Ok(raw.map(parse_date).transpose()?)
}

/// The requested base fills in for a response that omits it.
impl TryFrom<(CurrencyRatesResponse, &CurrencyCode)> for CurrencyRates {
    type Error = RatesDecodeError;

    fn try_from(
        (source, requested_base): (CurrencyRatesResponse, &CurrencyCode),
    ) -> Result<Self, Self::Error> {
        let base = match source.base.as_deref() {
            Some(raw) => CurrencyCode::parse(raw)?,
            None => requested_base.clone(),
        };

        let mut rates = BTreeMap::new();
        for (raw_code, value) in &source.rates {
            let rate = value
                .to_f64()
                .ok_or_else(|| RatesDecodeError::InvalidRate(raw_code.clone()))?;
            rates.insert(CurrencyCode::parse(raw_code)?, rate);
        }

        Ok(CurrencyRates {
            base,
            date: optional_date(source.date.as_deref())?,
            rates,
        })
    }
}

impl TryFrom<ExchangeRateResponse> for ExchangeRate {
    type Error = RatesDecodeError;

    fn try_from(source: ExchangeRateResponse) -> Result<Self, Self::Error> {
        let timestamp = source
            .timestamp
            .map(|ms| {
                DateTime::<Utc>::from_timestamp_millis(ms)
                    .ok_or(RatesDecodeError::InvalidTimestamp(ms))
            })
            .transpose()?;

        Ok(ExchangeRate {
            base: CurrencyCode::parse(&source.base)?,
            target: CurrencyCode::parse(&source.target)?,
            rate: source.rate,
            date: optional_date(source.date.as_deref())?,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_currency_rates_conversion() {
        let wire: CurrencyRatesResponse = serde_json::from_str(
            r#"{"base":"eur","date":"2024-01-02","rates":{"USD":1.09,"try":"32.4"}}"#,
        )
        .unwrap();
        let requested = CurrencyCode::parse("eur").unwrap();
        let rates = CurrencyRates::try_from((wire, &requested)).unwrap();

        assert_eq!(rates.base.as_str(), "eur");
        assert_eq!(rates.date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(rates.rate(&CurrencyCode::parse("usd").unwrap()), Some(1.09));
        assert_eq!(rates.rate(&CurrencyCode::parse("TRY").unwrap()), Some(32.4));
    }

    #[test]
    fn test_missing_base_falls_back_to_requested() {
        let wire: CurrencyRatesResponse = serde_json::from_str(r#"{"rates":{}}"#).unwrap();
        let requested = CurrencyCode::parse("btc").unwrap();
        let rates = CurrencyRates::try_from((wire, &requested)).unwrap();
        assert_eq!(rates.base, requested);
        assert!(rates.is_empty());
        assert!(rates.date.is_none());
    }

    #[test]
    fn test_bad_rate_rejected() {
        let wire: CurrencyRatesResponse =
            serde_json::from_str(r#"{"base":"eur","rates":{"usd":"n/a"}}"#).unwrap();
        let requested = CurrencyCode::parse("eur").unwrap();
        assert_eq!(
            CurrencyRates::try_from((wire, &requested)).unwrap_err(),
            RatesDecodeError::InvalidRate("usd".to_string())
        );
    }

    #[test]
    fn test_exchange_rate_conversion() {
        let wire: ExchangeRateResponse = serde_json::from_str(
            r#"{"base":"USD","target":"TRY","rate":18.5,"date":"2023-01-01","timestamp":1672531200000}"#,
        )
        .unwrap();
        let rate = ExchangeRate::try_from(wire).unwrap();
        assert_eq!(rate.base.as_str(), "usd");
        assert_eq!(rate.target.as_str(), "try");
        assert_eq!(rate.rate, Decimal::from_str("18.5").unwrap());
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(rate.timestamp.unwrap().timestamp_millis(), 1672531200000);
    }

    #[test]
    fn test_exchange_rate_bad_date_rejected() {
        let wire: ExchangeRateResponse = serde_json::from_str(
            r#"{"base":"USD","target":"TRY","rate":"18.5","date":"yesterday"}"#,
        )
        .unwrap();
        assert!(matches!(
            ExchangeRate::try_from(wire).unwrap_err(),
            RatesDecodeError::Invalid(ValidationError::InvalidDate(_))
        ));
    }
}
