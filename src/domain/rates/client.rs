//! Spot rates sub-client.

use super::{CurrencyRates, ExchangeRate};
use crate::client::DovizClient;
use crate::error::SdkError;
use crate::shared::CurrencyCode;
use chrono::NaiveDate;

/// Sub-client for latest, dated, pair and crypto rates.
pub struct Rates<'a> {
    pub(crate) client: &'a DovizClient,
}

impl<'a> Rates<'a> {
    /// Every rate quoted against `base`.
    pub async fn latest(&self, base: &CurrencyCode) -> Result<CurrencyRates, SdkError> {
        self.latest_for(base, &[]).await
    }

    /// Rates against `base`, restricted to `targets` (all when empty).
    pub async fn latest_for(
        &self,
        base: &CurrencyCode,
        targets: &[CurrencyCode],
    ) -> Result<CurrencyRates, SdkError> {
        let wire = self.client.http.get_rates(base, targets).await?;
        Ok(CurrencyRates::try_from((wire, base))?)
    }

    /// Same rates as [`Self::latest`], served from the service's compact feed.
    pub async fn minified(&self, base: &CurrencyCode) -> Result<CurrencyRates, SdkError> {
        let wire = self.client.http.get_minified_rates(base).await?;
        Ok(CurrencyRates::try_from((wire, base))?)
    }

    pub async fn on_date(
        &self,
        base: &CurrencyCode,
        date: &NaiveDate,
    ) -> Result<CurrencyRates, SdkError> {
        let wire = self.client.http.get_rates_on_date(base, date).await?;
        Ok(CurrencyRates::try_from((wire, base))?)
    }

    pub async fn pair(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<ExchangeRate, SdkError> {
        let wire = self.client.http.get_pair_rate(from, to).await?;
        Ok(ExchangeRate::try_from(wire)?)
    }

    pub async fn crypto(
        &self,
        base: &CurrencyCode,
        targets: &[CurrencyCode],
    ) -> Result<CurrencyRates, SdkError> {
        let wire = self.client.http.get_crypto_rates(base, targets).await?;
        Ok(CurrencyRates::try_from((wire, base))?)
    }

    /// The server's health message.
    pub async fn health(&self) -> Result<String, SdkError> {
        self.client.http.health().await
    }
}
