//! Rate history sub-client — range fetches and the view refresh cycle.

use super::query::{build_query, DateInterval, RangeQuery};
use super::state::HistoricalView;
use super::RateSeries;
use crate::client::DovizClient;
use crate::domain::currency::CurrencyCatalog;
use crate::error::{SdkError, ValidationError};

use async_lock::Mutex;

/// Sub-client for historical rate series.
pub struct RateHistoryClient<'a> {
    pub(crate) client: &'a DovizClient,
}

impl<'a> RateHistoryClient<'a> {
    /// Issue exactly one request for `query` and decode the series.
    ///
    /// An empty series is a success. Nothing is cached: the same query twice is two
    /// requests.
    pub async fn fetch(&self, query: &RangeQuery) -> Result<RateSeries, SdkError> {
        tracing::info!(
            base = %query.base(),
            target = %query.target(),
            start = %query.start(),
            end = %query.end(),
            "Fetching rate range"
        );

        let wire = self.client.http.get_rate_range(query).await?;
        let series = RateSeries::try_from(wire).map_err(|e| {
            tracing::warn!(error = %e, "Rate range payload rejected");
            SdkError::from(e)
        })?;

        tracing::info!(samples = series.len(), "Rate range resolved");
        Ok(series)
    }

    /// Validate a selection, then fetch it.
    pub async fn query(
        &self,
        base: &str,
        target: &str,
        interval: &DateInterval,
        catalog: Option<&CurrencyCatalog>,
    ) -> Result<RateSeries, SdkError> {
        let query = build_query(base, target, interval, catalog)?;
        self.fetch(&query).await
    }

    /// Run one query cycle against an app-owned view.
    ///
    /// The lock is released while the request is in flight, so the selection can change
    /// and newer refreshes can start meanwhile. Returns whether this response was applied
    /// (`false` when a newer query superseded it).
    pub async fn refresh(&self, view: &Mutex<HistoricalView>) -> Result<bool, ValidationError> {
        let (request, query) = view.lock().await.begin_query()?;
        let result = self.fetch(&query).await;
        Ok(view.lock().await.complete(request, result))
    }
}
