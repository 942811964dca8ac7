//! Historical view state containers — app-owned, SDK-provided update logic.
//!
//! Holds the user's selection, the catalog snapshot, and the result slot. Responses are
//! tagged with a [`RequestId`]; only the most recently issued one may update the slot.

use super::query::{build_query, DateInterval, RangeQuery};
use super::RateSeries;
use crate::domain::chart::{build_chart_config, to_chart_series, ChartConfig, ChartSeries};
use crate::domain::currency::CurrencyCatalog;
use crate::error::{SdkError, ValidationError};
use crate::shared::CurrencyCode;
use chrono::NaiveDate;

/// Shown instead of a chart when a query succeeds with zero samples.
pub const NO_DATA_MESSAGE: &str = "No historical data available for the selected period";

/// Monotonically increasing identifier of an issued range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// What the result slot currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Idle,
    Loading {
        request: RequestId,
        query: RangeQuery,
    },
    Ready {
        chart: ChartSeries,
        config: ChartConfig,
    },
    NoData,
    Failed(String),
}

/// Selection + result state for the historical chart page.
///
/// The app owns instances of this type (e.g. inside a UI signal or a mutex).
/// The SDK provides the update methods.
#[derive(Debug, Clone)]
pub struct HistoricalView {
    catalog: CurrencyCatalog,
    catalog_error: Option<String>,
    base: CurrencyCode,
    target: CurrencyCode,
    interval: DateInterval,
    latest: u64,
    status: ViewStatus,
}

impl HistoricalView {
    /// Defaults: `usd` → `try`, from 2023-01-01 to `today`.
    pub fn new(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(today);
        Self {
            catalog: CurrencyCatalog::default(),
            catalog_error: None,
            base: CurrencyCode::canonical("usd"),
            target: CurrencyCode::canonical("try"),
            interval: DateInterval::new(start, today).clamped(),
            latest: 0,
            status: ViewStatus::Idle,
        }
    }

    // ── Catalog ──────────────────────────────────────────────────────────

    /// Install a freshly loaded catalog, or record why loading failed.
    ///
    /// A failure keeps whatever snapshot was there before (empty on first load).
    pub fn apply_catalog(&mut self, result: Result<CurrencyCatalog, SdkError>) {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.catalog_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Keeping previous currency catalog");
                self.catalog_error = Some(e.to_string());
            }
        }
    }

    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    // ── Selection ────────────────────────────────────────────────────────

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn set_base(&mut self, code: &str) -> Result<(), ValidationError> {
        self.base = CurrencyCode::parse(code)?;
        Ok(())
    }

    pub fn set_target(&mut self, code: &str) -> Result<(), ValidationError> {
        self.target = CurrencyCode::parse(code)?;
        Ok(())
    }

    /// Move the start date; the end date follows if it would fall before it.
    pub fn set_start(&mut self, start: NaiveDate) {
        self.interval = DateInterval::new(start, self.interval.end).clamped();
    }

    /// Move the end date, never earlier than the start date.
    pub fn set_end(&mut self, end: NaiveDate) {
        self.interval = DateInterval::new(self.interval.start, end).clamped();
    }

    /// Replace the interval verbatim; ordering is checked by [`Self::begin_query`].
    pub fn set_interval(&mut self, interval: DateInterval) {
        self.interval = interval;
    }

    // ── Query lifecycle ──────────────────────────────────────────────────

    /// Validate the selection and issue a new request id.
    ///
    /// On success the view enters `Loading` and any in-flight request is superseded.
    /// On a validation error nothing changes.
    pub fn begin_query(&mut self) -> Result<(RequestId, RangeQuery), ValidationError> {
        let query = build_query(
            self.base.as_str(),
            self.target.as_str(),
            &self.interval,
            Some(&self.catalog),
        )?;

        self.latest += 1;
        let request = RequestId(self.latest);
        self.status = ViewStatus::Loading {
            request,
            query: query.clone(),
        };
        Ok((request, query))
    }

    /// Apply the outcome of `request`. Returns `false` if it was superseded and dropped.
    pub fn complete(&mut self, request: RequestId, result: Result<RateSeries, SdkError>) -> bool {
        let query = match std::mem::replace(&mut self.status, ViewStatus::Idle) {
            ViewStatus::Loading {
                request: pending,
                query,
            } if pending == request => query,
            current => {
                self.status = current;
                tracing::debug!(
                    request = request.get(),
                    latest = self.latest,
                    "Discarding superseded rate history response"
                );
                return false;
            }
        };

        self.status = match result {
            Ok(series) => match to_chart_series(&series, query.base(), query.target()) {
                Some(chart) => {
                    let config = build_chart_config(
                        &chart,
                        query.base().as_str(),
                        query.target().as_str(),
                    );
                    ViewStatus::Ready { chart, config }
                }
                None => ViewStatus::NoData,
            },
            Err(e) => ViewStatus::Failed(e.to_string()),
        };
        true
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ViewStatus::Loading { .. })
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        match &self.status {
            ViewStatus::Ready { chart, .. } => Some(chart),
            _ => None,
        }
    }

    pub fn config(&self) -> Option<&ChartConfig> {
        match &self.status {
            ViewStatus::Ready { config, .. } => Some(config),
            _ => None,
        }
    }

    /// Text for the message area: the empty-period notice or the failure message.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::NoData => Some(NO_DATA_MESSAGE),
            ViewStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// `true` when the message area holds an error rather than the empty-period notice.
    pub fn is_error(&self) -> bool {
        matches!(self.status, ViewStatus::Failed(_))
    }

    /// Drop the result and return to `Idle`; in-flight responses will be discarded.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.status = ViewStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate_history::RateSample;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view() -> HistoricalView {
        let mut v = HistoricalView::new(date(2023, 1, 3));
        v.set_start(date(2023, 1, 1));
        v
    }

    fn series(rates: &[f64]) -> RateSeries {
        RateSeries::new(
            rates
                .iter()
                .enumerate()
                .map(|(i, r)| RateSample {
                    date: date(2023, 1, i as u32 + 1),
                    rate: *r,
                })
                .collect(),
        )
        .unwrap()
    }

    fn catalog(codes: &[&str]) -> CurrencyCatalog {
        let entries: BTreeMap<_, _> = codes
            .iter()
            .map(|c| (CurrencyCode::parse(c).unwrap(), c.to_string()))
            .collect();
        CurrencyCatalog::new(entries)
    }

    #[test]
    fn test_defaults() {
        let v = HistoricalView::new(date(2024, 6, 1));
        assert_eq!(v.base().as_str(), "usd");
        assert_eq!(v.target().as_str(), "try");
        assert_eq!(v.interval(), DateInterval::new(date(2023, 1, 1), date(2024, 6, 1)));
        assert_eq!(v.status(), &ViewStatus::Idle);
    }

    #[test]
    fn test_end_never_before_start() {
        let mut v = view();
        v.set_end(date(2022, 12, 1));
        assert_eq!(v.interval().end, date(2023, 1, 1));

        v.set_start(date(2023, 3, 1));
        assert_eq!(v.interval().end, date(2023, 3, 1));
    }

    #[test]
    fn test_successful_query_shows_chart() {
        let mut v = view();
        let (id, query) = v.begin_query().unwrap();
        assert!(v.is_loading());
        assert_eq!(query.start(), date(2023, 1, 1));

        assert!(v.complete(id, Ok(series(&[18.50, 18.60, 18.55]))));
        let chart = v.chart().unwrap();
        assert_eq!(chart.labels(), ["2023-01-01", "2023-01-02", "2023-01-03"]);
        assert_eq!(
            v.config().unwrap().dataset().unwrap().label,
            "usd/try Exchange Rate"
        );
        assert!(v.message().is_none());
    }

    #[test]
    fn test_empty_result_is_notice_not_error() {
        let mut v = view();
        let (id, _) = v.begin_query().unwrap();
        v.complete(id, Ok(RateSeries::empty()));
        assert_eq!(v.status(), &ViewStatus::NoData);
        assert_eq!(v.message(), Some(NO_DATA_MESSAGE));
        assert!(!v.is_error());
        assert!(v.chart().is_none());
    }

    #[test]
    fn test_failure_clears_previous_chart() {
        let mut v = view();
        let (id, _) = v.begin_query().unwrap();
        v.complete(id, Ok(series(&[1.0])));
        assert!(v.chart().is_some());

        let (id, _) = v.begin_query().unwrap();
        assert!(v.chart().is_none());
        v.complete(id, Err(SdkError::ServiceRejected("no data".to_string())));
        assert!(v.chart().is_none());
        assert!(v.is_error());
        assert_eq!(v.message(), Some("no data"));
    }

    #[test]
    fn test_validation_error_has_no_side_effects() {
        let mut v = view();
        let (id, _) = v.begin_query().unwrap();
        v.complete(id, Ok(series(&[1.0])));

        v.set_interval(DateInterval::new(date(2023, 2, 1), date(2023, 1, 1)));
        let err = v.begin_query().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
        assert!(v.chart().is_some());
    }

    #[test]
    fn test_older_response_cannot_overwrite_newer() {
        let mut v = view();
        let (q1, _) = v.begin_query().unwrap();
        v.set_target("eur").unwrap();
        let (q2, _) = v.begin_query().unwrap();
        assert!(q2 > q1);

        assert!(v.complete(q2, Ok(series(&[0.93]))));
        assert!(!v.complete(q1, Ok(series(&[18.5]))));

        let chart = v.chart().unwrap();
        assert_eq!(chart.target().as_str(), "eur");
        assert_eq!(chart.values(), [0.93]);
    }

    #[test]
    fn test_older_response_dropped_while_newer_pending() {
        let mut v = view();
        let (q1, _) = v.begin_query().unwrap();
        let (q2, _) = v.begin_query().unwrap();

        assert!(!v.complete(q1, Err(SdkError::Malformed("x".to_string()))));
        assert!(v.is_loading());
        assert!(v.complete(q2, Ok(series(&[1.0]))));
        assert!(!v.complete(q2, Ok(series(&[2.0]))));
        assert_eq!(v.chart().unwrap().values(), [1.0]);
    }

    #[test]
    fn test_catalog_gates_selection() {
        let mut v = view();
        v.apply_catalog(Ok(catalog(&["usd", "eur"])));
        assert_eq!(
            v.begin_query().unwrap_err(),
            ValidationError::UnknownCurrency("try".to_string())
        );
        v.set_target("EUR").unwrap();
        assert!(v.begin_query().is_ok());
    }

    #[test]
    fn test_catalog_failure_keeps_previous_snapshot() {
        let mut v = view();
        v.apply_catalog(Ok(catalog(&["usd", "try"])));
        v.apply_catalog(Err(SdkError::CatalogUnavailable("down".to_string())));
        assert_eq!(v.catalog().len(), 2);
        assert!(v.catalog_error().unwrap().contains("down"));

        v.apply_catalog(Ok(catalog(&["usd"])));
        assert_eq!(v.catalog().len(), 1);
        assert!(v.catalog_error().is_none());
    }

    #[test]
    fn test_clear_discards_in_flight() {
        let mut v = view();
        let (id, _) = v.begin_query().unwrap();
        v.clear();
        assert!(!v.complete(id, Ok(series(&[1.0]))));
        assert_eq!(v.status(), &ViewStatus::Idle);
    }
}
