//! Rate history domain — range queries, time-ordered rate series, and the
//! historical view state container.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod query;
pub mod state;
pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use convert::SeriesDecodeError;
pub use query::{build_query, DateInterval, RangeQuery};
pub use state::{HistoricalView, RequestId, ViewStatus};

/// One observation: 1 unit of base = `rate` units of target on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Samples ordered ascending by date, at most one per date.
///
/// An empty series is a valid result ("no data for the selected period"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateSeries {
    samples: Vec<RateSample>,
}

impl RateSeries {
    /// Sort by date and reject duplicate dates.
    pub fn new(mut samples: Vec<RateSample>) -> Result<Self, SeriesDecodeError> {
        samples.sort_by_key(|s| s.date);
        if let Some(pair) = samples.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(SeriesDecodeError::DuplicateDate(pair[0].date));
        }
        Ok(Self { samples })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[RateSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RateSample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&RateSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&RateSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<'a> IntoIterator for &'a RateSeries {
    type Item = &'a RateSample;
    type IntoIter = std::slice::Iter<'a, RateSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(day: u32, rate: f64) -> RateSample {
        RateSample {
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            rate,
        }
    }

    #[test]
    fn test_series_sorted_ascending() {
        let series = RateSeries::new(vec![sample(3, 18.55), sample(1, 18.5), sample(2, 18.6)])
            .unwrap();
        let days: Vec<_> = series.iter().map(|s| s.date.format("%d").to_string()).collect();
        assert_eq!(days, ["01", "02", "03"]);
        assert_eq!(series.first().unwrap().rate, 18.5);
        assert_eq!(series.last().unwrap().rate, 18.55);
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let err = RateSeries::new(vec![sample(1, 18.5), sample(1, 18.6)]).unwrap_err();
        assert!(matches!(err, SeriesDecodeError::DuplicateDate(_)));
    }

    #[test]
    fn test_empty_series_is_valid() {
        let series = RateSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series, RateSeries::empty());
    }
}
