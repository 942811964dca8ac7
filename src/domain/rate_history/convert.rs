//! Conversion: RateRangeResponse → RateSeries (all-or-nothing).

use super::wire::{RateEntryResponse, RateRangeResponse};
use super::{RateSample, RateSeries};
use crate::error::SdkError;
use crate::shared::parse_date;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a range payload could not become a [`RateSeries`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesDecodeError {
    #[error("entry {index}: invalid date {value:?}")]
    InvalidDate { index: usize, value: String },

    #[error("entry {index} ({date}): rate is not a number")]
    InvalidRate { index: usize, date: NaiveDate },

    #[error("entry {index} ({date}): rate {rate} is not positive")]
    NonPositiveRate {
        index: usize,
        date: NaiveDate,
        rate: f64,
    },

    #[error("duplicate entries for {0}")]
    DuplicateDate(NaiveDate),
}

impl From<SeriesDecodeError> for SdkError {
    fn from(e: SeriesDecodeError) -> Self {
        SdkError::Malformed(e.to_string())
    }
}

/// Accepts `YYYY-MM-DD`, or a timestamp string that starts with one.
fn entry_date(raw: &str) -> Option<NaiveDate> {
    parse_date(raw).ok().or_else(|| {
        let trimmed = raw.trim();
        let rest = trimmed.get(10..)?;
        if rest.starts_with('T') || rest.starts_with(' ') {
            parse_date(trimmed.get(..10)?).ok()
        } else {
            None
        }
    })
}

fn sample_from(index: usize, entry: &RateEntryResponse) -> Result<RateSample, SeriesDecodeError> {
    let date = entry_date(&entry.date).ok_or_else(|| SeriesDecodeError::InvalidDate {
        index,
        value: entry.date.clone(),
    })?;
    let rate = entry
        .rate
        .to_f64()
        .ok_or(SeriesDecodeError::InvalidRate { index, date })?;
    if rate <= 0.0 {
        return Err(SeriesDecodeError::NonPositiveRate { index, date, rate });
    }
    Ok(RateSample { date, rate })
}

impl TryFrom<RateRangeResponse> for RateSeries {
    type Error = SeriesDecodeError;

    fn try_from(source: RateRangeResponse) -> Result<Self, Self::Error> {
        let samples = source
            .iter()
            .enumerate()
            .map(|(index, entry)| sample_from(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        RateSeries::new(samples)
    }
}
