//! Range Query Builder — validates a (base, target, interval) selection and renders the
//! canonical request. Pure: no I/O, no state.

use crate::domain::currency::CurrencyCatalog;
use crate::error::ValidationError;
use crate::network::API_PREFIX;
use crate::shared::{format_date, parse_date, CurrencyCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar-date interval as selected by the user.
///
/// Ordering is not enforced on construction; [`build_query`] rejects `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }

    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// The same interval with `end` raised to `start` if it was earlier.
    pub fn clamped(self) -> Self {
        Self {
            start: self.start,
            end: self.end.max(self.start),
        }
    }
}

/// Canonical range request: lowercase codes and an ordered interval.
///
/// Only [`build_query`] constructs one, so every value that reaches the network has
/// passed validation.
///
/// ```compile_fail
/// use doviz_sdk::domain::rate_history::{DateInterval, RangeQuery};
/// use doviz_sdk::shared::CurrencyCode;
///
/// let day = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let _ = RangeQuery {
///     base: CurrencyCode::parse("usd").unwrap(),
///     target: CurrencyCode::parse("try").unwrap(),
///     interval: DateInterval::new(day, day),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RangeQuery {
    base: CurrencyCode,
    target: CurrencyCode,
    interval: DateInterval,
}

impl RangeQuery {
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn start(&self) -> NaiveDate {
        self.interval.start
    }

    pub fn end(&self) -> NaiveDate {
        self.interval.end
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    /// Path and query string relative to the API base URL.
    pub fn path(&self) -> String {
        format!(
            "{}/rates/{}/{}/range?start={}&end={}",
            API_PREFIX,
            urlencoding::encode(self.base.as_str()),
            urlencoding::encode(self.target.as_str()),
            format_date(&self.interval.start),
            format_date(&self.interval.end)
        )
    }
}

/// Build a [`RangeQuery`].
///
/// `base` and `target` are matched case-insensitively and must be in `catalog` when one is
/// loaded (an empty catalog skips the membership check). Identical base and target are
/// allowed. `start > end` is an error, never silently swapped.
pub fn build_query(
    base: &str,
    target: &str,
    interval: &DateInterval,
    catalog: Option<&CurrencyCatalog>,
) -> Result<RangeQuery, ValidationError> {
    let base = CurrencyCode::parse(base)?;
    let target = CurrencyCode::parse(target)?;

    if let Some(catalog) = catalog.filter(|c| !c.is_empty()) {
        for code in [&base, &target] {
            if !catalog.contains(code) {
                return Err(ValidationError::UnknownCurrency(code.to_string()));
            }
        }
    }

    if !interval.is_ordered() {
        return Err(ValidationError::InvalidRange {
            start: interval.start,
            end: interval.end,
        });
    }

    Ok(RangeQuery {
        base,
        target,
        interval: *interval,
    })
}
