//! Chart domain — turns a rate series into render-ready axes and a chart description.

pub mod config;

use crate::domain::rate_history::RateSeries;
use crate::shared::fmt::{self, RATE_DECIMALS};
use crate::shared::{format_date, CurrencyCode};
use serde::Serialize;

pub use config::{build_chart_config, ChartConfig};

/// Parallel label/value axes derived from a non-empty [`RateSeries`].
///
/// `labels[i]` and `values[i]` come from the i-th sample of the source series. Values keep
/// full precision; [`ChartSeries::display_value`] rounds for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    base: CurrencyCode,
    target: CurrencyCode,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true for a series built by [`to_chart_series`].
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Value at `index` rounded to 4 decimal places.
    pub fn display_value(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .map(|v| fmt::round_to(*v, RATE_DECIMALS as u32))
    }
}

/// Map a series onto chart axes, preserving order.
///
/// Returns `None` for an empty series: the caller shows an empty-period message instead
/// of a chart.
pub fn to_chart_series(
    series: &RateSeries,
    base: &CurrencyCode,
    target: &CurrencyCode,
) -> Option<ChartSeries> {
    if series.is_empty() {
        return None;
    }

    let (labels, values): (Vec<String>, Vec<f64>) = series
        .iter()
        .map(|s| (format_date(&s.date), s.rate))
        .unzip();

    Some(ChartSeries {
        base: base.clone(),
        target: target.clone(),
        labels,
        values,
    })
}
