//! Presentation Adapter — a Chart.js-shaped line chart description built from a
//! [`ChartSeries`]. Deterministic: the same series always yields an equal config.

use super::ChartSeries;
use crate::shared::fmt::{self, RATE_DECIMALS};
use serde::Serialize;

const CHART_TITLE: &str = "Historical Exchange Rates";
const LINE_COLOR: &str = "#4caf50";
const FILL_COLOR: &str = "rgba(76, 175, 80, 0.1)";
const TOOLTIP_PREFIX: &str = "Rate: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Category,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionAxis {
    X,
    Y,
}

/// Complete chart description: `{ type, data, options }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Tooltip text for a hovered value, e.g. `"Rate: 18.5000"`.
    pub fn tooltip_label(&self, value: f64) -> String {
        self.options.plugins.tooltip.label(value)
    }

    /// The rate dataset (the only one this adapter emits).
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
    pub point_radius: u32,
    pub point_hover_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub interaction: Interaction,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: TitleOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

/// Tooltip behaviour plus the label format (`"{prefix}{value:.decimals}"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub mode: InteractionMode,
    pub intersect: bool,
    pub label_prefix: String,
    pub decimals: usize,
}

impl TooltipOptions {
    pub fn label(&self, value: f64) -> String {
        format!("{}{}", self.label_prefix, fmt::fixed(value, self.decimals))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub axis: InteractionAxis,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Scale,
    pub y: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "type")]
    pub kind: ScaleKind,
    pub begin_at_zero: bool,
}

/// Build the line chart for `chart`, naming the dataset `"{base}/{target} Exchange Rate"`.
pub fn build_chart_config(chart: &ChartSeries, base_label: &str, target_label: &str) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: chart.labels().to_vec(),
            datasets: vec![Dataset {
                label: format!("{}/{} Exchange Rate", base_label, target_label),
                data: chart.values().to_vec(),
                fill: true,
                border_color: LINE_COLOR.to_string(),
                background_color: FILL_COLOR.to_string(),
                tension: 0.4,
                point_radius: 4,
                point_hover_radius: 6,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                title: TitleOptions {
                    display: true,
                    text: CHART_TITLE.to_string(),
                },
                tooltip: TooltipOptions {
                    mode: InteractionMode::Index,
                    intersect: false,
                    label_prefix: TOOLTIP_PREFIX.to_string(),
                    decimals: RATE_DECIMALS,
                },
            },
            interaction: Interaction {
                mode: InteractionMode::Nearest,
                axis: InteractionAxis::X,
                intersect: false,
            },
            scales: Scales {
                x: Scale {
                    kind: ScaleKind::Category,
                    begin_at_zero: false,
                },
                y: Scale {
                    kind: ScaleKind::Linear,
                    begin_at_zero: false,
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::to_chart_series;
    use crate::domain::rate_history::{RateSample, RateSeries};
    use crate::shared::CurrencyCode;
    use chrono::NaiveDate;

    fn chart() -> ChartSeries {
        let series = RateSeries::new(vec![
            RateSample {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                rate: 18.5,
            },
            RateSample {
                date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
                rate: 18.6,
            },
        ])
        .unwrap();
        to_chart_series(
            &series,
            &CurrencyCode::parse("usd").unwrap(),
            &CurrencyCode::parse("try").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_named_after_pair() {
        let config = build_chart_config(&chart(), "usd", "try");
        let dataset = config.dataset().unwrap();
        assert_eq!(dataset.label, "usd/try Exchange Rate");
        assert_eq!(dataset.data, [18.5, 18.6]);
        assert_eq!(config.data.labels, ["2023-01-01", "2023-01-02"]);
    }

    #[test]
    fn test_axes_category_and_linear_not_from_zero() {
        let config = build_chart_config(&chart(), "usd", "try");
        assert_eq!(config.options.scales.x.kind, ScaleKind::Category);
        assert_eq!(config.options.scales.y.kind, ScaleKind::Linear);
        assert!(!config.options.scales.y.begin_at_zero);
    }

    #[test]
    fn test_tooltip_four_decimals() {
        let config = build_chart_config(&chart(), "usd", "try");
        assert_eq!(config.tooltip_label(18.5), "Rate: 18.5000");
        assert_eq!(config.tooltip_label(18.123456), "Rate: 18.1235");
    }

    #[test]
    fn test_building_twice_is_identical() {
        let c = chart();
        let first = build_chart_config(&c, "USD", "TRY");
        let second = build_chart_config(&c, "USD", "TRY");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_serializes_chart_js_shape() {
        let json = serde_json::to_value(build_chart_config(&chart(), "usd", "try")).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["scales"]["x"]["type"], "category");
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(json["options"]["interaction"]["mode"], "nearest");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#4caf50");
    }
}
