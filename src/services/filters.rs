//! Year and chart-type selection: building the year options from the two
//! time series and reading the current selection back from the controls.

use crate::models::{ChartType, Dataset, FieldValue, TimeSeriesRecord, UnknownOption};
use crate::ui::{Page, SelectOption, ALL_YEARS};
use log::{info, warn};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearOrder {
    #[default]
    Lexicographic,
    /// Numeric labels by value, then any non-numeric labels as text.
    Numeric,
}

impl FromStr for YearOrder {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicographic" => Ok(YearOrder::Lexicographic),
            "numeric" => Ok(YearOrder::Numeric),
            other => Err(UnknownOption {
                kind: "year order",
                value: other.to_string(),
            }),
        }
    }
}

/// What selecting a single year does to the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFilterMode {
    /// The year is only logged; charts keep showing every year.
    #[default]
    Passthrough,
    /// Charts are rebuilt from the records of the selected year only, and
    /// rebuilds keep the selected chart type.
    Restrict,
}

impl FromStr for YearFilterMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passthrough" => Ok(YearFilterMode::Passthrough),
            "restrict" => Ok(YearFilterMode::Restrict),
            other => Err(UnknownOption {
                kind: "year filter mode",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearSelection {
    #[default]
    All,
    Year(String),
}

impl YearSelection {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_YEARS {
            YearSelection::All
        } else {
            YearSelection::Year(value.to_string())
        }
    }

    pub fn includes(&self, year_label: Option<&str>) -> bool {
        match self {
            YearSelection::All => true,
            YearSelection::Year(year) => year_label == Some(year.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub year: YearSelection,
    pub chart_type: ChartType,
}

fn push_distinct(years: &mut Vec<FieldValue>, year: Option<&FieldValue>) {
    if let Some(year) = year {
        if !years.iter().any(|y| y.same_value(year)) {
            years.push(year.clone());
        }
    }
}

/// Distinct `Year` values of both time series, in first-seen order.
pub fn collect_years(dataset: &Dataset) -> Vec<FieldValue> {
    let mut years = Vec::new();
    for record in &dataset.issuances {
        push_distinct(&mut years, record.year());
    }
    for record in &dataset.retirements {
        push_distinct(&mut years, record.year());
    }
    years
}

fn numeric_key(label: &str) -> Option<f64> {
    label.trim().parse::<f64>().ok()
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (numeric_key(a), numeric_key(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Year labels for the year control, ordered per `order`. The sort is
/// stable, so labels that compare equal keep first-seen order.
pub fn year_labels(dataset: &Dataset, order: YearOrder) -> Vec<String> {
    let mut labels: Vec<String> = collect_years(dataset)
        .iter()
        .map(ToString::to_string)
        .collect();
    match order {
        YearOrder::Lexicographic => labels.sort(),
        YearOrder::Numeric => labels.sort_by(|a, b| compare_numeric(a, b)),
    }
    labels
}

pub fn initialize_filters(page: &mut Page, dataset: &Dataset, order: YearOrder) {
    page.year_filter.reset();
    let labels = year_labels(dataset, order);
    info!("Year filter offers {} years", labels.len());
    for label in labels {
        page.year_filter.append(SelectOption::new(label.clone(), label));
    }
}

pub fn current_state(page: &Page) -> FilterState {
    let chart_type = page.chart_type.value().parse().unwrap_or_else(|e| {
        warn!("{}, falling back to {}", e, ChartType::default());
        ChartType::default()
    });
    FilterState {
        year: YearSelection::from_value(page.year_filter.value()),
        chart_type,
    }
}
