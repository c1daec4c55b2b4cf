use crate::models::field_value::FieldValue;
use serde::{Deserialize, Serialize};

/// A `{Metric, Value}` pair from `Overview` or `Credits Summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "Metric", default)]
    pub metric: Option<FieldValue>,
    #[serde(rename = "Value", default)]
    pub value: Option<FieldValue>,
}

impl MetricRecord {
    pub fn metric_name(&self) -> Option<&str> {
        self.metric.as_ref().and_then(FieldValue::as_str)
    }

    /// Text written into a stat slot. An absent value writes an empty string.
    pub fn value_text(&self) -> String {
        self.value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    #[serde(rename = "Year", default)]
    pub year: Option<FieldValue>,
    #[serde(rename = "Issued Credits", default)]
    pub issued_credits: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetirementRecord {
    #[serde(rename = "Year", default)]
    pub year: Option<FieldValue>,
    #[serde(rename = "Retired Credits", default)]
    pub retired_credits: Option<FieldValue>,
}

/// A yearly data point that can be plotted as one bar.
pub trait TimeSeriesRecord {
    fn year(&self) -> Option<&FieldValue>;
    fn amount(&self) -> Option<&FieldValue>;

    fn year_label(&self) -> Option<String> {
        self.year().map(ToString::to_string)
    }
}

impl TimeSeriesRecord for IssuanceRecord {
    fn year(&self) -> Option<&FieldValue> {
        self.year.as_ref()
    }

    fn amount(&self) -> Option<&FieldValue> {
        self.issued_credits.as_ref()
    }
}

impl TimeSeriesRecord for RetirementRecord {
    fn year(&self) -> Option<&FieldValue> {
        self.year.as_ref()
    }

    fn amount(&self) -> Option<&FieldValue> {
        self.retired_credits.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date", default)]
    pub date: Option<FieldValue>,
    #[serde(rename = "Event", default)]
    pub event: Option<FieldValue>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<FieldValue>,
    #[serde(rename = "Vintage", default)]
    pub vintage: Option<FieldValue>,
    #[serde(rename = "User", default)]
    pub user: Option<FieldValue>,
}
