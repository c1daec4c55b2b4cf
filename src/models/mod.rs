mod chart_config;
mod dataset;
mod field_value;
mod records;
mod serde_utils;

pub use chart_config::{
    Animation, Axis, ChartConfig, ChartData, ChartDataset, ChartOptions, ChartType, Grid, Legend,
    Plugins, Scales, UnknownOption,
};
pub use dataset::Dataset;
pub use field_value::{FieldValue, PLACEHOLDER};
pub use records::{
    IssuanceRecord, MetricRecord, RetirementRecord, TimeSeriesRecord, TransactionRecord,
};
