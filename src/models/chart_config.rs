//! Declarative chart descriptors, serialized in the shape Chart.js consumes.

use crate::models::field_value::FieldValue;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const Y_GRID_COLOR: &str = "rgba(0,0,0,0.1)";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::PolarArea,
        ChartType::Radar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::PolarArea => "polarArea",
            ChartType::Radar => "radar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Doughnut => "Doughnut Chart",
            ChartType::PolarArea => "Polar Area Chart",
            ChartType::Radar => "Radar Chart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "chart type",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<Option<FieldValue>>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Option<FieldValue>>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_radius: u32,
    pub border_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
    pub animation: Animation,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins::default(),
            scales: Scales::standard(),
            animation: Animation::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

/// Axis configuration; serializes to `{}` when both axes are cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
}

impl Scales {
    /// Zero-based value axis with light gridlines, no vertical gridlines.
    pub fn standard() -> Self {
        Self {
            y: Some(Axis {
                begin_at_zero: Some(true),
                grid: Grid {
                    color: Some(Y_GRID_COLOR.to_string()),
                    display: None,
                },
            }),
            x: Some(Axis {
                begin_at_zero: None,
                grid: Grid {
                    color: None,
                    display: Some(false),
                },
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: Grid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "easeInOutQuart".to_string(),
        }
    }
}
