use crate::app::PipelineSettings;
use crate::models::{ChartType, UnknownOption};
use crate::ui::UiEvent;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: UnknownOption,
    },
}

pub struct Config {
    pub data_location: String,
    pub output_path: String,
    pub title: String,
    pub pipeline: PipelineSettings,
    pub select_year: Option<String>,
    pub select_chart_type: Option<ChartType>,
}

fn parsed<T>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = UnknownOption>,
{
    raw.map(|value| value.parse())
        .transpose()
        .map_err(|source| ConfigError::Invalid { key, source })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            data_location: lookup("DASHBOARD_DATA")
                .unwrap_or_else(|| "dashboard_data_fixed.json".to_string()),
            output_path: lookup("DASHBOARD_OUTPUT").unwrap_or_else(|| "dashboard.html".to_string()),
            title: lookup("DASHBOARD_TITLE")
                .unwrap_or_else(|| "Carbon Credit Dashboard".to_string()),
            pipeline: PipelineSettings {
                year_order: parsed("YEAR_ORDER", lookup("YEAR_ORDER"))?.unwrap_or_default(),
                year_filter: parsed("YEAR_FILTER_MODE", lookup("YEAR_FILTER_MODE"))?
                    .unwrap_or_default(),
            },
            select_year: lookup("SELECT_YEAR"),
            select_chart_type: parsed("SELECT_CHART_TYPE", lookup("SELECT_CHART_TYPE"))?,
        })
    }

    /// Selections to replay once the data is loaded, chart type first.
    pub fn initial_events(&self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(chart_type) = self.select_chart_type {
            events.push(UiEvent::ChartTypeSelected(chart_type));
        }
        if let Some(year) = &self.select_year {
            events.push(UiEvent::YearSelected(year.clone()));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::filters::{YearFilterMode, YearOrder};
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.data_location, "dashboard_data_fixed.json");
        assert_eq!(config.output_path, "dashboard.html");
        assert_eq!(config.pipeline, PipelineSettings::default());
        assert!(config.initial_events().is_empty());
    }

    #[test]
    fn reads_pipeline_settings_and_selections() {
        let config = config(&[
            ("YEAR_ORDER", "numeric"),
            ("YEAR_FILTER_MODE", "restrict"),
            ("SELECT_YEAR", "2022"),
            ("SELECT_CHART_TYPE", "doughnut"),
        ])
        .unwrap();

        assert_eq!(config.pipeline.year_order, YearOrder::Numeric);
        assert_eq!(config.pipeline.year_filter, YearFilterMode::Restrict);
        assert_eq!(
            config.initial_events(),
            vec![
                UiEvent::ChartTypeSelected(ChartType::Doughnut),
                UiEvent::YearSelected("2022".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_unknown_values() {
        let err = config(&[("SELECT_CHART_TYPE", "scatter")]).err().unwrap();
        assert!(err.to_string().contains("SELECT_CHART_TYPE"));
    }
}
