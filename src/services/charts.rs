//! Chart configurations for the two time series and the lifecycle of the
//! chart instances drawn from them.

use crate::models::{
    ChartConfig, ChartData, ChartDataset, ChartOptions, ChartType, Dataset, Scales,
    TimeSeriesRecord,
};
use crate::services::filters::{FilterState, YearFilterMode, YearSelection};
use crate::ui::{ChartBackend, InstanceId, MountTarget};
use log::{debug, info};

pub struct SeriesStyle {
    pub label: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

pub const ISSUANCES_STYLE: SeriesStyle = SeriesStyle {
    label: "Credits Issued",
    background: "rgba(102, 126, 234, 0.8)",
    border: "rgba(102, 126, 234, 1)",
};

pub const RETIREMENTS_STYLE: SeriesStyle = SeriesStyle {
    label: "Credits Retired",
    background: "rgba(118, 75, 162, 0.8)",
    border: "rgba(118, 75, 162, 1)",
};

/// Bar chart of one time series: years as labels, one styled dataset.
pub fn build_chart_config<R: TimeSeriesRecord>(records: &[R], style: &SeriesStyle) -> ChartConfig {
    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: records.iter().map(|r| r.year().cloned()).collect(),
            datasets: vec![ChartDataset {
                label: style.label.to_string(),
                data: records.iter().map(|r| r.amount().cloned()).collect(),
                background_color: style.background.to_string(),
                border_color: style.border.to_string(),
                border_width: 2,
                border_radius: 8,
                border_skipped: false,
            }],
        },
        options: ChartOptions::default(),
    }
}

pub fn series_config(dataset: &Dataset, target: MountTarget) -> ChartConfig {
    match target {
        MountTarget::Issuances => build_chart_config(&dataset.issuances, &ISSUANCES_STYLE),
        MountTarget::Retirements => build_chart_config(&dataset.retirements, &RETIREMENTS_STYLE),
    }
}

/// Switch a configuration to `chart_type`. Doughnuts drop their axes and
/// show the legend; every other type gets the zero-based axes back and
/// hides it.
pub fn apply_chart_type(config: &mut ChartConfig, chart_type: ChartType) {
    config.chart_type = chart_type;
    if chart_type == ChartType::Doughnut {
        config.options.scales = Scales::default();
        config.options.plugins.legend.display = true;
    } else {
        config.options.scales = Scales::standard();
        config.options.plugins.legend.display = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: InstanceId,
    pub target: MountTarget,
    pub config: ChartConfig,
}

pub fn update_chart_type<B: ChartBackend>(
    backend: &mut B,
    chart: Option<&mut ChartInstance>,
    chart_type: ChartType,
) {
    if let Some(chart) = chart {
        apply_chart_type(&mut chart.config, chart_type);
        backend.update(chart.id, &chart.config);
    }
}

fn select_records<R: TimeSeriesRecord + Clone>(records: &[R], selection: &YearSelection) -> Vec<R> {
    records
        .iter()
        .filter(|r| selection.includes(r.year_label().as_deref()))
        .cloned()
        .collect()
}

/// Owns the issuances and retirements chart instances. At most one instance
/// is live per mount target: mounting a new one destroys its predecessor.
pub struct ChartRenderer<B> {
    backend: B,
    issuances: Option<ChartInstance>,
    retirements: Option<ChartInstance>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            issuances: None,
            retirements: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn instance(&self, target: MountTarget) -> Option<&ChartInstance> {
        match target {
            MountTarget::Issuances => self.issuances.as_ref(),
            MountTarget::Retirements => self.retirements.as_ref(),
        }
    }

    fn mount(&mut self, target: MountTarget, config: ChartConfig) {
        let slot = match target {
            MountTarget::Issuances => &mut self.issuances,
            MountTarget::Retirements => &mut self.retirements,
        };
        if let Some(previous) = slot.take() {
            self.backend.destroy(previous.id);
        }
        let id = self.backend.construct(target, &config);
        debug!("Mounted {:?} on {}", id, target.element_id());
        *slot = Some(ChartInstance { id, target, config });
    }

    pub fn create_charts(&mut self, dataset: &Dataset) {
        for target in MountTarget::ALL {
            self.mount(target, series_config(dataset, target));
        }
    }

    fn rebuild(&mut self, dataset: &Dataset, selection: &YearSelection, chart_type: ChartType) {
        let mut issuances = build_chart_config(
            &select_records(&dataset.issuances, selection),
            &ISSUANCES_STYLE,
        );
        let mut retirements = build_chart_config(
            &select_records(&dataset.retirements, selection),
            &RETIREMENTS_STYLE,
        );
        apply_chart_type(&mut issuances, chart_type);
        apply_chart_type(&mut retirements, chart_type);
        self.mount(MountTarget::Issuances, issuances);
        self.mount(MountTarget::Retirements, retirements);
    }

    /// React to a change of either selection control.
    ///
    /// Both live charts switch type first. With every year selected the
    /// charts are then rebuilt from the whole dataset; a single year goes
    /// through [`ChartRenderer::filter_charts_by_year`].
    pub fn update_charts(&mut self, dataset: &Dataset, state: &FilterState, mode: YearFilterMode) {
        update_chart_type(&mut self.backend, self.issuances.as_mut(), state.chart_type);
        update_chart_type(&mut self.backend, self.retirements.as_mut(), state.chart_type);

        match (&state.year, mode) {
            (YearSelection::All, YearFilterMode::Passthrough) => self.create_charts(dataset),
            (YearSelection::All, YearFilterMode::Restrict) => {
                self.rebuild(dataset, &YearSelection::All, state.chart_type)
            }
            (YearSelection::Year(year), _) => {
                self.filter_charts_by_year(dataset, year, state.chart_type, mode)
            }
        }
    }

    /// In passthrough mode this only logs the year; the charts keep every
    /// data point.
    pub fn filter_charts_by_year(
        &mut self,
        dataset: &Dataset,
        year: &str,
        chart_type: ChartType,
        mode: YearFilterMode,
    ) {
        info!("Filtering by year: {}", year);
        if mode == YearFilterMode::Restrict {
            self.rebuild(dataset, &YearSelection::Year(year.to_string()), chart_type);
        }
    }
}
