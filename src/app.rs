//! The dashboard application state: loaded dataset, page model and chart
//! renderer, driven by a single load followed by selection events.

use crate::models::Dataset;
use crate::services::charts::ChartRenderer;
use crate::services::filters::{self, YearFilterMode, YearOrder};
use crate::services::loader::{self, DatasetSource};
use crate::services::{stats, table};
use crate::ui::{ChartBackend, Page, UiEvent};
use log::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineSettings {
    pub year_order: YearOrder,
    pub year_filter: YearFilterMode,
}

pub struct Dashboard<B> {
    settings: PipelineSettings,
    dataset: Option<Dataset>,
    page: Page,
    renderer: ChartRenderer<B>,
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn new(backend: B, settings: PipelineSettings) -> Self {
        Self {
            settings,
            dataset: None,
            page: Page::new(),
            renderer: ChartRenderer::new(backend),
        }
    }

    pub fn settings(&self) -> PipelineSettings {
        self.settings
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn renderer(&self) -> &ChartRenderer<B> {
        &self.renderer
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Fetch the dataset once and render everything from it. A failed
    /// fetch is logged and shown on the page; nothing else is rendered.
    pub async fn load(&mut self, source: &dyn DatasetSource) {
        if self.dataset.is_some() {
            warn!("Dashboard data already loaded, ignoring reload");
            return;
        }
        match loader::fetch_dataset(source).await {
            Ok(dataset) => self.render(dataset),
            Err(e) => {
                error!("Error loading dashboard data: {}", e);
                self.page.show_error();
            }
        }
    }

    /// Show the content and run stats, filters, charts and table in order.
    pub fn render(&mut self, dataset: Dataset) {
        self.page.show_content();
        stats::update_stats(&mut self.page.stats, &dataset);
        filters::initialize_filters(&mut self.page, &dataset, self.settings.year_order);
        self.renderer.create_charts(&dataset);
        table::populate_transactions_table(&mut self.page.transactions, &dataset.transactions);
        self.dataset = Some(dataset);
    }

    /// Apply one selection change and redraw the charts for the resulting
    /// selection.
    pub fn dispatch(&mut self, event: UiEvent) {
        let Some(dataset) = self.dataset.as_ref() else {
            warn!("Ignoring {:?} before dashboard data is loaded", event);
            return;
        };

        let accepted = match &event {
            UiEvent::YearSelected(year) => self.page.year_filter.select(year),
            UiEvent::ChartTypeSelected(chart_type) => {
                self.page.chart_type.select(chart_type.as_str())
            }
        };
        if !accepted {
            warn!("Ignoring {:?}: no such option", event);
            return;
        }

        let state = filters::current_state(&self.page);
        info!(
            "Updating charts for year {:?} as {}",
            state.year, state.chart_type
        );
        self.renderer
            .update_charts(dataset, &state, self.settings.year_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartType, FieldValue, IssuanceRecord};
    use crate::ui::{Canvas, LoadPhase, MountTarget};

    fn loaded() -> Dashboard<Canvas> {
        let mut dashboard = Dashboard::new(Canvas::new(), PipelineSettings::default());
        dashboard.render(Dataset {
            issuances: vec![IssuanceRecord {
                year: Some(FieldValue::from(2021)),
                issued_credits: Some(FieldValue::from(10)),
            }],
            ..Dataset::default()
        });
        dashboard
    }

    #[test]
    fn events_before_load_are_ignored() {
        let mut dashboard = Dashboard::new(Canvas::new(), PipelineSettings::default());

        dashboard.dispatch(UiEvent::ChartTypeSelected(ChartType::Doughnut));

        assert_eq!(dashboard.page().phase, LoadPhase::Loading);
        assert_eq!(dashboard.page().chart_type.value(), "bar");
        assert_eq!(dashboard.renderer().backend().live_count(), 0);
    }

    #[test]
    fn unknown_year_leaves_selection_alone() {
        let mut dashboard = loaded();

        dashboard.dispatch(UiEvent::YearSelected("1990".to_string()));

        assert_eq!(dashboard.page().year_filter.value(), "all");
    }

    #[test]
    fn chart_type_event_with_year_selected_redraws_in_place() {
        let mut dashboard = loaded();
        dashboard.dispatch(UiEvent::YearSelected("2021".to_string()));
        let id = dashboard.renderer().instance(MountTarget::Issuances).unwrap().id;

        dashboard.dispatch(UiEvent::ChartTypeSelected(ChartType::Line));

        let chart = dashboard.renderer().instance(MountTarget::Issuances).unwrap();
        assert_eq!(chart.id, id);
        assert_eq!(chart.config.chart_type, ChartType::Line);
        assert_eq!(dashboard.page().chart_type.value(), "line");
    }
}
