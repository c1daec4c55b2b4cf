use crate::app::Dashboard;
use crate::models::{ChartConfig, Scales};
use crate::services::charts::series_config;
use crate::services::filters::YearFilterMode;
use crate::services::table::COLUMNS;
use crate::ui::{ChartBackend, LoadPhase, MountTarget, Page, SelectControl, StatSlot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

const TEMPLATE: &str = include_str!("../../templates/dashboard.html");

#[derive(Serialize)]
struct MountedChart<'a> {
    target: &'static str,
    config: &'a ChartConfig,
}

#[derive(Serialize)]
struct Series {
    target: &'static str,
    config: ChartConfig,
}

/// Everything the inline script needs: the charts as currently drawn, the
/// unfiltered series to rebuild from, and how a year selection behaves.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Payload<'a> {
    generated_at: DateTime<Utc>,
    status: &'a LoadPhase,
    charts: Vec<MountedChart<'a>>,
    series: Vec<Series>,
    year_filter: YearFilterMode,
    standard_scales: Scales,
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn stats_html(page: &Page) -> String {
    let mut out = String::new();
    for slot in StatSlot::ALL {
        let _ = writeln!(
            out,
            "      <div class=\"stat-card\"><h3>{}</h3><p id=\"{}\">{}</p></div>",
            slot.title(),
            slot.element_id(),
            escape_html(page.stats.get(slot).unwrap_or_default())
        );
    }
    out
}

fn select_html(label: &str, control: &SelectControl) -> String {
    let mut out = format!(
        "      <label for=\"{id}\">{label}<select id=\"{id}\">",
        id = control.id,
        label = label
    );
    for option in control.options() {
        let selected = if option.value == control.value() {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&option.value),
            selected,
            escape_html(&option.label)
        );
    }
    out.push_str("</select></label>\n");
    out
}

fn charts_html() -> String {
    let mut out = String::new();
    for target in MountTarget::ALL {
        let _ = writeln!(
            out,
            "      <div class=\"chart-card\"><h2>{}</h2><div class=\"chart-box\"><canvas id=\"{}\"></canvas></div></div>",
            target.title(),
            target.element_id()
        );
    }
    out
}

fn columns_html() -> String {
    COLUMNS
        .iter()
        .map(|c| format!("            <th>{}</th>\n", c))
        .collect()
}

fn rows_html(page: &Page) -> String {
    let mut out = String::new();
    for row in page.transactions.rows() {
        out.push_str("          <tr>");
        for cell in &row.cells {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out
}

/// Render the current dashboard state as a self-contained HTML page.
///
/// The template is filled with `replace` rather than `format!` since the
/// stylesheet and script are full of braces.
pub fn render_dashboard<B: ChartBackend>(
    dashboard: &Dashboard<B>,
    title: &str,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let page = dashboard.page();
    let charts = MountTarget::ALL
        .into_iter()
        .filter_map(|target| dashboard.renderer().instance(target))
        .map(|chart| MountedChart {
            target: chart.target.element_id(),
            config: &chart.config,
        })
        .collect();
    let series = match dashboard.dataset() {
        Some(dataset) => MountTarget::ALL
            .into_iter()
            .map(|target| Series {
                target: target.element_id(),
                config: series_config(dataset, target),
            })
            .collect(),
        None => Vec::new(),
    };
    let payload = Payload {
        generated_at,
        status: &page.phase,
        charts,
        series,
        year_filter: dashboard.settings().year_filter,
        standard_scales: Scales::standard(),
    };
    // Keep the embedded JSON from closing the script element early.
    let json = serde_json::to_string(&payload)?.replace("</", "<\\/");

    let (status, status_class) = match &page.phase {
        LoadPhase::Loading => ("Loading dashboard data...".to_string(), ""),
        LoadPhase::Content => (String::new(), ""),
        LoadPhase::Failed(message) => (escape_html(message), " class=\"failed\""),
    };
    let content_display = if page.content_visible() { "block" } else { "none" };
    let filters = select_html("Year", &page.year_filter) + &select_html("Chart type", &page.chart_type);

    Ok(TEMPLATE
        .replace("__TITLE__", &escape_html(title))
        .replace("__GENERATED__", &generated_at.format("%Y-%m-%d %H:%M UTC").to_string())
        .replace("__STATUS_CLASS__", status_class)
        .replace("__STATUS__", &status)
        .replace("__CONTENT_DISPLAY__", content_display)
        .replace("__STATS__", stats_html(page).trim_end())
        .replace("__FILTERS__", filters.trim_end())
        .replace("__CHARTS__", charts_html().trim_end())
        .replace("__COLUMNS__", columns_html().trim_end())
        .replace("__ROWS__", rows_html(page).trim_end())
        .replace("__DATA__", &json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PipelineSettings;
    use crate::models::{Dataset, FieldValue, IssuanceRecord, MetricRecord, TransactionRecord};
    use crate::ui::Canvas;
    use chrono::TimeZone;

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn loading_page_hides_content() {
        let dashboard = Dashboard::new(Canvas::new(), PipelineSettings::default());

        let html = render_dashboard(&dashboard, "Carbon", generated()).unwrap();

        assert!(html.contains("Loading dashboard data..."));
        assert!(html.contains("style=\"display:none;\""));
        assert!(html.contains("\"charts\":[]"));
        assert!(html.contains("\"series\":[]"));
    }

    #[test]
    fn content_page_embeds_stats_rows_and_chart_configs() {
        let mut dashboard = Dashboard::new(Canvas::new(), PipelineSettings::default());
        dashboard.render(Dataset {
            overview: vec![MetricRecord {
                metric: Some(FieldValue::from("Country")),
                value: Some(FieldValue::from("Kenya")),
            }],
            transactions: vec![TransactionRecord {
                user: Some(FieldValue::from("<script>")),
                ..TransactionRecord::default()
            }],
            ..Dataset::default()
        });

        let html = render_dashboard(&dashboard, "Carbon", generated()).unwrap();

        assert!(html.contains("<p id=\"country\">Kenya</p>"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("\"target\":\"issuancesChart\""));
        assert!(html.contains("\"easing\":\"easeInOutQuart\""));
        assert!(html.contains("style=\"display:block;\""));
        assert!(html.contains("Generated 2024-03-01 12:00 UTC"));
    }

    #[test]
    fn selection_controls_are_wired_to_chart_updates() {
        let mut dashboard = Dashboard::new(
            Canvas::new(),
            PipelineSettings {
                year_filter: YearFilterMode::Restrict,
                ..PipelineSettings::default()
            },
        );
        dashboard.render(Dataset {
            issuances: vec![IssuanceRecord {
                year: Some(FieldValue::from(2021)),
                issued_credits: Some(FieldValue::from(10)),
            }],
            ..Dataset::default()
        });

        let html = render_dashboard(&dashboard, "Carbon", generated()).unwrap();

        assert!(html.contains("<select id=\"year-filter\">"));
        assert!(html.contains("<select id=\"chart-type\">"));
        assert!(html.contains("getElementById(\"year-filter\").addEventListener(\"change\", updateCharts)"));
        assert!(html.contains("getElementById(\"chart-type\").addEventListener(\"change\", updateCharts)"));
        assert!(html.contains("\"yearFilter\":\"restrict\""));
        assert!(html.contains("\"series\":[{\"target\":\"issuancesChart\""));
        assert!(html.contains("\"standardScales\":{\"y\":{\"beginAtZero\":true"));
    }
}
