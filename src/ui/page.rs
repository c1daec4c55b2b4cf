//! In-memory model of the dashboard document: the elements the pipeline
//! writes into and the two selection controls it reads back.

use crate::models::ChartType;
use serde::Serialize;

pub const YEAR_FILTER_ID: &str = "year-filter";
pub const CHART_TYPE_ID: &str = "chart-type";

pub const ALL_YEARS: &str = "all";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "message", rename_all = "lowercase")]
pub enum LoadPhase {
    Loading,
    Content,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    Country,
    Category,
    CreditsIssued,
    CreditsRetired,
}

impl StatSlot {
    pub const ALL: [StatSlot; 4] = [
        StatSlot::Country,
        StatSlot::Category,
        StatSlot::CreditsIssued,
        StatSlot::CreditsRetired,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            StatSlot::Country => "country",
            StatSlot::Category => "category",
            StatSlot::CreditsIssued => "credits-issued",
            StatSlot::CreditsRetired => "credits-retired",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatSlot::Country => "Country",
            StatSlot::Category => "Category",
            StatSlot::CreditsIssued => "Credits Issued",
            StatSlot::CreditsRetired => "Credits Retired",
        }
    }
}

/// Text of the four summary cards. `None` means never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatSlots {
    pub country: Option<String>,
    pub category: Option<String>,
    pub credits_issued: Option<String>,
    pub credits_retired: Option<String>,
}

impl StatSlots {
    fn slot_mut(&mut self, slot: StatSlot) -> &mut Option<String> {
        match slot {
            StatSlot::Country => &mut self.country,
            StatSlot::Category => &mut self.category,
            StatSlot::CreditsIssued => &mut self.credits_issued,
            StatSlot::CreditsRetired => &mut self.credits_retired,
        }
    }

    pub fn get(&self, slot: StatSlot) -> Option<&str> {
        match slot {
            StatSlot::Country => self.country.as_deref(),
            StatSlot::Category => self.category.as_deref(),
            StatSlot::CreditsIssued => self.credits_issued.as_deref(),
            StatSlot::CreditsRetired => self.credits_retired.as_deref(),
        }
    }

    pub fn set(&mut self, slot: StatSlot, text: String) {
        *self.slot_mut(slot) = Some(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    pub id: &'static str,
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    pub fn new(id: &'static str, default: SelectOption) -> Self {
        Self {
            id,
            options: vec![default],
            selected: 0,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn append(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    pub fn reset(&mut self) {
        self.options.truncate(1);
        self.selected = 0;
    }

    pub fn value(&self) -> &str {
        &self.options[self.selected].value
    }

    /// Select the first option carrying `value`. Returns false when no
    /// option matches, leaving the selection unchanged.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn append(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub phase: LoadPhase,
    pub stats: StatSlots,
    pub year_filter: SelectControl,
    pub chart_type: SelectControl,
    pub transactions: TableBody,
}

impl Page {
    pub fn new() -> Self {
        let mut chart_type = SelectControl::new(
            CHART_TYPE_ID,
            SelectOption::new(ChartType::Bar.as_str(), ChartType::Bar.label()),
        );
        for t in [ChartType::Line, ChartType::Doughnut] {
            chart_type.append(SelectOption::new(t.as_str(), t.label()));
        }

        Self {
            phase: LoadPhase::Loading,
            stats: StatSlots::default(),
            year_filter: SelectControl::new(
                YEAR_FILTER_ID,
                SelectOption::new(ALL_YEARS, "All Years"),
            ),
            chart_type,
            transactions: TableBody::default(),
        }
    }

    pub fn show_content(&mut self) {
        self.phase = LoadPhase::Content;
    }

    pub fn show_error(&mut self) {
        self.phase = LoadPhase::Failed(LOAD_ERROR_MESSAGE.to_string());
    }

    pub fn content_visible(&self) -> bool {
        self.phase == LoadPhase::Content
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
