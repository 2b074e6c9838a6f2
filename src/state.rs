use std::fmt;

use crate::config::AppConfig;
use crate::data::catalog::{Category, ResourceKind};
use crate::data::chart::ChartKind;
use crate::data::hundreds::HundredsSquare;
use crate::data::number_line::NumberLine;
use crate::data::points::{DataPoint, DataTable, EditError};
use crate::data::raster;
use crate::data::whiteboard::{Pen, Whiteboard};
use crate::data::words::{WordCloud, WordScale};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Whiteboard,
    WordCloud,
    Chart,
    HundredsSquare,
    NumberLine,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Whiteboard,
        Page::WordCloud,
        Page::Chart,
        Page::HundredsSquare,
        Page::NumberLine,
    ];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "All Resources",
            Page::Whiteboard => "Whiteboard",
            Page::WordCloud => "Word Cloud",
            Page::Chart => "Chart",
            Page::HundredsSquare => "Hundreds Square",
            Page::NumberLine => "Number Line",
        };
        write!(f, "{name}")
    }
}

impl From<ResourceKind> for Page {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::WordCloud => Page::WordCloud,
            ResourceKind::Chart => Page::Chart,
            ResourceKind::HundredsSquare => Page::HundredsSquare,
            ResourceKind::NumberLine => Page::NumberLine,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-page state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ChartPage {
    pub table: DataTable,
    pub kind: ChartKind,
    pub new_label: String,
    pub new_value: String,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub query: String,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default)]
pub struct WhiteboardPage {
    pub board: Whiteboard,
    pub show_pips: bool,
    pub filter: CatalogFilter,
    /// Resource previewed in the pips sidebar.
    pub preview: Option<ResourceKind>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub page: Page,
    pub home: CatalogFilter,
    pub chart: ChartPage,
    pub words: WordCloud,
    pub word_scale: WordScale,
    pub square: HundredsSquare,
    pub line: NumberLine,
    pub whiteboard: WhiteboardPage,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let nl = &config.number_line;
        let whiteboard = WhiteboardPage {
            board: Whiteboard::with_pen(Pen {
                width: config.whiteboard.pen_width,
                ..Pen::default()
            }),
            ..Default::default()
        };
        Self {
            page: Page::Home,
            home: CatalogFilter::default(),
            chart: ChartPage::default(),
            words: WordCloud::default(),
            word_scale: config.word_cloud.scale(),
            square: HundredsSquare::default(),
            line: NumberLine::new(nl.min, nl.max, nl.interval),
            whiteboard,
            status_message: None,
            config,
        }
    }

    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            log::debug!("navigate {} -> {}", self.page, page);
        }
        self.page = page;
        self.status_message = None;
    }

    fn report(&mut self, action: &str, err: &EditError) {
        log::warn!("{action} rejected: {err}");
        self.status_message = Some(format!("{action}: {err}"));
    }

    pub fn report_error(&mut self, err: &anyhow::Error) {
        log::error!("{err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }

    // -- chart page --

    /// Add the point typed into the form; the form clears on success.
    pub fn add_point(&mut self) {
        let ChartPage {
            table,
            new_label,
            new_value,
            ..
        } = &mut self.chart;
        match table.add(new_label, new_value) {
            Ok(()) => {
                new_label.clear();
                new_value.clear();
                self.status_message = None;
            }
            Err(e) => self.report("Add data point", &e),
        }
    }

    pub fn remove_point(&mut self, index: usize) {
        if let Err(e) = self.chart.table.remove(index) {
            self.report("Remove data point", &e);
        }
    }

    pub fn begin_edit(&mut self, index: usize) {
        if let Err(e) = self.chart.table.begin_edit(index) {
            self.report("Edit data point", &e);
        }
    }

    pub fn commit_edit(&mut self) {
        match self.chart.table.commit_buffers() {
            Ok(()) => self.status_message = None,
            Err(e) => self.report("Save data point", &e),
        }
    }

    pub fn replace_points(&mut self, points: Vec<DataPoint>) {
        log::info!("Loaded {} data points", points.len());
        self.chart.table.replace(points);
        self.status_message = None;
    }

    // -- word cloud page --

    pub fn generate_words(&mut self) {
        if self.words.submit() {
            log::info!(
                "word cloud: {} words, {} distinct",
                self.words.word_count(),
                self.words.frequencies().len()
            );
        }
    }

    // -- whiteboard page --

    /// Render the live state of `kind` and pin it to the board.
    pub fn insert_snapshot(&mut self, kind: ResourceKind, pos: [f32; 2]) -> bool {
        let image = match kind {
            ResourceKind::HundredsSquare => raster::hundreds_square(&self.square, 24),
            ResourceKind::NumberLine => raster::number_line(&self.line, 480, 80),
            ResourceKind::Chart => raster::bar_chart(self.chart.table.points(), 400, 300),
            ResourceKind::WordCloud => {
                self.status_message =
                    Some("Word clouds open on their own page and cannot be pinned".to_string());
                return false;
            }
        };
        self.whiteboard.board.insert_snapshot(kind, image, pos);
        self.whiteboard.preview = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_clears_form_only_on_success() {
        let mut state = AppState::default();
        state.chart.new_label = "F".into();
        state.chart.new_value = "oops".into();
        state.add_point();
        assert_eq!(state.chart.table.len(), 5);
        assert_eq!(state.chart.new_label, "F");
        assert!(state.status_message.is_some());

        state.chart.new_value = "7".into();
        state.add_point();
        assert_eq!(state.chart.table.len(), 6);
        assert!(state.chart.new_label.is_empty());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_remove_reports_status() {
        let mut state = AppState::default();
        state.remove_point(42);
        assert_eq!(state.chart.table.len(), 5);
        assert!(state.status_message.as_deref().unwrap_or("").contains("42"));
    }

    #[test]
    fn number_line_uses_config_defaults() {
        let mut config = AppConfig::default();
        config.number_line.max = 20;
        config.number_line.interval = 0;
        let state = AppState::new(config);
        assert_eq!(state.line.max(), 20);
        assert_eq!(state.line.interval(), 1);
    }

    #[test]
    fn snapshots_land_on_the_whiteboard() {
        let mut state = AppState::default();
        state.whiteboard.preview = Some(ResourceKind::HundredsSquare);
        assert!(state.insert_snapshot(ResourceKind::HundredsSquare, [0.0, 0.0]));
        assert!(state.insert_snapshot(ResourceKind::Chart, [10.0, 10.0]));
        assert!(!state.insert_snapshot(ResourceKind::WordCloud, [0.0, 0.0]));
        assert_eq!(state.whiteboard.board.items().len(), 2);
        assert!(state.whiteboard.preview.is_none());
    }

    #[test]
    fn oversized_number_line_config_is_clamped_before_snapshot() {
        let config = AppConfig::from_json(
            r#"{ "number_line": { "min": -1000000000, "max": 1000000000 } }"#,
        )
        .unwrap();
        let mut state = AppState::new(config);
        assert_eq!(state.line.min(), -crate::data::number_line::VALUE_LIMIT);
        assert_eq!(state.line.max(), crate::data::number_line::VALUE_LIMIT);
        assert!(state.insert_snapshot(ResourceKind::NumberLine, [0.0, 0.0]));
    }

    #[test]
    fn navigation_clears_status() {
        let mut state = AppState::default();
        state.status_message = Some("old".into());
        state.navigate(Page::from(ResourceKind::NumberLine));
        assert_eq!(state.page, Page::NumberLine);
        assert!(state.status_message.is_none());
    }
}
