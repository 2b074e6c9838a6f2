use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, Page};
use crate::ui::{chart, hundreds, number_line, panels, whiteboard, words};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ClassroomApp {
    pub state: AppState,
    snapshots: whiteboard::TextureCache,
}

impl ClassroomApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            snapshots: whiteboard::TextureCache::default(),
        }
    }
}

impl eframe::App for ClassroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Whiteboard resource sidebar ----
        if self.state.page == Page::Whiteboard && self.state.whiteboard.show_pips {
            egui::SidePanel::left("pips_panel")
                .default_width(260.0)
                .resizable(true)
                .show(ctx, |ui| {
                    whiteboard::pips_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => panels::home(ui, &mut self.state),
            Page::Whiteboard => whiteboard::page(ui, &mut self.state, &mut self.snapshots),
            Page::WordCloud => words::page(ui, &mut self.state),
            Page::Chart => chart::page(ui, &mut self.state),
            Page::HundredsSquare => hundreds::page(ui, &mut self.state),
            Page::NumberLine => number_line::page(ui, &mut self.state),
        });
    }
}
