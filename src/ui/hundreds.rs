use eframe::egui::{self, Color32, RichText, Ui, Vec2};

use crate::data::hundreds::SQUARE_SIZE;
use crate::state::AppState;

const CELL: f32 = 36.0;

// ---------------------------------------------------------------------------
// Hundreds square page
// ---------------------------------------------------------------------------

pub fn page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Hundreds Square");
    ui.label(
        "Explore number patterns and times tables. Click on individual numbers to \
         highlight them or use the controls to highlight times tables.",
    );
    ui.add_space(8.0);

    ui.horizontal_top(|ui: &mut Ui| {
        grid(ui, state);
        ui.add_space(16.0);
        ui.vertical(|ui: &mut Ui| controls(ui, state));
    });
}

fn grid(ui: &mut Ui, state: &mut AppState) {
    let mut clicked = None;
    egui::Grid::new("hundreds_grid")
        .spacing(Vec2::splat(2.0))
        .show(ui, |ui: &mut Ui| {
            for n in 1..=SQUARE_SIZE {
                let text = RichText::new(n.to_string()).monospace();
                let button = match state.square.color_for(n) {
                    Some(fill) => egui::Button::new(text.color(Color32::WHITE)).fill(fill),
                    None => egui::Button::new(text),
                };
                if ui.add_sized([CELL, CELL], button).clicked() {
                    clicked = Some(n);
                }
                if n % 10 == 0 {
                    ui.end_row();
                }
            }
        });
    if let Some(n) = clicked {
        state.square.toggle_number(n);
    }
}

fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Times Tables");
    let mut toggled = None;
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for f in state.square.filters() {
            let label = format!("{}x", f.multiplier);
            let button = if f.active {
                egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(f.color)
            } else {
                egui::Button::new(label)
            };
            if ui.add(button).clicked() {
                toggled = Some(f.multiplier);
            }
        }
    });
    if let Some(m) = toggled {
        state.square.toggle_table(m);
    }

    ui.separator();
    ui.strong("Legend");
    let legend = state.square.legend();
    for (multiplier, color) in &legend.tables {
        ui.horizontal(|ui: &mut Ui| {
            swatch(ui, *color);
            ui.label(format!("{multiplier}x table"));
        });
    }
    if !legend.selected.is_empty() {
        let list: Vec<String> = legend.selected.iter().map(u32::to_string).collect();
        ui.horizontal_wrapped(|ui: &mut Ui| {
            swatch(ui, crate::color::MANUAL_SELECTION);
            ui.label(format!("Manually selected: {}", list.join(", ")));
        });
        if ui.small_button("Clear Selected").clicked() {
            state.square.clear_selected();
        }
    }

    ui.add_space(12.0);
    if ui.button(RichText::new("Clear All").color(Color32::RED)).clicked() {
        state.square.clear_all();
    }
}

fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(14.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 7.0, color);
}
