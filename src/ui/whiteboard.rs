use std::collections::{HashMap, HashSet};

use eframe::egui::{
    self, Color32, ColorImage, Key, Pos2, Rect, RichText, Sense, Shape, Stroke, TextureHandle,
    TextureId, TextureOptions, Ui, Vec2,
};

use crate::data::catalog::{self, RESOURCES, ResourceKind};
use crate::data::loader;
use crate::data::whiteboard::{Item, Snapshot};
use crate::state::{AppState, Page};
use crate::ui::panels::catalog_filter;

// ---------------------------------------------------------------------------
// Snapshot textures
// ---------------------------------------------------------------------------

/// GPU textures for pinned snapshots, keyed by snapshot id.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<u64, TextureHandle>,
}

impl TextureCache {
    /// Drop textures whose snapshot left the board (cleared or undone).
    fn retain(&mut self, live: &HashSet<u64>) {
        self.textures.retain(|id, _| live.contains(id));
    }

    fn get(&mut self, ctx: &egui::Context, snapshot: &Snapshot) -> TextureId {
        self.textures
            .entry(snapshot.id)
            .or_insert_with(|| {
                let img = &snapshot.image;
                let size = [img.width() as usize, img.height() as usize];
                let pixels = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                ctx.load_texture(
                    format!("snapshot-{}", snapshot.id),
                    pixels,
                    TextureOptions::LINEAR,
                )
            })
            .id()
    }
}

// ---------------------------------------------------------------------------
// Whiteboard page
// ---------------------------------------------------------------------------

pub fn page(ui: &mut Ui, state: &mut AppState, textures: &mut TextureCache) {
    toolbar(ui, state);
    ui.separator();
    canvas(ui, state, textures);
}

fn toolbar(ui: &mut Ui, state: &mut AppState) {
    let (undo, redo) = ui.input(|i| {
        let z = i.modifiers.command && i.key_pressed(Key::Z);
        (z && !i.modifiers.shift, z && i.modifiers.shift)
    });
    let wb = &mut state.whiteboard;
    if undo {
        wb.board.undo();
    }
    if redo {
        wb.board.redo();
    }

    let mut export = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Interactive Whiteboard");
        ui.separator();

        let pips = if wb.show_pips { "Hide Pips" } else { "Show Pips" };
        if ui.button(pips).clicked() {
            wb.show_pips = !wb.show_pips;
        }

        ui.separator();
        ui.label("Pen");
        ui.color_edit_button_srgba(&mut wb.board.pen.color);
        ui.add(egui::Slider::new(&mut wb.board.pen.width, 1.0..=24.0).show_value(false));

        ui.separator();
        if ui.add_enabled(wb.board.can_undo(), egui::Button::new("Undo")).clicked() {
            wb.board.undo();
        }
        if ui.add_enabled(wb.board.can_redo(), egui::Button::new("Redo")).clicked() {
            wb.board.redo();
        }
        if ui.button("Clear").clicked() {
            wb.board.clear();
        }

        ui.separator();
        if ui.button("Export PNG…").clicked() {
            export = true;
        }
    });

    if export {
        export_png(state);
    }
}

fn canvas(ui: &mut Ui, state: &mut AppState, textures: &mut TextureCache) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let rect = response.rect;
    let origin = rect.min;
    let board = &mut state.whiteboard.board;

    textures.retain(&board.snapshot_ids().collect());

    let local = |p: Pos2| [p.x - origin.x, p.y - origin.y];
    if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() {
            board.begin_stroke(local(pos));
        } else if response.dragged() {
            board.extend_stroke(local(pos));
        } else if response.clicked() {
            board.begin_stroke(local(pos));
            board.end_stroke();
        }
    }
    if response.drag_stopped() {
        board.end_stroke();
    }

    painter.rect_filled(rect, 4.0, Color32::WHITE);
    let screen = |p: [f32; 2]| origin + Vec2::new(p[0], p[1]);

    for item in board.items() {
        match item {
            Item::Stroke(s) => paint_stroke(&painter, &s.points, s.width, s.color, screen),
            Item::Snapshot(snap) => {
                let id = textures.get(ui.ctx(), snap);
                let min = screen(snap.pos);
                let [w, h] = snap.size();
                painter.image(
                    id,
                    Rect::from_min_size(min, Vec2::new(w, h)),
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        }
    }
    if let Some(s) = board.current() {
        paint_stroke(&painter, &s.points, s.width, s.color, screen);
    }
}

fn paint_stroke(
    painter: &egui::Painter,
    points: &[[f32; 2]],
    width: f32,
    color: Color32,
    screen: impl Fn([f32; 2]) -> Pos2,
) {
    match points {
        [] => {}
        [p] => {
            painter.circle_filled(screen(*p), width / 2.0, color);
        }
        _ => {
            let pts: Vec<Pos2> = points.iter().map(|&p| screen(p)).collect();
            painter.add(Shape::line(pts, Stroke::new(width, color)));
        }
    }
}

fn export_png(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export whiteboard")
        .set_file_name("whiteboard.png")
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        let cfg = &state.config.whiteboard;
        let img = state
            .whiteboard
            .board
            .rasterize(cfg.export_width, cfg.export_height);
        match loader::save_png(&path, &img) {
            Ok(()) => {
                log::info!("Exported whiteboard to {}", path.display());
                state.status_message = None;
            }
            Err(e) => state.report_error(&e),
        }
    }
}

// ---------------------------------------------------------------------------
// Pips sidebar – pick a resource and pin it to the board
// ---------------------------------------------------------------------------

pub fn pips_panel(ui: &mut Ui, state: &mut AppState) {
    match state.whiteboard.preview {
        Some(kind) => preview(ui, state, kind),
        None => resource_list(ui, state),
    }
}

fn resource_list(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Available Pips");
    catalog_filter(ui, "pips_category", &mut state.whiteboard.filter);
    ui.separator();

    let filter = &state.whiteboard.filter;
    let found = catalog::search(&RESOURCES, &filter.query, filter.category);
    if found.is_empty() {
        ui.label(RichText::new("No resources found").weak());
        return;
    }
    let mut picked = None;
    for r in found {
        let text = format!("{}\n{}", r.title, r.description);
        if ui.selectable_label(false, text).clicked() {
            picked = Some(r.kind);
        }
    }
    if picked.is_some() {
        state.whiteboard.preview = picked;
    }
}

fn preview(ui: &mut Ui, state: &mut AppState, kind: ResourceKind) {
    let Some(resource) = RESOURCES.iter().find(|r| r.kind == kind) else {
        state.whiteboard.preview = None;
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(resource.title);
        if ui.small_button("Back").clicked() {
            state.whiteboard.preview = None;
        }
    });
    ui.label(resource.description);
    ui.add_space(6.0);
    ui.label(RichText::new(summary(state, kind)).weak());
    ui.add_space(6.0);

    if ui.button(format!("Open {}", resource.title)).clicked() {
        state.navigate(Page::from(kind));
        return;
    }
    if kind != ResourceKind::WordCloud && ui.button("Insert into Whiteboard").clicked() {
        let offset = 24.0 * state.whiteboard.board.items().len() as f32;
        state.insert_snapshot(kind, [16.0 + offset % 240.0, 16.0 + offset % 240.0]);
    }
}

/// One-line description of the live widget state that would be pinned.
fn summary(state: &AppState, kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Chart => format!("{} data points", state.chart.table.len()),
        ResourceKind::HundredsSquare => {
            let legend = state.square.legend();
            format!(
                "{} tables on, {} numbers selected",
                legend.tables.len(),
                legend.selected.len()
            )
        }
        ResourceKind::NumberLine => format!(
            "{} to {} in steps of {}",
            state.line.min(),
            state.line.max(),
            state.line.interval()
        ),
        ResourceKind::WordCloud => format!("{} distinct words", state.words.frequencies().len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::raster;
    use crate::data::whiteboard::Whiteboard;

    #[test]
    fn texture_cache_drops_snapshots_that_left_the_board() {
        let ctx = egui::Context::default();
        let mut board = Whiteboard::default();
        let img = raster::blank(2, 2, Color32::RED);
        board.insert_snapshot(ResourceKind::Chart, img.clone(), [0.0, 0.0]);
        board.insert_snapshot(ResourceKind::Chart, img, [4.0, 4.0]);

        let mut cache = TextureCache::default();
        for item in board.items() {
            if let Item::Snapshot(snap) = item {
                cache.get(&ctx, snap);
            }
        }
        assert_eq!(cache.textures.len(), 2);

        board.undo();
        cache.retain(&board.snapshot_ids().collect());
        assert_eq!(cache.textures.len(), 1);

        board.clear();
        cache.retain(&board.snapshot_ids().collect());
        assert!(cache.textures.is_empty());
    }
}
