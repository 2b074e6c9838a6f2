use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, Ui, Vec2};

use crate::color;
use crate::data::number_line::{HighlightMode, VALUE_LIMIT};
use crate::state::AppState;

const MARGIN: f32 = 40.0;

// ---------------------------------------------------------------------------
// Number line page
// ---------------------------------------------------------------------------

pub fn page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Interactive Number Line");
    ui.label(
        "Adjust the range and interval, click on the line to highlight numbers, \
         or highlight every even or odd number.",
    );
    ui.add_space(8.0);

    range_inputs(ui, state);
    ui.add_space(8.0);
    line_view(ui, state);
    ui.add_space(8.0);
    buttons(ui, state);
}

fn range_inputs(ui: &mut Ui, state: &mut AppState) {
    let line = &mut state.line;
    let (mut min, mut max, mut interval) = (line.min(), line.max(), line.interval());
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Minimum Value");
        ui.add(egui::DragValue::new(&mut min).range(-VALUE_LIMIT..=VALUE_LIMIT));
        ui.label("Maximum Value");
        ui.add(egui::DragValue::new(&mut max).range(-VALUE_LIMIT..=VALUE_LIMIT));
        ui.label("Interval");
        ui.add(egui::DragValue::new(&mut interval).range(1..=VALUE_LIMIT));
    });
    if (min, max) != (line.min(), line.max()) {
        line.set_range(min, max);
    }
    if interval != line.interval() {
        line.set_interval(interval);
    }
    if line.is_degenerate() {
        ui.label(RichText::new("Maximum is below minimum: nothing to show").color(Color32::RED));
    }
}

fn line_view(ui: &mut Ui, state: &mut AppState) {
    let size = Vec2::new(ui.available_width().min(900.0), 120.0);
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let rect = response.rect;
    let width = (rect.width() - 2.0 * MARGIN).max(1.0);
    let axis_y = rect.center().y;
    let at = |x: f64| Pos2::new(rect.left() + MARGIN + x as f32, axis_y);

    if let Some(pos) = response.interact_pointer_pos() {
        if response.clicked() {
            let x = (pos.x - rect.left() - MARGIN) as f64;
            if let Some(v) = state.line.click(x, width as f64) {
                log::debug!("number line toggled {v}");
            }
        }
    }

    let render = state.line.render(width as f64);
    if render.is_empty() {
        return;
    }

    let ink = ui.visuals().text_color();
    painter.line_segment([at(0.0), at(width as f64)], Stroke::new(2.0, ink));
    for t in &render.ticks {
        let p = at(t.x);
        painter.line_segment([p, p + Vec2::new(0.0, 6.0)], Stroke::new(1.0, ink));
        painter.text(
            p + Vec2::new(0.0, 15.0),
            Align2::CENTER_TOP,
            t.value.to_string(),
            FontId::proportional(12.0),
            ink,
        );
    }

    let parity = match render.mode {
        HighlightMode::Odd => color::ODD_HIGHLIGHT,
        _ => color::EVEN_HIGHLIGHT,
    };
    for m in &render.parity_marks {
        painter.circle_filled(at(m.x), 5.0, parity);
    }
    for m in &render.on_axis {
        painter.circle_filled(at(m.x), 6.0, color::SELECTED_MARKER);
    }
    for m in &render.off_axis {
        let p = at(m.x);
        painter.line_segment(
            [p, p + Vec2::new(0.0, 10.0)],
            Stroke::new(1.0, color::SELECTED_MARKER),
        );
        painter.text(
            p + Vec2::new(0.0, 30.0),
            Align2::CENTER_TOP,
            &m.label,
            FontId::proportional(12.0),
            color::SELECTED_MARKER,
        );
    }
}

fn buttons(ui: &mut Ui, state: &mut AppState) {
    let mode = state.line.mode();
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .selectable_label(mode == HighlightMode::Even, "Highlight Even")
            .clicked()
        {
            state.line.toggle_even();
        }
        if ui
            .selectable_label(mode == HighlightMode::Odd, "Highlight Odd")
            .clicked()
        {
            state.line.toggle_odd();
        }
        if ui.button("Clear All").clicked() {
            state.line.clear();
        }
    });
}
