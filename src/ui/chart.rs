use std::f32::consts::PI;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

use crate::color::{self, generate_palette};
use crate::data::chart::{ChartKind, pie_slices, value_bounds};
use crate::data::loader;
use crate::data::points::DataPoint;
use crate::state::AppState;

/// Row interactions, applied after the table has been drawn.
enum RowAction {
    Edit(usize),
    Remove(usize),
    Save,
    Cancel,
}

// ---------------------------------------------------------------------------
// Chart page
// ---------------------------------------------------------------------------

pub fn page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart Generator");
    ui.add_space(6.0);

    ui.columns(2, |columns| {
        controls(&mut columns[0], state);
        preview(&mut columns[1], state);
    });
}

fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Chart Type");
    egui::ComboBox::from_id_salt("chart_kind")
        .selected_text(state.chart.kind.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                ui.selectable_value(&mut state.chart.kind, kind, kind.to_string());
            }
        });

    ui.separator();
    ui.strong("Data Points");
    if let Some(action) = data_table(ui, state) {
        match action {
            RowAction::Edit(i) => state.begin_edit(i),
            RowAction::Remove(i) => state.remove_point(i),
            RowAction::Save => state.commit_edit(),
            RowAction::Cancel => state.chart.table.cancel_edit(),
        }
    }

    ui.separator();
    ui.strong("Add New Data Point");
    ui.horizontal(|ui: &mut Ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.chart.new_label)
                .hint_text("Enter label")
                .desired_width(120.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.chart.new_value)
                .hint_text("Enter value")
                .desired_width(80.0),
        );
    });
    if ui.button("Add Data Point").clicked() {
        state.add_point();
    }

    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Import…").clicked() {
            import_points(state);
        }
        if ui.button("Export…").clicked() {
            export_points(state);
        }
    });
}

fn data_table(ui: &mut Ui, state: &mut AppState) -> Option<RowAction> {
    let points = state.chart.table.points().to_vec();
    let mut edit = state.chart.table.editing_mut();
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(260.0)
        .column(Column::remainder().at_least(80.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Label");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for (i, point) in points.iter().enumerate() {
                body.row(24.0, |mut row| match edit.as_deref_mut() {
                    Some(session) if session.index == i => {
                        row.col(|ui| {
                            ui.text_edit_singleline(&mut session.label);
                        });
                        row.col(|ui| {
                            ui.text_edit_singleline(&mut session.value);
                        });
                        row.col(|ui| {
                            if ui.small_button("Save").clicked() {
                                action = Some(RowAction::Save);
                            }
                            if ui.small_button("Cancel").clicked() {
                                action = Some(RowAction::Cancel);
                            }
                        });
                    }
                    _ => {
                        row.col(|ui| {
                            ui.label(&point.label);
                        });
                        row.col(|ui| {
                            ui.label(point.value.to_string());
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                action = Some(RowAction::Edit(i));
                            }
                            if ui.small_button("Remove").clicked() {
                                action = Some(RowAction::Remove(i));
                            }
                        });
                    }
                });
            }
        });

    action
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

fn preview(ui: &mut Ui, state: &AppState) {
    ui.strong("Chart Preview");
    if state.chart.table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Add a data point to see the chart");
        });
        return;
    }
    let points = state.chart.table.points();
    match state.chart.kind {
        ChartKind::Bar | ChartKind::Line => xy_plot(ui, points, state.chart.kind),
        ChartKind::Pie => pie_chart(ui, points),
    }
}

/// Bar or line chart over one x slot per point, labels on the x axis.
fn xy_plot(ui: &mut Ui, points: &[DataPoint], kind: ChartKind) {
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let (lo, hi) = value_bounds(points);

    Plot::new("chart_plot")
        .height(360.0)
        .include_y(lo)
        .include_y(hi)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > f64::EPSILON || slot < 0.0 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| match kind {
            ChartKind::Line => {
                let series: PlotPoints = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| [i as f64, p.value])
                    .collect();
                let dots: PlotPoints = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| [i as f64, p.value])
                    .collect();
                plot_ui.line(Line::new(series).color(color::SERIES).width(2.0));
                plot_ui.points(Points::new(dots).radius(5.0).color(color::SERIES));
            }
            _ => {
                let bars = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        Bar::new(i as f64, p.value)
                            .name(&p.label)
                            .width(0.9)
                            .fill(color::SERIES)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(color::SERIES));
            }
        });
}

fn pie_chart(ui: &mut Ui, points: &[DataPoint]) {
    let palette = generate_palette(points.len());
    let size = Vec2::new(ui.available_width(), 360.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let radius = (rect.width().min(rect.height()) / 2.0 - 40.0).max(10.0);
    let center = Pos2::new(rect.left() + radius + 40.0, rect.center().y);
    let at = |angle: f32, r: f32| center + Vec2::new(angle.sin(), -angle.cos()) * r;

    for slice in pie_slices(points) {
        if slice.is_empty() {
            continue;
        }
        let fill = color::cycled(&palette, slice.index);
        let (start, end) = (slice.start as f32, slice.end as f32);
        let segments = ((end - start) / (PI / 90.0)).ceil().max(1.0) as usize;
        for k in 0..segments {
            let a = start + (end - start) * k as f32 / segments as f32;
            let b = start + (end - start) * (k + 1) as f32 / segments as f32;
            painter.add(Shape::convex_polygon(
                vec![center, at(a, radius), at(b, radius)],
                fill,
                Stroke::NONE,
            ));
        }
        painter.text(
            at(slice.mid() as f32, radius * 0.6),
            Align2::CENTER_CENTER,
            &points[slice.index].label,
            FontId::proportional(12.0),
            Color32::BLACK,
        );
    }

    // Legend to the right of the pie.
    let legend_x = center.x + radius + 30.0;
    for (i, p) in points.iter().enumerate() {
        let y = rect.top() + 20.0 + i as f32 * 20.0;
        painter.rect_filled(
            egui::Rect::from_min_size(Pos2::new(legend_x, y), Vec2::splat(14.0)),
            2.0,
            color::cycled(&palette, i),
        );
        painter.text(
            Pos2::new(legend_x + 20.0, y + 7.0),
            Align2::LEFT_CENTER,
            format!("{}: {}", p.label, p.value),
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }
}

// ---------------------------------------------------------------------------
// Import / export
// ---------------------------------------------------------------------------

fn import_points(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Import data points")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_points(&path) {
            Ok(points) => state.replace_points(points),
            Err(e) => state.report_error(&e.context(format!("importing {}", path.display()))),
        }
    }
}

fn export_points(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export data points")
        .set_file_name("data.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match loader::save_points(&path, state.chart.table.points()) {
            Ok(()) => {
                log::info!("Exported {} points to {}", state.chart.table.len(), path.display());
                state.status_message = None;
            }
            Err(e) => state.report_error(&e),
        }
    }
}
