use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::{cycled, generate_palette};
use crate::data::loader;
use crate::data::words::weighted_words;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Word cloud page
// ---------------------------------------------------------------------------

pub fn page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Word Cloud Generator");
    ui.label("Enter a list of words separated by commas to generate a word cloud.");

    ui.add(
        egui::TextEdit::multiline(&mut state.words.input)
            .hint_text("Enter words separated by commas...")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Generate Word Cloud").clicked() {
            state.generate_words();
        }
        if ui.button("Load words…").clicked() {
            load_words(state);
        }
    });

    ui.separator();
    cloud(ui, state);
}

/// Words flow left to right, sized by frequency; egui handles the wrapping.
fn cloud(ui: &mut Ui, state: &AppState) {
    let words = weighted_words(state.words.frequencies(), state.word_scale);
    if words.is_empty() {
        ui.label("No words yet.");
        return;
    }
    let palette = generate_palette(words.len().min(10));

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                for (i, w) in words.iter().enumerate() {
                    ui.label(
                        RichText::new(&w.text)
                            .size(w.size)
                            .strong()
                            .color(cycled(&palette, i)),
                    )
                    .on_hover_text(format!("{} × {}", w.text, w.count));
                }
            });
        });
}

fn load_words(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load word list")
        .add_filter("Text", &["txt", "csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_words(&path) {
            Ok(words) => {
                log::info!("Loaded {} words from {}", words.len(), path.display());
                state.words.set_words(words);
                state.status_message = None;
            }
            Err(e) => state.report_error(&e),
        }
    }
}
