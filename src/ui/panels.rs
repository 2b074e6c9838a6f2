use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::catalog::{self, Category, RESOURCES};
use crate::state::{AppState, CatalogFilter, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / navigation bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui.button(RichText::new("Rusty Classroom").strong()).clicked() {
            state.navigate(Page::Home);
        }

        ui.separator();

        ui.menu_button("Resources", |ui: &mut Ui| {
            for page in Page::ALL {
                if ui.selectable_label(state.page == page, page.to_string()).clicked() {
                    state.navigate(page);
                    ui.close_menu();
                }
            }
        });

        ui.separator();
        ui.label(state.page.to_string());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Search box + category selector, shared by Home and the whiteboard sidebar
// ---------------------------------------------------------------------------

pub fn catalog_filter(ui: &mut Ui, id: &str, filter: &mut CatalogFilter) {
    ui.add(egui::TextEdit::singleline(&mut filter.query).hint_text("Search resources..."));

    let selected = filter
        .category
        .map_or_else(|| "All categories".to_string(), |c| c.to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut filter.category, None, "All categories");
            for c in [Category::Math, Category::Language] {
                ui.selectable_value(&mut filter.category, Some(c), c.to_string());
            }
        });
}

// ---------------------------------------------------------------------------
// Home page – resource catalog
// ---------------------------------------------------------------------------

pub fn home(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Educational Resources");
    ui.add_space(6.0);

    ui.horizontal(|ui: &mut Ui| {
        catalog_filter(ui, "home_category", &mut state.home);
    });
    ui.separator();

    let found = catalog::search(&RESOURCES, &state.home.query, state.home.category);
    if found.is_empty() {
        ui.label("No resources found");
        return;
    }

    let mut open = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for r in found {
                ui.group(|ui: &mut Ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui: &mut Ui| {
                        ui.strong(r.title);
                        ui.label(RichText::new(r.category.to_string()).weak());
                    });
                    ui.label(r.description);
                    if ui.button("Open").clicked() {
                        open = Some(Page::from(r.kind));
                    }
                });
            }
            ui.add_space(8.0);
            if ui.button("Open the whiteboard").clicked() {
                open = Some(Page::Whiteboard);
            }
        });

    if let Some(page) = open {
        state.navigate(page);
    }
}
