use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{CATEGORIES, YEAR_MAX, YEAR_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with load status and counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Nobel Prize Viewer");
        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading prize data…");
        } else {
            ui.label(format!(
                "{} prizes loaded, {} visible, {} repeat winner entries",
                state.prizes.len(),
                state.visible_indices.len(),
                state.repeat_laureates.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Selector bar – year/category dropdowns and the filter action
// ---------------------------------------------------------------------------

/// Render the selector row. Filtering only happens on the button press, not
/// on dropdown change, so the user can set both selectors first.
pub fn selector_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Sort by:");

        // ---- Year dropdown ----
        let year_text = state
            .selection
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Select Year".to_string());
        egui::ComboBox::from_id_salt("year_selector")
            .selected_text(year_text)
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(state.selection.year.is_none(), "Any year")
                    .clicked()
                {
                    state.selection.year = None;
                }
                for year in YEAR_MIN..YEAR_MAX {
                    if ui
                        .selectable_label(state.selection.year == Some(year), year.to_string())
                        .clicked()
                    {
                        state.selection.year = Some(year);
                    }
                }
            });

        // ---- Category dropdown ----
        let category_text = state
            .selection
            .category
            .clone()
            .unwrap_or_else(|| "Select Category".to_string());
        egui::ComboBox::from_id_salt("category_selector")
            .selected_text(category_text)
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(state.selection.category.is_none(), "Any category")
                    .clicked()
                {
                    state.selection.category = None;
                }
                for cat in CATEGORIES {
                    let selected = state.selection.category.as_deref() == Some(cat);
                    if ui.selectable_label(selected, cat).clicked() {
                        state.selection.category = Some(cat.to_string());
                    }
                }
            });

        if ui.button("Filter").clicked() {
            state.apply_filter();
        }
    });

    // ---- Transient acknowledgment banner ----
    let mut dismissed = false;
    if let Some(notice) = &state.notice {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(
                RichText::new(&notice.text)
                    .color(Color32::DARK_GREEN)
                    .strong(),
            );
            if ui.small_button("✕").clicked() {
                dismissed = true;
            }
        });
    }
    if dismissed {
        state.notice = None;
    }
}
