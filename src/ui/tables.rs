use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Central panel – the two derived tables
// ---------------------------------------------------------------------------

/// Render the "Multiple Winners" and "Prize Winners" tables.
pub fn central_tables(ui: &mut Ui, state: &AppState) {
    if !state.loading && state.prizes.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No prize data available.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Multiple Winners");
            ui.separator();
            multiple_winners_table(ui, state);

            ui.add_space(12.0);

            ui.heading("Prize Winners");
            ui.separator();
            prize_winners_table(ui, state);
        });
}

/// One row per repeat occurrence, not deduplicated: a double laureate shows
/// once per prize they appear in.
fn multiple_winners_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.repeat_laureates;

    ui.push_id("multiple_winners", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("First Name");
                });
                header.col(|ui| {
                    ui.strong("Surname");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let laureate = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&laureate.id);
                    });
                    row.col(|ui| {
                        ui.label(laureate.firstname.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(laureate.surname.as_deref().unwrap_or(""));
                    });
                });
            });
    });
}

/// One row per (visible prize, laureate) pair, in filtered order.
fn prize_winners_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<(usize, usize)> = state
        .visible_indices
        .iter()
        .flat_map(|&pi| (0..state.prizes[pi].laureates.len()).map(move |li| (pi, li)))
        .collect();

    ui.push_id("prize_winners", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Year");
                });
                header.col(|ui| {
                    ui.strong("Category");
                });
                header.col(|ui| {
                    ui.strong("First Name");
                });
                header.col(|ui| {
                    ui.strong("Surname");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let (pi, li) = rows[row.index()];
                    let prize = &state.prizes[pi];
                    let laureate = &prize.laureates[li];
                    row.col(|ui| {
                        ui.label(prize.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&prize.category);
                    });
                    row.col(|ui| {
                        ui.label(laureate.firstname.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        ui.label(laureate.surname.as_deref().unwrap_or(""));
                    });
                });
            });
    });
}
