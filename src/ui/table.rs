use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::state::AppState;

const HEADERS: [&str; 6] = [
    "Flight",
    "Launch Site",
    "Payload Mass (kg)",
    "Outcome",
    "Booster Version",
    "Category",
];

/// Rows behind the scatter chart, in dataset order.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let indices = &state.correlation.indices;
    if indices.is_empty() {
        ui.label("No launches in the selected payload range.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .max_scroll_height(260.0)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let Some(rec) = state.dataset.record(indices[row.index()]) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.colored_label(outcome_color(rec.outcome), rec.outcome.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or("–"));
                });
                row.col(|ui| {
                    ui.colored_label(
                        state.booster_colors.color_for(&rec.booster_category),
                        &rec.booster_category,
                    );
                });
            });
        });
}
