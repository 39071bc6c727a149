use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::bindings::correlation_subset;
use crate::state::AppState;

/// Rows behind the correlation chart, in dataset order.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let rows = correlation_subset(&state.dataset, &state.selection);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "Booster Version Category", "class"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", rec.payload_kg));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.booster);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(rec.outcome.to_string());
                });
            });
        });
}
