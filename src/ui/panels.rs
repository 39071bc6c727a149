use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::{
    PAYLOAD_SLIDER_MARK_STEP, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use crate::data::filter::{site_options, PayloadRange, SiteFilter};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: site selector, payload range, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_selector(ui, state);
            ui.add_space(8.0);
            ui.separator();

            payload_selector(ui, state);
            ui.add_space(8.0);
            ui.separator();

            booster_legend(ui, state);
        });
}

fn site_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch site");
    ui.add(
        egui::TextEdit::singleline(&mut state.site_query)
            .hint_text("Select a Launch Site here"),
    );

    // Collect first so the state can be mutated inside the combo box.
    let options: Vec<String> = site_options(&state.dataset, &state.site_query)
        .into_iter()
        .map(str::to_string)
        .collect();
    let current = state.selection.site.clone();

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteFilter::All, "All Sites")
                .clicked()
            {
                state.set_site(SiteFilter::All);
            }
            for site in &options {
                let selected = matches!(&current, SiteFilter::Site(name) if name == site);
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site(SiteFilter::from_value(site));
                }
            }
        });
}

fn payload_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (Kg):");

    let PayloadRange { mut low, mut high } = state.selection.payload;
    let domain = PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, domain.clone())
                .step_by(PAYLOAD_SLIDER_STEP)
                .integer()
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, domain)
                .step_by(PAYLOAD_SLIDER_STEP)
                .integer()
                .text("max"),
        )
        .changed();

    // Two handles of one range: never let them cross.
    if low_changed && low > high {
        high = low;
    } else if high_changed && high < low {
        low = high;
    }

    if low_changed || high_changed {
        state.set_payload(PayloadRange::new(low, high));
    }

    slider_marks(ui, low, high);

    let (min, max) = state.dataset.payload_bounds();
    ui.label(
        RichText::new(format!("Observed: {min:.0} – {max:.0} kg"))
            .small()
            .weak(),
    );
}

/// Tick values shown under the payload sliders, both ends included.
pub fn slider_mark_values() -> Vec<f64> {
    let n = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_MARK_STEP).floor() as usize;
    (0..=n)
        .map(|i| PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_MARK_STEP)
        .collect()
}

/// Scale with labelled ticks and the selected window highlighted.
fn slider_marks(ui: &mut Ui, low: f64, high: f64) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 28.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let span = PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN;
    let x_of = |v: f64| {
        let t = ((v - PAYLOAD_SLIDER_MIN) / span).clamp(0.0, 1.0) as f32;
        rect.left() + 6.0 + t * (rect.width() - 12.0)
    };
    let axis_y = rect.top() + 6.0;
    let stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());

    painter.line_segment(
        [egui::pos2(x_of(PAYLOAD_SLIDER_MIN), axis_y), egui::pos2(x_of(PAYLOAD_SLIDER_MAX), axis_y)],
        stroke,
    );
    if low <= high {
        painter.line_segment(
            [egui::pos2(x_of(low), axis_y), egui::pos2(x_of(high), axis_y)],
            egui::Stroke::new(3.0, ui.visuals().selection.bg_fill),
        );
    }
    for mark in slider_mark_values() {
        let x = x_of(mark);
        painter.line_segment([egui::pos2(x, axis_y - 3.0), egui::pos2(x, axis_y + 3.0)], stroke);
        painter.text(
            egui::pos2(x, axis_y + 5.0),
            egui::Align2::CENTER_TOP,
            format!("{mark:.0}"),
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }
}

fn booster_legend(ui: &mut Ui, state: &AppState) {
    ui.strong("Booster Version Category");
    for (label, color) in state.booster_colors.legend_entries() {
        ui.horizontal(|ui: &mut Ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            ui.label(label);
        });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.correlation.points.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Launch table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                // The current dataset stays active.
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart data")
        .set_file_name("launch_charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match crate::export::export_charts(&path, state) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_marks_every_2500_kg() {
        assert_eq!(slider_mark_values(), [0.0, 2500.0, 5000.0, 7500.0, 10_000.0]);
    }
}
