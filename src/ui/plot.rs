use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::outcome_color;
use crate::data::aggregate::Slice;
use crate::data::filter::SiteFilter;
use crate::state::AppState;

const EMPTY_TEXT: &str = "No launches match the current selection";

// ---------------------------------------------------------------------------
// Proportion (pie) chart
// ---------------------------------------------------------------------------

/// Start/end angles in radians for each slice, clockwise from 12 o'clock.
/// Zero-valued slices get an empty wedge; an all-zero chart gets no wedges.
pub fn pie_wedges(slices: &[Slice]) -> Vec<(f32, f32)> {
    let total: usize = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0_f32;
    slices
        .iter()
        .map(|s| {
            let sweep = s.value as f32 / total as f32 * TAU;
            let wedge = (start, start + sweep);
            start += sweep;
            wedge
        })
        .collect()
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    // Angle 0 points up, increasing clockwise.
    center + radius * egui::vec2(angle.sin(), -angle.cos())
}

/// Render the proportion chart for the current site selection.
pub fn proportion_chart(ui: &mut Ui, state: &AppState) {
    let chart = &state.proportion;
    ui.heading(&chart.title);

    let wedges = pie_wedges(&chart.slices);
    if wedges.is_empty() {
        ui.label(EMPTY_TEXT);
        return;
    }

    let color_of = |label: &str| match state.selection.site {
        SiteFilter::All => state.site_colors.color_for(label),
        SiteFilter::Site(_) => outcome_color(label).unwrap_or(Color32::GRAY),
    };
    let total = chart.total() as f32;

    ui.horizontal(|ui: &mut Ui| {
        let side = ui.available_height().min(ui.available_width() * 0.5).max(120.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side * 0.45;

        for (slice, &(start, end)) in chart.slices.iter().zip(&wedges) {
            if end <= start {
                continue;
            }
            // Triangle fan keeps every polygon convex.
            let color = color_of(&slice.label);
            let steps = ((end - start) / (TAU / 96.0)).ceil().max(1.0) as usize;
            let step = (end - start) / steps as f32;
            for i in 0..steps {
                let a = start + step * i as f32;
                painter.add(Shape::convex_polygon(
                    vec![
                        center,
                        arc_point(center, radius, a),
                        arc_point(center, radius, a + step),
                    ],
                    color,
                    Stroke::NONE,
                ));
            }
            painter.line_segment(
                [center, arc_point(center, radius, start)],
                Stroke::new(1.0, Color32::from_gray(30)),
            );
        }

        ui.vertical(|ui: &mut Ui| {
            for slice in &chart.slices {
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, color_of(&slice.label));
                    let pct = slice.value as f32 / total * 100.0;
                    ui.label(format!("{}  {} ({pct:.1}%)", slice.label, slice.value));
                });
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Correlation (scatter) chart
// ---------------------------------------------------------------------------

/// Render payload vs outcome, one series per booster category.
pub fn correlation_chart(ui: &mut Ui, state: &AppState) {
    let chart = &state.correlation;
    ui.heading(&chart.title);

    if chart.points.is_empty() {
        ui.label(EMPTY_TEXT);
    }

    Plot::new("correlation_plot")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (booster, color) in state.booster_colors.legend_entries() {
                let series: PlotPoints = chart
                    .points
                    .iter()
                    .filter(|p| &p.booster == booster)
                    .map(|p| [p.payload_kg, f64::from(p.class.class())])
                    .collect();
                if series.points().is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(series)
                        .name(booster)
                        .color(*color)
                        .radius(4.0),
                );
            }
        });
}
