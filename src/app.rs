use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: launch table (optional) ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("launch_table")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| {
                    table::launch_table(ui, &self.state);
                });
        }

        // ---- Central panel: pie on top, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = ui.available_height() * 0.45;
            ui.allocate_ui(egui::vec2(ui.available_width(), pie_height), |ui| {
                plot::proportion_chart(ui, &self.state);
            });
            ui.separator();
            plot::correlation_chart(ui, &self.state);
        });
    }
}
