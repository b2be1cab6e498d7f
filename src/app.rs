use eframe::egui::{self, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

/// Height of each chart panel.
const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: dropdown, pie, slider, scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::site_dropdown(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::proportion_chart(ui, &self.state, CHART_HEIGHT);
                    ui.add_space(8.0);

                    ui.label("Payload range (Kg):");
                    panels::payload_slider(ui, &mut self.state);
                    ui.add_space(8.0);

                    plot::correlation_chart(ui, &self.state, CHART_HEIGHT);
                    ui.add_space(8.0);

                    let header = egui::CollapsingHeader::new("Launch records in view")
                        .id_salt("records_table")
                        .open(Some(self.state.show_records))
                        .show(ui, |ui: &mut Ui| {
                            table::records_table(ui, &self.state);
                        });
                    if header.header_response.clicked() {
                        self.state.show_records = !self.state.show_records;
                    }
                });
        });
    }
}
