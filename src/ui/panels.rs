use eframe::egui::{self, Align2, FontId, RichText, Sense, TextEdit, Ui};

use crate::config::{TITLE, TITLE_COLOR, TITLE_SIZE};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the page title and the record counters.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(TITLE).size(TITLE_SIZE).color(TITLE_COLOR));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches loaded, {} in the scatter view",
            state.dataset.len(),
            state.correlation.indices.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Launch-site dropdown
// ---------------------------------------------------------------------------

/// Searchable launch-site dropdown. Picking an option rebinds both charts.
pub fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let current = state.site.value().to_string();
    let selected_text = state.site_label().to_string();
    let mut picked: Option<String> = None;

    let response = egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_text)
        .width(ui.available_width().min(480.0))
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(TextEdit::singleline(&mut state.site_query).hint_text("Search…"));
            ui.separator();
            for opt in state.config.search_options(&state.site_query) {
                if ui
                    .selectable_label(current == opt.value, &opt.label)
                    .clicked()
                {
                    picked = Some(opt.value.clone());
                }
            }
        });
    response
        .response
        .on_hover_text(state.config.site_placeholder.as_str());

    if let Some(value) = picked {
        state.site_query.clear();
        state.select_site(SiteSelection::from_value(&value));
    }
}

// ---------------------------------------------------------------------------
// Payload range selector
// ---------------------------------------------------------------------------

/// Two-handle payload selector built from a pair of sliders sharing the
/// configured bounds and step. Changes rebind the scatter chart only.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let cfg = &state.config;
    let bounds = cfg.slider_min..=cfg.slider_max;
    let step = cfg.slider_step;
    let marks = cfg.slider_marks.clone();

    let mut low = state.payload_range.low();
    let mut high = state.payload_range.high();

    let low_resp = ui.add(
        egui::Slider::new(&mut low, bounds.clone())
            .step_by(step)
            .text("from (kg)"),
    );
    let high_resp = ui.add(
        egui::Slider::new(&mut high, bounds.clone())
            .step_by(step)
            .text("to (kg)"),
    );
    slider_marks(ui, high_resp.rect.left(), &marks, *bounds.start(), *bounds.end());

    // Handles may not cross: the one being dragged pushes the other.
    if low_resp.changed() && low > high {
        high = low;
    }
    if high_resp.changed() && high < low {
        low = high;
    }
    if low_resp.changed() || high_resp.changed() {
        state.set_payload_range(PayloadRange::new(low, high));
    }
}

/// Tick labels under the slider rail.
fn slider_marks(ui: &mut Ui, rail_left: f32, marks: &[f64], min: f64, max: f64) {
    let rail_width = ui.spacing().slider_width;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let color = ui.visuals().weak_text_color();
    let span = (max - min).max(f64::EPSILON);

    for &mark in marks {
        let t = ((mark - min) / span) as f32;
        let x = rail_left + t * rail_width;
        painter.text(
            egui::pos2(x, rect.top()),
            Align2::CENTER_TOP,
            format!("{mark}"),
            FontId::proportional(11.0),
            color,
        );
    }
}
