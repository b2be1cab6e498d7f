use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::state::AppState;

/// Largest share of the circle drawn as one polygon; keeps every piece convex.
const MAX_PIECE: f64 = 0.25;
/// Arc segments per full turn.
const ARC_RESOLUTION: f64 = 180.0;
/// Radius at which slice labels sit.
const LABEL_RADIUS: f64 = 0.62;

// ---------------------------------------------------------------------------
// Pie chart (proportion view)
// ---------------------------------------------------------------------------

/// Render the success pie chart for the current site selection.
pub fn proportion_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let view = &state.proportion;
    ui.heading(&view.title);

    if view.is_empty() {
        ui.add_space(8.0);
        ui.label("No launches match this selection.");
        return;
    }

    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for (idx, unit) in view.units.iter().enumerate() {
                let fraction = view.fraction(idx);
                if fraction <= 0.0 {
                    continue;
                }
                let end = start + fraction;
                let color = state.site_colors.unit_color(&unit.kind);

                for (a, b) in wedge_pieces(start, end) {
                    let polygon = Polygon::new(PlotPoints::from(wedge_points(a, b)))
                        .fill_color(color)
                        .stroke(Stroke::NONE)
                        .name(&unit.label);
                    plot_ui.polygon(polygon);
                }

                if view.units.len() > 1 {
                    let edge = polar(start, 1.0);
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![[0.0, 0.0], edge]))
                            .color(Color32::WHITE)
                            .width(1.5),
                    );
                }

                let [x, y] = polar(start + fraction / 2.0, LABEL_RADIUS);
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(slice_label(fraction, unit.value))
                        .color(Color32::WHITE)
                        .strong(),
                ));

                start = end;
            }
        });
}

/// Slice annotation: absolute count over percentage.
pub fn slice_label(fraction: f64, value: usize) -> String {
    format!("{value}\n{:.1}%", fraction * 100.0)
}

/// Point on the unit circle for a share of the turn, starting at twelve
/// o'clock and running clockwise.
fn polar(fraction: f64, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - TAU * fraction;
    [radius * angle.cos(), radius * angle.sin()]
}

/// Split `[start, end]` into pieces no wider than a quarter turn.
fn wedge_pieces(start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut pieces = Vec::new();
    let mut a = start;
    while end - a > f64::EPSILON {
        let b = (a + MAX_PIECE).min(end);
        pieces.push((a, b));
        a = b;
    }
    pieces
}

/// Closed outline of one wedge: centre, then the arc from `start` to `end`.
fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let segments = (((end - start) * ARC_RESOLUTION).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let t = start + (end - start) * i as f64 / segments as f64;
        points.push(polar(t, 1.0));
    }
    points
}

// ---------------------------------------------------------------------------
// Scatter chart (correlation view)
// ---------------------------------------------------------------------------

/// Render payload mass against outcome, one series per booster category.
pub fn correlation_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let view = &state.correlation;
    let range = state.payload_range;
    ui.heading(&view.title);
    if view.is_empty() {
        ui.weak("No launches in the selected payload range.");
    }

    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(range.low())
        .include_x(range.high())
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in &view.series {
                let series = Points::new(PlotPoints::from(points.clone()))
                    .name(category)
                    .color(state.booster_colors.color_for(category))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(5.0);
                plot_ui.points(series);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn polar_starts_at_top_and_turns_clockwise() {
        assert!(close(polar(0.0, 1.0), [0.0, 1.0]));
        assert!(close(polar(0.25, 1.0), [1.0, 0.0]));
        assert!(close(polar(0.5, 2.0), [0.0, -2.0]));
    }

    #[test]
    fn wide_wedges_split_into_quarters() {
        assert_eq!(wedge_pieces(0.0, 0.1), vec![(0.0, 0.1)]);
        let pieces = wedge_pieces(0.2, 0.9);
        assert_eq!(pieces.len(), 3);
        assert!((pieces[0].1 - 0.45).abs() < 1e-12);
        assert!((pieces[2].1 - 0.9).abs() < 1e-12);
        assert!(pieces.iter().all(|(a, b)| b - a <= MAX_PIECE + 1e-12));
        assert!(wedge_pieces(0.3, 0.3).is_empty());
    }

    #[test]
    fn wedge_outline_hits_both_edges() {
        let pts = wedge_points(0.0, 0.25);
        assert!(close(pts[0], [0.0, 0.0]));
        assert!(close(pts[1], [0.0, 1.0]));
        assert!(close(*pts.last().unwrap(), [1.0, 0.0]));
    }

    #[test]
    fn slice_label_shows_count_and_percent() {
        assert_eq!(slice_label(0.5, 3), "3\n50.0%");
        assert_eq!(slice_label(1.0 / 3.0, 1), "1\n33.3%");
    }
}
