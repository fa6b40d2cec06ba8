use eframe::egui::{self, Align2, RichText, Stroke, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

use crate::figure::Corner;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Stacked spring panels (central area)
// ---------------------------------------------------------------------------

/// Render the three stacked curve panels for the currently selected spring.
pub fn spring_panels(ui: &mut Ui, state: &AppState) {
    let figure = match &state.figure {
        Some(figure) => figure,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a COSPIN spring output file to view curves  (File → Open…)");
            });
            return;
        }
    };

    let step = state.selected.min(figure.n_instances() - 1);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(figure.title(step));
    });

    let visible = figure.visibility(step);
    let annotations = figure.annotations(step);
    let total_height = ui.available_height();

    for (p, panel) in figure.panels.iter().enumerate() {
        let height = (panel.domain.1 - panel.domain.0) as f32 * total_height;

        egui::Frame::group(ui.style())
            .stroke(Stroke::new(1.0, ui.visuals().text_color()))
            .show(ui, |ui: &mut Ui| {
                let mut plot = Plot::new(("spring_panel", p))
                    .height(height)
                    .y_axis_label(&panel.y_title)
                    // Seed the reset/start bounds to the configured x range.
                    .include_x(panel.x_range[0])
                    .include_x(panel.x_range[1])
                    .allow_boxed_zoom(true)
                    .allow_drag(true)
                    .allow_scroll(true)
                    .allow_zoom(true);
                if let Some(title) = panel.x_title {
                    plot = plot.x_axis_label(title);
                }
                let y_fixed = if let Some([lo, hi]) = panel.y_range {
                    plot = plot.include_y(lo).include_y(hi);
                    true
                } else {
                    false
                };
                // Disable auto-bounds on every axis that has a configured range
                // (x always; y only when y_range is set) so the view starts at
                // that range rather than fitting to the data.
                plot = plot.auto_bounds(egui::Vec2b::new(false, !y_fixed));

                plot.show(ui, |plot_ui| {
                    for (t, trace) in figure.traces.iter().enumerate() {
                        if trace.kind != panel.kind || !visible[t] {
                            continue;
                        }
                        let points: PlotPoints = trace.points.clone().into();
                        plot_ui.line(
                            Line::new(points)
                                .name(&trace.name)
                                .color(state.colors.color_for(trace.kind))
                                .width(1.5),
                        );
                    }

                    // Pin the force annotations to the panel corners.
                    let bounds = plot_ui.plot_bounds();
                    for ann in annotations.iter().filter(|a| a.panel == p) {
                        let (pos, align) = match ann.corner {
                            Corner::TopRight => (
                                PlotPoint::new(bounds.max()[0], bounds.max()[1]),
                                Align2::RIGHT_TOP,
                            ),
                            Corner::BottomRight => (
                                PlotPoint::new(bounds.max()[0], bounds.min()[1]),
                                Align2::RIGHT_BOTTOM,
                            ),
                        };
                        plot_ui.text(Text::new(pos, RichText::new(&ann.text).size(13.0)).anchor(align));
                    }
                });
            });

        // Vertical gap taken from the paper-space layout.
        if let Some(next) = figure.panels.get(p + 1) {
            let gap = (panel.domain.0 - next.domain.1) as f32 * total_height;
            ui.add_space(gap.max(0.0));
        }
    }
}
