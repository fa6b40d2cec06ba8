use eframe::egui;

use crate::config::AxisConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpringViewerApp {
    pub state: AppState,
}

impl SpringViewerApp {
    pub fn new(axes: AxisConfig) -> Self {
        Self {
            state: AppState::new(axes),
        }
    }
}

impl Default for SpringViewerApp {
    fn default() -> Self {
        Self::new(AxisConfig::default())
    }
}

impl eframe::App for SpringViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: depth slider ----
        egui::TopBottomPanel::bottom("slider_bar").show(ctx, |ui| {
            panels::slider_bar(ui, &mut self.state);
        });

        // ---- Central panel: stacked curve plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spring_panels(ui, &self.state);
        });
    }
}
