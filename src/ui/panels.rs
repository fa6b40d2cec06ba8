use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::AxisConfig;
use crate::data::extract;
use crate::data::model::SpringSet;
use crate::figure::Figure;
use crate::state::AppState;

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
        });

        ui.separator();

        if let Some(springs) = &state.springs {
            ui.label(format!("{} spring positions loaded", springs.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – depth slider
// ---------------------------------------------------------------------------

/// Render the slider that steps through the spring positions.
pub fn slider_bar(ui: &mut Ui, state: &mut AppState) {
    let n = match &state.figure {
        Some(figure) => figure.n_instances(),
        None => {
            ui.label("No curves loaded.");
            return;
        }
    };

    state.clamp_selected();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Element:");
        ui.add(egui::Slider::new(&mut state.selected, 0..=n - 1).integer());
        ui.label(format!("of {n}"));
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open COSPIN spring output")
        .add_filter("COSPIN text output", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match load_springs(&path, &state.axes) {
            Ok((springs, figure)) => {
                log::info!(
                    "Loaded {} soil springs from {}",
                    springs.len(),
                    path.display()
                );
                state.set_springs(springs, figure);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_error(format!("Error: {e:#}"));
            }
        }
    }
}

/// Extract the springs and assemble the figure. Any failure aborts the whole
/// load; a partially viewable dataset is never produced.
fn load_springs(path: &Path, axes: &AxisConfig) -> anyhow::Result<(SpringSet, Figure)> {
    let springs = extract::extract_from_path(path)
        .with_context(|| format!("extracting curves from {}", path.display()))?;
    let figure = Figure::build(&springs, axes).context("assembling figure")?;
    Ok((springs, figure))
}
