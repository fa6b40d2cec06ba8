use crate::color::CategoryColors;
use crate::config::AxisConfig;
use crate::data::model::SpringSet;
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Extracted springs (None until the user loads a file).
    pub springs: Option<SpringSet>,

    /// Figure assembled from the springs; rebuilt on every load.
    pub figure: Option<Figure>,

    /// Slider position: index of the visible spring instance.
    pub selected: usize,

    /// Axis ranges and force scaling policy.
    pub axes: AxisConfig,

    /// Per-category trace colours.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(axes: AxisConfig) -> Self {
        Self {
            springs: None,
            figure: None,
            selected: 0,
            axes,
            colors: CategoryColors::default(),
            status_message: None,
        }
    }

    /// Ingest a freshly extracted spring set and its figure; the slider
    /// returns to the first instance.
    pub fn set_springs(&mut self, springs: SpringSet, figure: Figure) {
        self.springs = Some(springs);
        self.figure = Some(figure);
        self.selected = 0;
        self.status_message = None;
    }

    /// Record a load failure; the previous dataset (if any) stays visible.
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clamp the slider to the current figure, e.g. after loading a smaller
    /// file.
    pub fn clamp_selected(&mut self) {
        let n = self.figure.as_ref().map_or(0, Figure::n_instances);
        if n > 0 && self.selected >= n {
            self.selected = n - 1;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AxisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Curve, SoilSpring};

    fn one_spring_set() -> SpringSet {
        let curve = Some(Curve {
            displacement: vec![0.0, 0.1],
            force: vec![0.0, 5.0],
        });
        SpringSet {
            springs: vec![SoilSpring {
                group_id: "Layer1_SoilCurves1".to_string(),
                depth: 1.0,
                outer_dia: 0.5,
                py: curve.clone(),
                tz: curve.clone(),
                qz: curve,
            }],
        }
    }

    #[test]
    fn loading_resets_slider_and_status() {
        let mut state = AppState::default();
        state.selected = 5;
        state.status_message = Some("old error".to_string());

        let springs = one_spring_set();
        let figure = Figure::build(&springs, &state.axes).unwrap();
        state.set_springs(springs, figure);

        assert_eq!(state.selected, 0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn clamp_keeps_slider_in_range() {
        let mut state = AppState::default();
        let springs = one_spring_set();
        let figure = Figure::build(&springs, &state.axes).unwrap();
        state.set_springs(springs, figure);

        state.selected = 10;
        state.clamp_selected();
        assert_eq!(state.selected, 0);
    }
}
