use thiserror::Error;

use crate::config::{AxisConfig, ForceScale};
use crate::data::model::{CurveKind, SpringSet};

// ---------------------------------------------------------------------------
// Figure model
// ---------------------------------------------------------------------------

/// Vertical paper-space domain of each panel, top to bottom (p-y, t-z, q-z).
/// The gaps between domains separate the stacked panels visually.
pub const PANEL_DOMAINS: [(f64, f64); 3] = [(0.70, 1.00), (0.35, 0.65), (0.00, 0.30)];

/// One curve trace. Traces are stored in three contiguous blocks of N
/// (category order p-y, t-z, q-z), so the traces of instance `i` sit at
/// indices `i`, `i + N` and `i + 2N`.
#[derive(Debug, Clone)]
pub struct Trace {
    pub kind: CurveKind,
    /// Index of the spring instance this trace belongs to.
    pub instance: usize,
    pub name: String,
    /// (displacement, force) pairs.
    pub points: Vec<[f64; 2]>,
}

/// Layout and axis ranges of one panel.
#[derive(Debug, Clone)]
pub struct Panel {
    pub kind: CurveKind,
    /// Force axis title, e.g. `p-y [kPa]`.
    pub y_title: String,
    /// Displacement axis title; only the bottom panel carries one.
    pub x_title: Option<&'static str>,
    /// Vertical paper-space domain (0 = bottom of figure, 1 = top).
    pub domain: (f64, f64),
    /// Fixed displacement range.
    pub x_range: [f64; 2],
    /// Force range, or `None` for automatic fitting.
    pub y_range: Option<[f64; 2]>,
}

/// Where an annotation is pinned inside its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    BottomRight,
}

/// A per-step text annotation, pinned to a corner of one panel.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub panel: usize,
    pub corner: Corner,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("no soil curve definitions found in the input")]
    Empty,
    #[error("curve group '{group}' has no {missing} curve")]
    MissingCurve { group: String, missing: CurveKind },
}

/// The assembled three-panel figure: all traces plus the per-step slider
/// behaviour. The currently selected step lives in the rendering surface
/// ([`crate::state::AppState`]), not here.
#[derive(Debug, Clone)]
pub struct Figure {
    pub panels: [Panel; 3],
    pub traces: Vec<Trace>,
    depths: Vec<f64>,
    outer_dias: Vec<f64>,
    n: usize,
}

impl Figure {
    /// Assemble the figure from a spring set.
    ///
    /// Fails on an empty set and on any instance missing one of its three
    /// curves; the panels assume one trace per instance per category.
    pub fn build(set: &SpringSet, axes: &AxisConfig) -> Result<Figure, FigureError> {
        if set.is_empty() {
            return Err(FigureError::Empty);
        }

        let n = set.len();
        let mut traces = Vec::with_capacity(3 * n);
        for kind in CurveKind::ALL {
            for (instance, spring) in set.springs.iter().enumerate() {
                let curve = spring.curve(kind).ok_or_else(|| FigureError::MissingCurve {
                    group: spring.group_id.clone(),
                    missing: kind,
                })?;
                traces.push(Trace {
                    kind,
                    instance,
                    name: format!("{kind} (Depth: {:.2} m)", spring.depth),
                    points: curve
                        .displacement
                        .iter()
                        .zip(curve.force.iter())
                        .map(|(&x, &y)| [x, y])
                        .collect(),
                });
            }
        }

        let panels: [Panel; 3] = std::array::from_fn(|p| {
            let kind = CurveKind::ALL[p];
            Panel {
                kind,
                y_title: format!("{kind} [kPa]"),
                x_title: (kind == CurveKind::Qz).then_some("Displacement [m]"),
                domain: PANEL_DOMAINS[p],
                x_range: axes.displacement_range(kind),
                y_range: match axes.force_scale(kind) {
                    ForceScale::Auto => None,
                    ForceScale::Headroom { factor } => Some([
                        set.min_force(kind) * factor,
                        set.max_force(kind) * factor,
                    ]),
                },
            }
        });

        Ok(Figure {
            panels,
            traces,
            depths: set.springs.iter().map(|s| s.depth).collect(),
            outer_dias: set.springs.iter().map(|s| s.outer_dia).collect(),
            n,
        })
    }

    /// Number of spring instances (slider steps).
    pub fn n_instances(&self) -> usize {
        self.n
    }

    /// Visibility mask over all traces for slider step `step`: exactly the
    /// three traces of that instance (indices `step`, `step + N`,
    /// `step + 2N`) are visible.
    pub fn visibility(&self, step: usize) -> Vec<bool> {
        debug_assert!(step < self.n);
        (0..self.traces.len()).map(|t| t % self.n == step).collect()
    }

    /// Figure title for slider step `step`.
    pub fn title(&self, step: usize) -> String {
        format!(
            "Soil Curves at Depth: {:.2} m, Outer Diameter: {:.1} m",
            self.depths[step], self.outer_dias[step]
        )
    }

    /// The four per-step annotations: max p-y force, max and min t-z force,
    /// max q-z force of the visible instance.
    pub fn annotations(&self, step: usize) -> Vec<Annotation> {
        let max_of = |t: usize| self.trace_extreme(t, f64::max);
        let min_of = |t: usize| self.trace_extreme(t, f64::min);

        vec![
            Annotation {
                panel: 0,
                corner: Corner::TopRight,
                text: format!("Max: {:.2} kPa", max_of(step)),
            },
            Annotation {
                panel: 1,
                corner: Corner::TopRight,
                text: format!("Max: {:.2} kPa", max_of(step + self.n)),
            },
            Annotation {
                panel: 1,
                corner: Corner::BottomRight,
                text: format!("Min: {:.2} kPa", min_of(step + self.n)),
            },
            Annotation {
                panel: 2,
                corner: Corner::TopRight,
                text: format!("Max: {:.2} kPa", max_of(step + 2 * self.n)),
            },
        ]
    }

    // Extraction rejects empty value lists, so every trace has points.
    fn trace_extreme(&self, trace: usize, pick: fn(f64, f64) -> f64) -> f64 {
        self.traces[trace]
            .points
            .iter()
            .map(|p| p[1])
            .reduce(pick)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Curve, SoilSpring};

    fn curve(displacement: &[f64], force: &[f64]) -> Option<Curve> {
        Some(Curve {
            displacement: displacement.to_vec(),
            force: force.to_vec(),
        })
    }

    fn spring(id: &str, depth: f64, qz_force: &[f64]) -> SoilSpring {
        SoilSpring {
            group_id: id.to_string(),
            depth,
            outer_dia: 7.5,
            py: curve(&[-1.0, 0.0, 1.0], &[-20.0, 0.0, 35.0]),
            tz: curve(&[-0.4, 0.0, 0.4], &[-12.0, 0.0, 12.0]),
            qz: curve(&[0.0, 0.1, 0.2], qz_force),
        }
    }

    fn three_instance_set() -> SpringSet {
        SpringSet {
            springs: vec![
                spring("Layer1_SoilCurves1", 1.0, &[0.0, 50.0, 100.0]),
                spring("Layer2_SoilCurves1", 2.5, &[0.0, 30.0, 60.0]),
                spring("Layer3_SoilCurves1", 4.0, &[0.0, 10.0, 20.0]),
            ],
        }
    }

    #[test]
    fn traces_are_three_contiguous_blocks() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        assert_eq!(fig.traces.len(), 9);
        for (t, trace) in fig.traces.iter().enumerate() {
            assert_eq!(trace.kind, CurveKind::ALL[t / 3]);
            assert_eq!(trace.instance, t % 3);
        }
        assert_eq!(fig.traces[0].name, "p-y (Depth: 1.00 m)");
        assert_eq!(fig.traces[4].name, "t-z (Depth: 2.50 m)");
    }

    // Slider step i shows exactly the traces i, i+N, i+2N.
    #[test]
    fn visibility_selects_one_instance_per_panel() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        for step in 0..3 {
            let mask = fig.visibility(step);
            assert_eq!(mask.len(), 9);
            assert_eq!(mask.iter().filter(|&&v| v).count(), 3);
            assert!(mask[step] && mask[step + 3] && mask[step + 2 * 3]);
        }
    }

    #[test]
    fn qz_force_range_has_headroom_above_global_max() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        let [lo, hi] = fig.panels[2].y_range.unwrap();
        assert_eq!(lo, 0.0);
        assert!((hi - 110.0).abs() < 1e-9);
    }

    #[test]
    fn all_negative_qz_forces_clamp_the_upper_bound_to_zero() {
        let mut set = three_instance_set();
        for sp in &mut set.springs {
            sp.qz = curve(&[0.0, 0.1], &[-5.0, -1.0]);
        }
        let fig = Figure::build(&set, &AxisConfig::default()).unwrap();
        let [_, hi] = fig.panels[2].y_range.unwrap();
        assert_eq!(hi, 0.0);
    }

    #[test]
    fn py_and_tz_force_axes_default_to_auto() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        assert!(fig.panels[0].y_range.is_none());
        assert!(fig.panels[1].y_range.is_none());
    }

    #[test]
    fn headroom_policy_applies_to_tz_when_configured() {
        let axes = AxisConfig {
            tz_force: ForceScale::Headroom { factor: 1.1 },
            ..AxisConfig::default()
        };
        let fig = Figure::build(&three_instance_set(), &axes).unwrap();
        let [lo, hi] = fig.panels[1].y_range.unwrap();
        assert!((lo + 13.2).abs() < 1e-9);
        assert!((hi - 13.2).abs() < 1e-9);
    }

    #[test]
    fn panel_layout_and_fixed_displacement_ranges() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        assert_eq!(fig.panels[0].domain, (0.70, 1.00));
        assert_eq!(fig.panels[1].domain, (0.35, 0.65));
        assert_eq!(fig.panels[2].domain, (0.00, 0.30));
        assert_eq!(fig.panels[0].x_range, [-1.6, 4.0]);
        assert_eq!(fig.panels[1].x_range, [-0.4, 1.0]);
        assert_eq!(fig.panels[2].x_title, Some("Displacement [m]"));
        assert_eq!(fig.panels[0].x_title, None);
    }

    #[test]
    fn title_shows_depth_and_diameter_of_the_step() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        assert_eq!(
            fig.title(1),
            "Soil Curves at Depth: 2.50 m, Outer Diameter: 7.5 m"
        );
    }

    #[test]
    fn four_annotations_describe_the_visible_instance() {
        let fig = Figure::build(&three_instance_set(), &AxisConfig::default()).unwrap();
        let ann = fig.annotations(0);
        assert_eq!(ann.len(), 4);
        assert_eq!(ann[0].text, "Max: 35.00 kPa");
        assert_eq!(ann[1].text, "Max: 12.00 kPa");
        assert_eq!(ann[2].text, "Min: -12.00 kPa");
        assert_eq!(ann[3].text, "Max: 100.00 kPa");
        assert_eq!(ann[2].corner, Corner::BottomRight);
        assert_eq!((ann[1].panel, ann[3].panel), (1, 2));
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = Figure::build(&SpringSet::default(), &AxisConfig::default()).unwrap_err();
        assert!(matches!(err, FigureError::Empty));
    }

    #[test]
    fn incomplete_instance_is_rejected() {
        let mut set = three_instance_set();
        set.springs[1].tz = None;
        let err = Figure::build(&set, &AxisConfig::default()).unwrap_err();
        match err {
            FigureError::MissingCurve { group, missing } => {
                assert_eq!(group, "Layer2_SoilCurves1");
                assert_eq!(missing, CurveKind::Tz);
            }
            other => panic!("expected MissingCurve, got {other:?}"),
        }
    }
}
