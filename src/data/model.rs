use std::fmt;

// ---------------------------------------------------------------------------
// CurveKind – the three soil spring categories
// ---------------------------------------------------------------------------

/// Which soil response relationship a curve describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Lateral soil resistance vs. displacement.
    Py,
    /// Shaft friction vs. displacement.
    Tz,
    /// End bearing vs. displacement.
    Qz,
}

impl CurveKind {
    /// All categories in panel order, top to bottom.
    pub const ALL: [CurveKind; 3] = [CurveKind::Py, CurveKind::Tz, CurveKind::Qz];
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Py => write!(f, "p-y"),
            CurveKind::Tz => write!(f, "t-z"),
            CurveKind::Qz => write!(f, "q-z"),
        }
    }
}

// ---------------------------------------------------------------------------
// Curve – one displacement/force series pair
// ---------------------------------------------------------------------------

/// A single extracted curve: displacement samples and the force at each.
/// Both sequences have the same length by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Displacement samples [m].
    pub displacement: Vec<f64>,
    /// Soil reaction at each displacement [kPa].
    pub force: Vec<f64>,
}

impl Curve {
    /// Largest force value, or `None` for an empty curve.
    pub fn max_force(&self) -> Option<f64> {
        self.force.iter().copied().reduce(f64::max)
    }

    /// Smallest force value, or `None` for an empty curve.
    pub fn min_force(&self) -> Option<f64> {
        self.force.iter().copied().reduce(f64::min)
    }
}

// ---------------------------------------------------------------------------
// SoilSpring – one curve instance
// ---------------------------------------------------------------------------

/// One soil spring: the curves defined by a single curve group in the source
/// file, tied to a depth and a pile outer diameter.
///
/// A well-formed source defines all three curves per group; the extractor
/// stores whatever subset it actually found and the figure builder rejects
/// incomplete instances.
#[derive(Debug, Clone)]
pub struct SoilSpring {
    /// Curve group identifier from the source file (`Layer<N>_SoilCurves<M>`).
    pub group_id: String,
    /// Depth below mudline [m], positive down.
    pub depth: f64,
    /// Pile outer diameter [m].
    pub outer_dia: f64,
    pub py: Option<Curve>,
    pub tz: Option<Curve>,
    pub qz: Option<Curve>,
}

impl SoilSpring {
    /// The curve of the given category, if the source defined one.
    pub fn curve(&self, kind: CurveKind) -> Option<&Curve> {
        match kind {
            CurveKind::Py => self.py.as_ref(),
            CurveKind::Tz => self.tz.as_ref(),
            CurveKind::Qz => self.qz.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// SpringSet – the complete extracted collection
// ---------------------------------------------------------------------------

/// All soil springs extracted from one input file, in the order their curve
/// groups first appeared in the source.
#[derive(Debug, Clone, Default)]
pub struct SpringSet {
    pub springs: Vec<SoilSpring>,
}

impl SpringSet {
    /// Number of spring instances.
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    /// Whether no springs were extracted.
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Largest force of the given category across all instances, floored at
    /// zero. An all-negative dataset therefore reports 0.
    pub fn max_force(&self, kind: CurveKind) -> f64 {
        self.springs
            .iter()
            .filter_map(|s| s.curve(kind))
            .filter_map(Curve::max_force)
            .fold(0.0, f64::max)
    }

    /// Smallest force of the given category across all instances, capped at
    /// zero.
    pub fn min_force(&self, kind: CurveKind) -> f64 {
        self.springs
            .iter()
            .filter_map(|s| s.curve(kind))
            .filter_map(Curve::min_force)
            .fold(0.0, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(force: &[f64]) -> Option<Curve> {
        Some(Curve {
            displacement: force.iter().map(|_| 0.0).collect(),
            force: force.to_vec(),
        })
    }

    fn spring(py: &[f64], tz: &[f64], qz: &[f64]) -> SoilSpring {
        SoilSpring {
            group_id: "Layer1_SoilCurves1".to_string(),
            depth: 1.0,
            outer_dia: 0.5,
            py: curve(py),
            tz: curve(tz),
            qz: curve(qz),
        }
    }

    #[test]
    fn max_force_floored_at_zero() {
        let set = SpringSet {
            springs: vec![spring(&[-3.0, -1.0], &[-2.0], &[-5.0, -0.5])],
        };
        assert_eq!(set.max_force(CurveKind::Qz), 0.0);
        assert_eq!(set.max_force(CurveKind::Py), 0.0);
    }

    #[test]
    fn min_force_capped_at_zero() {
        let set = SpringSet {
            springs: vec![spring(&[1.0], &[2.0, 5.0], &[3.0])],
        };
        assert_eq!(set.min_force(CurveKind::Tz), 0.0);
    }

    #[test]
    fn extrema_span_all_instances() {
        let set = SpringSet {
            springs: vec![
                spring(&[1.0, 4.0], &[-1.0, 2.0], &[10.0]),
                spring(&[7.0], &[-3.0, 1.0], &[2.0]),
            ],
        };
        assert_eq!(set.max_force(CurveKind::Py), 7.0);
        assert_eq!(set.min_force(CurveKind::Tz), -3.0);
        assert_eq!(set.max_force(CurveKind::Qz), 10.0);
    }

    #[test]
    fn missing_curves_are_skipped_in_extrema() {
        let mut sp = spring(&[5.0], &[1.0], &[2.0]);
        sp.qz = None;
        let set = SpringSet { springs: vec![sp] };
        assert_eq!(set.max_force(CurveKind::Qz), 0.0);
        assert_eq!(set.max_force(CurveKind::Py), 5.0);
    }
}
