use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::model::CurveKind;

/// Name of the optional configuration file looked up in the working
/// directory.
pub const CONFIG_FILE: &str = "spring_viewer.toml";

// ---------------------------------------------------------------------------
// Force axis policy
// ---------------------------------------------------------------------------

/// How the force (vertical) axis of a panel is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ForceScale {
    /// Let the plot fit the visible data.
    Auto,
    /// Span from the smallest observed force (capped at zero) to the largest
    /// (floored at zero), both multiplied by `factor`.
    Headroom { factor: f64 },
}

// ---------------------------------------------------------------------------
// AxisConfig
// ---------------------------------------------------------------------------

/// Axis ranges and scaling policy for the three panels.
///
/// The displacement ranges are fixed rather than fitted so that plots stay
/// comparable across input files. Defaults reproduce the values the COSPIN
/// output has historically been viewed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// p-y displacement range [m].
    pub py_displacement: [f64; 2],
    /// t-z displacement range [m].
    pub tz_displacement: [f64; 2],
    /// q-z displacement range [m].
    pub qz_displacement: [f64; 2],

    pub py_force: ForceScale,
    pub tz_force: ForceScale,
    pub qz_force: ForceScale,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            py_displacement: [-1.6, 4.0],
            tz_displacement: [-0.4, 1.0],
            qz_displacement: [-0.4, 1.0],
            py_force: ForceScale::Auto,
            tz_force: ForceScale::Auto,
            qz_force: ForceScale::Headroom { factor: 1.1 },
        }
    }
}

impl AxisConfig {
    /// Displacement range of the given panel.
    pub fn displacement_range(&self, kind: CurveKind) -> [f64; 2] {
        match kind {
            CurveKind::Py => self.py_displacement,
            CurveKind::Tz => self.tz_displacement,
            CurveKind::Qz => self.qz_displacement,
        }
    }

    /// Force scaling policy of the given panel.
    pub fn force_scale(&self, kind: CurveKind) -> ForceScale {
        match kind {
            CurveKind::Py => self.py_force,
            CurveKind::Tz => self.tz_force,
            CurveKind::Qz => self.qz_force,
        }
    }

    /// Load `spring_viewer.toml` from the working directory, falling back to
    /// the defaults when the file does not exist.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_historical_ranges() {
        let cfg = AxisConfig::default();
        assert_eq!(cfg.py_displacement, [-1.6, 4.0]);
        assert_eq!(cfg.tz_displacement, [-0.4, 1.0]);
        assert_eq!(cfg.qz_displacement, [-0.4, 1.0]);
        assert_eq!(cfg.py_force, ForceScale::Auto);
        assert_eq!(cfg.qz_force, ForceScale::Headroom { factor: 1.1 });
    }

    #[test]
    fn toml_round_trip() {
        let cfg = AxisConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: AxisConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AxisConfig = toml::from_str("py_displacement = [-2.0, 2.0]").unwrap();
        assert_eq!(cfg.py_displacement, [-2.0, 2.0]);
        assert_eq!(cfg.tz_displacement, [-0.4, 1.0]);
    }
}
