use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::model::{Curve, CurveKind, SoilSpring, SpringSet};

// ---------------------------------------------------------------------------
// Line patterns
// ---------------------------------------------------------------------------

/// `insertSoilBorder(-1.234500E+00 m +zMudline);` — establishes the current
/// depth for all curve group bindings until the next declaration.
static DEPTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"insertSoilBorder\((-?\d+\.\d+E[+-]?\d+) m \+zMudline\);")
        .expect("hard-coded pattern")
});

/// `soil(3).soilCurves = Layer2_SoilCurves1;` — binds a curve group to the
/// current depth.
static BINDING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"soil\(\d+\)\.soilCurves = (Layer\d+_SoilCurves\d+);").expect("hard-coded pattern")
});

/// `Layer2_SoilCurves1.addManualPY(7.0, Array(-1.0 m, ...), Array(0.0 kPa, ...)`
/// — one curve definition; the second capture selects the category.
static CURVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Layer\d+_SoilCurves\d+)\.addManual(PY|TZ|QZ)\(([\d\.\-E\+]+), Array\((.*?)\), Array\((.*?)\)",
    )
    .expect("hard-coded pattern")
});

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes of the extraction pipeline. A curve line referencing a group
/// with no declared depth is not an error; it is skipped (logged at debug
/// level) and the output shrinks accordingly.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("line {line}: cannot parse '{token}' as a number")]
    Number { line: usize, token: String },

    #[error("line {line}: curve group '{group}' defines a second {kind} curve")]
    DuplicateCurve {
        line: usize,
        group: String,
        kind: CurveKind,
    },
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Extract all soil springs from a file on disk.
pub fn extract_from_path(path: &Path) -> Result<SpringSet, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_from_bytes(&bytes)
}

/// Extract all soil springs from raw bytes (e.g. a dropped file).
pub fn extract_from_bytes(bytes: &[u8]) -> Result<SpringSet, ExtractError> {
    let content = std::str::from_utf8(bytes)?;
    extract(content)
}

/// Extract all soil springs from the decoded file content.
///
/// Two passes over the same lines:
/// 1. build the depth table (curve group → depth below mudline),
/// 2. collect the curve definitions, grouped into one [`SoilSpring`] record
///    per curve group, in first-encountered order.
pub fn extract(content: &str) -> Result<SpringSet, ExtractError> {
    let depths = depth_table(content);

    let mut order: Vec<String> = Vec::new();
    let mut by_group: HashMap<String, SoilSpring> = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some(caps) = CURVE_PATTERN.captures(line) else {
            continue;
        };

        let group = &caps[1];
        let kind = match &caps[2] {
            "PY" => CurveKind::Py,
            "TZ" => CurveKind::Tz,
            _ => CurveKind::Qz,
        };

        // A group never bound to a depth is dropped, not an error.
        let Some(&depth) = depths.get(group) else {
            log::debug!("line {line_no}: skipping {kind} curve for unbound group '{group}'");
            continue;
        };

        let outer_dia = parse_number(&caps[3], line_no)?;
        let displacement = parse_series(&caps[4], " m", line_no)?;
        let force = parse_series(&caps[5], " kPa", line_no)?;

        let spring = by_group.entry(group.to_string()).or_insert_with(|| {
            order.push(group.to_string());
            SoilSpring {
                group_id: group.to_string(),
                depth,
                outer_dia,
                py: None,
                tz: None,
                qz: None,
            }
        });

        let slot = match kind {
            CurveKind::Py => &mut spring.py,
            CurveKind::Tz => &mut spring.tz,
            CurveKind::Qz => &mut spring.qz,
        };
        if slot.is_some() {
            return Err(ExtractError::DuplicateCurve {
                line: line_no,
                group: group.to_string(),
                kind,
            });
        }
        *slot = Some(Curve {
            displacement,
            force,
        });
    }

    let springs = order
        .iter()
        .filter_map(|group| by_group.remove(group))
        .collect();
    Ok(SpringSet { springs })
}

// ---------------------------------------------------------------------------
// Depth resolution pass
// ---------------------------------------------------------------------------

/// Scan the content once and map each curve group to the most recent depth
/// declaration preceding its binding. Bindings before any declaration get no
/// entry.
fn depth_table(content: &str) -> HashMap<String, f64> {
    let mut depths = HashMap::new();
    let mut current_depth: Option<f64> = None;

    for line in content.lines() {
        if let Some(caps) = DEPTH_PATTERN.captures(line) {
            // The pattern only matches well-formed e-notation floats.
            current_depth = caps[1].parse().ok();
        }
        if let Some(caps) = BINDING_PATTERN.captures(line) {
            if let Some(depth) = current_depth {
                depths.insert(caps[1].to_string(), depth);
            }
        }
    }

    depths
}

// ---------------------------------------------------------------------------
// Token parsing
// ---------------------------------------------------------------------------

fn parse_number(token: &str, line: usize) -> Result<f64, ExtractError> {
    token.parse().map_err(|_| ExtractError::Number {
        line,
        token: token.to_string(),
    })
}

/// Parse a `", "`-separated value list, stripping the trailing unit marker
/// (`" m"` or `" kPa"`) from each token.
fn parse_series(raw: &str, unit: &str, line: usize) -> Result<Vec<f64>, ExtractError> {
    raw.split(", ")
        .map(|token| parse_number(token.strip_suffix(unit).unwrap_or(token), line))
        .collect()
}
