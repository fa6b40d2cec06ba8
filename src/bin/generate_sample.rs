use std::fmt::Write as _;

/// Format a value the way COSPIN prints depths: six decimals, explicit
/// exponent sign, two exponent digits (`1.234500E+00`).
fn sci(v: f64) -> String {
    let formatted = format!("{v:.6E}");
    match formatted.split_once('E') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exp),
            };
            format!("{mantissa}E{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

fn join_with_unit(values: &[f64], unit: &str) -> String {
    values
        .iter()
        .map(|v| format!("{v:.4} {unit}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hyperbolic lateral resistance curve: stiff near the origin, saturating at
/// the ultimate resistance.
fn py_curve(p_ult: f64) -> (Vec<f64>, Vec<f64>) {
    let displacement: Vec<f64> = (0..12).map(|i| -1.5 + i as f64 * 0.5).collect();
    let force = displacement
        .iter()
        .map(|&y| p_ult * (2.0 * y).tanh())
        .collect();
    (displacement, force)
}

/// Shaft friction curve, antisymmetric around zero displacement.
fn tz_curve(t_max: f64) -> (Vec<f64>, Vec<f64>) {
    let displacement: Vec<f64> = (0..15).map(|i| -0.4 + i as f64 * 0.1).collect();
    let force = displacement
        .iter()
        .map(|&z| t_max * (25.0 * z).tanh())
        .collect();
    (displacement, force)
}

/// End bearing curve: zero until the pile moves down, then ramping to the
/// ultimate bearing over 0.1 m.
fn qz_curve(q_max: f64) -> (Vec<f64>, Vec<f64>) {
    let displacement: Vec<f64> = (0..15).map(|i| -0.4 + i as f64 * 0.1).collect();
    let force = displacement
        .iter()
        .map(|&z| q_max * (z / 0.1).clamp(0.0, 1.0))
        .collect();
    (displacement, force)
}

fn main() {
    let outer_dia = 7.0;
    let layer_depths = [0.5, 2.0, 4.5, 8.0, 12.5, 18.0, 24.5, 32.0];

    let mut out = String::new();
    out.push_str("// Synthetic COSPIN soil model output for the spring viewer\n");
    out.push_str("buildSoilModel();\n\n");

    // Soil borders and curve group bindings.
    for (i, &depth) in layer_depths.iter().enumerate() {
        let layer = i + 1;
        let _ = writeln!(out, "insertSoilBorder({} m +zMudline);", sci(depth));
        let _ = writeln!(out, "soil({layer}).soilCurves = Layer{layer}_SoilCurves1;");
    }
    out.push('\n');

    // Curve definitions. Resistance grows with depth.
    for (i, &depth) in layer_depths.iter().enumerate() {
        let layer = i + 1;
        let p_ult = 40.0 + 18.0 * depth;
        let t_max = 8.0 + 3.0 * depth;
        let q_max = 150.0 + 60.0 * depth;

        let (py_d, py_f) = py_curve(p_ult);
        let (tz_d, tz_f) = tz_curve(t_max);
        let (qz_d, qz_f) = qz_curve(q_max);

        let _ = writeln!(
            out,
            "Layer{layer}_SoilCurves1.addManualPY({outer_dia:.1}, Array({}), Array({}));",
            join_with_unit(&py_d, "m"),
            join_with_unit(&py_f, "kPa"),
        );
        let _ = writeln!(
            out,
            "Layer{layer}_SoilCurves1.addManualTZ({outer_dia:.1}, Array({}), Array({}));",
            join_with_unit(&tz_d, "m"),
            join_with_unit(&tz_f, "kPa"),
        );
        let _ = writeln!(
            out,
            "Layer{layer}_SoilCurves1.addManualQZ({outer_dia:.1}, Array({}), Array({}));",
            join_with_unit(&qz_d, "m"),
            join_with_unit(&qz_f, "kPa"),
        );
    }

    let output_path = "sample_springs.txt";
    std::fs::write(output_path, &out).expect("Failed to write sample file");

    println!(
        "Wrote {} soil layers ({} lines) to {output_path}",
        layer_depths.len(),
        out.lines().count()
    );
}
