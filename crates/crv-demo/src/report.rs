//! Console and JSON presentation of demo results.

use std::io::{self, Write};

use crv_geometry::{Curve, CurveSet};
use crv_reduce::RadiusSums;
use serde::Serialize;

/// Summary of one demo run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub curves: usize,
    pub rejected: usize,
    pub circles: usize,
    pub workers: usize,
    pub sums: RadiusSums,
    pub agree: bool,
}

/// Write the point and first derivative of every curve at `t`.
pub fn write_samples<W: Write>(out: &mut W, set: &CurveSet, t: f64) -> io::Result<()> {
    for curve in set {
        writeln!(
            out,
            "3D point: {}; first derivative (3D vector): {}",
            curve.point_at(t),
            curve.derivative_at(t)
        )?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(
        out,
        "Sum of the circle radii is {} in {}μs with single thread",
        significant(report.sums.sequential, 12),
        report.sums.sequential_us
    )?;
    writeln!(
        out,
        "Sum of the circle radii is {} in {}μs with multithreading ({} chunks)",
        significant(report.sums.parallel, 12),
        report.sums.parallel_us,
        report.sums.chunks
    )
}

/// Format `value` to `digits` significant digits in plain notation.
///
/// Integer digits are never dropped and trailing zeros are trimmed.
pub fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
