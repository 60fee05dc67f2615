/// Tolerances for comparing floating-point results that were accumulated
/// in a different order (e.g. sequential vs. chunked sums).
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Maximum relative error, scaled by the larger magnitude
    pub relative: f64,
    /// Absolute floor used when both values are near zero
    pub absolute: f64,
}

impl Tolerance {
    pub const DEFAULT_RELATIVE: f64 = 1e-9;
    pub const DEFAULT_ABSOLUTE: f64 = 1e-12;

    pub fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    pub fn default_precision() -> Self {
        Self {
            relative: Self::DEFAULT_RELATIVE,
            absolute: Self::DEFAULT_ABSOLUTE,
        }
    }

    /// Check if two values agree within the absolute or relative tolerance
    pub fn relative_eq(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        if diff <= self.absolute {
            return true;
        }
        diff <= self.relative * a.abs().max(b.abs())
    }

    /// Relative error of `actual` against `expected`
    pub fn relative_error(expected: f64, actual: f64) -> f64 {
        if expected == 0.0 {
            (actual - expected).abs()
        } else {
            ((actual - expected) / expected).abs()
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
