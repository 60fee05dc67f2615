use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("invalid parameter {name}: {value} (must be a finite, non-negative number)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl CurveError {
    /// Reject `value` unless it is a finite number `>= 0`.
    pub fn check_radius(name: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(CurveError::InvalidParameter { name, value })
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
