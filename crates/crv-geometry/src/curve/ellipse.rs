//! Ellipse curve.

use crv_core::{CurveError, Result};
use crv_math::{Point3, Vector3};

use super::Curve;

/// An axis-aligned ellipse centred at the origin in the XY plane.
///
/// `radius_x` and `radius_y` are the semi-axes along X and Y. Equal radii
/// trace the same points as a [`Circle`](super::Circle).
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> Result<Self> {
        let radius_x = CurveError::check_radius("radius_x", radius_x)?;
        let radius_y = CurveError::check_radius("radius_y", radius_y)?;
        Ok(Self { radius_x, radius_y })
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        Point3::new(self.radius_x * cos, self.radius_y * sin, 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        Vector3::new(-self.radius_x * sin, self.radius_y * cos, 0.0)
    }

    fn name(&self) -> &'static str {
        "ellipse"
    }
}
