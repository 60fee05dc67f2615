//! Circle curve.

use crv_core::{CurveError, Result};
use crv_math::{Point3, Vector3};

use super::{Curve, Radial};

/// A circle of radius `radius` centred at the origin in the XY plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let radius = CurveError::check_radius("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Radial for Circle {
    fn radius(&self) -> f64 {
        Circle::radius(self)
    }
}

impl Curve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        Point3::new(self.radius * cos, self.radius * sin, 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        Vector3::new(-self.radius * sin, self.radius * cos, 0.0)
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}
