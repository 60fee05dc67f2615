//! Helix curve.

use std::f64::consts::TAU;

use crv_core::{CurveError, Result};
use crv_math::{Point3, Vector3};

use super::{Curve, Radial};

/// A circular helix around the Z axis.
///
/// One full turn (`t` advancing by `2*PI`) rises by `step` along Z. The step
/// is unchecked: zero gives a flat circle, a negative step a descending helix.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        let radius = CurveError::check_radius("radius", radius)?;
        Ok(Self { radius, step })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Radial for Helix {
    fn radius(&self) -> f64 {
        Helix::radius(self)
    }
}

impl Curve for Helix {
    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        Point3::new(self.radius * cos, self.radius * sin, self.step * t / TAU)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        Vector3::new(-self.radius * sin, self.radius * cos, self.step / TAU)
    }

    fn name(&self) -> &'static str {
        "helix"
    }
}
