use std::fmt;
use std::ops::{Mul, Neg};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A displacement or derivative in 3D space. Not a position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn length(self) -> f64 {
        self.to_dvec3().length()
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.to_dvec3().dot(other.to_dvec3())
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        v.to_dvec3()
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        (self.to_dvec3() * rhs).into()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.x, self.y, self.z)
    }
}
