use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// A position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn distance_to(self, other: Point3) -> f64 {
        (other - self).length()
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        p.to_dvec3()
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Vector3 {
        (self.to_dvec3() - rhs.to_dvec3()).into()
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        (self.to_dvec3() + rhs.to_dvec3()).into()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_difference_is_vector() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        let d: Vector3 = b - a;
        assert_eq!(d, Vector3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_point_plus_vector() {
        let p = Point3::ORIGIN + Vector3::new(1.0, -1.0, 0.5);
        assert_eq!(p, Point3::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point3::new(1.0, -2.5, 0.0).to_string(), "{1,-2.5,0}");
    }

    #[test]
    fn test_glam_round_trip() {
        let p = Point3::new(0.25, 0.5, 0.75);
        assert_eq!(Point3::from(DVec3::from(p)), p);
    }
}
