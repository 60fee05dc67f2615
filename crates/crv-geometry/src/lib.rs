//! Curve kernel geometry: parametric curves and heterogeneous curve sets.

pub mod collection;
pub mod curve;

pub use collection::{is_sorted_by_radius, sort_by_radius, CurveSet};
pub use curve::{is_a, try_as, Circle, Curve, CurveHandle, Ellipse, Helix, Radial};
