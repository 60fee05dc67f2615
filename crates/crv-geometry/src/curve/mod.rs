//! Curve trait and implementations.

mod circle;
mod ellipse;
mod helix;

use std::any::Any;
use std::sync::Arc;

use crv_math::{Point3, Vector3};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// Shared, type-erased handle to a curve.
pub type CurveHandle = Arc<dyn Curve>;

/// Type-erasure hooks used for narrowing. Implemented for every
/// `'static + Send + Sync` type, so curve implementors never write it.
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Trait for parametric curves in 3D space.
///
/// `t` is unconstrained: any real value is evaluated directly, without
/// wrapping into a period.
pub trait Curve: AsAny {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative with respect to `t`.
    fn derivative_at(&self, t: f64) -> Vector3;

    /// Short lowercase name of the concrete curve type.
    fn name(&self) -> &'static str;
}

/// Curves described by a single radius, usable as an ordering key.
pub trait Radial {
    fn radius(&self) -> f64;
}

/// Whether `handle` refers to a curve of concrete type `C`.
pub fn is_a<C: Curve>(handle: &CurveHandle) -> bool {
    // dispatch through `dyn Curve`; `handle.as_any()` would see the `Arc` itself
    AsAny::as_any(&**handle).is::<C>()
}

/// Narrow a handle to the concrete curve type `C`.
///
/// On success the returned `Arc` points at the same allocation as `handle`;
/// the curve is never copied.
pub fn try_as<C: Curve>(handle: &CurveHandle) -> Option<Arc<C>> {
    if !is_a::<C>(handle) {
        return None;
    }
    AsAny::into_any_arc(Arc::clone(handle)).downcast::<C>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_as_same_type_shares_instance() {
        let handle: CurveHandle = Arc::new(Circle::new(2.0).unwrap());
        let circle = try_as::<Circle>(&handle).unwrap();
        assert_eq!(circle.radius(), 2.0);
        assert!(std::ptr::eq(
            Arc::as_ptr(&circle) as *const u8,
            Arc::as_ptr(&handle) as *const u8
        ));
        assert_eq!(Arc::strong_count(&handle), 2);
    }

    #[test]
    fn test_try_as_other_type_is_none() {
        let handle: CurveHandle = Arc::new(Helix::new(1.0, 3.0).unwrap());
        assert!(try_as::<Circle>(&handle).is_none());
        assert!(try_as::<Ellipse>(&handle).is_none());
        assert!(try_as::<Helix>(&handle).is_some());
        // failed attempts leave no extra references behind
        assert_eq!(Arc::strong_count(&handle), 1);
    }

    #[test]
    fn test_radial_key_matches_accessor() {
        let circle = Circle::new(2.5).unwrap();
        let helix = Helix::new(4.0, -1.0).unwrap();
        assert_eq!(Radial::radius(&circle), circle.radius());
        assert_eq!(Radial::radius(&helix), helix.radius());
    }

    #[test]
    fn test_curve_names() {
        let curves: Vec<CurveHandle> = vec![
            Arc::new(Circle::new(1.0).unwrap()),
            Arc::new(Ellipse::new(1.0, 2.0).unwrap()),
            Arc::new(Helix::new(1.0, 0.5).unwrap()),
        ];
        let names: Vec<_> = curves.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["circle", "ellipse", "helix"]);
    }
}
