//! Heterogeneous curve sets and type-filtered views over them.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::curve::{is_a, try_as, Curve, CurveHandle, Radial};

/// An ordered collection of mixed curve types.
///
/// Handles are kept in insertion order with no deduplication. Views built
/// with [`CurveSet::filter`] share the underlying curves with the set.
#[derive(Clone, Default)]
pub struct CurveSet {
    curves: Vec<CurveHandle>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            curves: Vec::with_capacity(capacity),
        }
    }

    /// Move `curve` into shared storage and append it.
    pub fn push<C: Curve>(&mut self, curve: C) {
        self.curves.push(Arc::new(curve));
    }

    /// Append an existing handle without copying the curve.
    pub fn push_handle(&mut self, handle: CurveHandle) {
        self.curves.push(handle);
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn handles(&self) -> &[CurveHandle] {
        &self.curves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveHandle> {
        self.curves.iter()
    }

    /// Collect every curve of concrete type `C`, preserving relative order.
    pub fn filter<C: Curve>(&self) -> Vec<Arc<C>> {
        let view: Vec<Arc<C>> = self.curves.iter().filter_map(try_as::<C>).collect();
        debug!(
            kind = std::any::type_name::<C>(),
            kept = view.len(),
            total = self.curves.len(),
            "filtered curve set"
        );
        view
    }

    /// Number of curves of concrete type `C`.
    pub fn count<C: Curve>(&self) -> usize {
        self.curves.iter().filter(|handle| is_a::<C>(handle)).count()
    }
}

impl fmt::Debug for CurveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.curves.iter().map(|c| c.name()))
            .finish()
    }
}

impl FromIterator<CurveHandle> for CurveSet {
    fn from_iter<I: IntoIterator<Item = CurveHandle>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

impl Extend<CurveHandle> for CurveSet {
    fn extend<I: IntoIterator<Item = CurveHandle>>(&mut self, iter: I) {
        self.curves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a CurveHandle;
    type IntoIter = std::slice::Iter<'a, CurveHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

/// Sort a view by ascending radius.
///
/// The sort is stable: curves with equal radii keep their relative order.
/// Only handles move; the curves themselves are untouched.
pub fn sort_by_radius<C: Radial>(view: &mut [Arc<C>]) {
    view.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
}

pub fn is_sorted_by_radius<C: Radial>(view: &[Arc<C>]) -> bool {
    view.windows(2).all(|w| w[0].radius() <= w[1].radius())
}
