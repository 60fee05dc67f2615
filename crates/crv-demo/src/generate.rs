//! Random curve generation for the demo.

use std::sync::Arc;

use crv_core::Result;
use crv_geometry::{Circle, CurveHandle, CurveSet, Ellipse, Helix};
use rand::Rng;
use tracing::warn;

/// Upper bound of a randomly chosen curve count.
pub const MAX_COUNT: usize = 1_000_000;

/// Ranges for randomly drawn curve parameters.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Radii are drawn from `[0, max_radius)`; must be positive
    pub max_radius: f64,
    /// Helix steps are drawn from `[0, max_step)`; must be positive
    pub max_step: f64,
    /// Probability in `[0, 1]` that a drawn radius is negated
    pub invalid_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_radius: 1000.0,
            max_step: 1000.0,
            invalid_ratio: 0.0,
        }
    }
}

fn draw_radius<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> f64 {
    let radius = rng.gen_range(0.0..config.max_radius);
    if config.invalid_ratio > 0.0 && rng.gen_bool(config.invalid_ratio) {
        -radius
    } else {
        radius
    }
}

/// Draw one curve of a uniformly chosen type.
pub fn generate_curve<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<CurveHandle> {
    let handle: CurveHandle = match rng.gen_range(0..3u8) {
        0 => Arc::new(Circle::new(draw_radius(rng, config))?),
        1 => {
            let radius_x = draw_radius(rng, config);
            let radius_y = draw_radius(rng, config);
            Arc::new(Ellipse::new(radius_x, radius_y)?)
        }
        _ => {
            let radius = draw_radius(rng, config);
            let step = rng.gen_range(0.0..config.max_step);
            Arc::new(Helix::new(radius, step)?)
        }
    };
    Ok(handle)
}

/// Generate `count` curves, skipping any that fail construction.
///
/// Returns the set and the number of skipped curves.
pub fn generate_set<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    config: &GeneratorConfig,
) -> (CurveSet, usize) {
    let mut set = CurveSet::with_capacity(count);
    let mut rejected = 0;
    for index in 0..count {
        match generate_curve(rng, config) {
            Ok(handle) => set.push_handle(handle),
            Err(err) => {
                warn!(index, %err, "skipping invalid curve");
                rejected += 1;
            }
        }
    }
    (set, rejected)
}
