//! Configuration types for a particle world.

use crate::environment::DEFAULT_MIN_DISTANCE;
use crate::float::Float;
use crate::vector::Vector2;

/// Configuration for a [`World`](crate::world::World).
///
/// # Builder Pattern
/// ```
/// use motes::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_bounds(800.0, 600.0)
///     .with_min_distance(0.5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig<F: Float> {
    /// Width and height of the box particles bounce inside during `step`.
    /// `None` = unbounded. Default: `None`.
    pub bounds: Option<Vector2<F>>,
    /// Separation at or below which spring and gravitation forces are
    /// skipped. Default: 1e-6.
    pub min_distance: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            bounds: None,
            min_distance: F::from_f32(DEFAULT_MIN_DISTANCE),
        }
    }

    /// Bounce particles inside a `width` x `height` box on every step.
    pub fn with_bounds(mut self, width: F, height: F) -> Self {
        self.bounds = Some(Vector2::new(width, height));
        self
    }

    /// Let particles fly freely.
    pub fn unbounded(mut self) -> Self {
        self.bounds = None;
        self
    }

    /// Set the degenerate-distance floor. Negative values are clamped to 0.
    pub fn with_min_distance(mut self, min_distance: F) -> Self {
        self.min_distance = min_distance.max(F::zero());
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
