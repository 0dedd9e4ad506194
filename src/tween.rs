//! Tween drivers: one-shot property interpolation and a stateful 2D tween.

use crate::easing::{EaseParams, Easing};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vector::{Positioned, Vector2};

/// Interpolate a single value along `easing`.
pub fn tween_property<F: Float>(
    t: F,
    start: F,
    change: F,
    duration: F,
    easing: Easing,
    params: &EaseParams<F>,
) -> F {
    easing.ease_with(t, start, change, duration, params)
}

/// Interpolate a single value along the curve registered as `name`.
///
/// Fails with [`PhysicsError::UnknownEasing`] for unregistered names.
pub fn tween_property_named<F: Float>(
    t: F,
    start: F,
    change: F,
    duration: F,
    name: &str,
    params: &EaseParams<F>,
) -> Result<F, PhysicsError> {
    let easing: Easing = name.parse()?;
    Ok(tween_property(t, start, change, duration, easing, params))
}

/// Write the interpolated position into `target`, easing each axis
/// independently along the same curve.
pub fn tween_point<F: Float, P: Positioned<F> + ?Sized>(
    target: &mut P,
    start: Vector2<F>,
    t: F,
    change: Vector2<F>,
    duration: F,
    easing: Easing,
    params: &EaseParams<F>,
) {
    let x = easing.ease_with(t, start.x, change.x, duration, params);
    let y = easing.ease_with(t, start.y, change.y, duration, params);
    target.set_position(Vector2::new(x, y));
}

/// [`tween_point`] with the curve looked up by name. `target` is left
/// untouched on error.
pub fn tween_point_named<F: Float, P: Positioned<F> + ?Sized>(
    target: &mut P,
    start: Vector2<F>,
    t: F,
    change: Vector2<F>,
    duration: F,
    name: &str,
    params: &EaseParams<F>,
) -> Result<(), PhysicsError> {
    let easing: Easing = name.parse()?;
    tween_point(target, start, t, change, duration, easing, params);
    Ok(())
}

/// A 2D tween that tracks its own elapsed time.
///
/// The host advances it with whatever time unit `duration` is in.
#[derive(Clone, Debug)]
pub struct Tween<F: Float> {
    start: Vector2<F>,
    change: Vector2<F>,
    duration: F,
    elapsed: F,
    easing: Easing,
    params: EaseParams<F>,
}

impl<F: Float> Tween<F> {
    pub fn new(start: Vector2<F>, end: Vector2<F>, duration: F, easing: Easing) -> Result<Self, PhysicsError> {
        if duration <= F::zero() || !duration.is_finite() {
            return Err(PhysicsError::InvalidDuration);
        }
        Ok(Tween {
            start,
            change: end - start,
            duration,
            elapsed: F::zero(),
            easing,
            params: EaseParams::new(),
        })
    }

    pub fn with_params(mut self, params: EaseParams<F>) -> Self {
        self.params = params;
        self
    }

    /// Move the clock forward, saturating at the duration.
    pub fn advance(&mut self, dt: F) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Current interpolated position.
    pub fn value(&self) -> Vector2<F> {
        if self.is_finished() {
            return self.end();
        }
        let mut out = Vector2::zero();
        tween_point(&mut out, self.start, self.elapsed, self.change, self.duration, self.easing, &self.params);
        out
    }

    /// Write the current position into `target`.
    pub fn apply_to<P: Positioned<F> + ?Sized>(&self, target: &mut P) {
        target.set_position(self.value());
    }

    /// Aim at a new end point from the same start and restart the clock.
    pub fn retarget(&mut self, end: Vector2<F>) {
        self.change = end - self.start;
        self.elapsed = F::zero();
    }

    /// Make the current end point the new start and stop.
    pub fn settle(&mut self) {
        self.start = self.end();
        self.change = Vector2::zero();
        self.elapsed = self.duration;
    }

    pub fn finish(&mut self) { self.elapsed = self.duration; }
    pub fn is_finished(&self) -> bool { self.elapsed >= self.duration }
    pub fn start(&self) -> Vector2<F> { self.start }
    pub fn end(&self) -> Vector2<F> { self.start + self.change }
    pub fn elapsed(&self) -> F { self.elapsed }
    pub fn duration(&self) -> F { self.duration }
    pub fn easing(&self) -> Easing { self.easing }
}
