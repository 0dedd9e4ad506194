//! Numeric, geometry and randomness helpers used by effect scenes.

use crate::float::Float;
use crate::vector::Vector2;
use rand::Rng;

/// Position of `value` within `[min, max]` as a 0..1 fraction.
pub fn normalize<F: Float>(value: F, min: F, max: F) -> F {
    (value - min) / (max - min)
}

/// Value at fraction `norm` of the way from `min` to `max`.
pub fn lerp<F: Float>(norm: F, min: F, max: F) -> F {
    (max - min) * norm + min
}

/// Re-map `value` from one range onto another. Not clamped.
pub fn map_range<F: Float>(value: F, source_min: F, source_max: F, dest_min: F, dest_max: F) -> F {
    lerp(normalize(value, source_min, source_max), dest_min, dest_max)
}

/// Clamp to the range spanned by `a` and `b`, in either order.
pub fn clamp<F: Float>(value: F, a: F, b: F) -> F {
    value.max(a.min(b)).min(a.max(b))
}

/// Inclusive range test; bounds may be given in either order.
pub fn in_range<F: Float>(value: F, a: F, b: F) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Whether two inclusive ranges overlap.
pub fn range_intersect<F: Float>(min_a: F, max_a: F, min_b: F, max_b: F) -> bool {
    min_a.max(max_a) >= min_b.min(max_b) && min_a.min(max_a) <= min_b.max(max_b)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle<F: Float> {
    pub center: Vector2<F>,
    pub radius: F,
}

/// Axis-aligned rectangle anchored at its `origin` corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<F: Float> {
    pub origin: Vector2<F>,
    pub width: F,
    pub height: F,
}

/// Touching counts as colliding.
pub fn circle_collision<F: Float>(a: Circle<F>, b: Circle<F>) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Strictly inside; the rim does not count.
pub fn circle_contains<F: Float>(circle: Circle<F>, point: Vector2<F>) -> bool {
    point.distance(circle.center) < circle.radius
}

pub fn point_in_rect<F: Float>(point: Vector2<F>, rect: Rect<F>) -> bool {
    in_range(point.x, rect.origin.x, rect.origin.x + rect.width)
        && in_range(point.y, rect.origin.y, rect.origin.y + rect.height)
}

pub fn rect_intersect<F: Float>(a: Rect<F>, b: Rect<F>) -> bool {
    range_intersect(a.origin.x, a.origin.x + a.width, b.origin.x, b.origin.x + b.width)
        && range_intersect(a.origin.y, a.origin.y + a.height, b.origin.y, b.origin.y + b.height)
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees / F::from_f32(180.0) * F::pi()
}

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * F::from_f32(180.0) / F::pi()
}

pub fn round_to_places<F: Float>(value: F, places: i32) -> F {
    let multiple = F::from_f32(10.0).powf(F::from_f32(places as f32));
    (value * multiple).round() / multiple
}

pub fn round_nearest<F: Float>(value: F, nearest: F) -> F {
    (value / nearest).round() * nearest
}

/// Point at `t` on the quadratic bezier through `p0`, `p1`, `p2`.
pub fn quadratic_bezier<F: Float>(p0: Vector2<F>, p1: Vector2<F>, p2: Vector2<F>, t: F) -> Vector2<F> {
    let u = F::one() - t;
    p0 * (u * u) + p1 * (F::two() * u * t) + p2 * (t * t)
}

/// Point at `t` on the cubic bezier through `p0` .. `p3`.
pub fn cubic_bezier<F: Float>(p0: Vector2<F>, p1: Vector2<F>, p2: Vector2<F>, p3: Vector2<F>, t: F) -> Vector2<F> {
    let u = F::one() - t;
    let three = F::from_f32(3.0);
    p0 * (u * u * u) + p1 * (three * u * u * t) + p2 * (three * u * t * t) + p3 * (t * t * t)
}

/// Uniform value in `[min, max)`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Uniform integer in `[min, max]`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Mean of `iterations` uniform samples; bunches toward the middle of the
/// range as `iterations` grows.
pub fn random_distribution<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, iterations: u32) -> f32 {
    if iterations == 0 {
        return min + (max - min) * 0.5;
    }
    let mut total = 0.0;
    for _ in 0..iterations {
        total += random_range(rng, min, max);
    }
    total / iterations as f32
}
