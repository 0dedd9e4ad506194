//! Penner-style easing curves.
//!
//! Every curve has the shape `f(t, b, c, d)`: elapsed time `t`, start value
//! `b`, change in value `c` and duration `d`. `t` and `d` can be frames,
//! seconds or milliseconds as long as they agree. For every curve
//! `f(0, b, c, d) == b` and `f(d, b, c, d) == b + c` up to rounding.

use crate::error::PhysicsError;
use crate::float::Float;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Overshoot used by the back curves when none is given (about 10%).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Optional shape parameters for the elastic and back curves.
///
/// `None` selects the curve's default. Other curves ignore these.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EaseParams<F: Float> {
    /// Elastic peak amplitude. Values below `|change|` fall back to `change`.
    pub amplitude: Option<F>,
    /// Elastic oscillation period, in the same unit as the duration.
    pub period: Option<F>,
    /// Back overshoot. `0` degenerates to a plain cubic.
    pub overshoot: Option<F>,
}

impl<F: Float> EaseParams<F> {
    pub fn new() -> Self {
        EaseParams { amplitude: None, period: None, overshoot: None }
    }

    pub fn with_amplitude(mut self, amplitude: F) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn with_period(mut self, period: F) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_overshoot(mut self, overshoot: F) -> Self {
        self.overshoot = Some(overshoot);
        self
    }
}

/// The closed set of easing curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Easing {
    /// Every curve, in registry order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ];

    /// Registry name, e.g. `"easeInOutBounce"`.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "easeInQuad",
            Easing::OutQuad => "easeOutQuad",
            Easing::InOutQuad => "easeInOutQuad",
            Easing::InCubic => "easeInCubic",
            Easing::OutCubic => "easeOutCubic",
            Easing::InOutCubic => "easeInOutCubic",
            Easing::InQuart => "easeInQuart",
            Easing::OutQuart => "easeOutQuart",
            Easing::InOutQuart => "easeInOutQuart",
            Easing::InQuint => "easeInQuint",
            Easing::OutQuint => "easeOutQuint",
            Easing::InOutQuint => "easeInOutQuint",
            Easing::InSine => "easeInSine",
            Easing::OutSine => "easeOutSine",
            Easing::InOutSine => "easeInOutSine",
            Easing::InExpo => "easeInExpo",
            Easing::OutExpo => "easeOutExpo",
            Easing::InOutExpo => "easeInOutExpo",
            Easing::InCirc => "easeInCirc",
            Easing::OutCirc => "easeOutCirc",
            Easing::InOutCirc => "easeInOutCirc",
            Easing::InElastic => "easeInElastic",
            Easing::OutElastic => "easeOutElastic",
            Easing::InOutElastic => "easeInOutElastic",
            Easing::InBack => "easeInBack",
            Easing::OutBack => "easeOutBack",
            Easing::InOutBack => "easeInOutBack",
            Easing::InBounce => "easeInBounce",
            Easing::OutBounce => "easeOutBounce",
            Easing::InOutBounce => "easeInOutBounce",
        }
    }

    /// Evaluate the curve with default shape parameters.
    pub fn ease<F: Float>(self, t: F, b: F, c: F, d: F) -> F {
        self.ease_with(t, b, c, d, &EaseParams::new())
    }

    /// Evaluate the curve.
    pub fn ease_with<F: Float>(self, t: F, b: F, c: F, d: F, params: &EaseParams<F>) -> F {
        match self {
            Easing::Linear => c * t / d + b,
            Easing::InQuad => in_quad(t, b, c, d),
            Easing::OutQuad => out_quad(t, b, c, d),
            Easing::InOutQuad => in_out_quad(t, b, c, d),
            Easing::InCubic => in_power(t, b, c, d, 3),
            Easing::OutCubic => out_odd_power(t, b, c, d, 3),
            Easing::InOutCubic => in_out_odd_power(t, b, c, d, 3),
            Easing::InQuart => in_power(t, b, c, d, 4),
            Easing::OutQuart => out_quart(t, b, c, d),
            Easing::InOutQuart => in_out_quart(t, b, c, d),
            Easing::InQuint => in_power(t, b, c, d, 5),
            Easing::OutQuint => out_odd_power(t, b, c, d, 5),
            Easing::InOutQuint => in_out_odd_power(t, b, c, d, 5),
            Easing::InSine => -c * (t / d * F::pi() * F::half()).cos() + c + b,
            Easing::OutSine => c * (t / d * F::pi() * F::half()).sin() + b,
            Easing::InOutSine => -c * F::half() * ((F::pi() * t / d).cos() - F::one()) + b,
            Easing::InExpo => in_expo(t, b, c, d),
            Easing::OutExpo => out_expo(t, b, c, d),
            Easing::InOutExpo => in_out_expo(t, b, c, d),
            Easing::InCirc => in_circ(t, b, c, d),
            Easing::OutCirc => out_circ(t, b, c, d),
            Easing::InOutCirc => in_out_circ(t, b, c, d),
            Easing::InElastic => in_elastic(t, b, c, d, params),
            Easing::OutElastic => out_elastic(t, b, c, d, params),
            Easing::InOutElastic => in_out_elastic(t, b, c, d, params),
            Easing::InBack => in_back(t, b, c, d, overshoot(params)),
            Easing::OutBack => out_back(t, b, c, d, overshoot(params)),
            Easing::InOutBack => in_out_back(t, b, c, d, overshoot(params)),
            Easing::InBounce => in_bounce(t, b, c, d),
            Easing::OutBounce => out_bounce(t, b, c, d),
            Easing::InOutBounce => in_out_bounce(t, b, c, d),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = PhysicsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| PhysicsError::UnknownEasing { name: String::from(name) })
    }
}

fn k<F: Float>(v: f64) -> F {
    F::from_f64(v)
}

fn pow<F: Float>(t: F, n: u32) -> F {
    let mut out = F::one();
    for _ in 0..n {
        out = out * t;
    }
    out
}

fn in_quad<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / d;
    c * t * t + b
}

fn out_quad<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / d;
    -c * t * (t - F::two()) + b
}

fn in_out_quad<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / (d * F::half());
    if t < F::one() {
        return c * F::half() * t * t + b;
    }
    let t = t - F::one();
    -c * F::half() * (t * (t - F::two()) - F::one()) + b
}

fn in_power<F: Float>(t: F, b: F, c: F, d: F, n: u32) -> F {
    c * pow(t / d, n) + b
}

// cubic and quintic share a shape: c * ((t/d - 1)^n + 1)
fn out_odd_power<F: Float>(t: F, b: F, c: F, d: F, n: u32) -> F {
    c * (pow(t / d - F::one(), n) + F::one()) + b
}

fn in_out_odd_power<F: Float>(t: F, b: F, c: F, d: F, n: u32) -> F {
    let t = t / (d * F::half());
    if t < F::one() {
        return c * F::half() * pow(t, n) + b;
    }
    c * F::half() * (pow(t - F::two(), n) + F::two()) + b
}

fn out_quart<F: Float>(t: F, b: F, c: F, d: F) -> F {
    -c * (pow(t / d - F::one(), 4) - F::one()) + b
}

fn in_out_quart<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / (d * F::half());
    if t < F::one() {
        return c * F::half() * pow(t, 4) + b;
    }
    -c * F::half() * (pow(t - F::two(), 4) - F::two()) + b
}

fn in_expo<F: Float>(t: F, b: F, c: F, d: F) -> F {
    if t == F::zero() {
        return b;
    }
    c * (k::<F>(10.0) * (t / d - F::one())).exp2() + b
}

fn out_expo<F: Float>(t: F, b: F, c: F, d: F) -> F {
    if t == d {
        return b + c;
    }
    c * (F::one() - (k::<F>(-10.0) * t / d).exp2()) + b
}

fn in_out_expo<F: Float>(t: F, b: F, c: F, d: F) -> F {
    if t == F::zero() {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d * F::half());
    if t < F::one() {
        return c * F::half() * (k::<F>(10.0) * (t - F::one())).exp2() + b;
    }
    let t = t - F::one();
    c * F::half() * (F::two() - (k::<F>(-10.0) * t).exp2()) + b
}

fn in_circ<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / d;
    -c * ((F::one() - t * t).sqrt() - F::one()) + b
}

fn out_circ<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / d - F::one();
    c * (F::one() - t * t).sqrt() + b
}

fn in_out_circ<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / (d * F::half());
    if t < F::one() {
        return -c * F::half() * ((F::one() - t * t).sqrt() - F::one()) + b;
    }
    let t = t - F::two();
    c * F::half() * ((F::one() - t * t).sqrt() + F::one()) + b
}

/// Resolve `(amplitude, period, phase)` for the elastic curves.
fn elastic_shape<F: Float>(c: F, params: &EaseParams<F>, default_period: F) -> (F, F, F) {
    let period = match params.period {
        Some(p) if p != F::zero() => p,
        _ => default_period,
    };
    let two_pi = F::two() * F::pi();
    match params.amplitude {
        Some(a) if a >= c.abs() && a != F::zero() => (a, period, period / two_pi * (c / a).asin()),
        _ => (c, period, period / k::<F>(4.0)),
    }
}

fn elastic_wave<F: Float>(t: F, d: F, period: F, phase: F) -> F {
    ((t * d - phase) * (F::two() * F::pi()) / period).sin()
}

fn in_elastic<F: Float>(t: F, b: F, c: F, d: F, params: &EaseParams<F>) -> F {
    if t == F::zero() {
        return b;
    }
    let t = t / d;
    if t == F::one() {
        return b + c;
    }
    let (a, p, s) = elastic_shape(c, params, d * k::<F>(0.3));
    let t = t - F::one();
    -(a * (k::<F>(10.0) * t).exp2() * elastic_wave(t, d, p, s)) + b
}

fn out_elastic<F: Float>(t: F, b: F, c: F, d: F, params: &EaseParams<F>) -> F {
    if t == F::zero() {
        return b;
    }
    let t = t / d;
    if t == F::one() {
        return b + c;
    }
    let (a, p, s) = elastic_shape(c, params, d * k::<F>(0.3));
    a * (k::<F>(-10.0) * t).exp2() * elastic_wave(t, d, p, s) + c + b
}

fn in_out_elastic<F: Float>(t: F, b: F, c: F, d: F, params: &EaseParams<F>) -> F {
    if t == F::zero() {
        return b;
    }
    let t = t / (d * F::half());
    if t == F::two() {
        return b + c;
    }
    let (a, p, s) = elastic_shape(c, params, d * k::<F>(0.3 * 1.5));
    let t = t - F::one();
    if t < F::zero() {
        return -F::half() * (a * (k::<F>(10.0) * t).exp2() * elastic_wave(t, d, p, s)) + b;
    }
    a * (k::<F>(-10.0) * t).exp2() * elastic_wave(t, d, p, s) * F::half() + c + b
}

fn overshoot<F: Float>(params: &EaseParams<F>) -> F {
    params.overshoot.unwrap_or_else(|| k(DEFAULT_OVERSHOOT))
}

fn in_back<F: Float>(t: F, b: F, c: F, d: F, s: F) -> F {
    let t = t / d;
    c * t * t * ((s + F::one()) * t - s) + b
}

fn out_back<F: Float>(t: F, b: F, c: F, d: F, s: F) -> F {
    let t = t / d - F::one();
    c * (t * t * ((s + F::one()) * t + s) + F::one()) + b
}

fn in_out_back<F: Float>(t: F, b: F, c: F, d: F, s: F) -> F {
    let s = s * k::<F>(1.525);
    let t = t / (d * F::half());
    if t < F::one() {
        return c * F::half() * (t * t * ((s + F::one()) * t - s)) + b;
    }
    let t = t - F::two();
    c * F::half() * (t * t * ((s + F::one()) * t + s) + F::two()) + b
}

fn out_bounce<F: Float>(t: F, b: F, c: F, d: F) -> F {
    let t = t / d;
    let n1 = k::<F>(7.5625);
    let d1 = k::<F>(2.75);
    if t < F::one() / d1 {
        c * (n1 * t * t) + b
    } else if t < F::two() / d1 {
        let t = t - k::<F>(1.5) / d1;
        c * (n1 * t * t + k::<F>(0.75)) + b
    } else if t < k::<F>(2.5) / d1 {
        let t = t - k::<F>(2.25) / d1;
        c * (n1 * t * t + k::<F>(0.9375)) + b
    } else {
        let t = t - k::<F>(2.625) / d1;
        c * (n1 * t * t + k::<F>(0.984375)) + b
    }
}

fn in_bounce<F: Float>(t: F, b: F, c: F, d: F) -> F {
    c - out_bounce(d - t, F::zero(), c, d) + b
}

fn in_out_bounce<F: Float>(t: F, b: F, c: F, d: F) -> F {
    if t < d * F::half() {
        return in_bounce(t * F::two(), F::zero(), c, d) * F::half() + b;
    }
    out_bounce(t * F::two() - d, F::zero(), c, d) * F::half() + c * F::half() + b
}
