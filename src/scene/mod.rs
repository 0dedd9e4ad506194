//! Effect scenes: per-frame drivers built on particles and easing.
//!
//! A scene owns its particles, takes pointer input from the host and is
//! advanced by an external clock. Scenes report `(position, radius)` for
//! each visible body; drawing is up to the host.

pub mod clouds;
pub mod drift;
pub mod gravity_well;
pub mod starfield;
pub mod tether;
pub mod tween;

pub use clouds::{Clouds, CloudsConfig};
pub use drift::{Drift, DriftConfig};
pub use gravity_well::{GravityWell, GravityWellConfig};
pub use starfield::{Star, Starfield, StarfieldConfig};
pub use tether::{Tether, TetherConfig};
pub use tween::{ClickTween, ClickTweenConfig};

use crate::error::PhysicsError;
use crate::observer::StepObserver;
use crate::vector::Vector2;
use crate::world::RenderBody;
use alloc::vec::Vec as AllocVec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A frame-driven visual effect.
pub trait Effect {
    /// Advance one tick.
    ///
    /// `dt` is the host's elapsed time since the last tick. Physics scenes
    /// integrate exactly one frame per call and ignore it; time-based
    /// scenes consume it in their configured unit.
    fn advance(&mut self, dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError>;

    /// Bodies to draw this frame.
    fn bodies(&self) -> AllocVec<RenderBody<f32>>;

    /// Pointer moved to a point, or left the surface (`None`).
    fn pointer_moved(&mut self, _pointer: Option<Vector2<f32>>) {}

    /// Pointer pressed at a point.
    fn pointer_pressed(&mut self, _pointer: Vector2<f32>) {}
}

pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
