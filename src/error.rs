//! Error types for motion and easing operations.

use alloc::string::String;
use core::fmt;

/// Errors that can occur while easing or stepping particles.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// No easing curve is registered under this name.
    UnknownEasing { name: String },
    /// A particle handle does not refer to a live particle.
    ParticleOutOfBounds { index: usize, count: usize },
    /// An anchor handle does not refer to a registered anchor.
    AnchorOutOfBounds { index: usize, count: usize },
    /// A particle cannot be its own gravitation source.
    SelfGravitation { index: usize },
    /// Tween duration must be positive and finite.
    InvalidDuration,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::UnknownEasing { name } => write!(f, "unknown easing function '{}'", name),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::AnchorOutOfBounds { index, count } => {
                write!(f, "anchor index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfGravitation { index } => {
                write!(f, "particle {} cannot gravitate toward itself", index)
            }
            PhysicsError::InvalidDuration => write!(f, "tween duration must be positive and finite"),
        }
    }
}
