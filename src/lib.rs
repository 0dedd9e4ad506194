//! Particle motion and easing for frame-driven 2D visual effects.
//!
//! `motes` provides point-mass particles with springs, inverse-square
//! gravitation, friction, gravity and wall bounce, plus a library of Penner
//! easing curves and tween drivers. Designed for canvas-style effects:
//! drifting backgrounds, clouds, starfields, elastic tethers and
//! click-to-target animation.
//!
//! # Features
//!
//! - **Particles**: velocity integration in a fixed force order (springs,
//!   gravitation, friction, gravity, position)
//! - **Handle-based attachments**: springs and gravitation refer to anchors
//!   and peers by index into a [`World`], never by pointer
//! - **Order-independent steps**: every particle integrates against the same
//!   frame [`Snapshot`]
//! - **Easing**: 31 curves as a closed [`Easing`] enum, with lookup by name
//! - **Scenes**: ready-made effect drivers behind the [`scene::Effect`] trait
//! - **Observable**: monitor steps via the [`StepObserver`] trait or the `log`
//!   facade
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vector;
pub mod easing;
pub mod tween;
pub mod handle;
pub mod environment;
pub mod particle;
pub mod world;
pub mod scene;
pub mod util;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vector::{Positioned, Vector2};
pub use easing::{EaseParams, Easing};
pub use tween::{tween_point, tween_point_named, tween_property, tween_property_named, Tween};
pub use handle::{AnchorId, ParticleId};
pub use environment::{BodyState, Detached, Environment, Snapshot};
pub use particle::{BoundaryContact, ForceSummary, Particle, Spring, SpringTarget};
pub use world::{RenderBody, World};
pub use config::WorldConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
