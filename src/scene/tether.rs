//! Elastic tether: a weight on a spring to an anchor that follows the
//! pointer.

use super::{seeded_rng, Effect};
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::handle::{AnchorId, ParticleId};
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::util::random_range;
use crate::vector::Vector2;
use crate::world::{RenderBody, World};
use alloc::vec;
use alloc::vec::Vec as AllocVec;
use core::f32::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TetherConfig {
    pub width: f32,
    pub height: f32,
    pub stiffness: f32,
    pub rest_length: f32,
    pub friction: f32,
    pub radius: f32,
    /// The weight starts moving along +x at a speed drawn from `[0, max)`.
    pub max_launch_speed: f32,
}

impl TetherConfig {
    pub fn new(width: f32, height: f32) -> Self {
        TetherConfig {
            width,
            height,
            stiffness: 0.1,
            rest_length: 0.0,
            friction: 0.9,
            radius: 20.0,
            max_launch_speed: TAU,
        }
    }
}

pub struct Tether {
    world: World<f32>,
    anchor: AnchorId,
    weight: ParticleId,
}

impl Tether {
    pub fn new(config: TetherConfig, seed: u64) -> Result<Self, PhysicsError> {
        let mut rng = seeded_rng(seed);
        let mut world = World::new(WorldConfig::new());
        let anchor = world.add_anchor(Vector2::new(config.width * 0.5, config.height * 0.5));

        let pos = Vector2::new(
            random_range(&mut rng, 0.0, config.width),
            random_range(&mut rng, 0.0, config.height),
        );
        let speed = random_range(&mut rng, 0.0, config.max_launch_speed);
        let weight = world.add_particle(
            Particle::new(pos, speed, 0.0)
                .with_radius(config.radius)
                .with_friction(config.friction),
        );
        world.add_spring(weight, anchor, config.stiffness, config.rest_length)?;
        log::debug!("tether scene: k = {}, friction = {}", config.stiffness, config.friction);
        Ok(Tether { world, anchor, weight })
    }

    pub fn anchor(&self) -> Result<Vector2<f32>, PhysicsError> {
        self.world.anchor(self.anchor)
    }

    pub fn weight(&self) -> Result<&Particle<f32>, PhysicsError> {
        self.world.particle(self.weight)
    }
}

impl Effect for Tether {
    fn advance(&mut self, _dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        self.world.step(observer)
    }

    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        match self.world.particle(self.weight) {
            Ok(p) => vec![RenderBody { position: p.pos, radius: p.radius }],
            Err(_) => AllocVec::new(),
        }
    }

    fn pointer_moved(&mut self, pointer: Option<Vector2<f32>>) {
        if let Some(pointer) = pointer {
            if let Err(e) = self.world.set_anchor(self.anchor, pointer) {
                log::warn!("tether anchor did not move: {}", e);
            }
        }
    }
}
