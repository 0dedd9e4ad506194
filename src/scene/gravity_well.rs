//! Gravity well: planets fall around a heavy sun that follows the pointer.

use super::{seeded_rng, Effect};
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::handle::ParticleId;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::util::random_range;
use crate::vector::Vector2;
use crate::world::{RenderBody, World};
use alloc::vec::Vec as AllocVec;
use core::f32::consts::{FRAC_PI_2, TAU};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GravityWellConfig {
    pub width: f32,
    pub height: f32,
    pub count: usize,
    pub sun_mass: f32,
    pub sun_radius: f32,
    pub orbit_range: (f32, f32),
    pub planet_radius_range: (f32, f32),
    /// Forces are skipped inside this distance from the sun's center.
    pub min_distance: f32,
}

impl GravityWellConfig {
    pub fn new(width: f32, height: f32) -> Self {
        let short_side = width.min(height);
        GravityWellConfig {
            width,
            height,
            count: 60,
            sun_mass: 2000.0,
            sun_radius: 20.0,
            orbit_range: (short_side * 0.15, short_side * 0.45),
            planet_radius_range: (2.0, 5.0),
            min_distance: 1.0,
        }
    }
}

pub struct GravityWell {
    world: World<f32>,
    sun: ParticleId,
}

impl GravityWell {
    /// Planets start on roughly circular orbits: launched tangentially at
    /// `sqrt(sun_mass / r)` per frame.
    pub fn new(config: GravityWellConfig, seed: u64) -> Result<Self, PhysicsError> {
        let mut rng = seeded_rng(seed);
        let world_config = WorldConfig::new()
            .with_bounds(config.width, config.height)
            .with_min_distance(config.min_distance);
        let mut world = World::new(world_config);

        let center = Vector2::new(config.width * 0.5, config.height * 0.5);
        let sun = world.add_particle(
            Particle::at_rest(center)
                .with_mass(config.sun_mass)
                .with_radius(config.sun_radius)
                .with_bounce(0.0),
        );

        for _ in 0..config.count {
            let angle = random_range(&mut rng, 0.0, TAU);
            let orbit = random_range(&mut rng, config.orbit_range.0, config.orbit_range.1);
            let pos = center + Vector2::from_polar(angle, orbit);
            let speed = libm::sqrtf(config.sun_mass / orbit);
            let radius = random_range(&mut rng, config.planet_radius_range.0, config.planet_radius_range.1);
            let planet = world.add_particle(Particle::new(pos, speed, angle + FRAC_PI_2).with_radius(radius));
            world.add_gravitation(planet, sun)?;
        }
        log::debug!("gravity well scene: {} planets, sun mass {}", config.count, config.sun_mass);
        Ok(GravityWell { world, sun })
    }

    pub fn sun(&self) -> Vector2<f32> {
        self.world.particles()[self.sun.index()].pos
    }

    pub fn world(&self) -> &World<f32> { &self.world }
}

impl Effect for GravityWell {
    fn advance(&mut self, _dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        self.world.step(observer)
    }

    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        self.world.bodies()
    }

    fn pointer_moved(&mut self, pointer: Option<Vector2<f32>>) {
        if let Some(pointer) = pointer {
            if let Ok(sun) = self.world.particle_mut(self.sun) {
                sun.pos = pointer;
                sun.vel = Vector2::zero();
            }
        }
    }
}
