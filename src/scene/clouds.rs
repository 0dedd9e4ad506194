//! Clouds: slow specks swell into rings around a fast roaming target and
//! shrink back once it has passed.

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
use core::f32::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloudsConfig {
    pub width: f32,
    pub height: f32,
    pub count: usize,
    pub speed_range: (f32, f32),
    pub target_radius_range: (f32, f32),
    pub target_speed_range: (f32, f32),
    pub target_direction_range: (f32, f32),
    pub max_size: f32,
    pub min_size: f32,
    /// Half-width of the box around the target inside which specks grow.
    pub max_distance: f32,
    pub grow_step: f32,
    pub shrink_step: f32,
}

impl CloudsConfig {
    pub fn new(width: f32, height: f32) -> Self {
        CloudsConfig {
            width,
            height,
            count: 500,
            speed_range: (-0.1, 0.1),
            target_radius_range: (5.0, 20.0),
            target_speed_range: (9.0, 12.0),
            target_direction_range: (1.0, 90.0),
            max_size: 30.0,
            min_size: 0.0,
            max_distance: 50.0,
            grow_step: 3.0,
            shrink_step: 0.1,
        }
    }
}

pub struct Clouds {
    world: World<f32>,
    target: ParticleId,
    config: CloudsConfig,
}

impl Clouds {
    pub fn new(config: CloudsConfig, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let mut world = World::new(WorldConfig::new().with_bounds(config.width, config.height));

        let target = Particle::new(
            Vector2::new(random_range(&mut rng, 0.0, config.width), random_range(&mut rng, 0.0, config.height)),
            random_range(&mut rng, config.target_speed_range.0, config.target_speed_range.1),
            random_range(&mut rng, config.target_direction_range.0, config.target_direction_range.1),
        )
        .with_radius(random_range(&mut rng, config.target_radius_range.0, config.target_radius_range.1));
        let target = world.add_particle(target);

        for _ in 0..config.count {
            let pos = Vector2::new(
                random_range(&mut rng, 0.0, config.width),
                random_range(&mut rng, 0.0, config.height),
            );
            let speed = random_range(&mut rng, config.speed_range.0, config.speed_range.1);
            let direction = random_range(&mut rng, 0.0, TAU);
            world.add_particle(Particle::new(pos, speed, direction));
        }
        log::debug!("clouds scene: {} specks", config.count);
        Clouds { world, target, config }
    }

    pub fn target(&self) -> Vector2<f32> {
        self.world.particles()[self.target.index()].pos
    }

    pub fn world(&self) -> &World<f32> { &self.world }

    fn resize(&mut self) {
        let target = self.target();
        let c = self.config;
        for (id, p) in self.world.iter_mut() {
            if id == self.target {
                continue;
            }
            let dx = target.x - p.pos.x;
            let dy = target.y - p.pos.y;
            let near = dx < c.max_distance && dx > -c.max_distance && dy < c.max_distance && dy > -c.max_distance;
            if near {
                if p.radius < c.max_size {
                    p.radius += c.grow_step;
                }
            } else if p.radius > c.min_size {
                p.radius -= c.shrink_step;
            }
            if p.radius < 0.0 {
                p.radius = 0.0;
            }
        }
    }
}

impl Effect for Clouds {
    fn advance(&mut self, _dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        self.world.step(observer)?;
        self.resize();
        Ok(())
    }

    /// Specks only; the roaming target is invisible.
    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        self.world
            .iter()
            .filter(|(id, _)| *id != self.target)
            .map(|(_, p)| RenderBody { position: p.pos, radius: p.radius })
            .collect()
    }
}
