//! Ambient drift: particles wander and bounce around the surface, shy away
//! from the pointer and report which pairs are close enough to link.

use super::{seeded_rng, Effect};
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::handle::ParticleId;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::util::{circle_collision, random_range, Circle};
use crate::vector::Vector2;
use crate::world::{RenderBody, World};
use alloc::vec::Vec as AllocVec;
use core::f32::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriftConfig {
    pub width: f32,
    pub height: f32,
    pub count: usize,
    pub radius_range: (f32, f32),
    pub speed_range: (f32, f32),
    pub direction_range: (f32, f32),
    /// Pointer influence radius. `None` ignores the pointer.
    pub repel_radius: Option<f32>,
    /// How far a particle jumps away from the pointer per frame.
    pub repel_step: f32,
    /// Squared distance under which two particles are linked.
    pub link_distance_sq: Option<f32>,
}

impl DriftConfig {
    /// 80 hollow bubbles of mixed size drifting at moderate speed.
    pub fn ambient(width: f32, height: f32) -> Self {
        DriftConfig {
            width,
            height,
            count: 80,
            radius_range: (5.0, 20.0),
            speed_range: (2.0, 4.0),
            direction_range: (1.0, 90.0),
            repel_radius: None,
            repel_step: 0.0,
            link_distance_sq: None,
        }
    }

    /// Dense, slow network background: one particle per 9000 square units,
    /// pushed aside by the pointer and linked to close neighbours.
    pub fn background(width: f32, height: f32) -> Self {
        let line_divisor = 7.0;
        DriftConfig {
            width,
            height,
            count: libm::roundf(width * height / 9000.0) as usize,
            radius_range: (5.0, 5.0),
            speed_range: (1.0, 1.0),
            direction_range: (0.0, TAU),
            repel_radius: Some((height / 80.0) * (width / 80.0)),
            repel_step: 10.0,
            link_distance_sq: Some((width / line_divisor) * (height / line_divisor)),
        }
    }
}

pub struct Drift {
    world: World<f32>,
    config: DriftConfig,
    pointer: Option<Vector2<f32>>,
}

impl Drift {
    pub fn new(config: DriftConfig, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let mut world = World::new(WorldConfig::new().with_bounds(config.width, config.height));
        for _ in 0..config.count {
            let pos = Vector2::new(
                random_range(&mut rng, 0.0, config.width),
                random_range(&mut rng, 0.0, config.height),
            );
            let radius = random_range(&mut rng, config.radius_range.0, config.radius_range.1);
            let speed = random_range(&mut rng, config.speed_range.0, config.speed_range.1);
            let direction = random_range(&mut rng, config.direction_range.0, config.direction_range.1);
            world.add_particle(Particle::new(pos, speed, direction).with_radius(radius));
        }
        log::debug!("drift scene: {} particles in {}x{}", config.count, config.width, config.height);
        Drift { world, config, pointer: None }
    }

    pub fn world(&self) -> &World<f32> { &self.world }
    pub fn config(&self) -> &DriftConfig { &self.config }

    /// Index pairs `(i, j)`, `i < j`, closer than the link distance.
    pub fn links(&self) -> AllocVec<(ParticleId, ParticleId)> {
        let mut links = AllocVec::new();
        let Some(threshold) = self.config.link_distance_sq else {
            return links;
        };
        let particles = self.world.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                if particles[i].pos.distance_sq(particles[j].pos) < threshold {
                    links.push((ParticleId(i), ParticleId(j)));
                }
            }
        }
        links
    }

    fn repel(&mut self) {
        let (Some(pointer), Some(repel_radius)) = (self.pointer, self.config.repel_radius) else {
            return;
        };
        let zone = Circle { center: pointer, radius: repel_radius };
        let (width, height, step) = (self.config.width, self.config.height, self.config.repel_step);
        for (_, p) in self.world.iter_mut() {
            if !circle_collision(zone, Circle { center: p.pos, radius: p.radius }) {
                continue;
            }
            // Nudges stop ten radii short of the walls.
            let margin = p.radius * 10.0;
            if pointer.x < p.pos.x && p.pos.x < width - margin {
                p.pos.x += step;
            }
            if pointer.x > p.pos.x && p.pos.x > margin {
                p.pos.x -= step;
            }
            if pointer.y < p.pos.y && p.pos.y < height - margin {
                p.pos.y += step;
            }
            if pointer.y > p.pos.y && p.pos.y > margin {
                p.pos.y -= step;
            }
        }
    }
}

impl Effect for Drift {
    fn advance(&mut self, _dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        self.repel();
        self.world.step(observer)
    }

    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        self.world.bodies()
    }

    fn pointer_moved(&mut self, pointer: Option<Vector2<f32>>) {
        self.pointer = pointer;
    }
}
