//! Starfield: stars on circular orbits around the center, outer stars a
//! little faster and larger.

use super::{seeded_rng, Effect};
use crate::error::PhysicsError;
use crate::observer::StepObserver;
use crate::util::random_range;
use crate::vector::Vector2;
use crate::world::RenderBody;
use alloc::vec::Vec as AllocVec;
use core::f32::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarfieldConfig {
    pub width: f32,
    pub height: f32,
    pub count: usize,
    /// Angular step per tick, radians.
    pub step_range: (f32, f32),
    pub size_range: (f32, f32),
    /// Extra angular step per unit of orbit radius.
    pub drift_per_radius: f32,
    /// Draw radius is `orbit radius / size_divisor`.
    pub size_divisor: f32,
}

impl StarfieldConfig {
    pub fn new(width: f32, height: f32) -> Self {
        StarfieldConfig {
            width,
            height,
            count: 500,
            step_range: (0.002, 0.02),
            size_range: (1.0, 2.0),
            drift_per_radius: 0.00001,
            size_divisor: 55.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub orbit: f32,
    pub step: f32,
    pub angle: f32,
    pub size: f32,
}

pub struct Starfield {
    stars: AllocVec<Star>,
    center: Vector2<f32>,
    config: StarfieldConfig,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let stars = (0..config.count)
            .map(|_| Star {
                orbit: random_range(&mut rng, 0.0, config.width),
                step: random_range(&mut rng, config.step_range.0, config.step_range.1),
                angle: random_range(&mut rng, 0.0, TAU),
                size: random_range(&mut rng, config.size_range.0, config.size_range.1),
            })
            .collect();
        log::debug!("starfield scene: {} stars", config.count);
        Starfield {
            stars,
            center: Vector2::new(config.width * 0.5, config.height * 0.5),
            config,
        }
    }

    pub fn stars(&self) -> &[Star] { &self.stars }
    pub fn center(&self) -> Vector2<f32> { self.center }

    pub fn position_of(&self, star: &Star) -> Vector2<f32> {
        self.center + Vector2::from_polar(star.angle, star.orbit)
    }
}

impl Effect for Starfield {
    fn advance(&mut self, _dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        let drift = self.config.drift_per_radius;
        for star in self.stars.iter_mut() {
            star.angle += star.step + star.orbit * drift;
        }
        observer.on_integrate();
        observer.on_step_complete();
        Ok(())
    }

    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        self.stars
            .iter()
            .map(|star| RenderBody {
                position: self.position_of(star),
                radius: star.orbit / self.config.size_divisor,
            })
            .collect()
    }
}
