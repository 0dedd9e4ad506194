//! Click-to-target tween: a marker glides and a particle bounces to the
//! last pressed point.

use super::Effect;
use crate::easing::Easing;
use crate::error::PhysicsError;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::tween::Tween;
use crate::vector::Vector2;
use crate::world::RenderBody;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickTweenConfig {
    pub marker_start: Vector2<f32>,
    pub particle_start: Vector2<f32>,
    /// Same unit as the `dt` passed to `advance`; milliseconds by default.
    pub duration: f32,
    pub marker_easing: Easing,
    pub particle_easing: Easing,
    pub marker_radius: f32,
    pub particle_radius: f32,
}

impl Default for ClickTweenConfig {
    fn default() -> Self {
        ClickTweenConfig {
            marker_start: Vector2::new(100.0, 100.0),
            particle_start: Vector2::new(50.0, 50.0),
            duration: 1000.0,
            marker_easing: Easing::Linear,
            particle_easing: Easing::InOutBounce,
            marker_radius: 20.0,
            particle_radius: 10.0,
        }
    }
}

pub struct ClickTween {
    marker: Tween<f32>,
    marker_pos: Vector2<f32>,
    particle_tween: Tween<f32>,
    particle: Particle<f32>,
    marker_radius: f32,
    active: bool,
}

impl ClickTween {
    pub fn new(config: ClickTweenConfig) -> Result<Self, PhysicsError> {
        let mut marker = Tween::new(config.marker_start, config.marker_start, config.duration, config.marker_easing)?;
        marker.finish();
        let mut particle_tween =
            Tween::new(config.particle_start, config.particle_start, config.duration, config.particle_easing)?;
        particle_tween.finish();
        log::debug!(
            "click tween scene: {} ms, marker {}, particle {}",
            config.duration,
            config.marker_easing,
            config.particle_easing
        );
        Ok(ClickTween {
            marker,
            marker_pos: config.marker_start,
            particle_tween,
            particle: Particle::at_rest(config.particle_start).with_radius(config.particle_radius),
            marker_radius: config.marker_radius,
            active: false,
        })
    }

    pub fn marker(&self) -> Vector2<f32> { self.marker_pos }
    pub fn particle(&self) -> &Particle<f32> { &self.particle }
    pub fn is_animating(&self) -> bool { self.active }

    /// Start both tweens toward `target` from where they last came to rest.
    pub fn retarget(&mut self, target: Vector2<f32>) {
        self.marker.retarget(target);
        self.particle_tween.retarget(target);
        self.active = true;
    }
}

impl Effect for ClickTween {
    /// `dt` is elapsed time in the configured duration unit.
    fn advance(&mut self, dt: f32, observer: &mut dyn StepObserver) -> Result<(), PhysicsError> {
        if !self.active {
            return Ok(());
        }
        self.marker.advance(dt);
        self.particle_tween.advance(dt);
        if self.marker.is_finished() {
            // Land exactly on the target and make it the next start.
            let target = self.marker.end();
            self.marker.settle();
            self.particle_tween.settle();
            self.marker_pos = target;
            self.particle.pos = target;
            self.active = false;
        } else {
            self.marker_pos = self.marker.value();
            self.particle_tween.apply_to(&mut self.particle);
        }
        observer.on_step_complete();
        Ok(())
    }

    fn bodies(&self) -> AllocVec<RenderBody<f32>> {
        vec![
            RenderBody { position: self.marker_pos, radius: self.marker_radius },
            RenderBody { position: self.particle.pos, radius: self.particle.radius },
        ]
    }

    fn pointer_pressed(&mut self, pointer: Vector2<f32>) {
        self.retarget(pointer);
    }
}
