//! Particle registry and per-frame stepping.

use crate::config::WorldConfig;
use crate::environment::{BodyState, Snapshot};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{AnchorId, ParticleId};
use crate::observer::StepObserver;
use crate::particle::{Particle, SpringTarget};
use crate::vector::Vector2;
use alloc::vec::Vec as AllocVec;

/// What a renderer needs from a particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderBody<F: Float> {
    pub position: Vector2<F>,
    pub radius: F,
}

/// Owns particles and anchors and hands out index handles to them.
///
/// Springs and gravitation refer to other entries by handle, so the world
/// decides every particle's lifetime. Entries are never removed one by one;
/// [`clear`](World::clear) drops everything and invalidates all handles.
pub struct World<F: Float> {
    particles: AllocVec<Particle<F>>,
    anchors: AllocVec<Vector2<F>>,
    config: WorldConfig<F>,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        World {
            particles: AllocVec::new(),
            anchors: AllocVec::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig<F> { &self.config }

    pub fn set_config(&mut self, config: WorldConfig<F>) {
        self.config = config;
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        log::debug!("added particle {}", id.index());
        id
    }

    pub fn add_anchor(&mut self, position: Vector2<F>) -> AnchorId {
        let id = AnchorId(self.anchors.len());
        self.anchors.push(position);
        log::debug!("added anchor {} at ({}, {})", id.index(), position.x, position.y);
        id
    }

    pub fn anchor(&self, id: AnchorId) -> Result<Vector2<F>, PhysicsError> {
        self.check_anchor(id)?;
        Ok(self.anchors[id.index()])
    }

    /// Move an anchor. Springs see the new position on the next step.
    pub fn set_anchor(&mut self, id: AnchorId, position: Vector2<F>) -> Result<(), PhysicsError> {
        self.check_anchor(id)?;
        self.anchors[id.index()] = position;
        Ok(())
    }

    pub fn particle(&self, id: ParticleId) -> Result<&Particle<F>, PhysicsError> {
        self.check_particle(id)?;
        Ok(&self.particles[id.index()])
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Result<&mut Particle<F>, PhysicsError> {
        self.check_particle(id)?;
        Ok(&mut self.particles[id.index()])
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn anchor_count(&self) -> usize { self.anchors.len() }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle<F>)> {
        self.particles.iter().enumerate().map(|(i, p)| (ParticleId(i), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleId, &mut Particle<F>)> {
        self.particles.iter_mut().enumerate().map(|(i, p)| (ParticleId(i), p))
    }

    /// Attach a spring from `id` to `target`, replacing any previous spring
    /// between the two.
    pub fn add_spring(
        &mut self,
        id: ParticleId,
        target: impl Into<SpringTarget>,
        stiffness: F,
        rest_length: F,
    ) -> Result<(), PhysicsError> {
        let target = target.into();
        self.check_target(target)?;
        self.particle_mut(id)?.add_spring(target, stiffness, rest_length);
        Ok(())
    }

    pub fn remove_spring(&mut self, id: ParticleId, target: impl Into<SpringTarget>) -> Result<bool, PhysicsError> {
        Ok(self.particle_mut(id)?.remove_spring(target))
    }

    /// Make `id` fall toward `peer`. One-directional: call it both ways for
    /// mutual attraction.
    pub fn add_gravitation(&mut self, id: ParticleId, peer: ParticleId) -> Result<(), PhysicsError> {
        if id == peer {
            return Err(PhysicsError::SelfGravitation { index: id.index() });
        }
        self.check_particle(peer)?;
        self.particle_mut(id)?.add_gravitation(peer);
        Ok(())
    }

    pub fn remove_gravitation(&mut self, id: ParticleId, peer: ParticleId) -> Result<bool, PhysicsError> {
        Ok(self.particle_mut(id)?.remove_gravitation(peer))
    }

    /// Check that every spring target and gravitation peer still resolves.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for (id, particle) in self.iter() {
            for spring in particle.springs() {
                self.check_target(spring.target).inspect_err(|e| {
                    log::warn!("particle {} has a dangling spring: {}", id.index(), e);
                })?;
            }
            for &peer in particle.gravitations() {
                if peer == id {
                    return Err(PhysicsError::SelfGravitation { index: id.index() });
                }
                self.check_particle(peer).inspect_err(|e| {
                    log::warn!("particle {} has a dangling gravitation peer: {}", id.index(), e);
                })?;
            }
        }
        Ok(())
    }

    /// Freeze the current anchor positions and particle state.
    pub fn snapshot(&self) -> Snapshot<F> {
        let mut snapshot = Snapshot::with_capacity(self.anchors.len(), self.particles.len(), self.config.min_distance);
        for &anchor in self.anchors.iter() {
            snapshot.push_anchor(anchor);
        }
        for p in self.particles.iter() {
            snapshot.push_body(BodyState { position: p.pos, mass: p.mass });
        }
        snapshot
    }

    /// Advance every particle by one frame.
    ///
    /// Boundary bounce (when configured) runs on every particle first, then
    /// all particles integrate against one snapshot taken after the bounce.
    /// Handles are validated up front, so a failed step changes nothing.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<(), PhysicsError> {
        self.validate()?;

        if let Some(bounds) = self.config.bounds {
            for (i, p) in self.particles.iter_mut().enumerate() {
                let contact = p.boundary_bounce(bounds.x, bounds.y);
                if contact.any() {
                    observer.on_boundary_contact(ParticleId(i), contact);
                }
            }
        }

        let snapshot = self.snapshot();
        for (i, p) in self.particles.iter_mut().enumerate() {
            let summary = p.update(&snapshot)?;
            if summary.degenerate > 0 {
                observer.on_degenerate_force(ParticleId(i), summary.degenerate);
            }
        }
        observer.on_integrate();
        observer.on_step_complete();
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vector2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn bodies(&self) -> AllocVec<RenderBody<F>> {
        self.particles
            .iter()
            .map(|p| RenderBody { position: p.pos, radius: p.radius })
            .collect()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.anchors.clear();
    }

    fn check_particle(&self, id: ParticleId) -> Result<(), PhysicsError> {
        if id.index() < self.particles.len() {
            Ok(())
        } else {
            Err(PhysicsError::ParticleOutOfBounds { index: id.index(), count: self.particles.len() })
        }
    }

    fn check_anchor(&self, id: AnchorId) -> Result<(), PhysicsError> {
        if id.index() < self.anchors.len() {
            Ok(())
        } else {
            Err(PhysicsError::AnchorOutOfBounds { index: id.index(), count: self.anchors.len() })
        }
    }

    fn check_target(&self, target: SpringTarget) -> Result<(), PhysicsError> {
        match target {
            SpringTarget::Anchor(id) => self.check_anchor(id),
            SpringTarget::Particle(id) => self.check_particle(id),
        }
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new(WorldConfig::new())
    }
}
