//! Step observer trait for monitoring world steps.

use crate::handle::ParticleId;
use crate::particle::BoundaryContact;

/// Trait for observing [`World::step`](crate::world::World::step).
///
/// Implement this trait to watch collisions or degenerate forces (for
/// debugging, sound cues or effects). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called when a particle reflected off one or more edges.
    fn on_boundary_contact(&mut self, _particle: ParticleId, _contact: BoundaryContact) {}

    /// Called when `skipped` spring or gravitation forces on a particle were
    /// dropped because it sat on top of their source.
    fn on_degenerate_force(&mut self, _particle: ParticleId, _skipped: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step events to the `log` facade.
///
/// Contacts and step boundaries go to `trace`, degenerate forces to `warn`.
#[derive(Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        LogStepObserver { steps: 0 }
    }

    /// Number of completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for LogStepObserver {
    fn on_boundary_contact(&mut self, particle: ParticleId, contact: BoundaryContact) {
        log::trace!("step {}: particle {} hit boundary {:?}", self.steps, particle.index(), contact);
    }

    fn on_degenerate_force(&mut self, particle: ParticleId, skipped: usize) {
        log::warn!(
            "step {}: skipped {} force(s) on particle {}: coincident with source",
            self.steps,
            skipped,
            particle.index()
        );
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
        log::trace!("step {} complete", self.steps);
    }
}
