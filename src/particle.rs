//! Point-mass particles with springs, gravitation, friction and gravity.

use crate::environment::{BodyState, Environment};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::handle::{AnchorId, ParticleId};
use crate::vector::{Positioned, Vector2};
use alloc::vec::Vec as AllocVec;

/// What a spring pulls toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpringTarget {
    Anchor(AnchorId),
    Particle(ParticleId),
}

impl From<AnchorId> for SpringTarget {
    fn from(id: AnchorId) -> Self { SpringTarget::Anchor(id) }
}

impl From<ParticleId> for SpringTarget {
    fn from(id: ParticleId) -> Self { SpringTarget::Particle(id) }
}

/// A Hookean attachment: `force = (distance - rest_length) * stiffness`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub target: SpringTarget,
    pub stiffness: F,
    pub rest_length: F,
}

/// Which edges a [`Particle::boundary_bounce`] call reflected off.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Counts of the forces applied by one [`Particle::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ForceSummary {
    pub springs: usize,
    pub gravitations: usize,
    /// Forces skipped because the particle sat on top of its target.
    pub degenerate: usize,
}

/// A 2D point mass integrated once per frame.
///
/// Velocity is stored as `vel`; `speed()` and `heading()` are derived from
/// it. The speed and heading *setters* read cached polar values instead of
/// the live velocity: `set_speed` keeps the last heading passed to
/// `set_heading` (0 for a new particle) and `set_heading` keeps the speed
/// given to the constructor; `set_speed` never updates it. Call
/// [`sync_polar_cache`](Particle::sync_polar_cache) to refresh both from
/// the current velocity.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vector2<F>,
    pub vel: Vector2<F>,
    /// Only read by peers that gravitate toward this particle.
    pub mass: F,
    pub radius: F,
    /// Velocity multiplier per update. 1.0 = no damping.
    pub friction: F,
    /// Added to `vel.y` after friction on every update.
    pub gravity: F,
    /// Velocity multiplier on boundary contact. -1.0 = elastic reflection.
    pub bounce: F,
    cached_heading: F,
    cached_speed: F,
    springs: AllocVec<Spring<F>>,
    gravitations: AllocVec<ParticleId>,
}

impl<F: Float> Particle<F> {
    /// A particle at `pos` moving at `speed` along `direction` (radians).
    pub fn new(pos: Vector2<F>, speed: F, direction: F) -> Self {
        Particle {
            pos,
            vel: Vector2::from_polar(direction, speed),
            mass: F::one(),
            radius: F::zero(),
            friction: F::one(),
            gravity: F::zero(),
            bounce: -F::one(),
            cached_heading: F::zero(),
            cached_speed: speed,
            springs: AllocVec::new(),
            gravitations: AllocVec::new(),
        }
    }

    /// A particle at rest.
    pub fn at_rest(pos: Vector2<F>) -> Self {
        Self::new(pos, F::zero(), F::zero())
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_velocity(mut self, vel: Vector2<F>) -> Self {
        self.vel = vel;
        self
    }

    /// Magnitude of the live velocity.
    pub fn speed(&self) -> F {
        F::hypot(self.vel.x, self.vel.y)
    }

    /// Direction of the live velocity.
    pub fn heading(&self) -> F {
        F::atan2(self.vel.y, self.vel.x)
    }

    /// Set the velocity to `speed` along the cached heading. The cached
    /// speed is left alone.
    pub fn set_speed(&mut self, speed: F) {
        self.vel = Vector2::from_polar(self.cached_heading, speed);
    }

    /// Set the velocity to the cached speed along `heading`.
    pub fn set_heading(&mut self, heading: F) {
        self.cached_heading = heading;
        self.vel = Vector2::from_polar(heading, self.cached_speed);
    }

    /// Refresh the cached heading and speed from the live velocity.
    pub fn sync_polar_cache(&mut self) {
        self.cached_heading = self.heading();
        self.cached_speed = self.speed();
    }

    pub fn accelerate(&mut self, accel: Vector2<F>) {
        self.vel += accel;
    }

    pub fn angle_to(&self, point: Vector2<F>) -> F {
        self.pos.angle_to(point)
    }

    pub fn distance_to(&self, point: Vector2<F>) -> F {
        self.pos.distance(point)
    }

    /// Attach a spring, replacing any spring already aimed at `target`.
    pub fn add_spring(&mut self, target: impl Into<SpringTarget>, stiffness: F, rest_length: F) {
        let target = target.into();
        self.remove_spring(target);
        self.springs.push(Spring { target, stiffness, rest_length });
    }

    /// Detach the spring aimed at `target`. Returns whether one was attached.
    pub fn remove_spring(&mut self, target: impl Into<SpringTarget>) -> bool {
        let target = target.into();
        match self.springs.iter().position(|s| s.target == target) {
            Some(i) => {
                self.springs.remove(i);
                true
            }
            None => false,
        }
    }

    /// Gravitate toward `peer`, at most once per peer.
    pub fn add_gravitation(&mut self, peer: ParticleId) {
        self.remove_gravitation(peer);
        self.gravitations.push(peer);
    }

    pub fn remove_gravitation(&mut self, peer: ParticleId) -> bool {
        match self.gravitations.iter().position(|&p| p == peer) {
            Some(i) => {
                self.gravitations.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn gravitations(&self) -> &[ParticleId] { &self.gravitations }

    pub fn clear_attachments(&mut self) {
        self.springs.clear();
        self.gravitations.clear();
    }

    /// Velocity change from a spring toward `point`, or `None` when the
    /// particle is within `min_distance` of it.
    pub fn spring_acceleration(&self, point: Vector2<F>, stiffness: F, rest_length: F, min_distance: F) -> Option<Vector2<F>> {
        let delta = point - self.pos;
        let distance = delta.length();
        if distance <= min_distance {
            return None;
        }
        let force = (distance - rest_length) * stiffness;
        Some(delta * (force / distance))
    }

    /// Inverse-square velocity change toward `body`, or `None` when the
    /// particle is within `min_distance` of it.
    pub fn gravitation_acceleration(&self, body: BodyState<F>, min_distance: F) -> Option<Vector2<F>> {
        let delta = body.position - self.pos;
        let distance_sq = delta.length_sq();
        let distance = distance_sq.sqrt();
        if distance <= min_distance {
            return None;
        }
        let force = body.mass / distance_sq;
        Some(delta * (force / distance))
    }

    /// Advance one frame: springs, then gravitation, then friction, then
    /// gravity, then position.
    ///
    /// Fails without touching the particle if a spring target or peer is
    /// missing from `env`.
    pub fn update<E: Environment<F> + ?Sized>(&mut self, env: &E) -> Result<ForceSummary, PhysicsError> {
        let min_distance = env.min_distance();
        let mut summary = ForceSummary::default();
        let mut vel = self.vel;

        for spring in self.springs.iter() {
            let point = resolve_target(env, spring.target)?;
            match self.spring_acceleration(point, spring.stiffness, spring.rest_length, min_distance) {
                Some(accel) => {
                    vel += accel;
                    summary.springs += 1;
                }
                None => summary.degenerate += 1,
            }
        }

        for &peer in self.gravitations.iter() {
            let body = env.body(peer).ok_or(PhysicsError::ParticleOutOfBounds {
                index: peer.index(),
                count: env.body_count(),
            })?;
            match self.gravitation_acceleration(body, min_distance) {
                Some(accel) => {
                    vel += accel;
                    summary.gravitations += 1;
                }
                None => summary.degenerate += 1,
            }
        }

        vel *= self.friction;
        vel.y = vel.y + self.gravity;
        self.vel = vel;
        self.pos += vel;
        Ok(summary)
    }

    /// Reflect off the walls of a `width` x `height` box.
    ///
    /// Each edge is checked on its own, so a corner hit clamps and reflects
    /// both axes in the same call.
    pub fn boundary_bounce(&mut self, width: F, height: F) -> BoundaryContact {
        let mut contact = BoundaryContact::default();
        if self.pos.x + self.radius >= width {
            self.pos.x = width - self.radius;
            self.vel.x = self.vel.x * self.bounce;
            contact.right = true;
        }
        if self.pos.x - self.radius <= F::zero() {
            self.pos.x = self.radius;
            self.vel.x = self.vel.x * self.bounce;
            contact.left = true;
        }
        if self.pos.y + self.radius >= height {
            self.pos.y = height - self.radius;
            self.vel.y = self.vel.y * self.bounce;
            contact.bottom = true;
        }
        if self.pos.y - self.radius <= F::zero() {
            self.pos.y = self.radius;
            self.vel.y = self.vel.y * self.bounce;
            contact.top = true;
        }
        contact
    }
}

fn resolve_target<F: Float, E: Environment<F> + ?Sized>(env: &E, target: SpringTarget) -> Result<Vector2<F>, PhysicsError> {
    match target {
        SpringTarget::Anchor(id) => env.anchor(id).ok_or(PhysicsError::AnchorOutOfBounds {
            index: id.index(),
            count: env.anchor_count(),
        }),
        SpringTarget::Particle(id) => env.body(id).map(|b| b.position).ok_or(PhysicsError::ParticleOutOfBounds {
            index: id.index(),
            count: env.body_count(),
        }),
    }
}

impl<F: Float> Positioned<F> for Particle<F> {
    fn position(&self) -> Vector2<F> { self.pos }
    fn set_position(&mut self, position: Vector2<F>) { self.pos = position; }
}
