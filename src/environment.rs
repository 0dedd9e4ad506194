//! What a particle can see of the rest of the scene during `update`.

use crate::float::Float;
use crate::handle::{AnchorId, ParticleId};
use crate::vector::Vector2;
use alloc::vec::Vec as AllocVec;

/// Distances at or below this are treated as coincident unless a world
/// config overrides it.
pub const DEFAULT_MIN_DISTANCE: f32 = 1e-6;

/// The part of a peer particle that gravitation reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyState<F: Float> {
    pub position: Vector2<F>,
    pub mass: F,
}

/// Read-only lookup of spring anchors and gravitation peers.
pub trait Environment<F: Float> {
    fn anchor(&self, id: AnchorId) -> Option<Vector2<F>>;
    fn body(&self, id: ParticleId) -> Option<BodyState<F>>;
    fn anchor_count(&self) -> usize;
    fn body_count(&self) -> usize;

    /// Spring and gravitation forces are skipped when the separation is at
    /// or below this distance.
    fn min_distance(&self) -> F {
        F::from_f32(DEFAULT_MIN_DISTANCE)
    }
}

/// Frozen anchor and body state for one frame.
///
/// Every particle integrates against the same snapshot, so the order in
/// which particles are updated does not change the result.
#[derive(Clone, Debug)]
pub struct Snapshot<F: Float> {
    anchors: AllocVec<Vector2<F>>,
    bodies: AllocVec<BodyState<F>>,
    min_distance: F,
}

impl<F: Float> Snapshot<F> {
    pub fn new(min_distance: F) -> Self {
        Snapshot { anchors: AllocVec::new(), bodies: AllocVec::new(), min_distance }
    }

    pub fn with_capacity(anchors: usize, bodies: usize, min_distance: F) -> Self {
        Snapshot {
            anchors: AllocVec::with_capacity(anchors),
            bodies: AllocVec::with_capacity(bodies),
            min_distance,
        }
    }

    pub fn push_anchor(&mut self, position: Vector2<F>) -> AnchorId {
        self.anchors.push(position);
        AnchorId(self.anchors.len() - 1)
    }

    pub fn push_body(&mut self, body: BodyState<F>) -> ParticleId {
        self.bodies.push(body);
        ParticleId(self.bodies.len() - 1)
    }

    pub fn anchors(&self) -> &[Vector2<F>] { &self.anchors }
    pub fn bodies(&self) -> &[BodyState<F>] { &self.bodies }
}

impl<F: Float> Environment<F> for Snapshot<F> {
    fn anchor(&self, id: AnchorId) -> Option<Vector2<F>> {
        self.anchors.get(id.index()).copied()
    }

    fn body(&self, id: ParticleId) -> Option<BodyState<F>> {
        self.bodies.get(id.index()).copied()
    }

    fn anchor_count(&self) -> usize { self.anchors.len() }
    fn body_count(&self) -> usize { self.bodies.len() }
    fn min_distance(&self) -> F { self.min_distance }
}

/// An empty environment for a particle that has no attachments.
#[derive(Copy, Clone, Debug, Default)]
pub struct Detached;

impl<F: Float> Environment<F> for Detached {
    fn anchor(&self, _id: AnchorId) -> Option<Vector2<F>> { None }
    fn body(&self, _id: ParticleId) -> Option<BodyState<F>> { None }
    fn anchor_count(&self) -> usize { 0 }
    fn body_count(&self) -> usize { 0 }
}
