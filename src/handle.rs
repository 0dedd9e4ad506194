//! Index handles into a [`World`](crate::world::World).
//!
//! Handles are plain indices. The world never removes individual entries, so
//! a handle stays valid for the lifetime of the world that issued it;
//! handles from a different world are caught by validation only when out of
//! range.

/// Handle to a particle in a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

/// Handle to a fixed (host-movable) anchor point in a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub usize);

impl ParticleId {
    pub fn index(self) -> usize { self.0 }
}

impl AnchorId {
    pub fn index(self) -> usize { self.0 }
}
