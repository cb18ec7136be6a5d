//! Particles and the kind lookup table.
//!
//! Every particle carries a [`ParticleKind`] tag and a [`KindTable`] maps
//! tags to their descriptors.  Registry buckets and filters key off the tag,
//! never off a runtime type.

use std::fmt;

use crate::{AxialCoord, ParticleId, ParticleKind};

// ── Particle ──────────────────────────────────────────────────────────────────

/// A particle occupying one grid cell.
///
/// Identity and kind are fixed at creation; the coordinate is mutable only
/// through [`relocate`](Particle::relocate), and only the owning `Grid` may
/// call it (move validation lives there).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub id:    ParticleId,
    pub kind:  ParticleKind,
    coord:     AxialCoord,
}

impl Particle {
    pub fn new(id: ParticleId, kind: ParticleKind, coord: AxialCoord) -> Self {
        Self { id, kind, coord }
    }

    /// Shorthand for a particle of the implicit base kind.
    pub fn base(id: ParticleId, coord: AxialCoord) -> Self {
        Self::new(id, ParticleKind::BASE, coord)
    }

    #[inline]
    pub fn coord(&self) -> AxialCoord {
        self.coord
    }

    /// Rewrite the particle's position.  Grid-internal: callers go through
    /// `Grid::move_particle`, which keeps the spatial index in sync.
    #[inline]
    pub fn relocate(&mut self, new_coord: AxialCoord) {
        self.coord = new_coord;
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.coord)
    }
}

// ── Kind table ────────────────────────────────────────────────────────────────

/// Rendering and naming metadata for one particle kind.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindDescriptor {
    pub name:  String,
    /// RGB color used by plotting collaborators.
    pub color: [u8; 3],
}

impl KindDescriptor {
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self { name: name.into(), color }
    }
}

/// Ordered table of known particle kinds.
///
/// `ParticleKind(i)` indexes descriptor `i`; grid files reference kinds by
/// this index.  The default table has a single black base kind.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindTable {
    descriptors: Vec<KindDescriptor>,
}

impl KindTable {
    pub fn new(descriptors: Vec<KindDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor for `kind`, or `None` if the tag is outside the table.
    pub fn get(&self, kind: ParticleKind) -> Option<&KindDescriptor> {
        self.descriptors.get(kind.index())
    }

    /// `true` if `kind` indexes a known descriptor.
    pub fn contains(&self, kind: ParticleKind) -> bool {
        kind.index() < self.descriptors.len()
    }

    /// All kinds in table order.
    pub fn kinds(&self) -> impl Iterator<Item = ParticleKind> + '_ {
        (0..self.descriptors.len() as u16).map(ParticleKind)
    }
}

impl Default for KindTable {
    fn default() -> Self {
        Self::new(vec![KindDescriptor::new("particle", [0, 0, 0])])
    }
}
