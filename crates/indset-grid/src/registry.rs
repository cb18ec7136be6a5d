//! `ParticleRegistry` — the particle set plus per-kind buckets.
//!
//! The registry owns the particle structs.  Alongside the flat identity map
//! it keeps one id bucket per observed [`ParticleKind`], so filtered
//! iteration ("all particles of kind k") never scans the full set.  Buckets
//! are a `Vec<Vec<ParticleId>>` indexed by the kind tag — a fixed array per
//! tag rather than a hash keyed by runtime type.

use rustc_hash::FxHashMap;

use indset_core::{Particle, ParticleId, ParticleKind};

use crate::{GridError, GridResult};

/// Identity-unique particle store with per-kind groupings.
#[derive(Default, Debug)]
pub struct ParticleRegistry {
    particles: FxHashMap<ParticleId, Particle>,
    /// Bucket `k` holds the ids of all particles with kind tag `k`.
    /// Grown on demand; bucket order is not significant.
    kind_buckets: Vec<Vec<ParticleId>>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `particle`.
    ///
    /// Fails with [`GridError::Duplicate`] if its id is already present;
    /// the registry is unchanged on failure.
    pub fn add(&mut self, particle: Particle) -> GridResult<()> {
        if self.particles.contains_key(&particle.id) {
            return Err(GridError::Duplicate(particle.id));
        }

        let kind_idx = particle.kind.index();
        if kind_idx >= self.kind_buckets.len() {
            self.kind_buckets.resize_with(kind_idx + 1, Vec::new);
        }
        self.kind_buckets[kind_idx].push(particle.id);
        self.particles.insert(particle.id, particle);
        Ok(())
    }

    /// Deregister and return the particle with `id`.
    ///
    /// Fails with [`GridError::UnknownParticle`] if absent.
    pub fn remove(&mut self, id: ParticleId) -> GridResult<Particle> {
        let particle = self
            .particles
            .remove(&id)
            .ok_or(GridError::UnknownParticle(id))?;

        let bucket = &mut self.kind_buckets[particle.kind.index()];
        // Bucket order is irrelevant; swap_remove keeps removal O(1).
        let pos = bucket
            .iter()
            .position(|&b| b == id)
            .expect("registry bucket out of sync with identity map");
        bucket.swap_remove(pos);

        Ok(particle)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains_key(&id)
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(&id)
    }

    /// Grid-internal: relocation must go through `Grid::move_particle` so
    /// the spatial index stays in sync.
    pub(crate) fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(&id)
    }

    /// All registered particles, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Particle> {
        self.particles.values()
    }

    /// All particles with kind tag `kind`.
    pub fn by_kind(&self, kind: ParticleKind) -> impl Iterator<Item = &Particle> {
        self.kind_buckets
            .get(kind.index())
            .into_iter()
            .flatten()
            .map(|id| &self.particles[id])
    }

    /// `(kind, ids)` pairs for every kind with at least one particle.
    pub fn kind_groups(&self) -> impl Iterator<Item = (ParticleKind, &[ParticleId])> {
        self.kind_buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(k, bucket)| (ParticleKind(k as u16), bucket.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
