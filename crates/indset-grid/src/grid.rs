//! The `Grid` — bounds, atomic mutation, and neighborhood analysis.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use indset_core::{AxialCoord, Particle, ParticleId, ParticleKind};

use crate::{CellMap, GridError, GridResult, ParticleRegistry};

/// Optional kind restriction applied by lookup and neighborhood queries.
/// `None` considers every particle.
pub type KindFilter = Option<ParticleKind>;

/// A bounded, origin-centered 2D particle grid.
///
/// Composes a [`CellMap`] (coordinate → id) and a [`ParticleRegistry`]
/// (id → particle, kind buckets).  The two structures always describe the
/// same particle set; the mutating operations here are the only way to
/// change either, and each one either fully succeeds or leaves both
/// untouched.
///
/// # Bounds semantics
///
/// "In bounds" is a *strict interior* test: a coordinate equal to `min` or
/// `max` on either axis is out of bounds.  The boundary ring exists only for
/// rendering (see [`extrema`](Grid::extrema)) — no particle ever occupies it.
#[derive(Debug)]
pub struct Grid {
    width:    u32,
    height:   u32,
    min:      AxialCoord,
    max:      AxialCoord,
    extrema:  [AxialCoord; 4],
    cells:    CellMap,
    registry: ParticleRegistry,
}

impl Grid {
    /// Create an empty grid of `width × height` cells.
    ///
    /// Both dimensions must be even so the bounds are symmetric around the
    /// origin; fails with [`GridError::OddSize`] otherwise.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width % 2 != 0 || height % 2 != 0 {
            return Err(GridError::OddSize(width, height));
        }

        let min = AxialCoord::new(-(width as i32) / 2, -(height as i32) / 2);
        let max = AxialCoord::new(width as i32 / 2, height as i32 / 2);

        // Corner coordinates counterclockwise from bottom-left, for boundary
        // rendering by plotting collaborators.
        let extrema = [
            min,
            AxialCoord::new(min.x, max.y),
            max,
            AxialCoord::new(max.x, min.y),
        ];

        Ok(Self {
            width,
            height,
            min,
            max,
            extrema,
            cells: CellMap::new(width, height),
            registry: ParticleRegistry::new(),
        })
    }

    // ── Geometry accessors ────────────────────────────────────────────────

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn min(&self) -> AxialCoord {
        self.min
    }

    pub fn max(&self) -> AxialCoord {
        self.max
    }

    /// The four corner coordinates of the boundary ring.
    pub fn extrema(&self) -> &[AxialCoord; 4] {
        &self.extrema
    }

    /// Strict-interior bounds test: `min < coord < max` on both axes.
    #[inline]
    pub fn is_in_bounds(&self, coord: AxialCoord) -> bool {
        coord.x > self.min.x && coord.x < self.max.x
            && coord.y > self.min.y && coord.y < self.max.y
    }

    /// Every coordinate of the grid rectangle, boundary ring included.
    ///
    /// Pair with [`is_in_bounds`](Grid::is_in_bounds) to enumerate only the
    /// usable interior.
    pub fn valid_coordinates(&self) -> impl Iterator<Item = AxialCoord> + '_ {
        (self.min.x..=self.max.x).flat_map(move |x| {
            (self.min.y..=self.max.y).map(move |y| AxialCoord::new(x, y))
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `particle` at its own coordinate.
    ///
    /// Fails with `OutOfBounds` for a non-interior coordinate, `Duplicate`
    /// for an already-registered id, and `Occupied` for a taken cell.  All
    /// checks precede any write, so a failure leaves the grid unchanged.
    pub fn add_particle(&mut self, particle: Particle) -> GridResult<()> {
        let coord = particle.coord();

        if !self.is_in_bounds(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        if self.registry.contains(particle.id) {
            return Err(GridError::Duplicate(particle.id));
        }
        if self.cells.get(coord)?.is_some() {
            return Err(GridError::Occupied(coord));
        }

        self.cells.set(coord, particle.id)?;
        self.registry
            .add(particle)
            .expect("duplicate check preceded registry add");
        Ok(())
    }

    /// Remove and return the particle with `id`.
    pub fn remove_particle(&mut self, id: ParticleId) -> GridResult<Particle> {
        let coord = self
            .registry
            .get(id)
            .ok_or(GridError::UnknownParticle(id))?
            .coord();

        self.cells.clear(coord)?;
        self.registry.remove(id)
    }

    /// Move the particle at `old` to `new`.
    ///
    /// Fails with `NotFound` if `old` is vacant, `Occupied` if `new` is
    /// taken, and `OutOfBounds` if `new` is not strictly interior.  On
    /// success the index cell at `old` is cleared, the particle's stored
    /// coordinate is rewritten, and `new` is set — one logically atomic
    /// step; no failure path mutates anything.
    pub fn move_particle(&mut self, old: AxialCoord, new: AxialCoord) -> GridResult<()> {
        let id = match self.get_particle(old, None) {
            Some(p) => p.id,
            None => return Err(GridError::NotFound(old)),
        };
        if self.get_particle(new, None).is_some() {
            return Err(GridError::Occupied(new));
        }
        if !self.is_in_bounds(new) {
            return Err(GridError::OutOfBounds(new));
        }

        self.cells.clear(old)?;
        self.registry
            .get_mut(id)
            .expect("particle vanished mid-move")
            .relocate(new);
        self.cells.set(new, id)?;
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The particle at `coord`, if any, subject to `filter`.
    ///
    /// Coordinates outside the index range read as vacant.
    pub fn get_particle(&self, coord: AxialCoord, filter: KindFilter) -> Option<&Particle> {
        let id = self.cells.get(coord).ok().flatten()?;
        let particle = self
            .registry
            .get(id)
            .expect("spatial index out of sync with registry");

        match filter {
            Some(kind) if particle.kind != kind => None,
            _ => Some(particle),
        }
    }

    /// The registered particle with `id`, if any.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.registry.get(id)
    }

    /// All registered particles, in no particular order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.registry.all()
    }

    /// All particles with kind tag `kind`.
    pub fn particles_of_kind(&self, kind: ParticleKind) -> impl Iterator<Item = &Particle> {
        self.registry.by_kind(kind)
    }

    /// `(kind, ids)` pairs for aggregate statistics.
    pub fn kind_groups(&self) -> impl Iterator<Item = (ParticleKind, &[ParticleId])> {
        self.registry.kind_groups()
    }

    pub fn particle_count(&self) -> usize {
        self.registry.len()
    }

    // ── Neighborhood queries ──────────────────────────────────────────────

    /// The four cardinal neighbor cells of `coord`, in [`indset_core::Direction::ALL`]
    /// order, vacant cells included.
    pub fn neighbor_cells(&self, coord: AxialCoord, filter: KindFilter) -> [Option<&Particle>; 4] {
        coord
            .neighbor_positions()
            .map(|pos| self.get_particle(pos, filter))
    }

    /// The occupied cardinal neighbors of `coord`, subject to `filter`.
    pub fn neighbors(&self, coord: AxialCoord, filter: KindFilter) -> impl Iterator<Item = &Particle> {
        self.neighbor_cells(coord, filter).into_iter().flatten()
    }

    /// Count of occupied neighbor cells, subject to `filter`.
    pub fn neighbor_count(&self, coord: AxialCoord, filter: KindFilter) -> usize {
        self.neighbors(coord, filter).count()
    }

    /// The union of neighbors-of-neighbors of `coord`, as particle ids.
    ///
    /// The particle occupying `coord` itself is never in the result, even
    /// though it is trivially two steps from itself through any neighbor.
    pub fn second_degree_neighbors(&self, coord: AxialCoord, filter: KindFilter) -> FxHashSet<ParticleId> {
        let mut result = FxHashSet::default();

        for neighbor in self.neighbors(coord, filter) {
            result.extend(self.neighbors(neighbor.coord(), filter).map(|p| p.id));
        }

        if let Some(origin) = self.get_particle(coord, filter) {
            result.remove(&origin.id);
        }

        result
    }

    pub fn second_degree_neighbor_count(&self, coord: AxialCoord, filter: KindFilter) -> usize {
        self.second_degree_neighbors(coord, filter).len()
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// `true` iff the cells satisfying `predicate` form one cardinally
    /// connected component (vacuously true if none do).
    ///
    /// Breadth-first search over *all* grid coordinates — the predicate sees
    /// vacant cells too, so it can describe holes as well as particles.
    pub fn connected<F>(&self, predicate: F) -> bool
    where
        F: Fn(AxialCoord) -> bool,
    {
        let mut eligible = 0usize;
        let mut start = None;
        for coord in self.valid_coordinates() {
            if predicate(coord) {
                eligible += 1;
                start = Some(coord);
            }
        }

        let Some(start) = start else {
            return true;
        };

        let mut visited: FxHashSet<AxialCoord> = FxHashSet::default();
        let mut queue = VecDeque::from([start]);
        while let Some(coord) = queue.pop_front() {
            if !visited.insert(coord) {
                continue;
            }
            for next in coord.neighbor_positions() {
                if predicate(next) && !visited.contains(&next) {
                    queue.push_back(next);
                }
            }
        }

        visited.len() == eligible
    }

    /// Do the occupied cells (subject to `filter`) form one connected mass?
    pub fn particles_connected(&self, filter: KindFilter) -> bool {
        self.connected(|coord| {
            self.is_in_bounds(coord) && self.get_particle(coord, filter).is_some()
        })
    }

    /// Do the vacant interior cells form one connected mass (i.e. no
    /// enclosed holes)?
    pub fn particle_holes(&self, filter: KindFilter) -> bool {
        self.connected(|coord| {
            self.is_in_bounds(coord) && self.get_particle(coord, filter).is_none()
        })
    }

    // ── Aggregate neighborhood counters ───────────────────────────────────

    /// Adjacent same-kind pairs, each unordered pair counted once.
    pub fn count_homogeneous_neighborhoods(&self) -> usize {
        self.count_adjacent_pairs(|a, b| a.kind == b.kind)
    }

    /// Adjacent different-kind pairs, each unordered pair counted once.
    pub fn count_heterogeneous_neighborhoods(&self) -> usize {
        self.count_adjacent_pairs(|a, b| a.kind != b.kind)
    }

    /// Directed count of neighbor relations from kind-`a` particles into
    /// kind-`b` particles.  Unlike the pair counters this is *not* halved:
    /// with `a == b` every adjacent pair contributes twice.
    pub fn count_between_kinds(&self, a: ParticleKind, b: ParticleKind) -> usize {
        self.registry
            .by_kind(a)
            .map(|p| self.neighbor_count(p.coord(), Some(b)))
            .sum()
    }

    fn count_adjacent_pairs<F>(&self, matches: F) -> usize
    where
        F: Fn(&Particle, &Particle) -> bool,
    {
        let directed: usize = self
            .registry
            .all()
            .map(|p| {
                self.neighbors(p.coord(), None)
                    .filter(|&n| matches(p, n))
                    .count()
            })
            .sum();
        // Every unordered pair was seen from both endpoints.
        directed / 2
    }
}
