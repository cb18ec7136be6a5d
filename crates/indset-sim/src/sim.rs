//! The `AlignmentSimulator` and its accept/reject step.

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashSet;

use indset_core::{Direction, ParticleId, SimRng};
use indset_grid::{Grid, KindFilter};

use crate::{Metric, SimError, SimResult};

// ── Step outcomes ─────────────────────────────────────────────────────────────

/// Why a proposed step was rejected.  A rejection is a normal outcome, not
/// an error — state is unchanged and the run continues.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RejectReason {
    /// Destination is on or beyond the boundary ring.
    OutOfBounds,
    /// Destination cell already holds a particle.
    Occupied,
    /// Some *other* particle is adjacent to the destination; moving there
    /// would break the independent set for that particle.
    Adjacency,
    /// Structurally valid, but the acceptance draw failed (`u >= P`).
    Probability,
}

/// Result of one proposal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Moved,
    Rejected(RejectReason),
}

impl StepOutcome {
    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, StepOutcome::Moved)
    }
}

// ── AlignmentSimulator ────────────────────────────────────────────────────────

/// Monte-Carlo engine driving biased random particle moves over a [`Grid`]
/// while preserving the independent-set invariant.
///
/// Owns the grid and a deterministic RNG for the life of the run; external
/// consumers read state through [`grid`](AlignmentSimulator::grid) and
/// [`metrics`](AlignmentSimulator::metrics) between batches of iterations.
#[derive(Debug)]
pub struct AlignmentSimulator {
    grid: Grid,
    /// The single knob of the model: moves that increase local second-degree
    /// neighbor density are favored when `bias > 1`, penalized when < 1.
    bias: f64,
    rng:  SimRng,

    start_unix_secs: i64,

    iterations_run: u64,
    movements:      u64,
    rounds:         u64,
    /// Particles that have moved at least once since the last round boundary.
    visited: FxHashSet<ParticleId>,

    /// Acceptance probabilities of every structurally valid proposal, in
    /// order.  Diagnostic series; grows by one entry per valid proposal.
    probability_series: Vec<f64>,
}

impl AlignmentSimulator {
    /// Build a simulator over `grid`.
    ///
    /// Fails with [`SimError::InvalidConfiguration`] if `bias` is not a
    /// positive finite number or if the grid violates the independent-set
    /// precondition.
    pub fn new(grid: Grid, bias: f64, seed: u64) -> SimResult<Self> {
        if !(bias > 0.0 && bias.is_finite()) {
            return Err(SimError::InvalidConfiguration(format!(
                "bias must be a positive finite number, got {bias}"
            )));
        }
        Self::validate_grid(&grid)?;

        let start_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Ok(Self {
            grid,
            bias,
            rng: SimRng::new(seed),
            start_unix_secs,
            iterations_run: 0,
            movements: 0,
            rounds: 0,
            visited: FxHashSet::default(),
            probability_series: Vec::new(),
        })
    }

    /// The independent-set precondition: no particle may have any neighbor.
    pub fn validate_grid(grid: &Grid) -> SimResult<()> {
        for particle in grid.particles() {
            if grid.neighbor_count(particle.coord(), None) != 0 {
                return Err(SimError::InvalidConfiguration(format!(
                    "particles cannot be adjacent, but {particle} has a neighbor"
                )));
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the simulator, releasing the grid (e.g. to save final state).
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn start_unix_secs(&self) -> i64 {
        self.start_unix_secs
    }

    pub fn iterations_run(&self) -> u64 {
        self.iterations_run
    }

    /// Accepted moves so far.
    pub fn movements(&self) -> u64 {
        self.movements
    }

    /// Completed sweeps: every eligible particle moved at least once since
    /// the previous round boundary.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn probability_series(&self) -> &[f64] {
        &self.probability_series
    }

    /// Snapshot of `(bias, iterations, movements, rounds)` as named,
    /// formatted values.  Read-only — sampling never perturbs the run.
    pub fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::float("Bias", self.bias),
            Metric::count("Iterations", self.iterations_run),
            Metric::count("Movements made", self.movements),
            Metric::count("Rounds completed", self.rounds),
        ]
    }

    // ── The Monte-Carlo loop ──────────────────────────────────────────────

    /// Perform `iterations` proposal steps, sampling particle, direction,
    /// and acceptance threshold from the owned RNG.  Returns the number of
    /// accepted moves.
    ///
    /// `filter` restricts both the proposal pool and the round-completion
    /// set to one particle kind.
    pub fn run_iterations(&mut self, iterations: u64, filter: KindFilter) -> SimResult<u64> {
        let eligible: Vec<ParticleId> = match filter {
            None       => self.grid.particles().map(|p| p.id).collect(),
            Some(kind) => self.grid.particles_of_kind(kind).map(|p| p.id).collect(),
        };
        if eligible.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "no eligible particles to move".into(),
            ));
        }

        let mut moves_made = 0;
        for _ in 0..iterations {
            let id = *self
                .rng
                .choose(&eligible)
                .expect("eligible pool is non-empty");
            let direction = *self
                .rng
                .choose(&Direction::ALL)
                .expect("direction set is non-empty");
            let threshold = self.rng.gen_range(0.0..1.0);

            if self.step(id, direction, threshold, filter)?.moved() {
                moves_made += 1;
            }
        }

        Ok(moves_made)
    }

    /// Propose moving particle `id` one cell in `direction`, accepting with
    /// the Metropolis rule against `threshold ∈ [0, 1)`.
    ///
    /// Public so tests and callers can drive the algorithm with chosen
    /// inputs; [`run_iterations`](Self::run_iterations) supplies random ones.
    /// Every invocation counts one iteration, accepted or not.
    pub fn step(
        &mut self,
        id:        ParticleId,
        direction: Direction,
        threshold: f64,
        filter:    KindFilter,
    ) -> SimResult<StepOutcome> {
        self.iterations_run += 1;

        let old = self
            .grid
            .particle(id)
            .ok_or(indset_grid::GridError::UnknownParticle(id))?
            .coord();
        let new = old.step(direction);

        if !self.grid.is_in_bounds(new) {
            return Ok(StepOutcome::Rejected(RejectReason::OutOfBounds));
        }
        if self.grid.get_particle(new, None).is_some() {
            return Ok(StepOutcome::Rejected(RejectReason::Occupied));
        }

        // Validity: the mover is still at `old`, and `old` is adjacent to
        // `new`, so it must count among `new`'s neighbors.  Exactly one
        // neighbor therefore means no *other* particle borders `new`.
        match self.grid.neighbor_count(new, None) {
            0 => return Err(SimError::BrokenInvariant { coord: new }),
            1 => {}
            _ => return Ok(StepOutcome::Rejected(RejectReason::Adjacency)),
        }

        // Metropolis acceptance on the change in second-degree density.
        // No kind filter here: the energy term sees every particle.
        let sdn_old = self.grid.second_degree_neighbor_count(old, None) as i32;
        let sdn_new = self.grid.second_degree_neighbor_count(new, None) as i32;
        let probability = self.bias.powi(sdn_new - sdn_old);
        self.probability_series.push(probability);

        // P may exceed 1, in which case acceptance is certain.
        if !(threshold < probability) {
            return Ok(StepOutcome::Rejected(RejectReason::Probability));
        }

        self.grid.move_particle(old, new)?;
        self.movements += 1;

        // Round bookkeeping: once every eligible particle has moved at
        // least once, a sweep is complete and the visited set resets.
        self.visited.insert(id);
        let all_visited = match filter {
            None       => self.grid.particles().all(|p| self.visited.contains(&p.id)),
            Some(kind) => self
                .grid
                .particles_of_kind(kind)
                .all(|p| self.visited.contains(&p.id)),
        };
        if all_visited {
            self.rounds += 1;
            self.visited.clear();
        }

        Ok(StepOutcome::Moved)
    }
}
