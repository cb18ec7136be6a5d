//! Rejection-sampling placement of a random independent set.

use rand::distributions::{Distribution, WeightedIndex};

use indset_core::{AxialCoord, Particle, ParticleId, ParticleKind, SimRng};
use indset_grid::Grid;
use indset_sim::AlignmentSimulator;

use crate::{GenError, GenResult};

/// Per-particle attempt budget, as a multiple of the interior cell count.
/// An unbounded retry loop would hang on a grid too dense to satisfy.
const ATTEMPTS_PER_CELL: usize = 100;

/// Generate a grid holding `n_particles` random particles that satisfy the
/// independent-set precondition.
///
/// Kinds are drawn from `weighted_kinds` (tag, weight) pairs.  `size`
/// defaults to a square of side `4 * floor(sqrt(n))` — four cells of
/// breathing room per particle.  Randomness comes from the caller's `rng`,
/// so generation is reproducible per seed.
pub fn generate_random_grid(
    n_particles:    usize,
    weighted_kinds: &[(ParticleKind, f64)],
    size:           Option<(u32, u32)>,
    rng:            &mut SimRng,
) -> GenResult<Grid> {
    if n_particles == 0 {
        return Err(GenError::NoParticles);
    }

    let weights: Vec<f64> = weighted_kinds.iter().map(|&(_, w)| w).collect();
    let kind_dist = WeightedIndex::new(&weights).map_err(|_| GenError::BadWeights)?;

    let (width, height) = size.unwrap_or_else(|| default_size(n_particles));
    let mut grid = Grid::new(width, height)?;

    let interior: Vec<AxialCoord> = grid
        .valid_coordinates()
        .filter(|&c| grid.is_in_bounds(c))
        .collect();
    let max_attempts = interior.len() * ATTEMPTS_PER_CELL;

    for n in 0..n_particles {
        let kind = weighted_kinds[kind_dist.sample(rng.inner())].0;
        let id = ParticleId(n as u32);

        let mut placed = false;
        for _ in 0..max_attempts {
            let coord = *rng.choose(&interior).expect("grid has interior cells");

            if grid.get_particle(coord, None).is_some() {
                continue;
            }

            grid.add_particle(Particle::new(id, kind, coord))?;
            match AlignmentSimulator::validate_grid(&grid) {
                Ok(()) => {
                    placed = true;
                    break;
                }
                Err(_) => {
                    // The new particle landed next to an existing one; take
                    // it back out and redraw.
                    grid.remove_particle(id)?;
                }
            }
        }

        if !placed {
            return Err(GenError::Exhausted {
                placed:    n,
                requested: n_particles,
                attempts:  max_attempts,
            });
        }
    }

    Ok(grid)
}

/// Single-kind convenience wrapper: `n_particles` base-kind particles.
pub fn generate_random_alignment_grid(
    n_particles: usize,
    size:        Option<(u32, u32)>,
    rng:         &mut SimRng,
) -> GenResult<Grid> {
    generate_random_grid(n_particles, &[(ParticleKind::BASE, 1.0)], size, rng)
}

/// Default square side: `4 * floor(sqrt(n))`, always even and never below 4.
fn default_size(n_particles: usize) -> (u32, u32) {
    let side = ((n_particles as f64).sqrt().floor() as u32).max(1) * 4;
    (side, side)
}
