//! Unit tests for indset-gen.

use indset_core::{ParticleKind, SimRng};
use indset_sim::AlignmentSimulator;

use crate::{GenError, generate_random_alignment_grid, generate_random_grid};

#[test]
fn generated_grid_passes_validation() {
    let mut rng = SimRng::new(42);
    let grid = generate_random_alignment_grid(30, None, &mut rng).unwrap();

    assert_eq!(grid.particle_count(), 30);
    assert!(AlignmentSimulator::validate_grid(&grid).is_ok());
}

#[test]
fn default_size_scales_with_particle_count() {
    let mut rng = SimRng::new(42);
    let grid = generate_random_alignment_grid(9, None, &mut rng).unwrap();
    assert_eq!(grid.size(), (12, 12)); // 4 * floor(sqrt(9))
}

#[test]
fn explicit_size_respected() {
    let mut rng = SimRng::new(1);
    let grid = generate_random_alignment_grid(5, Some((20, 10)), &mut rng).unwrap();
    assert_eq!(grid.size(), (20, 10));
}

#[test]
fn zero_particles_rejected() {
    let mut rng = SimRng::new(0);
    assert!(matches!(
        generate_random_alignment_grid(0, None, &mut rng),
        Err(GenError::NoParticles)
    ));
}

#[test]
fn bad_weights_rejected() {
    let mut rng = SimRng::new(0);
    assert!(matches!(
        generate_random_grid(3, &[], None, &mut rng),
        Err(GenError::BadWeights)
    ));
    assert!(matches!(
        generate_random_grid(3, &[(ParticleKind::BASE, 0.0)], None, &mut rng),
        Err(GenError::BadWeights)
    ));
}

#[test]
fn weighted_kinds_all_appear() {
    let mut rng = SimRng::new(7);
    let kinds = [(ParticleKind(0), 1.0), (ParticleKind(1), 1.0)];
    let grid = generate_random_grid(40, &kinds, Some((40, 40)), &mut rng).unwrap();

    assert!(grid.particles_of_kind(ParticleKind(0)).count() > 0);
    assert!(grid.particles_of_kind(ParticleKind(1)).count() > 0);
}

#[test]
fn impossible_density_errors_out() {
    let mut rng = SimRng::new(0);
    // A 4×4 grid has a 3×3 interior; 9 mutually non-adjacent particles
    // cannot fit (the maximum independent set there is 5).
    let result = generate_random_alignment_grid(9, Some((4, 4)), &mut rng);
    assert!(matches!(result, Err(GenError::Exhausted { .. })));
}

#[test]
fn same_seed_generates_same_grid() {
    let run = || {
        let mut rng = SimRng::new(99);
        let grid = generate_random_alignment_grid(10, Some((16, 16)), &mut rng).unwrap();
        let mut coords: Vec<_> = grid.particles().map(|p| p.coord()).collect();
        coords.sort();
        coords
    };
    assert_eq!(run(), run());
}
