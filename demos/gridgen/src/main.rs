//! gridgen — generates a random starting grid for the alignment demo.
//!
//! Places `PARTICLE_COUNT` mutually non-adjacent particles on a
//! `SIZE × SIZE` grid and saves the result in the grid text format where
//! the alignment runner expects it.

use std::fs;
use std::path::Path;

use anyhow::Result;

use indset_core::SimRng;
use indset_gen::generate_random_alignment_grid;
use indset_io::save_grid_path;

const PARTICLE_COUNT: usize = 300;
const SIZE:           u32   = 40;
const SEED:           u64   = 42;
const OUTPUT_DIR:     &str  = "input/alignment/generated";

fn main() -> Result<()> {
    println!("=== gridgen — random independent-set grid ===");
    println!("Particles: {PARTICLE_COUNT}  |  Size: {SIZE}×{SIZE}  |  Seed: {SEED}");

    let mut rng = SimRng::new(SEED);
    let grid = generate_random_alignment_grid(PARTICLE_COUNT, Some((SIZE, SIZE)), &mut rng)?;

    fs::create_dir_all(OUTPUT_DIR)?;
    let path = Path::new(OUTPUT_DIR).join(format!("{PARTICLE_COUNT}particles.txt"));
    save_grid_path(&path, &grid)?;

    println!("Saved {} particles to {}", grid.particle_count(), path.display());
    Ok(())
}
