//! Integration tests for indset-io.

#[cfg(test)]
mod gridtxt_tests {
    use std::io::Cursor;

    use indset_core::{AxialCoord, KindDescriptor, KindTable, Particle, ParticleId, ParticleKind};
    use indset_grid::{Grid, GridError};

    use crate::{IoError, load_grid, save_grid};

    fn two_kinds() -> KindTable {
        KindTable::new(vec![
            KindDescriptor::new("black", [0, 0, 0]),
            KindDescriptor::new("red", [255, 0, 0]),
        ])
    }

    fn load(text: &str, kinds: &KindTable) -> Result<Grid, IoError> {
        load_grid(Cursor::new(text), kinds)
    }

    #[test]
    fn loads_minimal_grid() {
        let grid = load("4 4\n1\n0 0\n", &KindTable::default()).unwrap();
        assert_eq!(grid.size(), (4, 4));
        assert_eq!(grid.particle_count(), 1);

        let p = grid.get_particle(AxialCoord::new(0, 0), None).unwrap();
        assert_eq!(p.id, ParticleId(0));
        assert_eq!(p.kind, ParticleKind::BASE);
    }

    #[test]
    fn kind_column_defaults_to_base_and_parses_when_present() {
        let grid = load("6 6\n2\n0 0\n2 0 1\n", &two_kinds()).unwrap();
        assert_eq!(
            grid.get_particle(AxialCoord::new(0, 0), None).unwrap().kind,
            ParticleKind(0)
        );
        assert_eq!(
            grid.get_particle(AxialCoord::new(2, 0), None).unwrap().kind,
            ParticleKind(1)
        );
    }

    #[test]
    fn ids_assigned_in_file_order() {
        let grid = load("8 8\n3\n0 0\n2 0\n-2 0\n", &KindTable::default()).unwrap();
        assert_eq!(
            grid.get_particle(AxialCoord::new(-2, 0), None).unwrap().id,
            ParticleId(2)
        );
    }

    #[test]
    fn odd_size_rejected() {
        let err = load("5 4\n0\n", &KindTable::default()).unwrap_err();
        assert!(matches!(err, IoError::Grid(GridError::OddSize(5, 4))));
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = load("6 6\n1\n0 0 7\n", &two_kinds()).unwrap_err();
        assert!(matches!(err, IoError::UnknownKind { line: 3, kind: 7 }));
    }

    #[test]
    fn malformed_lines_carry_line_numbers() {
        let err = load("6 six\n0\n", &KindTable::default()).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }));

        let err = load("6 6\n1\n0 0 1 9\n", &KindTable::default()).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 3, .. }));
    }

    #[test]
    fn truncated_file_rejected() {
        let err = load("6 6\n2\n0 0\n", &KindTable::default()).unwrap_err();
        assert!(matches!(err, IoError::Parse { .. }));
    }

    #[test]
    fn out_of_bounds_particle_rejected() {
        // (2,0) sits on the boundary ring of a 4×4 grid.
        let err = load("4 4\n1\n2 0\n", &KindTable::default()).unwrap_err();
        assert!(matches!(err, IoError::Grid(GridError::OutOfBounds(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut grid = Grid::new(8, 8).unwrap();
        for (i, (x, y)) in [(0, 0), (2, 2), (-2, -1)].into_iter().enumerate() {
            grid.add_particle(Particle::base(ParticleId(i as u32), AxialCoord::new(x, y)))
                .unwrap();
        }

        let mut buffer = Vec::new();
        save_grid(&mut buffer, &grid).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("8 8\n3\n"));

        let reloaded = load(&text, &KindTable::default()).unwrap();
        assert_eq!(reloaded.size(), grid.size());
        assert_eq!(reloaded.particle_count(), 3);
        for p in grid.particles() {
            assert!(reloaded.get_particle(p.coord(), None).is_some());
        }
    }

    #[test]
    fn saver_writes_id_order() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.add_particle(Particle::base(ParticleId(1), AxialCoord::new(2, 2))).unwrap();
        grid.add_particle(Particle::base(ParticleId(0), AxialCoord::new(0, 0))).unwrap();

        let mut buffer = Vec::new();
        save_grid(&mut buffer, &grid).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "8 8\n2\n0 0\n2 2\n");
    }
}

#[cfg(test)]
mod metrics_tests {
    use std::fs;

    use tempfile::TempDir;

    use indset_core::{AxialCoord, Direction, Particle, ParticleId};
    use indset_grid::Grid;
    use indset_sim::AlignmentSimulator;

    use crate::MetricsWriter;

    fn small_sim() -> AlignmentSimulator {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.add_particle(Particle::base(ParticleId(0), AxialCoord::new(0, 0)))
            .unwrap();
        AlignmentSimulator::new(grid, 4.0, 42).unwrap()
    }

    #[test]
    fn header_row_lists_metric_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");

        let sim = small_sim();
        let mut writer = MetricsWriter::create(&path, &sim).unwrap();
        writer.finish().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.lines().next().unwrap(),
            "Iterations;Bias;Iterations;Movements made;Rounds completed"
        );
    }

    #[test]
    fn rows_use_declared_formats() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");

        let mut sim = small_sim();
        let mut writer = MetricsWriter::create(&path, &sim).unwrap();

        sim.step(ParticleId(0), Direction::East, 0.0, None).unwrap();
        writer.append(&sim).unwrap();
        writer.finish().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert_eq!(row, "1;4.00;1;1;0");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_flush_leaves_finish_retryable() {
        // Writes to /dev/full fail with ENOSPC once the buffer drains.
        let sim = small_sim();
        let mut writer = MetricsWriter::create("/dev/full", &sim).unwrap();
        assert!(writer.finish().is_err());
        // The failure must not latch the finished flag; a retry reports the
        // error again instead of silently succeeding.
        assert!(writer.finish().is_err());
    }

    #[test]
    fn appends_one_row_per_sample() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.csv");

        let mut sim = small_sim();
        let mut writer = MetricsWriter::create(&path, &sim).unwrap();
        for _ in 0..3 {
            sim.run_iterations(10, None).unwrap();
            writer.append(&sim).unwrap();
        }
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 4); // header + 3 samples
    }
}
