//! Unit tests for indset-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ParticleId, ParticleKind};

    #[test]
    fn index_roundtrip() {
        let id = ParticleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ParticleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ParticleId(0) < ParticleId(1));
        assert!(ParticleKind(3) > ParticleKind(0));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ParticleId::INVALID.0, u32::MAX);
        assert_eq!(ParticleKind::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ParticleId(7).to_string(), "ParticleId(7)");
    }

    #[test]
    fn base_kind_is_zero() {
        assert_eq!(ParticleKind::BASE, ParticleKind(0));
    }
}

#[cfg(test)]
mod coord {
    use crate::{AxialCoord, Direction};

    #[test]
    fn direction_vectors() {
        assert_eq!(Direction::East.vector(), (1, 0));
        assert_eq!(Direction::North.vector(), (0, 1));
        assert_eq!(Direction::West.vector(), (-1, 0));
        assert_eq!(Direction::South.vector(), (0, -1));
    }

    #[test]
    fn rotation_wraps_modulo_four() {
        assert_eq!(Direction::East.rotated(1), Direction::North);
        assert_eq!(Direction::South.rotated(1), Direction::East);
        assert_eq!(Direction::East.rotated(-1), Direction::South);
        assert_eq!(Direction::North.rotated(4), Direction::North);
        assert_eq!(Direction::West.rotated(-7), Direction::North);
    }

    #[test]
    fn rotation_total_at_extreme_offsets() {
        // Offsets near the i8 limits must not overflow the discriminant sum.
        assert_eq!(Direction::South.rotated(126), Direction::North);
        assert_eq!(Direction::South.rotated(i8::MAX), Direction::West);
        assert_eq!(Direction::East.rotated(i8::MIN), Direction::East);
    }

    #[test]
    fn step_adds_unit_vector() {
        let c = AxialCoord::new(2, -3);
        assert_eq!(c.step(Direction::North), AxialCoord::new(2, -2));
        assert_eq!(c.step(Direction::West), AxialCoord::new(1, -3));
    }

    #[test]
    fn neighbor_positions_follow_direction_order() {
        let c = AxialCoord::new(0, 0);
        let nbrs = c.neighbor_positions();
        assert_eq!(nbrs[0], AxialCoord::new(1, 0));
        assert_eq!(nbrs[1], AxialCoord::new(0, 1));
        assert_eq!(nbrs[2], AxialCoord::new(-1, 0));
        assert_eq!(nbrs[3], AxialCoord::new(0, -1));
    }

    #[test]
    fn adjacency_is_unit_manhattan_distance() {
        let c = AxialCoord::new(0, 0);
        assert!(c.is_adjacent(AxialCoord::new(1, 0)));
        assert!(c.is_adjacent(AxialCoord::new(0, -1)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(AxialCoord::new(1, 1)));
        assert!(!c.is_adjacent(AxialCoord::new(2, 0)));
    }

    #[test]
    fn display() {
        assert_eq!(AxialCoord::new(-1, 2).to_string(), "(-1, 2)");
        assert_eq!(Direction::South.to_string(), "S");
    }
}

#[cfg(test)]
mod particle {
    use crate::{AxialCoord, KindTable, Particle, ParticleId, ParticleKind};

    #[test]
    fn relocate_rewrites_coord() {
        let mut p = Particle::base(ParticleId(0), AxialCoord::new(0, 0));
        p.relocate(AxialCoord::new(1, 0));
        assert_eq!(p.coord(), AxialCoord::new(1, 0));
        assert_eq!(p.id, ParticleId(0));
    }

    #[test]
    fn default_table_has_single_black_kind() {
        let table = KindTable::default();
        assert_eq!(table.len(), 1);
        assert!(table.contains(ParticleKind::BASE));
        assert!(!table.contains(ParticleKind(1)));
        assert_eq!(table.get(ParticleKind::BASE).unwrap().color, [0, 0, 0]);
    }

    #[test]
    fn kinds_iterates_in_table_order() {
        let table = KindTable::default();
        let kinds: Vec<_> = table.kinds().collect();
        assert_eq!(kinds, vec![ParticleKind(0)]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_rngs_diverge() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let mut c0 = root1.child(0);
        let mut c1 = root2.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "children at different offsets should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }
}
