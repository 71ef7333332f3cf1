use std::collections::HashSet;

use proptest::prelude::*;
use voxquad_geom::Coordinate;

fn small() -> impl Strategy<Value = i16> {
    -6i16..=6
}

fn extent() -> impl Strategy<Value = i16> {
    0i16..=6
}

fn arb_box() -> impl Strategy<Value = (Coordinate, Coordinate)> {
    (small(), small(), small(), extent(), extent(), extent()).prop_map(|(x, y, z, w, h, d)| {
        let start = Coordinate::new(x, y, z);
        (start, start + Coordinate::new(w, h, d))
    })
}

fn on_boundary(p: Coordinate, start: Coordinate, end: Coordinate) -> bool {
    p.x == start.x
        || p.y == start.y
        || p.z == start.z
        || p.x == end.x - 1
        || p.y == end.y - 1
        || p.z == end.z - 1
}

proptest! {
    // Every shell point is unique, inside the box and on its boundary
    #[test]
    fn shell_points_unique_and_on_boundary((start, end) in arb_box()) {
        let mut seen = HashSet::new();
        for p in Coordinate::shell(start, end) {
            prop_assert!(p.within(start, end));
            prop_assert!(on_boundary(p, start, end));
            prop_assert!(seen.insert(p), "duplicate {}", p);
        }
    }

    // Shell + strict interior = solid box
    #[test]
    fn shell_count_matches_solid_minus_interior((start, end) in arb_box()) {
        let solid = Coordinate::solid(start, end).count();
        let shell = Coordinate::shell(start, end).count();
        let inner = Coordinate::solid(start + Coordinate::ONE, end - Coordinate::ONE).count();
        prop_assert_eq!(shell, solid - inner);
    }

    // Solid enumeration is x-major and z-minor, so it comes out sorted
    #[test]
    fn solid_is_sorted_and_complete((start, end) in arb_box()) {
        let pts: Vec<_> = Coordinate::solid(start, end).collect();
        prop_assert_eq!(pts.len(), (end - start).volume());
        prop_assert!(pts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn moore_neighbors_are_the_26_cube_cells(x in small(), y in small(), z in small()) {
        let c = Coordinate::new(x, y, z);
        let set: HashSet<_> = c.moore_neighbors().collect();
        prop_assert_eq!(set.len(), 26);
        prop_assert!(!set.contains(&c));
        let cube: HashSet<_> =
            Coordinate::solid(c - Coordinate::ONE, c + Coordinate::new(2, 2, 2)).collect();
        prop_assert!(set.is_subset(&cube));
    }

    #[test]
    fn von_neumann_neighbors_are_unit_steps(x in small(), y in small(), z in small()) {
        let c = Coordinate::new(x, y, z);
        let ns = c.von_neumann_neighbors();
        let set: HashSet<_> = ns.iter().copied().collect();
        prop_assert_eq!(set.len(), 6);
        for n in ns {
            let d = n - c;
            prop_assert_eq!(d.x.abs() + d.y.abs() + d.z.abs(), 1);
        }
    }
}
