use proptest::prelude::*;
use voxquad_geom::Coordinate;
use voxquad_volume::{FloodStrategy, Voxel, VoxelKind, VoxelVolume, classify_with};

fn dim() -> impl Strategy<Value = i16> {
    0i16..=7
}

// Random occupancy over a small box; density biased toward solid so cavities appear.
fn arb_volume() -> impl Strategy<Value = VoxelVolume> {
    (dim(), dim(), dim())
        .prop_flat_map(|(x, y, z)| {
            let n = Coordinate::new(x, y, z).volume();
            (Just(Coordinate::new(x, y, z)), prop::collection::vec(0u8..4, n))
        })
        .prop_map(|(size, cells)| {
            let mut vol = VoxelVolume::new(size).unwrap();
            for (c, v) in Coordinate::solid(Coordinate::ZERO, size).zip(cells) {
                if v > 0 {
                    vol.set(c, Voxel::visible(v)).unwrap();
                }
            }
            vol
        })
}

proptest! {
    // Flood + replace leaves no unknown cells behind
    #[test]
    fn classification_leaves_no_unknown(vol in arb_volume()) {
        let mut vol = vol;
        classify_with(&mut vol, true, FloodStrategy::Queue);
        prop_assert_eq!(vol.count(VoxelKind::Unknown), 0);
    }

    // Both strategies agree cell for cell
    #[test]
    fn queue_and_shrinking_shell_agree(vol in arb_volume()) {
        let mut a = vol.clone();
        let mut b = vol;
        classify_with(&mut a, true, FloodStrategy::Queue);
        classify_with(&mut b, true, FloodStrategy::ShrinkingShell);
        prop_assert_eq!(a, b);
    }

    // Solid cells keep their kind and color through classification
    #[test]
    fn visible_cells_untouched(vol in arb_volume()) {
        let before: Vec<_> = vol.iter().filter(|(_, v)| v.is_visible()).collect();
        let mut vol = vol;
        classify_with(&mut vol, true, FloodStrategy::Queue);
        for (c, v) in before {
            prop_assert_eq!(vol.get(c), v);
        }
    }

    // Every empty cell touches the border or another empty cell
    #[test]
    fn empty_cells_connect_outward(vol in arb_volume()) {
        let mut vol = vol;
        classify_with(&mut vol, true, FloodStrategy::Queue);
        let size = vol.size();
        for (c, v) in vol.iter() {
            if v.kind != VoxelKind::Empty {
                continue;
            }
            let on_border = c.x == 0 || c.y == 0 || c.z == 0
                || c.x == size.x - 1 || c.y == size.y - 1 || c.z == size.z - 1;
            let linked = c.von_neumann_neighbors().into_iter().any(|n| vol.kind(n) == VoxelKind::Empty);
            prop_assert!(on_border || linked);
        }
    }
}

#[test]
fn spiral_cavity_reached_by_both_strategies() {
    // A corridor that dives inward and turns back toward the surface.
    let size = Coordinate::new(7, 7, 3);
    let mut vol = VoxelVolume::new(size).unwrap();
    for c in Coordinate::solid(Coordinate::ZERO, size) {
        vol.set(c, Voxel::visible(1)).unwrap();
    }
    let corridor = [
        Coordinate::new(0, 3, 1),
        Coordinate::new(1, 3, 1),
        Coordinate::new(2, 3, 1),
        Coordinate::new(3, 3, 1),
        Coordinate::new(3, 2, 1),
        Coordinate::new(3, 1, 1),
        Coordinate::new(4, 1, 1),
        Coordinate::new(5, 1, 1),
    ];
    for c in corridor {
        vol.set(c, Voxel::UNKNOWN).unwrap();
    }
    let mut a = vol.clone();
    let mut b = vol;
    classify_with(&mut a, true, FloodStrategy::Queue);
    classify_with(&mut b, true, FloodStrategy::ShrinkingShell);
    for c in corridor {
        assert_eq!(a.kind(c), VoxelKind::Empty, "{c}");
    }
    assert_eq!(a, b);
}
