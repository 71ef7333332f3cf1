use voxquad_geom::{Axis, Coordinate, Direction, Vec3};

#[test]
fn sweep_order_pairs_axes() {
    let flat: Vec<Direction> = Axis::ALL.iter().flat_map(|a| a.directions()).collect();
    assert_eq!(flat, Direction::ALL.to_vec());
}

#[test]
fn rotate_maps_canonical_forward_onto_direction() {
    for d in Direction::ALL {
        assert_eq!(d.rotate(Vec3::new(0.0, 0.0, 1.0)), d.normal());
    }
}

#[test]
fn right_look_rotation() {
    let d = Direction::Right;
    assert_eq!(d.rotate(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(d.rotate(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn up_look_rotation_tilts_canonical_up_backwards() {
    let d = Direction::Up;
    assert_eq!(d.rotate(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(Direction::Down.rotate(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn offsets_match_coordinate_constants() {
    assert_eq!(Direction::Forward.offset(), Coordinate::FORWARD);
    assert_eq!(Direction::Back.offset(), Coordinate::BACK);
    assert_eq!(Direction::Left.offset(), Coordinate::LEFT);
    assert_eq!(Direction::Down.offset(), Coordinate::DOWN);
}

#[test]
fn axis_component_accessors() {
    let mut c = Coordinate::new(1, 2, 3);
    assert_eq!(Axis::Y.of(c), 2);
    Axis::Z.set(&mut c, 9);
    assert_eq!(c, Coordinate::new(1, 2, 9));
    assert_eq!(Axis::X.of_vec(Vec3::new(4.0, 5.0, 6.0)), 4.0);
}
