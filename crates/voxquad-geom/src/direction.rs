use crate::{Coordinate, Vec3};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Sweep order used by the mesher.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The in-plane `(u, v)` axes of a slab perpendicular to this axis.
    #[inline]
    pub fn plane_axes(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Z, Axis::Y),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Both sweep directions along this axis, in the order slabs are visited.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::X => [Direction::Right, Direction::Left],
            Axis::Y => [Direction::Up, Direction::Down],
            Axis::Z => [Direction::Back, Direction::Forward],
        }
    }

    /// Picks this axis' component out of a grid coordinate.
    #[inline]
    pub fn of(self, c: Coordinate) -> i16 {
        match self {
            Axis::X => c.x,
            Axis::Y => c.y,
            Axis::Z => c.z,
        }
    }

    /// Picks this axis' component out of a float vector.
    #[inline]
    pub fn of_vec(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Writes `value` into this axis' component of `c`.
    #[inline]
    pub fn set(self, c: &mut Coordinate, value: i16) {
        match self {
            Axis::X => c.x = value,
            Axis::Y => c.y = value,
            Axis::Z => c.z = value,
        }
    }
}

/// One of the six axis-aligned sweep directions. A quad built while sweeping in a
/// direction faces that direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    Back = 4,
    Forward = 5,
}

impl Direction {
    /// All six directions in mesher sweep order.
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Back,
        Direction::Forward,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit grid step toward this direction.
    #[inline]
    pub fn offset(self) -> Coordinate {
        match self {
            Direction::Right => Coordinate::RIGHT,
            Direction::Left => Coordinate::LEFT,
            Direction::Up => Coordinate::UP,
            Direction::Down => Coordinate::DOWN,
            Direction::Back => Coordinate::BACK,
            Direction::Forward => Coordinate::FORWARD,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Back | Direction::Forward => Axis::Z,
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.offset())
    }

    /// The look rotation toward this direction as the images of canonical
    /// `+x`, `+y` and `+z`. `+z` always lands on the direction itself.
    pub fn basis(self) -> [Vec3; 3] {
        let (x, y) = match self {
            Direction::Forward => (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            Direction::Back => (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            Direction::Right => (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0)),
            Direction::Left => (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0)),
            Direction::Up => (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
            Direction::Down => (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        };
        [x, y, self.normal()]
    }

    /// Rotates a vector from canonical quad space (facing `+z`) into this direction.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let [bx, by, bz] = self.basis();
        bx * v.x + by * v.y + bz * v.z
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Back => Direction::Forward,
            Direction::Forward => Direction::Back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_right_handed() {
        for d in Direction::ALL {
            let [x, y, z] = d.basis();
            assert_eq!(x.cross(y), z, "{d:?}");
            assert_eq!(x.dot(y), 0.0);
        }
    }

    #[test]
    fn plane_axes_exclude_sweep_axis() {
        for a in Axis::ALL {
            let (u, v) = a.plane_axes();
            assert_ne!(u, a);
            assert_ne!(v, a);
            assert_ne!(u, v);
            for d in a.directions() {
                assert_eq!(d.axis(), a);
            }
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Coordinate::ZERO);
        }
    }
}
