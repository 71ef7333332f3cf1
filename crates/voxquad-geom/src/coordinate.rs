use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Integer grid position. Voxel volumes never exceed the 16-bit range per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coordinate {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate::new(0, 0, 0);
    pub const ONE: Coordinate = Coordinate::new(1, 1, 1);
    pub const FORWARD: Coordinate = Coordinate::new(0, 0, 1);
    pub const BACK: Coordinate = Coordinate::new(0, 0, -1);
    pub const LEFT: Coordinate = Coordinate::new(-1, 0, 0);
    pub const RIGHT: Coordinate = Coordinate::new(1, 0, 0);
    pub const UP: Coordinate = Coordinate::new(0, 1, 0);
    pub const DOWN: Coordinate = Coordinate::new(0, -1, 0);

    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// A 2D coordinate on a plane; `z` is zero.
    #[inline]
    pub const fn planar(x: i16, y: i16) -> Self {
        Self { x, y, z: 0 }
    }

    /// Checked conversion from wider integers; `None` if any component leaves the i16 range.
    pub fn try_from_i32(x: i32, y: i32, z: i32) -> Option<Self> {
        Some(Self {
            x: i16::try_from(x).ok()?,
            y: i16::try_from(y).ok()?,
            z: i16::try_from(z).ok()?,
        })
    }

    /// True when every component of `self` is strictly below the matching one of `end`
    /// and not below the matching one of `start`.
    #[inline]
    pub fn within(self, start: Coordinate, end: Coordinate) -> bool {
        self.x >= start.x
            && self.y >= start.y
            && self.z >= start.z
            && self.x < end.x
            && self.y < end.y
            && self.z < end.z
    }

    /// Every point of the half-open box `[start, end)`, x outermost and z innermost.
    pub fn solid(start: Coordinate, end: Coordinate) -> impl Iterator<Item = Coordinate> {
        let (x0, x1, y0, y1, z0, z1) = box_ranges(start, end);
        (x0..x1).flat_map(move |x| {
            (y0..y1).flat_map(move |y| (z0..z1).map(move |z| Coordinate::new(x, y, z)))
        })
    }

    /// The boundary points of the half-open box `[start, end)`, each visited exactly once.
    ///
    /// Columns on the x/y rim yield their full z span; interior columns only yield the
    /// front and back cells (a single one when the box is one cell deep).
    pub fn shell(start: Coordinate, end: Coordinate) -> impl Iterator<Item = Coordinate> {
        let (x0, x1, y0, y1, z0, z1) = box_ranges(start, end);
        (x0..x1).flat_map(move |x| {
            (y0..y1).flat_map(move |y| {
                let rim = x == x0 || x == x1 - 1 || y == y0 || y == y1 - 1;
                let step = if rim {
                    1
                } else {
                    ((z1 as i32 - 1 - z0 as i32) as usize).max(1)
                };
                (z0..z1).step_by(step).map(move |z| Coordinate::new(x, y, z))
            })
        })
    }

    /// The six face-adjacent neighbors: forward, back, left, right, up, down.
    #[inline]
    pub fn von_neumann_neighbors(self) -> [Coordinate; 6] {
        [
            self + Coordinate::FORWARD,
            self + Coordinate::BACK,
            self + Coordinate::LEFT,
            self + Coordinate::RIGHT,
            self + Coordinate::UP,
            self + Coordinate::DOWN,
        ]
    }

    /// The 26 neighbors sharing at least a vertex with this coordinate.
    pub fn moore_neighbors(self) -> impl Iterator<Item = Coordinate> {
        (-1i16..=1).flat_map(move |dx| {
            (-1i16..=1).flat_map(move |dy| {
                (-1i16..=1)
                    .filter(move |&dz| dx != 0 || dy != 0 || dz != 0)
                    .map(move |dz| self + Coordinate::new(dx, dy, dz))
            })
        })
    }

    /// Number of cells in the box `[ZERO, self)`; zero when any component is non-positive.
    #[inline]
    pub fn volume(self) -> usize {
        if self.x <= 0 || self.y <= 0 || self.z <= 0 {
            return 0;
        }
        self.x as usize * self.y as usize * self.z as usize
    }
}

// Degenerate boxes collapse to empty ranges so callers never iterate partial shells.
#[inline]
fn box_ranges(start: Coordinate, end: Coordinate) -> (i16, i16, i16, i16, i16, i16) {
    if start.x >= end.x || start.y >= end.y || start.z >= end.z {
        (0, 0, 0, 0, 0, 0)
    } else {
        (start.x, end.x, start.y, end.y, start.z, end.z)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Coordinate {
    #[inline]
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Coordinate {
    #[inline]
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;
    #[inline]
    fn neg(self) -> Coordinate {
        Coordinate::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({}, {}, {})", self.x, self.y, self.z)
    }
}
