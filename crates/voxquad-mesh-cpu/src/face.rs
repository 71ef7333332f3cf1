use voxquad_geom::Coordinate;
use voxquad_volume::{Voxel, VoxelKind};

use crate::slab::Plane;

/// Grows a rectangle of solid cells over a plane, trading a bounded share of
/// occluded (never visible) cells for fewer, larger quads.
///
/// Bounds are half-open `[start, end)` in planar coordinates.
pub struct FaceGrower<'a> {
    plane: &'a mut Plane,
    max_occlusion: f32,
    start: Coordinate,
    end: Coordinate,
    solid: u32,
    occluded: u32,
}

impl<'a> FaceGrower<'a> {
    /// `max_occlusion` is the largest allowed `occluded / solid` ratio, clamped to `[0, 1]`.
    pub fn new(plane: &'a mut Plane, max_occlusion: f32) -> Self {
        Self {
            plane,
            max_occlusion: max_occlusion.clamp(0.0, 1.0),
            start: Coordinate::ZERO,
            end: Coordinate::ZERO,
            solid: 0,
            occluded: 0,
        }
    }

    /// Starts a 1x1 face at `start`. Only visible cells seed a face.
    pub fn create(&mut self, start: Coordinate) -> bool {
        self.start = start;
        self.end = start + Coordinate::planar(1, 1);
        let cell = self.plane.get(start.x, start.y);
        if cell.kind != VoxelKind::Visible {
            self.solid = 0;
            self.occluded = 0;
            return false;
        }
        self.solid = 1;
        self.occluded = 0;
        true
    }

    /// Tries to grow one strip in each direction: right, down, left, up.
    /// Returns true if any of them succeeded.
    pub fn extend(&mut self) -> bool {
        let right = self.extend_right();
        let down = self.extend_down();
        let left = self.extend_left();
        let up = self.extend_up();
        right | down | left | up
    }

    /// Extends until no direction can grow any further.
    pub fn grow(&mut self) {
        while self.extend() {}
    }

    fn extend_right(&mut self) -> bool {
        if self.end.x >= self.plane.width() {
            return false;
        }
        let u = self.end.x;
        let cells = (self.start.y..self.end.y).map(|v| (u, v));
        match self.strip(cells) {
            Some(counts) if self.accepts(counts) => {
                self.end.x += 1;
                self.commit(counts)
            }
            _ => false,
        }
    }

    fn extend_down(&mut self) -> bool {
        if self.start.y <= 0 {
            return false;
        }
        let v = self.start.y - 1;
        let cells = (self.start.x..self.end.x).map(|u| (u, v));
        match self.strip(cells) {
            Some(counts) if self.accepts(counts) => {
                self.start.y -= 1;
                self.commit(counts)
            }
            _ => false,
        }
    }

    fn extend_left(&mut self) -> bool {
        if self.start.x <= 0 {
            return false;
        }
        let u = self.start.x - 1;
        let cells = (self.start.y..self.end.y).map(|v| (u, v));
        match self.strip(cells) {
            Some(counts) if self.accepts(counts) => {
                self.start.x -= 1;
                self.commit(counts)
            }
            _ => false,
        }
    }

    fn extend_up(&mut self) -> bool {
        if self.end.y >= self.plane.height() {
            return false;
        }
        let v = self.end.y;
        let cells = (self.start.x..self.end.x).map(|u| (u, v));
        match self.strip(cells) {
            Some(counts) if self.accepts(counts) => {
                self.end.y += 1;
                self.commit(counts)
            }
            _ => false,
        }
    }

    // (solid, occluded) counts of a strip, or None if any cell is not solid.
    fn strip(&self, cells: impl Iterator<Item = (i16, i16)>) -> Option<(u32, u32)> {
        let mut solid = 0;
        let mut occluded = 0;
        for (u, v) in cells {
            let cell = self.plane.get(u, v);
            if !cell.is_solid() {
                return None;
            }
            solid += 1;
            if cell.kind == VoxelKind::Occluded {
                occluded += 1;
            }
        }
        Some((solid, occluded))
    }

    fn accepts(&self, (solid, occluded): (u32, u32)) -> bool {
        let solid = self.solid + solid;
        let occluded = self.occluded + occluded;
        if occluded >= solid {
            return false;
        }
        occluded as f32 / solid as f32 <= self.max_occlusion
    }

    #[inline]
    fn commit(&mut self, (solid, occluded): (u32, u32)) -> bool {
        self.solid += solid;
        self.occluded += occluded;
        true
    }

    /// Marks every cell under the face as empty so later scans skip it.
    pub fn clear_plane(&mut self) {
        for v in self.start.y..self.end.y {
            for u in self.start.x..self.end.x {
                self.plane.set(u, v, Voxel::EMPTY);
            }
        }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Width and height of the face in cells.
    #[inline]
    pub fn size(&self) -> (i16, i16) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    #[inline]
    pub fn solid_count(&self) -> u32 {
        self.solid
    }

    #[inline]
    pub fn occluded_count(&self) -> u32 {
        self.occluded
    }

    /// Read access to the plane the face grows over.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &*self.plane
    }
}
