use voxquad_geom::{Coordinate, Direction};
use voxquad_volume::{Voxel, VoxelKind, VoxelVolume};

/// A 2D slice of the volume one voxel thick, seen from one sweep direction.
///
/// Cells are addressed with planar coordinates (`x` = u, `y` = v). A visible voxel
/// whose neighbor in the sweep direction is solid is stored as `Occluded`, since its
/// face can never be seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    width: i16,
    height: i16,
    cells: Vec<Voxel>,
}

impl Plane {
    pub fn new(width: i16, height: i16) -> Self {
        let n = width.max(0) as usize * height.max(0) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![Voxel::EMPTY; n],
        }
    }

    /// Slices layer `layer` along `dir`'s axis out of `volume`.
    pub fn extract(volume: &VoxelVolume, dir: Direction, layer: i16) -> Self {
        let size = volume.size();
        let axis = dir.axis();
        let (ua, va) = axis.plane_axes();
        let mut plane = Plane::new(ua.of(size), va.of(size));
        let step = dir.offset();
        for v in 0..plane.height {
            for u in 0..plane.width {
                let c = slab_to_volume(dir, layer, u, v);
                let voxel = volume.get(c);
                let occluding = volume.get(c + step);
                let cell = if voxel.is_visible() && occluding.is_solid() {
                    Voxel::new(VoxelKind::Occluded, voxel.color)
                } else {
                    voxel
                };
                let i = plane.idx(u, v);
                plane.cells[i] = cell;
            }
        }
        plane
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.height
    }

    #[inline]
    fn idx(&self, u: i16, v: i16) -> usize {
        v as usize * self.width as usize + u as usize
    }

    #[inline]
    pub fn contains(&self, u: i16, v: i16) -> bool {
        u >= 0 && v >= 0 && u < self.width && v < self.height
    }

    /// Reads a cell; outside the plane reads as `Outside`.
    #[inline]
    pub fn get(&self, u: i16, v: i16) -> Voxel {
        if self.contains(u, v) {
            self.cells[self.idx(u, v)]
        } else {
            Voxel::OUTSIDE
        }
    }

    #[inline]
    pub fn set(&mut self, u: i16, v: i16, voxel: Voxel) {
        if self.contains(u, v) {
            let i = self.idx(u, v);
            self.cells[i] = voxel;
        }
    }

    pub fn count(&self, kind: VoxelKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}

/// Volume coordinate of plane cell `(u, v)` in slab `layer` swept along `dir`.
#[inline]
pub fn slab_to_volume(dir: Direction, layer: i16, u: i16, v: i16) -> Coordinate {
    let axis = dir.axis();
    let (ua, va) = axis.plane_axes();
    let mut c = Coordinate::ZERO;
    axis.set(&mut c, layer);
    ua.set(&mut c, u);
    va.set(&mut c, v);
    c
}
