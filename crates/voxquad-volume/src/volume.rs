use std::collections::VecDeque;

use voxquad_geom::Coordinate;

use crate::error::VolumeError;
use crate::voxel::{Voxel, VoxelKind};

/// Dense grid of voxels stored in one flat buffer, `x` fastest and `z` slowest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelVolume {
    size: Coordinate,
    voxels: Vec<Voxel>,
}

impl VoxelVolume {
    /// A volume of `size` filled with `Unknown` cells.
    pub fn new(size: Coordinate) -> Result<Self, VolumeError> {
        if size.x < 0 || size.y < 0 || size.z < 0 {
            return Err(VolumeError::InvalidSize([
                size.x as i32,
                size.y as i32,
                size.z as i32,
            ]));
        }
        Ok(Self {
            size,
            voxels: vec![Voxel::UNKNOWN; size.volume()],
        })
    }

    /// Builds a volume from unsigned file dimensions, rejecting sizes past the i16 grid.
    pub fn with_dimensions(dims: [u16; 3]) -> Result<Self, VolumeError> {
        let size = Coordinate::try_from_i32(dims[0] as i32, dims[1] as i32, dims[2] as i32)
            .ok_or(VolumeError::InvalidSize([
                dims[0] as i32,
                dims[1] as i32,
                dims[2] as i32,
            ]))?;
        Self::new(size)
    }

    #[inline]
    pub fn size(&self) -> Coordinate {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Flat buffer index of `c`, or `None` outside the bounds.
    #[inline]
    pub fn idx(&self, c: Coordinate) -> Option<usize> {
        if !c.within(Coordinate::ZERO, self.size) {
            return None;
        }
        let (w, h) = (self.size.x as usize, self.size.y as usize);
        Some(c.x as usize + w * (c.y as usize + h * c.z as usize))
    }

    /// Reads a cell; anything past the bounds reads as `Outside`.
    #[inline]
    pub fn get(&self, c: Coordinate) -> Voxel {
        match self.idx(c) {
            Some(i) => self.voxels[i],
            None => Voxel::OUTSIDE,
        }
    }

    #[inline]
    pub fn kind(&self, c: Coordinate) -> VoxelKind {
        self.get(c).kind
    }

    pub fn set(&mut self, c: Coordinate, v: Voxel) -> Result<(), VolumeError> {
        let i = self.idx(c).ok_or(VolumeError::OutOfBounds {
            coord: c,
            size: self.size,
        })?;
        self.voxels[i] = v;
        Ok(())
    }

    pub fn fill(&mut self, v: Voxel) {
        self.voxels.fill(v);
    }

    /// Reclassifies every `from` cell as `to`, keeping colors. Returns the number changed.
    pub fn replace(&mut self, from: VoxelKind, to: VoxelKind) -> usize {
        let mut n = 0;
        for v in self.voxels.iter_mut().filter(|v| v.kind == from) {
            v.kind = to;
            n += 1;
        }
        n
    }

    /// Reclassifies every `from` cell connected to the outer shell through `from`
    /// cells as `to`, breadth first. Returns the number changed.
    pub fn flood(&mut self, from: VoxelKind, to: VoxelKind) -> usize {
        if from == to || self.is_empty() {
            return 0;
        }
        let mut queue = VecDeque::new();
        for c in Coordinate::shell(Coordinate::ZERO, self.size) {
            if self.convert(c, from, to) {
                queue.push_back(c);
            }
        }
        let mut n = queue.len();
        while let Some(c) = queue.pop_front() {
            for nb in c.von_neumann_neighbors() {
                if self.convert(nb, from, to) {
                    queue.push_back(nb);
                    n += 1;
                }
            }
        }
        n
    }

    /// Same result as [`flood`](Self::flood), computed by marching a shell inward one
    /// layer at a time. Passes repeat from the outside until one converts nothing, so
    /// pockets that wind back toward the surface are still reached.
    pub fn flood_shrinking_shell(&mut self, from: VoxelKind, to: VoxelKind) -> usize {
        if from == to || self.is_empty() {
            return 0;
        }
        // Only cells converted by this flood count as connected; pre-existing `to`
        // cells deeper inside must not seed anything.
        let mut reached = vec![false; self.len()];
        let mut n = 0;
        for c in Coordinate::shell(Coordinate::ZERO, self.size) {
            if self.convert(c, from, to) {
                self.mark(&mut reached, c);
                n += 1;
            }
        }
        loop {
            let mut changed = 0;
            let mut layer = 0i16;
            loop {
                let start = Coordinate::new(layer, layer, layer);
                let end = self.size - start;
                if start.x >= end.x || start.y >= end.y || start.z >= end.z {
                    break;
                }
                for c in Coordinate::shell(start, end) {
                    if self.kind(c) != from {
                        continue;
                    }
                    let touches = c
                        .von_neumann_neighbors()
                        .into_iter()
                        .any(|nb| self.idx(nb).is_some_and(|i| reached[i]));
                    if touches && self.convert(c, from, to) {
                        self.mark(&mut reached, c);
                        changed += 1;
                    }
                }
                layer += 1;
            }
            if changed == 0 {
                break;
            }
            n += changed;
        }
        n
    }

    /// Every cell with its coordinate, x outermost.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Voxel)> + '_ {
        Coordinate::solid(Coordinate::ZERO, self.size).map(move |c| (c, self.get(c)))
    }

    pub fn count(&self, kind: VoxelKind) -> usize {
        self.voxels.iter().filter(|v| v.kind == kind).count()
    }

    #[inline]
    fn convert(&mut self, c: Coordinate, from: VoxelKind, to: VoxelKind) -> bool {
        match self.idx(c) {
            Some(i) if self.voxels[i].kind == from => {
                self.voxels[i].kind = to;
                true
            }
            _ => false,
        }
    }

    #[inline]
    fn mark(&self, reached: &mut [bool], c: Coordinate) {
        if let Some(i) = self.idx(c) {
            reached[i] = true;
        }
    }
}
