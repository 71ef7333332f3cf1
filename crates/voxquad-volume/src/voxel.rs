/// Classification of a single volume cell.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum VoxelKind {
    /// Not yet classified. Behaves as empty space when meshing.
    #[default]
    Unknown,
    /// Air reachable from outside the volume.
    Empty,
    /// Solid voxel that may produce faces.
    Visible,
    /// Solid or enclosed cell that never shows a face of its own.
    Occluded,
    /// Read past the volume bounds; never stored.
    Outside,
}

/// A small value cell: a classification plus a palette index.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Voxel {
    pub kind: VoxelKind,
    pub color: u8,
}

impl Voxel {
    pub const UNKNOWN: Voxel = Voxel::new(VoxelKind::Unknown, 0);
    pub const EMPTY: Voxel = Voxel::new(VoxelKind::Empty, 0);
    pub const OCCLUDED: Voxel = Voxel::new(VoxelKind::Occluded, 0);
    pub const OUTSIDE: Voxel = Voxel::new(VoxelKind::Outside, 0);

    #[inline]
    pub const fn new(kind: VoxelKind, color: u8) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn visible(color: u8) -> Self {
        Self::new(VoxelKind::Visible, color)
    }

    /// Visible and occluded cells are solid; everything else is see-through.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self.kind, VoxelKind::Visible | VoxelKind::Occluded)
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self.kind == VoxelKind::Visible
    }
}
