use hashbrown::HashMap;
use voxquad_geom::Coordinate;

use crate::error::VolumeError;
use crate::palette::Palette;
use crate::voxel::Voxel;
use crate::volume::VoxelVolume;

/// A volume as handed over by a file decoder: declared dimensions, the sparse set of
/// solid voxels with their color indices, and the palette those indices refer to.
#[derive(Clone, Debug, Default)]
pub struct DecodedVolume {
    pub size: [u16; 3],
    pub voxels: HashMap<Coordinate, u8>,
    pub palette: Palette,
}

impl DecodedVolume {
    pub fn new(size: [u16; 3], palette: Palette) -> Self {
        Self {
            size,
            voxels: HashMap::new(),
            palette,
        }
    }

    #[inline]
    pub fn insert(&mut self, c: Coordinate, color: u8) {
        self.voxels.insert(c, color);
    }

    /// Dense volume with every decoded voxel `Visible` and everything else `Unknown`.
    /// Voxels outside the declared size are rejected.
    pub fn to_volume(&self) -> Result<VoxelVolume, VolumeError> {
        let mut vol = VoxelVolume::with_dimensions(self.size)?;
        vol.fill(Voxel::UNKNOWN);
        for (&c, &color) in &self.voxels {
            vol.set(c, Voxel::visible(color))?;
        }
        Ok(vol)
    }
}
