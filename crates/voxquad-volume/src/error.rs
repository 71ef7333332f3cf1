use thiserror::Error;
use voxquad_geom::Coordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
    /// A write landed outside the volume's dimensions.
    #[error("voxel {coord} lies outside volume of size {size}")]
    OutOfBounds { coord: Coordinate, size: Coordinate },

    /// Dimensions must be non-negative and fit the 16-bit grid.
    #[error("invalid volume dimensions {0:?}")]
    InvalidSize([i32; 3]),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Substitute palettes are 256x1 strips, one column per color index.
    #[error("palette image must be 256x1, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
