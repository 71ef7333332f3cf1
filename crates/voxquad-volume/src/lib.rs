//! Dense voxel volumes, interior/exterior classification and color palettes.
#![forbid(unsafe_code)]

pub mod classify;
pub mod decoded;
pub mod error;
pub mod palette;
pub mod voxel;
pub mod volume;

pub use classify::{FloodStrategy, classify, classify_with};
pub use decoded::DecodedVolume;
pub use error::{PaletteError, VolumeError};
pub use palette::{PALETTE_SIZE, Palette};
pub use voxel::{Voxel, VoxelKind};
pub use volume::VoxelVolume;
