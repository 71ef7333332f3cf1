//! CPU greedy mesher: voxel volume to merged textured quads plus a packed atlas.
#![forbid(unsafe_code)]

pub mod atlas;
mod build;
pub mod constants;
mod error;
pub mod face;
pub mod mesh_build;
pub mod paint;
pub mod slab;

pub use atlas::{AtlasPacker, TextureAtlas, UvRect};
pub use build::{MeshAssembler, MeshParams, Quad, VoxelMesh, build_voxel_mesh};
pub use constants::{DEFAULT_MAX_OCCLUSION, DEFAULT_VERTEX_BUDGET};
pub use error::MeshError;
pub use face::FaceGrower;
pub use mesh_build::MeshBuild;
pub use paint::{FaceTexture, mirror_flags, paint};
pub use slab::{Plane, slab_to_volume};
