//! Shared constants for voxquad-mesh-cpu.

/// Largest vertex count a single mesh may reach before the build is abandoned.
pub const DEFAULT_VERTEX_BUDGET: usize = 65_000;
/// Fraction of a merged face allowed to cover occluded cells.
pub const DEFAULT_MAX_OCCLUSION: f32 = 0.4;

pub(crate) const VERTS_PER_QUAD: usize = 4;
pub(crate) const INDICES_PER_QUAD: usize = 6;

// Atlas layout
pub(crate) const ATLAS_PADDING: u32 = 2; // texels around and between packed textures

/// Neighbor probe order for filling transparent atlas texels: edges first, then corners.
/// Atlas rows grow downward, so `-1` in y is the texel above; above wins over below.
pub(crate) const BLEED_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

// Colors
pub(crate) const OPAQUE_ALPHA: u8 = 255;
