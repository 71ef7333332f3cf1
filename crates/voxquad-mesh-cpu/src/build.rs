use std::time::Instant;

use voxquad_geom::{Aabb, Axis, Coordinate, Direction, Vec3};
use voxquad_volume::VoxelVolume;

use crate::atlas::{AtlasPacker, TextureAtlas};
use crate::constants::{DEFAULT_MAX_OCCLUSION, DEFAULT_VERTEX_BUDGET, VERTS_PER_QUAD};
use crate::error::MeshError;
use crate::face::FaceGrower;
use crate::mesh_build::MeshBuild;
use crate::paint::{FaceTexture, mirror_flags, paint};
use crate::slab::Plane;

/// Tunables for one mesh build.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshParams {
    /// World units per voxel.
    pub scale: f32,
    /// Pivot as a fraction of the volume size on each axis.
    pub center: Vec3,
    /// Largest `occluded / solid` ratio a merged face may reach, in `[0, 1]`.
    pub max_occlusion: f32,
    /// When false every face stays a single voxel.
    pub merge_faces: bool,
    pub vertex_budget: usize,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: Vec3::splat(0.5),
            max_occlusion: DEFAULT_MAX_OCCLUSION,
            merge_faces: true,
            vertex_budget: DEFAULT_VERTEX_BUDGET,
        }
    }
}

/// One emitted face: corners top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Vec3; 4],
    pub direction: Direction,
    pub texture: FaceTexture,
}

/// Finished mesh: per-vertex positions and atlas UVs, triangle indices and the atlas.
#[derive(Clone, Debug)]
pub struct VoxelMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub atlas: TextureAtlas,
}

impl VoxelMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().map(|p| Vec3::new(p[0], p[1], p[2])))
    }
}

/// Sweeps a classified volume and turns its visible faces into textured quads.
pub struct MeshAssembler<'a> {
    volume: &'a VoxelVolume,
    params: &'a MeshParams,
    center_offset: Vec3,
    mesh: MeshBuild,
    packer: AtlasPacker,
    per_direction: [usize; 6],
}

impl<'a> MeshAssembler<'a> {
    pub fn new(volume: &'a VoxelVolume, params: &'a MeshParams) -> Self {
        let size = Vec3::from(volume.size());
        let mut mesh = MeshBuild::default();
        mesh.reserve_quads(quad_estimate(volume.size(), params.vertex_budget));
        Self {
            volume,
            params,
            center_offset: -size.mul_elem(params.center) + Vec3::splat(0.5),
            mesh,
            packer: AtlasPacker::new(),
            per_direction: [0; 6],
        }
    }

    /// Visits every slab along x, y and z, both facing directions per slab.
    pub fn sweep(&mut self) -> Result<(), MeshError> {
        let size = self.volume.size();
        for axis in Axis::ALL {
            for layer in 0..axis.of(size) {
                for dir in axis.directions() {
                    self.sweep_slab(dir, layer)?;
                }
            }
        }
        for dir in Direction::ALL {
            log::debug!("{:?}: {} quads", dir, self.per_direction[dir.index()]);
        }
        Ok(())
    }

    /// Meshes one slab: scans rows (v outer, u inner) and grows a face from every
    /// visible cell still left on the plane.
    pub fn sweep_slab(&mut self, dir: Direction, layer: i16) -> Result<(), MeshError> {
        let mut plane = Plane::extract(self.volume, dir, layer);
        let (mirror_h, mirror_v) = mirror_flags(dir);
        let merge = self.params.merge_faces;
        let max_occlusion = self.params.max_occlusion;
        for v in 0..plane.height() {
            for u in 0..plane.width() {
                let mut face = FaceGrower::new(&mut plane, max_occlusion);
                if !face.create(Coordinate::planar(u, v)) {
                    continue;
                }
                if merge {
                    face.grow();
                }
                let (start, end) = (face.start(), face.end());
                let texture = paint(face.plane(), start, end, mirror_h, mirror_v);
                face.clear_plane();
                let quad = self.quad(dir, layer, start, end, texture);
                self.push(quad)?;
            }
        }
        Ok(())
    }

    fn quad(
        &self,
        dir: Direction,
        layer: i16,
        start: Coordinate,
        end: Coordinate,
        texture: FaceTexture,
    ) -> Quad {
        let axis = dir.axis();
        let (ua, va) = axis.plane_axes();
        let w = (end.x - start.x) as f32;
        let h = (end.y - start.y) as f32;
        let mut center = [0.0f32; 3];
        center[axis.index()] = layer as f32;
        center[ua.index()] = start.x as f32 + (w - 1.0) * 0.5;
        center[va.index()] = start.y as f32 + (h - 1.0) * 0.5;
        let center = Vec3::new(center[0], center[1], center[2]) + self.center_offset;

        let (hx, hy) = (0.5 * w, 0.5 * h);
        let canonical = [
            Vec3::new(hx, hy, 0.5),
            Vec3::new(-hx, hy, 0.5),
            Vec3::new(-hx, -hy, 0.5),
            Vec3::new(hx, -hy, 0.5),
        ];
        let scale = self.params.scale;
        Quad {
            corners: canonical.map(|c| (center + dir.rotate(c)) * scale),
            direction: dir,
            texture,
        }
    }

    /// Appends a quad, failing once the mesh outgrows the vertex budget.
    pub fn push(&mut self, quad: Quad) -> Result<(), MeshError> {
        let index = self.mesh.add_quad(quad.corners, quad.direction.normal());
        let slot = self.packer.add(quad.texture);
        debug_assert_eq!(index, slot);
        self.per_direction[quad.direction.index()] += 1;
        let vertices = self.mesh.vertex_count();
        if vertices > self.params.vertex_budget {
            log::warn!(
                "vertex budget exceeded: {} vertices > {}",
                vertices,
                self.params.vertex_budget
            );
            return Err(MeshError::VertexBudgetExceeded {
                vertices,
                budget: self.params.vertex_budget,
            });
        }
        Ok(())
    }

    /// Packs the atlas, writes UVs and hands over the finished mesh.
    pub fn finish(self) -> VoxelMesh {
        let MeshAssembler {
            mut mesh, packer, ..
        } = self;
        let (atlas, rects) = packer.pack();
        for (q, rect) in rects.into_iter().enumerate() {
            mesh.set_quad_uv(q, rect);
        }
        VoxelMesh {
            positions: mesh.pos,
            uvs: mesh.uv,
            indices: mesh.idx,
            atlas,
        }
    }
}

/// Unit faces on the volume's bounding box, capped one quad past the budget.
fn quad_estimate(size: Coordinate, vertex_budget: usize) -> usize {
    let [w, h, d] = [size.x, size.y, size.z].map(|e| e.max(0) as usize);
    let surface = 2 * (w * h + h * d + w * d);
    surface.min(vertex_budget / VERTS_PER_QUAD + 1)
}

/// Builds the mesh and atlas for a classified volume. The result is all or nothing:
/// a budget overrun returns the error and no partial mesh.
pub fn build_voxel_mesh(volume: &VoxelVolume, params: &MeshParams) -> Result<VoxelMesh, MeshError> {
    let t_start = Instant::now();
    let mut asm = MeshAssembler::new(volume, params);
    asm.sweep()?;
    let sweep_ms = t_start.elapsed().as_millis();
    let t_pack = Instant::now();
    let mesh = asm.finish();
    let pack_ms = t_pack.elapsed().as_millis();
    log::info!(
        target: "perf",
        "ms sweep={} pack={} mesher_volume dims={}",
        sweep_ms,
        pack_ms,
        volume.size()
    );
    log::info!(
        "built mesh: {} vertices, {} triangles, {} quads, atlas {}x{}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.quad_count(),
        mesh.atlas.width(),
        mesh.atlas.height()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_estimate_follows_surface_and_budget() {
        assert_eq!(quad_estimate(Coordinate::new(1, 1, 1), 65_000), 6);
        assert_eq!(quad_estimate(Coordinate::new(4, 2, 3), 65_000), 52);
        assert_eq!(quad_estimate(Coordinate::new(0, 5, 5), 65_000), 50);
        assert_eq!(quad_estimate(Coordinate::new(400, 400, 400), 65_000), 16_251);
    }

    #[test]
    fn assembler_reserves_up_front() {
        let volume = VoxelVolume::new(Coordinate::new(3, 3, 3)).unwrap();
        let params = MeshParams::default();
        let asm = MeshAssembler::new(&volume, &params);
        assert!(asm.mesh.pos.capacity() >= 54 * VERTS_PER_QUAD);
        assert!(asm.mesh.idx.capacity() >= 54 * 6);
    }
}
