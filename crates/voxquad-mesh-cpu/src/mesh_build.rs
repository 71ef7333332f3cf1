use voxquad_geom::Vec3;

use crate::atlas::UvRect;
use crate::constants::{INDICES_PER_QUAD, VERTS_PER_QUAD};

/// Growing vertex/index buffers for one mesh. UVs are written once the atlas is packed.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<[f32; 3]>,
    pub uv: Vec<[f32; 2]>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Reserves room for `n_quads` more quads in every buffer.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * VERTS_PER_QUAD);
        self.uv.reserve(n_quads * VERTS_PER_QUAD);
        self.idx.reserve(n_quads * INDICES_PER_QUAD);
    }

    /// Appends a quad given top-left, top-right, bottom-right, bottom-left corners,
    /// as two triangles `(0, 1, 2)` and `(0, 2, 3)`. Returns the quad's index.
    ///
    /// Corners must wind so that `(b - a) x (c - a)` points along `n`.
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3) -> usize {
        let [a, b, c, _] = corners;
        debug_assert!(
            (b - a).cross(c - a).dot(n) >= 0.0,
            "quad winds away from its normal"
        );
        let base = self.pos.len() as u32;
        for v in corners {
            self.pos.push(v.to_array());
            self.uv.push([0.0, 0.0]);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        base as usize / VERTS_PER_QUAD
    }

    /// Maps quad `quad`'s corners onto `rect`: top-left corner to the rect's top-left.
    pub fn set_quad_uv(&mut self, quad: usize, rect: UvRect) {
        let i = quad * VERTS_PER_QUAD;
        if i + VERTS_PER_QUAD > self.uv.len() {
            return;
        }
        self.uv[i] = [rect.u0, rect.v0];
        self.uv[i + 1] = [rect.u1, rect.v0];
        self.uv[i + 2] = [rect.u1, rect.v1];
        self.uv[i + 3] = [rect.u0, rect.v1];
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.pos.len() / VERTS_PER_QUAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> [Vec3; 4] {
        [
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
        ]
    }

    #[test]
    fn quads_index_their_own_vertices() {
        let mut mb = MeshBuild::default();
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(mb.add_quad(unit_quad(), n), 0);
        assert_eq!(mb.add_quad(unit_quad(), n), 1);
        assert_eq!(mb.idx[6..], [4, 5, 6, 4, 6, 7]);
        assert_eq!(mb.vertex_count(), 8);
        assert_eq!(mb.triangle_count(), 4);
    }

    #[test]
    fn uv_rect_follows_corner_order() {
        let mut mb = MeshBuild::default();
        mb.add_quad(unit_quad(), Vec3::new(0.0, 0.0, 1.0));
        mb.set_quad_uv(
            0,
            UvRect {
                u0: 0.25,
                v0: 0.5,
                u1: 0.75,
                v1: 1.0,
            },
        );
        assert_eq!(mb.uv, vec![[0.25, 0.5], [0.75, 0.5], [0.75, 1.0], [0.25, 1.0]]);
    }

    #[test]
    fn reserve_covers_whole_quads() {
        let mut mb = MeshBuild::default();
        mb.reserve_quads(10);
        assert!(mb.pos.capacity() >= 40);
        assert!(mb.uv.capacity() >= 40);
        assert!(mb.idx.capacity() >= 60);
        assert_eq!(mb.quad_count(), 0);
    }
}
