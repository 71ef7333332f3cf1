use voxquad_geom::{Coordinate, Direction};
use voxquad_volume::VoxelKind;

use crate::slab::Plane;

/// Per-quad texture of palette indices, row-major with row 0 at the quad's top edge.
/// `None` marks a transparent texel (an occluded cell under the quad).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceTexture {
    width: u32,
    height: u32,
    texels: Vec<Option<u8>>,
}

impl FaceTexture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![None; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, texel: Option<u8>) {
        if x < self.width && y < self.height {
            self.texels[(y * self.width + x) as usize] = texel;
        }
    }
}

/// Paints the rectangle `[start, end)` of `plane`.
///
/// Column 0 is the low-u edge unless `mirror_h` is set, row 0 the low-v edge unless
/// `mirror_v` is set.
pub fn paint(
    plane: &Plane,
    start: Coordinate,
    end: Coordinate,
    mirror_h: bool,
    mirror_v: bool,
) -> FaceTexture {
    let w = (end.x - start.x).max(0) as u32;
    let h = (end.y - start.y).max(0) as u32;
    let mut tex = FaceTexture::new(w, h);
    for row in 0..h as i16 {
        let v = if mirror_v { end.y - 1 - row } else { start.y + row };
        for col in 0..w as i16 {
            let u = if mirror_h { end.x - 1 - col } else { start.x + col };
            let cell = plane.get(u, v);
            let texel = match cell.kind {
                VoxelKind::Visible => Some(cell.color),
                _ => None,
            };
            tex.set(col as u32, row as u32, texel);
        }
    }
    tex
}

/// Mirror flags that put texel (0, 0) on the quad's top-left corner for `dir`.
///
/// The quad's canonical `+x` edge is its left side and `+y` its top; when either
/// lands on the positive plane axis the matching texture axis runs backwards.
pub fn mirror_flags(dir: Direction) -> (bool, bool) {
    let (ua, va) = dir.axis().plane_axes();
    let [bx, by, _] = dir.basis();
    (ua.of_vec(bx) > 0.0, va.of_vec(by) > 0.0)
}
