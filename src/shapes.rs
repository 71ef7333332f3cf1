//! Procedural demo volumes, colored in horizontal bands.

use voxquad_geom::Coordinate;
use voxquad_volume::{DecodedVolume, Palette};

// Indices into the default palette, bottom band first.
const BANDS: [u8; 6] = [248, 228, 35, 216, 219, 0];

/// Palette index of the band containing layer `y` of a volume `height` tall.
pub fn band_color(y: i16, height: u16) -> u8 {
    let h = height.max(1) as usize;
    let y = (y.max(0) as usize).min(h - 1);
    BANDS[y * BANDS.len() / h]
}

// Extents past i16::MAX are clamped; coordinates are i16.
fn decoded(size: [u16; 3], keep: impl Fn(Coordinate) -> bool) -> DecodedVolume {
    let size = size.map(|e| e.min(i16::MAX as u16));
    let mut d = DecodedVolume::new(size, Palette::magica_default());
    let end = Coordinate::new(size[0] as i16, size[1] as i16, size[2] as i16);
    for c in Coordinate::solid(Coordinate::ZERO, end) {
        if keep(c) {
            d.insert(c, band_color(c.y, size[1]));
        }
    }
    d
}

// Squared distance from the cell center to the volume center, in half-cell units.
fn dist2_doubled(c: Coordinate, diameter: i16) -> i32 {
    let q = |v: i16| (2 * v as i32 + 1 - diameter as i32).pow(2);
    q(c.x) + q(c.y) + q(c.z)
}

pub fn solid_box(size: [u16; 3]) -> DecodedVolume {
    decoded(size, |_| true)
}

/// A ball of the given diameter.
pub fn sphere(diameter: u16) -> DecodedVolume {
    let d = diameter.min(i16::MAX as u16) as i16;
    let r2 = (d as i32).pow(2);
    decoded([d as u16; 3], |c| dist2_doubled(c, d) <= r2)
}

/// A ball with a sealed spherical cavity; `shell` is the wall thickness in voxels.
pub fn hollow_sphere(diameter: u16, shell: u16) -> DecodedVolume {
    let d = diameter.min(i16::MAX as u16) as i16;
    let outer = (d as i32).pow(2);
    let inner = (d as i32 - 2 * shell as i32).max(0).pow(2);
    decoded([d as u16; 3], |c| {
        let r = dist2_doubled(c, d);
        r <= outer && r > inner
    })
}

/// Alternating solid and empty cells; no two solids share a face.
pub fn checkerboard(size: [u16; 3]) -> DecodedVolume {
    decoded(size, |c| (c.x as i32 + c.y as i32 + c.z as i32) % 2 == 0)
}
