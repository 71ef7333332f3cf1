use image::RgbaImage;

use crate::error::PaletteError;

pub const PALETTE_SIZE: usize = 256;

/// Fixed 256-entry RGBA color table indexed by voxel color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 4]; PALETTE_SIZE],
}

const RAMP: [u8; 10] = [238, 221, 187, 170, 136, 119, 85, 68, 34, 17];
const CUBE_LEVELS: [u8; 6] = [255, 204, 153, 102, 51, 0];

impl Palette {
    #[inline]
    pub fn new(colors: [[u8; 4]; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// The palette assumed for volumes that ship without one: a 6x6x6 color cube
    /// (red outermost, black dropped), red, green, blue and gray ramps, then black.
    pub fn magica_default() -> Self {
        let mut colors = [[0, 0, 0, 255]; PALETTE_SIZE];
        let mut i = 0;
        for r in CUBE_LEVELS {
            for g in CUBE_LEVELS {
                for b in CUBE_LEVELS {
                    if (r, g, b) != (0, 0, 0) {
                        colors[i] = [r, g, b, 255];
                        i += 1;
                    }
                }
            }
        }
        for c in RAMP {
            colors[i] = [c, 0, 0, 255];
            colors[i + 10] = [0, c, 0, 255];
            colors[i + 20] = [0, 0, c, 255];
            colors[i + 30] = [c, c, c, 255];
            i += 1;
        }
        // Index 255 stays black.
        Self { colors }
    }

    /// Index `i` maps to gray level `i`; handy for inspecting raw atlases.
    pub fn grayscale() -> Self {
        let mut colors = [[0; 4]; PALETTE_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let g = i as u8;
            *c = [g, g, g, 255];
        }
        Self { colors }
    }

    /// Reads a substitute palette from a 256x1 strip. Color index `n` sits in
    /// column `n - 1`, so index 0 and 1 both read the first column.
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self, PaletteError> {
        if img.width() != PALETTE_SIZE as u32 || img.height() != 1 {
            return Err(PaletteError::InvalidDimensions {
                width: img.width(),
                height: img.height(),
            });
        }
        let mut colors = [[0; 4]; PALETTE_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let col = i.saturating_sub(1) as u32;
            *c = img.get_pixel(col, 0).0;
        }
        Ok(Self { colors })
    }

    #[inline]
    pub fn color(&self, index: u8) -> [u8; 4] {
        self.colors[index as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::magica_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn magica_default_layout() {
        let p = Palette::magica_default();
        assert_eq!(p.color(0), [255, 255, 255, 255]);
        assert_eq!(p.color(5), [255, 255, 0, 255]);
        assert_eq!(p.color(214), [0, 0, 51, 255]);
        assert_eq!(p.color(215), [238, 0, 0, 255]);
        assert_eq!(p.color(225), [0, 238, 0, 255]);
        assert_eq!(p.color(235), [0, 0, 238, 255]);
        assert_eq!(p.color(254), [17, 17, 17, 255]);
        assert_eq!(p.color(255), [0, 0, 0, 255]);
    }

    #[test]
    fn grayscale_is_identity_ramp() {
        let p = Palette::grayscale();
        assert_eq!(p.color(0), [0, 0, 0, 255]);
        assert_eq!(p.color(128), [128, 128, 128, 255]);
    }

    #[test]
    fn image_palette_is_shifted_by_one() {
        let img = RgbaImage::from_fn(256, 1, |x, _| Rgba([x as u8, 0, 0, 255]));
        let p = Palette::from_rgba_image(&img).unwrap();
        assert_eq!(p.color(0)[0], 0);
        assert_eq!(p.color(1)[0], 0);
        assert_eq!(p.color(2)[0], 1);
        assert_eq!(p.color(255)[0], 254);
    }

    #[test]
    fn wrong_image_size_rejected() {
        let img = RgbaImage::new(16, 16);
        assert_eq!(
            Palette::from_rgba_image(&img),
            Err(PaletteError::InvalidDimensions {
                width: 16,
                height: 16
            })
        );
    }
}
