use hashbrown::HashMap;
use image::{Rgba, RgbaImage};
use voxquad_volume::Palette;

use crate::constants::{ATLAS_PADDING, BLEED_OFFSETS, OPAQUE_ALPHA};
use crate::paint::FaceTexture;

/// Texture-space rectangle, origin at the atlas' top-left corner, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

/// Packed palette-index atlas shared by every quad of one mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureAtlas {
    width: u32,
    height: u32,
    texels: Vec<Option<u8>>,
}

impl TextureAtlas {
    fn new(width: u32, height: u32) -> Self {
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

    fn blit(&mut self, tex: &FaceTexture, x0: u32, y0: u32) {
        for y in 0..tex.height() {
            for x in 0..tex.width() {
                let i = ((y0 + y) * self.width + x0 + x) as usize;
                self.texels[i] = tex.get(x, y);
            }
        }
    }

    /// Fills each transparent texel with the first opaque neighbor found in
    /// [`BLEED_OFFSETS`] order, reading from the pre-bleed state so fills never chain.
    pub fn bleed(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        if w == 0 || h == 0 {
            return;
        }
        let snapshot = self.texels.clone();
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) as usize;
                if snapshot[i].is_some() {
                    continue;
                }
                for (dx, dy) in BLEED_OFFSETS {
                    let nx = (x + dx).clamp(0, w - 1);
                    let ny = (y + dy).clamp(0, h - 1);
                    if let Some(c) = snapshot[(ny * w + nx) as usize] {
                        self.texels[i] = Some(c);
                        break;
                    }
                }
            }
        }
    }

    /// Resolves palette indices to RGBA; transparent texels come out as clear black.
    pub fn colorize(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| match self.get(x, y) {
            Some(i) => {
                let [r, g, b, _] = palette.color(i);
                Rgba([r, g, b, OPAQUE_ALPHA])
            }
            None => Rgba([0, 0, 0, 0]),
        })
    }
}

/// Collects per-quad textures for one build, sharing a slot between identical ones.
#[derive(Default)]
pub struct AtlasPacker {
    unique: Vec<FaceTexture>,
    lookup: HashMap<FaceTexture, usize>,
    slots: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Placement {
    x: u32,
    y: u32,
}

impl AtlasPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the texture of the next quad and returns that quad's index.
    pub fn add(&mut self, tex: FaceTexture) -> usize {
        let slot = match self.lookup.get(&tex) {
            Some(&slot) => slot,
            None => {
                let slot = self.unique.len();
                self.unique.push(tex.clone());
                self.lookup.insert(tex, slot);
                slot
            }
        };
        self.slots.push(slot);
        self.slots.len() - 1
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }

    /// Packs, bleeds and returns the atlas plus one UV rectangle per added quad.
    pub fn pack(self) -> (TextureAtlas, Vec<UvRect>) {
        if self.unique.is_empty() {
            return (TextureAtlas::new(1, 1), Vec::new());
        }
        let (width, height, placements) = best_layout(&self.unique);
        let mut atlas = TextureAtlas::new(width, height);
        let rects: Vec<UvRect> = self
            .unique
            .iter()
            .zip(&placements)
            .map(|(tex, p)| {
                atlas.blit(tex, p.x, p.y);
                UvRect {
                    u0: p.x as f32 / width as f32,
                    v0: p.y as f32 / height as f32,
                    u1: (p.x + tex.width()) as f32 / width as f32,
                    v1: (p.y + tex.height()) as f32 / height as f32,
                }
            })
            .collect();
        atlas.bleed();
        log::debug!(
            "packed {} textures ({} unique) into {}x{} atlas",
            self.slots.len(),
            self.unique.len(),
            width,
            height
        );
        let uvs = self.slots.iter().map(|&s| rects[s]).collect();
        (atlas, uvs)
    }
}

// Tries every power-of-two width from the widest texture up to a single shelf and
// keeps the layout with the smallest area.
fn best_layout(textures: &[FaceTexture]) -> (u32, u32, Vec<Placement>) {
    let widest = textures.iter().map(|t| t.width()).max().unwrap_or(0);
    let single_row: u32 = textures.iter().map(|t| t.width() + ATLAS_PADDING).sum();
    let mut order: Vec<usize> = (0..textures.len()).collect();
    order.sort_by(|&a, &b| textures[b].height().cmp(&textures[a].height()));

    let mut width = (widest + 2 * ATLAS_PADDING).next_power_of_two();
    let limit = (single_row + ATLAS_PADDING).next_power_of_two();
    let mut best: Option<(u32, u32, Vec<Placement>)> = None;
    loop {
        let (height, placements) = shelf_pack(textures, &order, width);
        let area = width as u64 * height as u64;
        let better = best
            .as_ref()
            .is_none_or(|(w, h, _)| area < *w as u64 * *h as u64);
        if better {
            best = Some((width, height, placements));
        }
        if width >= limit {
            break;
        }
        width *= 2;
    }
    best.unwrap_or((1, 1, Vec::new()))
}

// Left-to-right shelves, tallest textures first. Returns the used height.
fn shelf_pack(textures: &[FaceTexture], order: &[usize], width: u32) -> (u32, Vec<Placement>) {
    let mut placements = vec![Placement { x: 0, y: 0 }; textures.len()];
    let mut x = ATLAS_PADDING;
    let mut y = ATLAS_PADDING;
    let mut shelf = 0;
    for &i in order {
        let tex = &textures[i];
        if x + tex.width() + ATLAS_PADDING > width && x > ATLAS_PADDING {
            y += shelf + ATLAS_PADDING;
            x = ATLAS_PADDING;
            shelf = 0;
        }
        placements[i] = Placement { x, y };
        x += tex.width() + ATLAS_PADDING;
        shelf = shelf.max(tex.height());
    }
    (y + shelf + ATLAS_PADDING, placements)
}
