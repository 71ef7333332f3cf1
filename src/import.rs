use std::path::Path;
use std::time::Instant;

use image::RgbaImage;
use thiserror::Error;
use voxquad_mesh_cpu::{MeshError, VoxelMesh, build_voxel_mesh};
use voxquad_volume::{DecodedVolume, Palette, PaletteError, VolumeError, classify};

use crate::settings::ImportSettings;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("invalid import settings: {0}")]
    InvalidSettings(String),

    #[error(transparent)]
    Volume(#[from] VolumeError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("failed to read palette image: {0}")]
    Image(#[from] image::ImageError),
}

/// A finished import: the mesh plus one colorized atlas per palette, the model's
/// own palette first.
#[derive(Debug)]
pub struct ImportedModel {
    pub name: String,
    pub mesh: VoxelMesh,
    pub textures: Vec<RgbaImage>,
}

/// What an import run reports back, whether or not it produced a model.
#[derive(Debug)]
pub struct ImportOutcome {
    pub success: bool,
    pub message: String,
    pub model: Option<ImportedModel>,
}

/// Turns decoded volumes into meshes with a fixed set of settings and substitute palettes.
#[derive(Clone, Debug)]
pub struct Importer {
    settings: ImportSettings,
    substitutes: Vec<Palette>,
}

impl Importer {
    /// Validates `settings` and loads every substitute palette image they list.
    pub fn new(settings: ImportSettings) -> Result<Self, ImportError> {
        let substitutes = settings
            .palettes
            .iter()
            .map(|p| load_palette(p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_palettes(settings, substitutes)
    }

    /// Like [`Importer::new`] but with substitute palettes already in memory;
    /// `settings.palettes` is ignored.
    pub fn with_palettes(
        settings: ImportSettings,
        substitutes: Vec<Palette>,
    ) -> Result<Self, ImportError> {
        settings.validate()?;
        Ok(Self {
            settings,
            substitutes,
        })
    }

    /// Populates, classifies and meshes `decoded`, then colorizes the atlas once per
    /// palette. Any failure aborts the whole import.
    pub fn import(&self, name: &str, decoded: &DecodedVolume) -> Result<ImportedModel, ImportError> {
        let t_start = Instant::now();
        let mut volume = decoded.to_volume()?;
        classify(&mut volume, self.settings.fill_voids);
        let mesh = build_voxel_mesh(&volume, &self.settings.mesh_params())?;
        let textures: Vec<RgbaImage> = std::iter::once(&decoded.palette)
            .chain(&self.substitutes)
            .map(|p| mesh.atlas.colorize(p))
            .collect();
        log::info!(
            target: "perf",
            "ms={} import name={} voxels={} palettes={}",
            t_start.elapsed().as_millis(),
            name,
            decoded.voxels.len(),
            textures.len()
        );
        Ok(ImportedModel {
            name: name.to_string(),
            mesh,
            textures,
        })
    }

    /// Runs [`Importer::import`] and folds the result into a success flag and a
    /// human-readable message.
    pub fn run(&self, name: &str, decoded: &DecodedVolume) -> ImportOutcome {
        match self.import(name, decoded) {
            Ok(model) => {
                let message = format!(
                    "voxquad model {}: {} vertices, {} triangles.",
                    name,
                    model.mesh.vertex_count(),
                    model.mesh.triangle_count()
                );
                log::info!("{}", message);
                ImportOutcome {
                    success: true,
                    message,
                    model: Some(model),
                }
            }
            Err(e) => {
                log::warn!("import of {} failed: {}", name, e);
                ImportOutcome {
                    success: false,
                    message: e.to_string(),
                    model: None,
                }
            }
        }
    }
}

/// Reads a 256x1 palette strip from disk.
pub fn load_palette(path: &Path) -> Result<Palette, ImportError> {
    let img = image::open(path)?.to_rgba8();
    Ok(Palette::from_rgba_image(&img)?)
}
