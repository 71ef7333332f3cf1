use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use voxquad_geom::Vec3;
use voxquad_mesh_cpu::{DEFAULT_VERTEX_BUDGET, MeshParams};

use crate::import::ImportError;

/// Import tunables, usually read from a `voxquad.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImportSettings {
    /// World units per voxel.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
    /// Pivot as a fraction of the model size per axis; 0.5 centers the model.
    #[serde(default = "default_center")]
    pub center: [f32; 3],
    /// Share of a merged face allowed to cover hidden voxels, 0 to 100.
    #[serde(default = "default_max_occlusion_percent")]
    pub max_occlusion_percent: u8,
    /// Seal cavities that cannot be reached from outside.
    #[serde(default)]
    pub fill_voids: bool,
    #[serde(default = "default_merge_faces")]
    pub merge_faces: bool,
    #[serde(default = "default_vertex_budget")]
    pub vertex_budget: usize,
    /// Substitute palette strips (256x1 PNG); each yields one extra colorized atlas.
    #[serde(default)]
    pub palettes: Vec<PathBuf>,
}

fn default_scale_factor() -> f32 {
    0.125
}
fn default_center() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}
fn default_max_occlusion_percent() -> u8 {
    40
}
fn default_merge_faces() -> bool {
    true
}
fn default_vertex_budget() -> usize {
    DEFAULT_VERTEX_BUDGET
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            center: default_center(),
            max_occlusion_percent: default_max_occlusion_percent(),
            fill_voids: false,
            merge_faces: default_merge_faces(),
            vertex_budget: default_vertex_budget(),
            palettes: Vec::new(),
        }
    }
}

impl ImportSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(ImportError::InvalidSettings(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if self.max_occlusion_percent > 100 {
            return Err(ImportError::InvalidSettings(format!(
                "max_occlusion_percent must be within 0..=100, got {}",
                self.max_occlusion_percent
            )));
        }
        if self.vertex_budget == 0 {
            return Err(ImportError::InvalidSettings(
                "vertex_budget must be at least 1".to_string(),
            ));
        }
        if self.center.iter().any(|c| !c.is_finite()) {
            return Err(ImportError::InvalidSettings(format!(
                "center must be finite, got {:?}",
                self.center
            )));
        }
        Ok(())
    }

    pub fn mesh_params(&self) -> MeshParams {
        MeshParams {
            scale: self.scale_factor,
            center: Vec3::new(self.center[0], self.center[1], self.center[2]),
            max_occlusion: f32::from(self.max_occlusion_percent) / 100.0,
            merge_faces: self.merge_faces,
            vertex_budget: self.vertex_budget,
        }
    }
}

pub fn load_settings_from_path(path: &Path) -> Result<ImportSettings, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let settings = ImportSettings::from_toml_str(&s)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = ImportSettings::from_toml_str("").unwrap();
        assert_eq!(s, ImportSettings::default());
        assert_eq!(s.scale_factor, 0.125);
        assert_eq!(s.vertex_budget, 65_000);
    }

    #[test]
    fn percent_becomes_fraction() {
        let s = ImportSettings {
            max_occlusion_percent: 25,
            ..ImportSettings::default()
        };
        assert_eq!(s.mesh_params().max_occlusion, 0.25);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            ImportSettings {
                scale_factor: 0.0,
                ..ImportSettings::default()
            },
            ImportSettings {
                max_occlusion_percent: 150,
                ..ImportSettings::default()
            },
            ImportSettings {
                vertex_budget: 0,
                ..ImportSettings::default()
            },
            ImportSettings {
                center: [0.5, f32::NAN, 0.5],
                ..ImportSettings::default()
            },
        ];
        for s in bad {
            assert!(matches!(s.validate(), Err(ImportError::InvalidSettings(_))));
        }
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let toml = r#"
            scale_factor = 1.0
            center = [0.0, 0.0, 0.0]
            max_occlusion_percent = 0
            fill_voids = true
            palettes = ["a.png", "b.png"]
        "#;
        let s = ImportSettings::from_toml_str(toml).unwrap();
        assert_eq!(s.scale_factor, 1.0);
        assert_eq!(s.center, [0.0, 0.0, 0.0]);
        assert!(s.fill_voids);
        assert!(s.merge_faces);
        assert_eq!(s.vertex_budget, 65_000);
        assert_eq!(s.palettes.len(), 2);
        assert_eq!(s.mesh_params().max_occlusion, 0.0);
    }

    #[test]
    fn fractional_percent_is_a_parse_error() {
        assert!(ImportSettings::from_toml_str("max_occlusion_percent = 12.5").is_err());
        assert!(ImportSettings::from_toml_str("max_occlusion_percent = -1").is_err());
    }

    #[test]
    fn load_settings_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("voxquad-{}-bad.toml", std::process::id()));
        fs::write(&path, "max_occlusion_percent = 140\n").unwrap();
        let err = load_settings_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("max_occlusion_percent"));
        let _ = fs::remove_file(path);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Validation accepts exactly the percent range 0..=100
            #[test]
            fn occlusion_percent_range(p in any::<u8>()) {
                let s = ImportSettings { max_occlusion_percent: p, ..ImportSettings::default() };
                prop_assert_eq!(s.validate().is_ok(), p <= 100);
                let frac = s.mesh_params().max_occlusion;
                prop_assert!(frac >= 0.0);
                if p <= 100 {
                    prop_assert!(frac <= 1.0);
                }
            }

            // Any positive finite scale passes and reaches the mesher unchanged
            #[test]
            fn positive_scale_passes_through(scale in 1e-4f32..1e4) {
                let s = ImportSettings { scale_factor: scale, ..ImportSettings::default() };
                prop_assert!(s.validate().is_ok());
                prop_assert_eq!(s.mesh_params().scale, scale);
            }
        }
    }
}
