//! Voxel volume to greedy-meshed, atlas-textured model importer.
#![forbid(unsafe_code)]

pub mod export;
pub mod import;
pub mod settings;
pub mod shapes;

pub use import::{ImportError, ImportOutcome, ImportedModel, Importer};
pub use settings::{ImportSettings, load_settings_from_path};
