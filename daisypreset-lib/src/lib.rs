pub mod buckets;
pub mod config;
pub mod error;
pub mod generator;
pub mod preflight;
pub mod preset;
pub mod selector;
pub mod sources;
pub mod style;
pub mod theming;

pub use config::PresetOptions;
pub use error::{PresetError, Result};
pub use preset::{build_preset, build_preset_with, PresetArtifact};
pub use sources::SourceStylesheets;
