//! Tonal Art Map packer
//!
//! Packs six single-tone hatching textures (ordered brightest to darkest) into
//! two RGB textures, `Hatch0` and `Hatch1`, so a shader can sample six tone
//! levels from two texture fetches.
//!
//! # Pipeline
//!
//! - **Load**: decode each input with the `image` crate into an RGBA8 buffer
//! - **Validate**: all six inputs present and of identical dimensions
//! - **Pack**: copy one channel (red by default) of tones 0-2 into `Hatch0`
//!   and of tones 3-5 into `Hatch1`
//! - **Write**: deterministic PNG encoding, directories created on demand
//! - **Import**: hand the written files to an [`ImportHost`] strategy
//!
//! # Example
//!
//! ```no_run
//! use tampack::{TamConfig, TamGenerator};
//!
//! let mut config = TamConfig::default();
//! config.inputs = (0..6).map(|i| format!("tones/tone{i}.png").into()).collect();
//! config.output.dir = "out/tam".into();
//!
//! let report = TamGenerator::new(config).run().unwrap();
//! for map in &report.outputs {
//!     println!("{} -> {}", map.name, map.path.display());
//! }
//! ```
//!
//! # Determinism
//!
//! Packing is a pure channel copy and PNG encoding uses fixed settings, so the
//! same inputs always produce byte-identical files.

pub mod config;
pub mod error;
pub mod generator;
pub mod import;
pub mod output;
pub mod packing;
pub mod png;
pub mod texture;
pub mod validate;

// Re-export main types for convenience
pub use config::{OutputConfig, PngPreset, TamConfig};
pub use error::{TamError, ValidationError};
pub use generator::{GenerateReport, TamGenerator};
pub use import::{ImportHost, ImportSettings, NoopImportHost, SidecarImportHost};
pub use output::{write_hatch_maps, WrittenMap};
pub use packing::{pack_channels, pack_hatch_maps, ColorComponent, HatchMaps};
pub use png::{PngConfig, PngError};
pub use texture::{load_texture, RgbBuffer, TamInputs, TextureBuffer};
pub use validate::validate_inputs;

/// Number of tone textures a Tonal Art Map is built from.
pub const TONE_COUNT: usize = 6;

/// Number of tones packed into each output texture.
pub const TONES_PER_MAP: usize = 3;
