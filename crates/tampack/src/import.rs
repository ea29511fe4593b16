//! Post-write hand-off to the asset host.
//!
//! A game-engine editor normally reimports freshly written textures and
//! applies import settings to them. The packer has no knowledge of any
//! particular host; it only calls an [`ImportHost`] once both hatch maps are
//! on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TamError};

/// How the host should interpret the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureType {
    #[default]
    Default,
    NormalMap,
    Sprite,
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Point,
    #[default]
    Bilinear,
    Trilinear,
}

/// Texture addressing mode outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    #[default]
    Repeat,
    Clamp,
    Mirror,
}

/// Import metadata requested for each written hatch map.
///
/// Defaults suit hatching textures: sRGB color, mipmapped, bilinear,
/// repeating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportSettings {
    pub texture_type: TextureType,
    pub srgb: bool,
    pub mipmaps: bool,
    pub filter_mode: FilterMode,
    pub wrap_mode: WrapMode,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            texture_type: TextureType::Default,
            srgb: true,
            mipmaps: true,
            filter_mode: FilterMode::Bilinear,
            wrap_mode: WrapMode::Repeat,
        }
    }
}

/// Capabilities the packer needs from the environment that consumes its output.
pub trait ImportHost {
    /// Refresh the host's asset index after new files appeared in `output_dir`.
    fn refresh(&self, output_dir: &Path) -> Result<()>;

    /// Apply import settings to the file at `path`.
    fn configure(&self, path: &Path, settings: &ImportSettings) -> Result<()>;
}

/// Host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImportHost;

impl ImportHost for NoopImportHost {
    fn refresh(&self, _output_dir: &Path) -> Result<()> {
        Ok(())
    }

    fn configure(&self, _path: &Path, _settings: &ImportSettings) -> Result<()> {
        Ok(())
    }
}

/// Host that records import settings in a JSON file next to each texture.
///
/// `Hatch0.png` gets `Hatch0.png.import.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarImportHost;

impl SidecarImportHost {
    /// Sidecar path for a texture path.
    pub fn sidecar_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".import.json");
        path.with_file_name(name)
    }
}

impl ImportHost for SidecarImportHost {
    fn refresh(&self, _output_dir: &Path) -> Result<()> {
        Ok(())
    }

    fn configure(&self, path: &Path, settings: &ImportSettings) -> Result<()> {
        let sidecar = Self::sidecar_path(path);
        let mut json = serde_json::to_string_pretty(settings).map_err(|e| TamError::Import {
            path: sidecar.clone(),
            message: e.to_string(),
        })?;
        json.push('\n');

        std::fs::write(&sidecar, json).map_err(|e| TamError::Import {
            path: sidecar.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %sidecar.display(), "wrote import sidecar");
        Ok(())
    }
}
