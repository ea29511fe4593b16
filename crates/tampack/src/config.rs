//! Run configuration.
//!
//! A `TamConfig` is usually read from a JSON file and then selectively
//! overridden from the command line.
//!
//! ```json
//! {
//!   "inputs": ["tone0.png", "tone1.png", "tone2.png", "tone3.png", "tone4.png", "tone5.png"],
//!   "output": { "dir": "Assets/TAMTextures", "names": ["Hatch0", "Hatch1"] },
//!   "component": "r",
//!   "png": "best",
//!   "import": { "mipmaps": false },
//!   "sidecar": true
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TamError};
use crate::import::ImportSettings;
use crate::packing::ColorComponent;
use crate::png::PngConfig;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Assets/TAMTextures";

/// Default base names of the two packed textures.
pub const DEFAULT_MAP_NAMES: [&str; 2] = ["Hatch0", "Hatch1"];

/// Where and under which names the hatch maps are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination directory, created if absent.
    pub dir: PathBuf,
    /// File base names (without extension) for `Hatch0` and `Hatch1`.
    pub names: [String; 2],
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            names: DEFAULT_MAP_NAMES.map(String::from),
        }
    }
}

impl OutputConfig {
    /// Check that both names are usable as plain file names.
    pub fn validate(&self) -> Result<()> {
        for name in &self.names {
            if name.is_empty() || name == "." || name == ".." {
                return Err(TamError::Config(format!("invalid output name '{}'", name)));
            }
            if name.contains(['/', '\\']) {
                return Err(TamError::Config(format!(
                    "output name '{}' must not contain path separators",
                    name
                )));
            }
        }
        // Case-insensitive filesystems would map both names to one file.
        if self.names[0].eq_ignore_ascii_case(&self.names[1]) {
            return Err(TamError::Config(format!(
                "output names must differ (both are '{}')",
                self.names[0]
            )));
        }
        Ok(())
    }

    /// Full path of output `index` (0 or 1).
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.png", self.names[index]))
    }
}

/// PNG encoder preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngPreset {
    #[default]
    Default,
    Fast,
    Best,
}

impl PngPreset {
    /// Encoder settings for this preset.
    pub fn config(self) -> PngConfig {
        match self {
            PngPreset::Default => PngConfig::default(),
            PngPreset::Fast => PngConfig::fast(),
            PngPreset::Best => PngConfig::best_compression(),
        }
    }
}

impl std::str::FromStr for PngPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "default" => Ok(PngPreset::Default),
            "fast" => Ok(PngPreset::Fast),
            "best" => Ok(PngPreset::Best),
            other => Err(format!("unknown PNG preset '{}'", other)),
        }
    }
}

/// Complete configuration of one packing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TamConfig {
    /// Tone texture paths, brightest first. Six are required to run.
    pub inputs: Vec<PathBuf>,
    pub output: OutputConfig,
    /// Source channel copied from every tone texture.
    pub component: ColorComponent,
    pub png: PngPreset,
    /// Settings handed to the import host.
    pub import: ImportSettings,
    /// Record import settings as JSON sidecars next to the outputs.
    pub sidecar: bool,
}

impl TamConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    ///
    /// Relative input paths and a relative output directory are resolved
    /// against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json_str(&text)?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Rebase relative paths onto `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for input in &mut self.inputs {
            if input.is_relative() && !input.as_os_str().is_empty() {
                *input = base.join(&*input);
            }
        }
        if self.output.dir.is_relative() {
            self.output.dir = base.join(&self.output.dir);
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::WrapMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = TamConfig::default();
        assert!(config.inputs.is_empty());
        assert_eq!(config.output.dir, PathBuf::from("Assets/TAMTextures"));
        assert_eq!(config.output.names, ["Hatch0".to_string(), "Hatch1".to_string()]);
        assert_eq!(config.component, ColorComponent::R);
        assert_eq!(config.png, PngPreset::Default);
        assert!(!config.sidecar);
    }

    #[test]
    fn test_parse_full() {
        let config = TamConfig::from_json_str(
            r#"{
                "inputs": ["a.png", "b.png", "c.png", "d.png", "e.png", "f.png"],
                "output": { "dir": "out", "names": ["TamA", "TamB"] },
                "component": "g",
                "png": "best",
                "import": { "wrap_mode": "mirror" },
                "sidecar": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.inputs.len(), 6);
        assert_eq!(config.output.path_for(1), PathBuf::from("out/TamB.png"));
        assert_eq!(config.component, ColorComponent::G);
        assert_eq!(config.png, PngPreset::Best);
        assert_eq!(config.import.wrap_mode, WrapMode::Mirror);
        assert!(config.import.srgb);
        assert!(config.sidecar);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TamConfig::from_json_str(r#"{ "outputPath": "x" }"#).unwrap_err();
        assert!(matches!(err, TamError::ConfigParse(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = TamConfig::default();
        config.inputs = vec!["t0.png".into(); 6];
        config.png = PngPreset::Fast;

        let parsed = TamConfig::from_json_str(&config.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_output_name_validation() {
        let mut output = OutputConfig::default();
        assert!(output.validate().is_ok());

        output.names = ["Hatch".into(), "Hatch".into()];
        assert!(output.validate().unwrap_err().to_string().contains("must differ"));

        output.names = ["Hatch0".into(), "hatch0".into()];
        assert!(output.validate().unwrap_err().to_string().contains("must differ"));

        output.names = ["sub/Hatch0".into(), "Hatch1".into()];
        assert!(output.validate().is_err());

        output.names = ["".into(), "Hatch1".into()];
        assert!(output.validate().is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tam.json");
        std::fs::write(
            &path,
            r#"{ "inputs": ["tones/0.png", "/abs/1.png"], "output": { "dir": "maps" } }"#,
        )
        .unwrap();

        let config = TamConfig::load(&path).unwrap();
        assert_eq!(config.inputs[0], dir.path().join("tones/0.png"));
        assert_eq!(config.inputs[1], PathBuf::from("/abs/1.png"));
        assert_eq!(config.output.dir, dir.path().join("maps"));
    }

    #[test]
    fn test_png_preset_from_str() {
        assert_eq!("best".parse::<PngPreset>().unwrap(), PngPreset::Best);
        assert!("max".parse::<PngPreset>().is_err());
    }
}
