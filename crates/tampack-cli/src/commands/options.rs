//! Options shared by `generate` and `check`, and their overlay onto a config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tampack::{ColorComponent, PngPreset, TamConfig};
use tracing::debug;

/// Input and output selection for a packing run.
#[derive(Debug, Clone, Default, Args)]
pub struct PackOptions {
    /// Six tone textures, brightest to darkest (overrides the config file)
    #[arg(value_name = "TONE")]
    pub inputs: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory (default: Assets/TAMTextures)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output base names, comma separated (default: Hatch0,Hatch1)
    #[arg(long, value_delimiter = ',', value_name = "NAME,NAME")]
    pub names: Vec<String>,

    /// Source channel to copy from each tone texture (r, g, b, a)
    #[arg(long, value_name = "CHANNEL")]
    pub component: Option<ColorComponent>,

    /// PNG encoder preset (default, fast, best)
    #[arg(long, value_name = "PRESET")]
    pub png: Option<PngPreset>,

    /// Write <file>.import.json sidecars with the import settings
    #[arg(long)]
    pub sidecar: bool,
}

impl PackOptions {
    /// Load the config file (if any) and apply command-line overrides.
    pub fn to_config(&self) -> Result<TamConfig> {
        let mut config = match &self.config {
            Some(path) => TamConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => TamConfig::default(),
        };

        if !self.inputs.is_empty() {
            config.inputs = self.inputs.clone();
        }
        if let Some(dir) = &self.out_dir {
            config.output.dir = dir.clone();
        }
        if !self.names.is_empty() {
            let names: [String; 2] = self.names.clone().try_into().map_err(|names: Vec<String>| {
                anyhow::anyhow!("--names expects exactly 2 names, got {}", names.len())
            })?;
            config.output.names = names;
        }
        if let Some(component) = self.component {
            config.component = component;
        }
        if let Some(png) = self.png {
            config.png = png;
        }
        if self.sidecar {
            config.sidecar = true;
        }

        debug!(
            inputs = config.inputs.len(),
            out = %config.output.dir.display(),
            component = ?config.component,
            png = ?config.png,
            sidecar = config.sidecar,
            "resolved configuration"
        );
        Ok(config)
    }
}
