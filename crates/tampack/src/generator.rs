//! End-to-end packing run: load, validate, pack, write, import.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::config::TamConfig;
use crate::error::{Result, TamError};
use crate::import::{ImportHost, NoopImportHost, SidecarImportHost};
use crate::output::{write_hatch_maps, WrittenMap};
use crate::packing::pack_hatch_maps;
use crate::texture::{load_texture, TamInputs, TextureBuffer};
use crate::validate::validate_inputs;
use crate::TONE_COUNT;

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReport {
    pub width: u32,
    pub height: u32,
    /// Written maps in output order (`Hatch0`, `Hatch1`).
    pub outputs: Vec<WrittenMap>,
}

/// Drives one packing run from a [`TamConfig`].
pub struct TamGenerator {
    config: TamConfig,
    host: Box<dyn ImportHost>,
}

impl TamGenerator {
    /// Create a generator. The import host follows `config.sidecar`.
    pub fn new(config: TamConfig) -> Self {
        let host: Box<dyn ImportHost> = if config.sidecar {
            Box::new(SidecarImportHost)
        } else {
            Box::new(NoopImportHost)
        };
        Self { config, host }
    }

    /// Replace the import host.
    pub fn with_host(mut self, host: Box<dyn ImportHost>) -> Self {
        self.host = host;
        self
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &TamConfig {
        &self.config
    }

    /// Load and validate the inputs without writing anything.
    pub fn check(&self) -> Result<(u32, u32)> {
        let inputs = self.load_inputs()?;
        Ok(validate_inputs(&inputs)?)
    }

    /// Run the full pipeline.
    ///
    /// Nothing is written unless all six inputs load and validate. The import
    /// host is called only after both maps are on disk.
    pub fn run(&self) -> Result<GenerateReport> {
        let _span = info_span!("tam_generate", out = %self.config.output.dir.display()).entered();

        self.config.output.validate()?;
        let inputs = self.load_inputs()?;
        let maps = pack_hatch_maps(&inputs, self.config.component)?;
        let outputs = write_hatch_maps(&maps, &self.config.output, &self.config.png.config())?;

        self.host.refresh(&self.config.output.dir)?;
        for map in &outputs {
            self.host.configure(&map.path, &self.config.import)?;
        }

        info!(
            width = maps.hatch0.width,
            height = maps.hatch0.height,
            "TAM textures generated"
        );
        Ok(GenerateReport {
            width: maps.hatch0.width,
            height: maps.hatch0.height,
            outputs,
        })
    }

    /// Load every configured input. Empty or missing paths leave the slot empty.
    fn load_inputs(&self) -> Result<TamInputs> {
        let paths = &self.config.inputs;
        if paths.len() != TONE_COUNT {
            return Err(TamError::InputCount {
                expected: TONE_COUNT,
                actual: paths.len(),
            });
        }

        let slots = paths
            .iter()
            .enumerate()
            .map(|(index, path)| load_slot(index, path))
            .collect::<Result<Vec<_>>>()?;
        TamInputs::from_vec(slots)
    }
}

fn load_slot(index: usize, path: &Path) -> Result<Option<TextureBuffer>> {
    if path.as_os_str().is_empty() {
        debug!(index, "tone slot left empty");
        return Ok(None);
    }
    if !path.exists() {
        warn!(index, path = %path.display(), "tone texture not found");
        return Ok(None);
    }

    let texture = load_texture(path)?;
    debug!(
        index,
        path = %path.display(),
        width = texture.width,
        height = texture.height,
        "loaded tone texture"
    );
    Ok(Some(texture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_wrong_input_count() {
        let mut config = TamConfig::default();
        config.inputs = vec!["a.png".into(); 4];

        let err = TamGenerator::new(config).check().unwrap_err();
        assert!(matches!(
            err,
            TamError::InputCount {
                expected: 6,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_empty_path_is_missing_slot() {
        let mut config = TamConfig::default();
        config.inputs = vec![std::path::PathBuf::new(); 6];

        let err = TamGenerator::new(config).check().unwrap_err();
        assert!(matches!(
            err,
            TamError::Validation(ValidationError::MissingInput { index: 0 })
        ));
    }

    #[test]
    fn test_config_accessor() {
        let mut config = TamConfig::default();
        config.sidecar = true;

        let generator = TamGenerator::new(config.clone());
        assert_eq!(generator.config(), &config);
    }
}
