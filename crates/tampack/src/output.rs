//! Writing packed hatch maps to disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::error::{Result, TamError};
use crate::packing::HatchMaps;
use crate::png::{write_rgb_to_vec_with_hash, PngConfig};

/// A hatch map that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenMap {
    /// Base name, e.g. `Hatch0`.
    pub name: String,
    /// Path of the written PNG.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the file contents.
    pub hash: String,
}

/// Encode both hatch maps and write them under `output.dir`.
///
/// The directory (and any missing parents) is created first. Existing files
/// with the same names are overwritten. Both maps are encoded before either
/// file is created.
pub fn write_hatch_maps(
    maps: &HatchMaps,
    output: &OutputConfig,
    png: &PngConfig,
) -> Result<Vec<WrittenMap>> {
    output.validate()?;

    let mut encoded = Vec::with_capacity(2);
    for (index, buffer) in maps.maps().into_iter().enumerate() {
        let path = output.path_for(index);
        let (data, hash) =
            write_rgb_to_vec_with_hash(buffer, png).map_err(|source| TamError::Png {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), bytes = data.len(), "encoded hatch map");
        encoded.push((index, path, data, hash, buffer.width, buffer.height));
    }

    std::fs::create_dir_all(&output.dir).map_err(|source| TamError::Io {
        path: output.dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(encoded.len());
    for (index, path, data, hash, width, height) in encoded {
        std::fs::write(&path, &data).map_err(|source| TamError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), width, height, "wrote hatch map");

        written.push(WrittenMap {
            name: output.names[index].clone(),
            path,
            width,
            height,
            hash,
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::RgbBuffer;

    fn maps(width: u32, height: u32) -> HatchMaps {
        let mut hatch0 = RgbBuffer::new_black(width, height);
        let mut hatch1 = RgbBuffer::new_black(width, height);
        hatch0.set(0, 0, [10, 20, 30]);
        hatch1.set(0, 0, [40, 50, 60]);
        HatchMaps { hatch0, hatch1 }
    }

    #[test]
    fn test_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            dir: dir.path().join("a").join("b").join("c"),
            ..OutputConfig::default()
        };

        let written = write_hatch_maps(&maps(4, 2), &output, &PngConfig::default()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0].name, "Hatch0");
        assert_eq!(written[1].path, output.dir.join("Hatch1.png"));
        for map in &written {
            assert!(map.path.is_file());
            assert_eq!((map.width, map.height), (4, 2));
            let bytes = std::fs::read(&map.path).unwrap();
            assert_eq!(crate::png::hash_png(&bytes), map.hash);
        }
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            dir: dir.path().to_path_buf(),
            ..OutputConfig::default()
        };
        std::fs::write(dir.path().join("Hatch0.png"), b"stale").unwrap();

        let written = write_hatch_maps(&maps(2, 2), &output, &PngConfig::default()).unwrap();
        let bytes = std::fs::read(&written[0].path).unwrap();
        assert_ne!(bytes, b"stale");
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_encoding_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            dir: dir.path().join("out"),
            ..OutputConfig::default()
        };
        let broken = HatchMaps {
            hatch0: RgbBuffer::new_black(2, 2),
            hatch1: RgbBuffer::new_black(0, 0),
        };

        let err = write_hatch_maps(&broken, &output, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, TamError::Png { .. }));
        assert!(!output.dir.exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let output = OutputConfig {
            dir: blocker.join("sub"),
            ..OutputConfig::default()
        };

        let err = write_hatch_maps(&maps(2, 2), &output, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, TamError::Io { .. }));
    }
}
