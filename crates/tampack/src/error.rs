//! Error types for the Tonal Art Map packer.

use std::path::PathBuf;

use thiserror::Error;

use crate::png::PngError;

/// Why a set of input textures was rejected.
///
/// Validation is pass/fail; the variant names the first offending slot only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A tone slot has no texture.
    #[error("Please provide all 6 input textures with the same dimensions. (texture {index} is missing)")]
    MissingInput { index: usize },

    /// A tone slot differs in size from texture 0.
    #[error(
        "Please provide all 6 input textures with the same dimensions. \
         (texture {index} is {}x{}, expected {}x{})",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Main error type for the packer.
#[derive(Debug, Error)]
pub enum TamError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Expected {expected} input textures, got {actual}")]
    InputCount { expected: usize, actual: usize },

    #[error("Failed to load texture {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid texture: {0}")]
    InvalidTexture(String),

    #[error("Failed to write {path}: {source}")]
    Png {
        path: PathBuf,
        #[source]
        source: PngError,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Import host failed for {path}: {message}")]
    Import { path: PathBuf, message: String },
}

impl TamError {
    /// Whether this error was raised before anything touched the filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(self, TamError::Validation(_) | TamError::InputCount { .. })
    }
}

/// Result type alias for packer operations.
pub type Result<T> = std::result::Result<T, TamError>;
