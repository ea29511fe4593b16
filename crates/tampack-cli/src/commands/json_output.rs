//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `generate` and `check`.

use serde::{Deserialize, Serialize};
use tampack::{GenerateReport, TamError};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Missing inputs or mismatched dimensions
    pub const VALIDATION: &str = "TAM_001";
    /// Configuration file or flag problem
    pub const CONFIG: &str = "TAM_002";
    /// An input texture could not be decoded
    pub const TEXTURE_LOAD: &str = "TAM_003";
    /// Encoding or filesystem failure while writing outputs
    pub const WRITE: &str = "TAM_004";
    /// The import host rejected a written file
    pub const IMPORT: &str = "TAM_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "TAM_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Map an `anyhow` error to a JSON error, classifying packer errors.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<TamError>() {
            Some(tam) => Self::from_tam(tam),
            None => Self::new(error_codes::CONFIG, format!("{:#}", err)),
        }
    }

    /// Map a packer error to a JSON error.
    pub fn from_tam(err: &TamError) -> Self {
        let message = err.to_string();
        match err {
            TamError::Validation(_) | TamError::InputCount { .. } => {
                Self::new(error_codes::VALIDATION, message)
            }
            TamError::Config(_) | TamError::ConfigParse(_) => Self::new(error_codes::CONFIG, message),
            TamError::ImageLoad { path, .. } => {
                Self::new(error_codes::TEXTURE_LOAD, message).with_file(path.display().to_string())
            }
            TamError::InvalidTexture(_) => Self::new(error_codes::TEXTURE_LOAD, message),
            TamError::Png { path, .. } | TamError::Io { path, .. } => {
                Self::new(error_codes::WRITE, message).with_file(path.display().to_string())
            }
            TamError::Import { path, .. } => {
                Self::new(error_codes::IMPORT, message).with_file(path.display().to_string())
            }
        }
    }
}

/// Output of `tampack generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during generation
    pub errors: Vec<JsonError>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateReport>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Output of `tampack check --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    /// Whether the inputs are usable
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Shared input width (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Shared input height (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl CheckOutput {
    pub fn success(width: u32, height: u32) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            width: None,
            height: None,
        }
    }
}
