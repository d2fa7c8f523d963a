//! Error types for batch conversion.

use surfhatch_scene::SettingsError;
use thiserror::Error;

/// Errors that abort a batch before any object is processed.
///
/// Per-object geometry conditions never surface here; they degrade to
/// `Skipped`/`Failed` outcomes and the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The batch settings were rejected.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
