//! Immutable configuration for one conversion batch.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Planarity tolerance used when no explicit value is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Parameters of the hatches the converter creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatchSpec {
    /// Hatch pattern name; must exist in the host scene.
    pub pattern: String,
    /// Pattern scale factor.
    pub scale: f64,
    /// Pattern rotation in degrees.
    pub rotation: f64,
}

impl HatchSpec {
    /// Solid fill at unit scale, no rotation.
    pub fn solid() -> Self {
        Self {
            pattern: "Solid".to_string(),
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Default for HatchSpec {
    fn default() -> Self {
        Self::solid()
    }
}

/// Which layer a newly created hatch ends up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerChoice {
    /// Reassign the hatch to its source object's layer.
    #[default]
    Original,
    /// Leave the hatch on the scene's active layer.
    Current,
}

/// Settings for one conversion batch, fixed for its whole duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertSettings {
    /// Planarity tolerance for the eligibility test.
    pub tolerance: f64,
    /// Parameters of the hatches to create.
    pub hatch: HatchSpec,
    /// Keep the source objects after a successful conversion.
    pub keep_originals: bool,
    /// Layer assignment for new hatches.
    pub layer_choice: LayerChoice,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            hatch: HatchSpec::default(),
            keep_originals: true,
            layer_choice: LayerChoice::Original,
        }
    }
}

impl ConvertSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tolerance <= 0.0 {
            return Err(SettingsError::NonPositiveTolerance(self.tolerance));
        }
        if self.hatch.scale <= 0.0 {
            return Err(SettingsError::NonPositiveScale(self.hatch.scale));
        }
        if self.hatch.pattern.is_empty() {
            return Err(SettingsError::EmptyPattern);
        }
        Ok(())
    }
}

/// Why a [`ConvertSettings`] value was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Tolerance must be a positive epsilon.
    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),

    /// Hatch scale must be positive.
    #[error("hatch scale must be positive, got {0}")]
    NonPositiveScale(f64),

    /// Hatch pattern name must not be empty.
    #[error("hatch pattern name is empty")]
    EmptyPattern,
}
