//! Per-object conversion outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ObjectId;

/// Why an object was skipped without any conversion attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Not a single planar face: the object did not resolve to a solid, had
    /// no faces, had more than one face, or its single face failed the
    /// planarity test.
    #[error("non-planar or multi-face")]
    NonPlanarOrMultiFace,
}

/// Why an eligible object failed to convert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    /// The geometry service returned no outer border curves.
    #[error("no outer border obtainable")]
    NoOuterBorder,

    /// Every border curve failed to produce a hatch.
    #[error("no hatch created")]
    NoHatchCreated,
}

/// Terminal status of one object's conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionStatus {
    /// At least one hatch was created from the object's border curves.
    ///
    /// Individual border curves may still have failed; the object converts
    /// as long as one hatch exists.
    Converted {
        /// Number of hatches created.
        hatch_count: usize,
    },
    /// The object was ineligible; nothing was attempted.
    Skipped(SkipReason),
    /// The object was eligible but produced no hatch.
    Failed(FailReason),
}

impl ConversionStatus {
    /// Whether the object converted.
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }

    /// Whether the object ended Skipped or Failed.
    pub fn is_failure(&self) -> bool {
        !self.is_converted()
    }
}

/// Outcome of one object in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// The source object.
    pub object: ObjectId,
    /// Its terminal status.
    pub status: ConversionStatus,
}
