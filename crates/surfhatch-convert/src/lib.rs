#![warn(missing_docs)]

//! Batch conversion of planar surfaces and polysurfaces into filled hatch
//! regions.
//!
//! This crate provides the conversion pipeline driven against a host
//! geometry kernel:
//!
//! - **Classification**: single planar faces are eligible, everything else
//!   is skipped
//! - **Conversion**: border extraction, hatch creation, layer assignment,
//!   and optional deletion of the source object, per object in input order
//! - **Reporting**: an ordered per-object outcome sequence with the failed
//!   subset aggregated for one end-of-run summary
//!
//! The geometry kernel sits behind the [`SceneGeometry`] trait from
//! `surfhatch-scene`; nothing here computes planarity or borders itself.
//!
//! # Example
//!
//! ```ignore
//! use surfhatch_convert::{convert_batch, ConvertSettings};
//!
//! let mut scene = /* host implementation of SceneGeometry */;
//! let selected = /* ObjectIds from the host's selection step */;
//!
//! let report = convert_batch(&mut scene, &selected, &ConvertSettings::default())?;
//! println!("{}", report.summary());
//! ```

pub mod classify;
pub mod convert;
pub mod error;
pub mod report;

#[cfg(test)]
mod test_scene;

pub use classify::is_eligible;
pub use convert::convert_batch;
pub use error::{ConvertError, Result};
pub use report::BatchReport;

pub use surfhatch_scene::{
    ConversionOutcome, ConversionStatus, ConvertSettings, FailReason, HatchSpec, LayerChoice,
    LayerName, ObjectId, SceneGeometry, SkipReason,
};
