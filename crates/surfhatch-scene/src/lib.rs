#![warn(missing_docs)]

//! Scene vocabulary and the geometry-service contract for surfhatch.
//!
//! This crate defines the types the converter and the host scene exchange:
//!
//! - **Identifiers**: opaque [`ObjectId`] and [`LayerName`] handles owned by
//!   the host scene
//! - **Geometry service**: the [`SceneGeometry`] trait the host kernel
//!   implements (planarity test, border extraction, hatch creation, layer
//!   read/assign, deletion)
//! - **Settings**: the immutable [`ConvertSettings`] fixed for one batch
//! - **Outcomes**: per-object [`ConversionStatus`] with its reason enums
//!
//! No geometry is computed here; planarity and border extraction live behind
//! the trait in the host kernel.

pub mod geometry;
pub mod id;
pub mod outcome;
pub mod settings;

pub use geometry::SceneGeometry;
pub use id::{LayerName, ObjectId};
pub use outcome::{ConversionOutcome, ConversionStatus, FailReason, SkipReason};
pub use settings::{
    ConvertSettings, HatchSpec, LayerChoice, SettingsError, DEFAULT_TOLERANCE,
};
