//! Batch conversion of planar surfaces into hatch regions.

use log::{debug, warn};
use surfhatch_scene::{
    ConversionOutcome, ConversionStatus, ConvertSettings, FailReason, LayerChoice, ObjectId,
    SceneGeometry, SkipReason,
};

use crate::classify::is_eligible;
use crate::error::Result;
use crate::report::BatchReport;

/// Convert each object in `objects` into filled hatch region(s).
///
/// Objects are processed strictly in input order, one fully resolved before
/// the next begins. No per-object geometry condition aborts the batch; the
/// only error is a rejected settings value, raised before any object is
/// touched.
pub fn convert_batch<G: SceneGeometry>(
    scene: &mut G,
    objects: &[ObjectId],
    settings: &ConvertSettings,
) -> Result<BatchReport> {
    settings.validate()?;

    let mut outcomes = Vec::with_capacity(objects.len());
    for &obj in objects {
        let status = convert_object(scene, obj, settings);
        outcomes.push(ConversionOutcome {
            object: obj,
            status,
        });
    }
    Ok(BatchReport::new(outcomes))
}

/// Processing phase of a single object.
///
/// Each phase performs one stage of the conversion and carries the border
/// curves forward, so every failure path exits through an explicit terminal
/// status instead of a nested conditional.
enum Phase {
    /// Eligibility not yet determined.
    Unclassified,
    /// Single planar face; borders not yet requested.
    Eligible,
    /// Scratch border curves duplicated into the scene.
    Borders(Vec<ObjectId>),
    /// Hatches attempted on every border curve; borders not yet cleaned up.
    Hatched {
        borders: Vec<ObjectId>,
        hatch_count: usize,
    },
    /// Terminal.
    Done(ConversionStatus),
}

/// Drive one object through the conversion state machine.
fn convert_object<G: SceneGeometry>(
    scene: &mut G,
    obj: ObjectId,
    settings: &ConvertSettings,
) -> ConversionStatus {
    let mut phase = Phase::Unclassified;
    loop {
        phase = match phase {
            Phase::Unclassified => {
                if is_eligible(scene, obj, settings.tolerance) {
                    Phase::Eligible
                } else {
                    debug!("skipping non-planar or multi-face object {}", obj);
                    Phase::Done(ConversionStatus::Skipped(SkipReason::NonPlanarOrMultiFace))
                }
            }
            Phase::Eligible => {
                let borders = scene.outer_border_curves(obj);
                if borders.is_empty() {
                    warn!("could not obtain an outer border from object {}", obj);
                    Phase::Done(ConversionStatus::Failed(FailReason::NoOuterBorder))
                } else {
                    Phase::Borders(borders)
                }
            }
            Phase::Borders(borders) => {
                let hatch_count = hatch_borders(scene, obj, &borders, settings);
                Phase::Hatched {
                    borders,
                    hatch_count,
                }
            }
            Phase::Hatched {
                borders,
                hatch_count,
            } => {
                // Border curves are scratch geometry: one deletion covering
                // all of them, whether or not they yielded hatches.
                scene.delete_objects(&borders);
                if hatch_count == 0 {
                    Phase::Done(ConversionStatus::Failed(FailReason::NoHatchCreated))
                } else {
                    if !settings.keep_originals {
                        scene.delete_objects(&[obj]);
                    }
                    Phase::Done(ConversionStatus::Converted { hatch_count })
                }
            }
            Phase::Done(status) => return status,
        };
    }
}

/// Attempt a hatch on every border curve of `obj`; returns how many were
/// created. A failed curve is logged and absorbed, the rest keep going.
fn hatch_borders<G: SceneGeometry>(
    scene: &mut G,
    obj: ObjectId,
    borders: &[ObjectId],
    settings: &ConvertSettings,
) -> usize {
    let mut created = 0;
    for &curve in borders {
        let hatch = match scene.create_hatch(curve, &settings.hatch) {
            Some(hatch) => hatch,
            None => {
                warn!("failed to create hatch for border curve {}", curve);
                continue;
            }
        };
        created += 1;

        if settings.layer_choice == LayerChoice::Original {
            if let Some(layer) = scene.layer(obj) {
                scene.set_layer(hatch, &layer);
            }
        }
    }
    created
}
