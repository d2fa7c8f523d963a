//! The geometry-service contract the converter drives.

use crate::id::{LayerName, ObjectId};
use crate::settings::HatchSpec;

/// Operations of the host geometry kernel used by the converter.
///
/// Every operation is synchronous and non-cancellable. Failure is signalled
/// by `None` or an empty `Vec`, never by a panic: the converter treats
/// "service returned nothing" as the uniform failure signal at every step.
///
/// Queries take `&self`; operations that add, move, or remove scene entities
/// take `&mut self`.
pub trait SceneGeometry: Send + Sync + std::fmt::Debug {
    /// Opaque boundary-representation handle resolved from a scene object.
    type Solid;

    /// Resolve the boundary representation of `obj`, or `None` when the
    /// object is not a surface or polysurface.
    fn resolve_solid(&self, obj: ObjectId) -> Option<Self::Solid>;

    /// Number of faces in `solid`.
    fn face_count(&self, solid: &Self::Solid) -> usize;

    /// Whether face `face` of `solid` is planar within `tolerance`.
    fn is_face_planar(&self, solid: &Self::Solid, face: usize, tolerance: f64) -> bool;

    /// Duplicate the outer border curve(s) of `obj` into the scene.
    ///
    /// The returned curves are scratch geometry owned by the caller, who is
    /// responsible for deleting them. Empty when no border could be
    /// obtained.
    fn outer_border_curves(&mut self, obj: ObjectId) -> Vec<ObjectId>;

    /// Create a hatch bounded by `curve`, or `None` on failure.
    ///
    /// The new hatch lands on the scene's active layer.
    fn create_hatch(&mut self, curve: ObjectId, spec: &HatchSpec) -> Option<ObjectId>;

    /// Layer of `obj`, or `None` when the object is unknown.
    fn layer(&self, obj: ObjectId) -> Option<LayerName>;

    /// Move `obj` to `layer`.
    fn set_layer(&mut self, obj: ObjectId, layer: &LayerName);

    /// Delete the given objects from the scene. Unknown ids are ignored.
    fn delete_objects(&mut self, ids: &[ObjectId]);
}
