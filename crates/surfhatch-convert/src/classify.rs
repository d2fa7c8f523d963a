//! Eligibility test for surface-to-hatch conversion.

use surfhatch_scene::{ObjectId, SceneGeometry};

/// Whether `obj` is a single planar face within `tolerance`.
///
/// Multi-face polysurfaces are categorically ineligible, even when every
/// face is planar and mutually coplanar. This is a deliberate
/// scope-limiting policy of the conversion, not a derived geometric rule.
///
/// Pure query; never mutates the scene.
pub fn is_eligible<G: SceneGeometry>(scene: &G, obj: ObjectId, tolerance: f64) -> bool {
    let solid = match scene.resolve_solid(obj) {
        Some(solid) => solid,
        None => return false,
    };

    let faces = scene.face_count(&solid);
    if faces == 0 {
        return false;
    }
    // Single-face surfaces only; polysurfaces are out of scope.
    if faces > 1 {
        return false;
    }

    scene.is_face_planar(&solid, 0, tolerance)
}
