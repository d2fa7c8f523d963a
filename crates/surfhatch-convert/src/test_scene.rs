//! Scripted in-memory scene used by the unit tests.

use std::collections::{HashMap, HashSet};

use surfhatch_scene::{HatchSpec, LayerName, ObjectId, SceneGeometry};

/// Shape of the fake solid behind a scene object.
#[derive(Debug, Clone, Copy)]
pub struct FakeSolid {
    /// Number of faces reported.
    pub faces: usize,
    /// Planarity reported for every face.
    pub planar: bool,
}

/// In-memory geometry service that records every mutating call.
///
/// Objects, borders, and hatch failures are scripted up front; the converter
/// then runs against the scripted behavior and the test inspects what was
/// created and deleted.
#[derive(Debug, Default)]
pub struct FakeScene {
    next_id: u64,
    solids: HashMap<ObjectId, FakeSolid>,
    borders: HashMap<ObjectId, Vec<ObjectId>>,
    layers: HashMap<ObjectId, LayerName>,
    failing_hatches: HashSet<ObjectId>,
    deletions: Vec<Vec<ObjectId>>,
    /// Hatches created, in creation order.
    pub hatches: Vec<ObjectId>,
    /// Count of calls to the mutating service operations.
    pub mutation_calls: usize,
}

impl FakeScene {
    /// Empty scene with active layer "Default".
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId::new(self.next_id)
    }

    /// Add an object whose solid has `faces` faces with the given planarity,
    /// living on `layer`.
    pub fn add_object(&mut self, faces: usize, planar: bool, layer: &str) -> ObjectId {
        let id = self.alloc();
        self.solids.insert(id, FakeSolid { faces, planar });
        self.layers.insert(id, LayerName::new(layer));
        id
    }

    /// Add an object that does not resolve to a solid.
    pub fn add_unresolvable(&mut self) -> ObjectId {
        self.alloc()
    }

    /// Script `count` outer border curves for `obj`; returns their ids.
    pub fn script_borders(&mut self, obj: ObjectId, count: usize) -> Vec<ObjectId> {
        let curves: Vec<ObjectId> = (0..count).map(|_| self.alloc()).collect();
        self.borders.insert(obj, curves.clone());
        curves
    }

    /// Make hatch creation fail for `curve`.
    pub fn fail_hatch(&mut self, curve: ObjectId) {
        self.failing_hatches.insert(curve);
    }

    /// Whether `id` appeared in any deletion call.
    pub fn is_deleted(&self, id: ObjectId) -> bool {
        self.deletions.iter().any(|call| call.contains(&id))
    }

    /// Number of deletion calls whose id set intersects `ids`.
    pub fn deletions_covering(&self, ids: &[ObjectId]) -> usize {
        self.deletions
            .iter()
            .filter(|call| call.iter().any(|id| ids.contains(id)))
            .count()
    }
}

impl SceneGeometry for FakeScene {
    type Solid = FakeSolid;

    fn resolve_solid(&self, obj: ObjectId) -> Option<FakeSolid> {
        self.solids.get(&obj).copied()
    }

    fn face_count(&self, solid: &FakeSolid) -> usize {
        solid.faces
    }

    fn is_face_planar(&self, solid: &FakeSolid, _face: usize, _tolerance: f64) -> bool {
        solid.planar
    }

    fn outer_border_curves(&mut self, obj: ObjectId) -> Vec<ObjectId> {
        self.mutation_calls += 1;
        self.borders.get(&obj).cloned().unwrap_or_default()
    }

    fn create_hatch(&mut self, curve: ObjectId, _spec: &HatchSpec) -> Option<ObjectId> {
        self.mutation_calls += 1;
        if self.failing_hatches.contains(&curve) {
            return None;
        }
        let hatch = self.alloc();
        self.layers.insert(hatch, LayerName::new("Default"));
        self.hatches.push(hatch);
        Some(hatch)
    }

    fn layer(&self, obj: ObjectId) -> Option<LayerName> {
        self.layers.get(&obj).cloned()
    }

    fn set_layer(&mut self, obj: ObjectId, layer: &LayerName) {
        self.mutation_calls += 1;
        self.layers.insert(obj, layer.clone());
    }

    fn delete_objects(&mut self, ids: &[ObjectId]) {
        self.mutation_calls += 1;
        self.deletions.push(ids.to_vec());
    }
}
