//! Flat polygon at a fixed elevation.

use std::any::Any;

use cgmath::{InnerSpace, Vector2, Vector3};
use serde_json::{json, Value};

use crate::gfx::geometry::{generate_face, GeometryData};
use crate::gfx::scene::document::{self, point_xz_document};
use crate::gfx::scene::object::{GeoObject, ObjectExtent, ObjectState};

/// A horizontal polygon.
///
/// Vertices are (x, z) pairs stored as `Vector2` with `y` holding the Z
/// coordinate. Their order is the winding order. The polygon is meant to be
/// convex; it is fan triangulated from its first vertex.
#[derive(Debug, Clone, Default)]
pub struct Face {
    state: ObjectState,
    elevation: f32,
    vertices: Vec<Vector2<f32>>,
}

impl Face {
    pub const TYPE_TAG: &'static str = "Face";

    /// An empty face at elevation 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elevation(elevation: f32) -> Self {
        Self {
            elevation,
            ..Self::default()
        }
    }

    pub fn with_vertices(vertices: Vec<Vector2<f32>>, elevation: f32) -> Self {
        Self {
            elevation,
            vertices,
            ..Self::default()
        }
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        if self.elevation != elevation {
            self.elevation = elevation;
            self.state.mark_geometry_changed();
        }
    }

    pub fn vertices(&self) -> &[Vector2<f32>] {
        &self.vertices
    }

    pub fn set_vertices(&mut self, vertices: Vec<Vector2<f32>>) {
        self.vertices = vertices;
        self.state.mark_geometry_changed();
    }

    pub fn add_vertex(&mut self, x: f32, z: f32) {
        self.vertices.push(Vector2::new(x, z));
        self.state.mark_geometry_changed();
    }

    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
        self.state.mark_geometry_changed();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices lifted to the face's elevation
    pub fn vertices_3d(&self) -> Vec<Vector3<f32>> {
        self.vertices
            .iter()
            .map(|v| Vector3::new(v.x, self.elevation, v.y))
            .collect()
    }
}

impl GeoObject for Face {
    fn type_tag(&self) -> &'static str {
        Self::TYPE_TAG
    }

    fn state(&self) -> &ObjectState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ObjectState {
        &mut self.state
    }

    fn shape_key(&self) -> &'static str {
        "face"
    }

    fn shape_document(&self) -> Value {
        let vertices: Vec<Value> = self.vertices.iter().copied().map(point_xz_document).collect();
        json!({
            "elevation": self.elevation,
            "vertices": vertices,
        })
    }

    fn read_shape_document(&mut self, block: &Value) {
        let mut elevation = self.elevation;
        if document::read_f32(block, "elevation", &mut elevation) {
            self.set_elevation(elevation);
        }

        // Entries that are not objects are dropped
        if let Some(entries) = block.get("vertices").and_then(Value::as_array) {
            let vertices = entries.iter().filter_map(document::read_point_xz).collect();
            self.set_vertices(vertices);
        }
    }

    fn generate_mesh(&self) -> Option<GeometryData> {
        let corners: Vec<[f32; 2]> = self.vertices.iter().map(|&v| v.into()).collect();
        generate_face(&corners, self.elevation)
    }

    fn extent(&self) -> ObjectExtent {
        let radius = self
            .vertices
            .iter()
            .map(|v| v.magnitude())
            .fold(0.0f32, f32::max);
        ObjectExtent {
            radius,
            height: 0.0,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(elevation: f32) -> Face {
        let mut face = Face::with_elevation(elevation);
        face.add_vertex(-2.0, -2.0);
        face.add_vertex(2.0, -2.0);
        face.add_vertex(2.0, 2.0);
        face.add_vertex(-2.0, 2.0);
        face
    }

    #[test]
    fn test_square_mesh() {
        let mesh = square(1.0).generate_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(mesh.vertices.iter().all(|v| v[1] == 1.0));
    }

    #[test]
    fn test_too_few_vertices() {
        let mut face = Face::new();
        assert!(face.generate_mesh().is_none());
        face.add_vertex(0.0, 0.0);
        face.add_vertex(1.0, 0.0);
        assert!(face.generate_mesh().is_none());
        face.add_vertex(1.0, 1.0);
        assert!(face.generate_mesh().is_some());
    }

    #[test]
    fn test_set_elevation_regenerates() {
        let mut face = square(1.0);
        let revision = face.state().geometry_revision();

        face.set_elevation(-3.5);
        assert!(face.state().geometry_revision() > revision);

        let mesh = face.generate_mesh().unwrap();
        assert!(mesh.vertices.iter().all(|v| v[1] == -3.5));
    }

    #[test]
    fn test_appearance_does_not_touch_geometry() {
        let mut face = square(0.0);
        let revision = face.state().geometry_revision();
        face.state_mut().set_opacity(0.5);
        face.state_mut().set_visible(false);
        assert_eq!(face.state().geometry_revision(), revision);
    }

    #[test]
    fn test_document_round_trip() {
        let mut face = Face::with_vertices(
            vec![
                Vector2::new(-1.0, -1.0),
                Vector2::new(1.0, -1.0),
                Vector2::new(0.0, 1.0),
            ],
            0.5,
        );
        face.state_mut().set_position(0.0, 1.0, 0.0);

        let doc = face.to_document();
        assert_eq!(doc["type"], "Face");
        assert_eq!(doc["face"]["vertices"][2]["z"], 1.0);

        let mut loaded = Face::new();
        loaded.from_document(&doc).unwrap();
        assert_eq!(loaded.elevation(), 0.5);
        assert_eq!(loaded.vertices(), face.vertices());
        assert_eq!(loaded.state().position(), face.state().position());
    }

    #[test]
    fn test_rejects_other_types() {
        let mut face = square(2.0);
        let err = face.from_document(&json!({ "type": "Tube", "face": { "elevation": 9 } }));
        assert!(err.is_err());
        assert_eq!(face.elevation(), 2.0);

        assert!(face.from_document(&json!({ "face": {} })).is_err());
    }

    #[test]
    fn test_missing_blocks_keep_values() {
        let mut face = square(2.0);
        face.from_document(&json!({ "type": "Face", "face": { "elevation": 4 } }))
            .unwrap();
        assert_eq!(face.elevation(), 4.0);
        assert_eq!(face.vertex_count(), 4);
    }

    #[test]
    fn test_extent() {
        let extent = square(0.0).extent();
        assert!((extent.radius - 8.0f32.sqrt()).abs() < 1e-6);
        assert_eq!(extent.height, 0.0);
    }
}
