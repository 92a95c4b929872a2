//! Solid cylinder with flat caps.

use std::any::Any;

use serde_json::{json, Value};

use crate::config::{DEFAULT_CYLINDER_LENGTH, DEFAULT_CYLINDER_RADIUS, DEFAULT_RINGS, DEFAULT_SLICES};
use crate::gfx::geometry::{cylinder_triangle_count, generate_cylinder, GeometryData};
use crate::gfx::scene::document;
use crate::gfx::scene::object::{GeoObject, ObjectExtent, ObjectState};

/// A cylinder along the Y axis, centered at its origin
#[derive(Debug, Clone)]
pub struct Cylinder {
    state: ObjectState,
    radius: f32,
    length: f32,
    rings: u32,
    slices: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            state: ObjectState::default(),
            radius: DEFAULT_CYLINDER_RADIUS,
            length: DEFAULT_CYLINDER_LENGTH,
            rings: DEFAULT_RINGS,
            slices: DEFAULT_SLICES,
        }
    }
}

impl Cylinder {
    pub const TYPE_TAG: &'static str = "Cylinder";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensions(radius: f32, length: f32) -> Self {
        Self {
            radius,
            length,
            ..Self::default()
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        if self.radius != radius {
            self.radius = radius;
            self.state.mark_geometry_changed();
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn set_length(&mut self, length: f32) {
        if self.length != length {
            self.length = length;
            self.state.mark_geometry_changed();
        }
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn set_tessellation(&mut self, rings: u32, slices: u32) {
        if self.rings != rings || self.slices != slices {
            self.rings = rings;
            self.slices = slices;
            self.state.mark_geometry_changed();
        }
    }

    pub fn triangle_count(&self) -> usize {
        cylinder_triangle_count(self.rings, self.slices)
    }
}

impl GeoObject for Cylinder {
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
        "cylinder"
    }

    fn shape_document(&self) -> Value {
        json!({
            "radius": self.radius,
            "length": self.length,
            "rings": self.rings,
            "slices": self.slices,
        })
    }

    fn read_shape_document(&mut self, block: &Value) {
        let (mut radius, mut length) = (self.radius, self.length);
        if document::read_f32(block, "radius", &mut radius) {
            self.set_radius(radius);
        }
        if document::read_f32(block, "length", &mut length) {
            self.set_length(length);
        }

        let (mut rings, mut slices) = (self.rings, self.slices);
        document::read_u32(block, "rings", &mut rings);
        document::read_u32(block, "slices", &mut slices);
        self.set_tessellation(rings, slices);
    }

    fn generate_mesh(&self) -> Option<GeometryData> {
        generate_cylinder(self.radius, self.length, self.rings, self.slices)
    }

    fn extent(&self) -> ObjectExtent {
        ObjectExtent {
            radius: self.radius.abs(),
            height: self.length.abs(),
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

    #[test]
    fn test_mesh() {
        let mut cylinder = Cylinder::with_dimensions(1.5, 3.0);
        cylinder.set_tessellation(30, 16);
        let mesh = cylinder.generate_mesh().unwrap();
        assert_eq!(mesh.triangle_count(), cylinder.triangle_count());
        assert_eq!(mesh.triangle_count(), 2 * 16 * 30 + 2 * 16);
    }

    #[test]
    fn test_document_round_trip() {
        let mut cylinder = Cylinder::with_dimensions(0.8, 4.0);
        cylinder.set_tessellation(10, 12);
        cylinder.state_mut().set_visible(false);

        let doc = cylinder.to_document();
        let mut loaded = Cylinder::new();
        loaded.from_document(&doc).unwrap();
        assert_eq!(loaded.radius(), 0.8);
        assert_eq!(loaded.length(), 4.0);
        assert_eq!((loaded.rings(), loaded.slices()), (10, 12));
        assert!(!loaded.state().is_visible());
    }

    #[test]
    fn test_oversized_tessellation_from_document() {
        let mut cylinder = Cylinder::new();
        cylinder
            .from_document(&json!({ "type": "Cylinder", "cylinder": { "rings": 65536, "slices": 65536 } }))
            .unwrap();
        assert!(cylinder.generate_mesh().is_none());
    }

    #[test]
    fn test_rejects_tube_document() {
        let tube_doc = json!({ "type": "Tube", "tube": { "height": 9.0 } });
        let mut cylinder = Cylinder::new();
        assert!(cylinder.from_document(&tube_doc).is_err());
    }
}
