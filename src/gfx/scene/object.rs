//! # Scene Objects
//!
//! [`GeoObject`] is the contract every parametric solid implements: report a
//! type tag, produce a mesh, and convert itself to and from a JSON document.
//! The state all solids share (transform, material, visibility, opacity) lives
//! in [`ObjectState`], which each shape owns by value.

use std::any::Any;
use std::fmt;

use cgmath::Vector3;
use serde_json::{json, Map, Value};

use super::document::{self, color_document, vec3_document};
use super::material::{Color, Material};
use super::transform::Transform;
use crate::config::{FALLBACK_EXTENT_HEIGHT, FALLBACK_EXTENT_RADIUS};
use crate::error::SceneError;
use crate::gfx::geometry::GeometryData;

/// State shared by every scene object
#[derive(Debug, Clone)]
pub struct ObjectState {
    transform: Transform,
    material: Material,
    visible: bool,
    opacity: f32,
    geometry_revision: u64,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            material: Material::default(),
            visible: true,
            opacity: 1.0,
            geometry_revision: 0,
        }
    }
}

impl ObjectState {
    pub fn new() -> Self {
        Self::default()
    }

    // Transform

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        if self.transform != transform {
            self.transform = transform;
            self.mark_geometry_changed();
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.set_transform(Transform {
            position: Vector3::new(x, y, z),
            ..self.transform
        });
    }

    /// Euler angles in degrees
    pub fn rotation(&self) -> Vector3<f32> {
        self.transform.rotation
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.set_transform(Transform {
            rotation: Vector3::new(x, y, z),
            ..self.transform
        });
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.transform.scale
    }

    pub fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.set_transform(Transform {
            scale: Vector3::new(x, y, z),
            ..self.transform
        });
    }

    // Appearance. None of these touch the geometry revision.

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn diffuse_color(&self) -> Color {
        self.material.diffuse
    }

    pub fn set_diffuse_color(&mut self, color: Color) {
        self.material.diffuse = color;
    }

    pub fn ambient_color(&self) -> Color {
        self.material.ambient
    }

    pub fn set_ambient_color(&mut self, color: Color) {
        self.material.ambient = color;
    }

    pub fn specular_color(&self) -> Color {
        self.material.specular
    }

    pub fn set_specular_color(&mut self, color: Color) {
        self.material.specular = color;
    }

    pub fn shininess(&self) -> f32 {
        self.material.shininess
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.material.shininess = shininess;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set opacity, clamped to [0, 1]. NaN is ignored.
    pub fn set_opacity(&mut self, opacity: f32) {
        if !opacity.is_nan() {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Counter bumped whenever anything a generated mesh depends on changes.
    ///
    /// Meshes are regenerated on every [`GeoObject::generate_mesh`] call; a
    /// host that uploads them can compare revisions to skip redundant uploads.
    pub fn geometry_revision(&self) -> u64 {
        self.geometry_revision
    }

    /// Record that previously generated meshes are stale
    pub fn mark_geometry_changed(&mut self) {
        self.geometry_revision = self.geometry_revision.wrapping_add(1);
    }

    /// Write the `transform`, `material`, `visible` and `opacity` entries
    fn write_document(&self, doc: &mut Map<String, Value>) {
        let t = &self.transform;
        doc.insert(
            "transform".into(),
            json!({
                "position": vec3_document(t.position),
                "rotation": vec3_document(t.rotation),
                "scale": vec3_document(t.scale),
            }),
        );

        let m = &self.material;
        doc.insert(
            "material".into(),
            json!({
                "diffuse": color_document(m.diffuse),
                "ambient": color_document(m.ambient),
                "specular": color_document(m.specular),
                "shininess": m.shininess,
            }),
        );

        doc.insert("visible".into(), json!(self.visible));
        doc.insert("opacity".into(), json!(self.opacity));
    }

    /// Apply whichever shared blocks `doc` contains
    fn read_document(&mut self, doc: &Value) {
        if let Some(block) = doc.get("transform") {
            let mut transform = self.transform;
            document::read_vec3(block, "position", &mut transform.position);
            document::read_vec3(block, "rotation", &mut transform.rotation);
            document::read_vec3(block, "scale", &mut transform.scale);
            self.set_transform(transform);
        }

        if let Some(block) = doc.get("material") {
            let m = &mut self.material;
            document::read_color(block, "diffuse", &mut m.diffuse);
            document::read_color(block, "ambient", &mut m.ambient);
            document::read_color(block, "specular", &mut m.specular);
            document::read_f32(block, "shininess", &mut m.shininess);
        }

        document::read_bool(doc, "visible", &mut self.visible);

        let mut opacity = self.opacity;
        if document::read_f32(doc, "opacity", &mut opacity) {
            self.set_opacity(opacity);
        }
    }
}

/// Approximate local-space size of an object, for bounds estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectExtent {
    /// Horizontal distance from the Y axis
    pub radius: f32,
    /// Vertical size, centered on the object origin
    pub height: f32,
}

impl Default for ObjectExtent {
    fn default() -> Self {
        Self {
            radius: FALLBACK_EXTENT_RADIUS,
            height: FALLBACK_EXTENT_HEIGHT,
        }
    }
}

impl ObjectExtent {
    /// Extent after applying the object's scale
    pub fn scaled(self, scale: Vector3<f32>) -> Self {
        Self {
            radius: self.radius * scale.x.abs().max(scale.z.abs()),
            height: self.height * scale.y.abs(),
        }
    }
}

/// A parametric solid that can live in an [`ObjectSet`](super::ObjectSet).
///
/// Implementors provide their tag, their shape block and their mesh; the
/// document round trip of the shared state is provided.
pub trait GeoObject: fmt::Debug + Any {
    /// Constant name of the concrete type, used as registry key and as the
    /// `"type"` field of documents
    fn type_tag(&self) -> &'static str;

    fn state(&self) -> &ObjectState;
    fn state_mut(&mut self) -> &mut ObjectState;

    /// Key of the type-specific block in the document, e.g. `"tube"`
    fn shape_key(&self) -> &'static str;

    /// The type-specific parameters as a JSON object
    fn shape_document(&self) -> Value;

    /// Apply the type-specific block, keeping current values for anything
    /// missing from it
    fn read_shape_document(&mut self, block: &Value);

    /// Build the mesh for the current parameters, or `None` if they do not
    /// describe any geometry
    fn generate_mesh(&self) -> Option<GeometryData>;

    /// Approximate unscaled size for bounds estimation
    fn extent(&self) -> ObjectExtent {
        ObjectExtent::default()
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("type".into(), json!(self.type_tag()));
        self.state().write_document(&mut doc);
        doc.insert(self.shape_key().into(), self.shape_document());
        Value::Object(doc)
    }

    /// Load from a document produced by [`to_document`](GeoObject::to_document).
    ///
    /// Fails without changing anything if the document describes another
    /// type. Otherwise every block is optional.
    fn from_document(&mut self, doc: &Value) -> Result<(), SceneError> {
        let found = doc.get("type").and_then(Value::as_str).unwrap_or_default();
        if found != self.type_tag() {
            return Err(SceneError::type_mismatch(self.type_tag(), found));
        }

        self.state_mut().read_document(doc);
        if let Some(block) = doc.get(self.shape_key()).filter(|b| b.is_object()) {
            self.read_shape_document(block);
        }
        Ok(())
    }
}

impl<'a> dyn GeoObject + 'a {
    pub fn is<T: GeoObject>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: GeoObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: GeoObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Scaled extent, as a bounds routine needs it
    pub fn world_extent(&self) -> ObjectExtent {
        self.extent().scaled(self.state().scale())
    }
}
