//! Hollow cylinder with annular caps.

use std::any::Any;

use serde_json::{json, Value};

use crate::config::{
    DEFAULT_RINGS, DEFAULT_SLICES, DEFAULT_TUBE_HEIGHT, DEFAULT_TUBE_INNER_RADIUS,
    DEFAULT_TUBE_OUTER_RADIUS,
};
use crate::gfx::geometry::{generate_tube, tube_triangle_count, GeometryData};
use crate::gfx::scene::document;
use crate::gfx::scene::object::{GeoObject, ObjectExtent, ObjectState};

/// A tube (pipe) standing on the Y axis, centered at its origin.
///
/// `inner_radius < outer_radius` is expected but not enforced; swapped radii
/// produce inside-out geometry rather than an error.
#[derive(Debug, Clone)]
pub struct Tube {
    state: ObjectState,
    inner_radius: f32,
    outer_radius: f32,
    height: f32,
    rings: u32,
    slices: u32,
}

impl Default for Tube {
    fn default() -> Self {
        Self {
            state: ObjectState::default(),
            inner_radius: DEFAULT_TUBE_INNER_RADIUS,
            outer_radius: DEFAULT_TUBE_OUTER_RADIUS,
            height: DEFAULT_TUBE_HEIGHT,
            rings: DEFAULT_RINGS,
            slices: DEFAULT_SLICES,
        }
    }
}

impl Tube {
    pub const TYPE_TAG: &'static str = "Tube";

    pub fn new() -> Self {
        Self::default()
    }

    /// A tube with the given dimensions and default tessellation
    pub fn with_dimensions(inner_radius: f32, outer_radius: f32, height: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            height,
            ..Self::default()
        }
    }

    pub fn with_tessellation(mut self, rings: u32, slices: u32) -> Self {
        self.rings = rings;
        self.slices = slices;
        self
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn set_inner_radius(&mut self, radius: f32) {
        self.set_dimensions(radius, self.outer_radius, self.height);
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn set_outer_radius(&mut self, radius: f32) {
        self.set_dimensions(self.inner_radius, radius, self.height);
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.set_dimensions(self.inner_radius, self.outer_radius, height);
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn set_rings(&mut self, rings: u32) {
        self.set_tessellation(rings, self.slices);
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn set_slices(&mut self, slices: u32) {
        self.set_tessellation(self.rings, slices);
    }

    pub fn set_dimensions(&mut self, inner_radius: f32, outer_radius: f32, height: f32) {
        let changed = self.inner_radius != inner_radius
            || self.outer_radius != outer_radius
            || self.height != height;

        if changed {
            self.inner_radius = inner_radius;
            self.outer_radius = outer_radius;
            self.height = height;
            self.state.mark_geometry_changed();
        }
    }

    pub fn set_tessellation(&mut self, rings: u32, slices: u32) {
        if self.rings != rings || self.slices != slices {
            self.rings = rings;
            self.slices = slices;
            self.state.mark_geometry_changed();
        }
    }

    /// Triangles in the generated mesh: both walls plus both caps
    pub fn triangle_count(&self) -> usize {
        tube_triangle_count(self.rings, self.slices)
    }
}

impl GeoObject for Tube {
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
        "tube"
    }

    fn shape_document(&self) -> Value {
        json!({
            "innerRadius": self.inner_radius,
            "outerRadius": self.outer_radius,
            "height": self.height,
            "rings": self.rings,
            "slices": self.slices,
        })
    }

    fn read_shape_document(&mut self, block: &Value) {
        let (mut inner, mut outer, mut height) = (self.inner_radius, self.outer_radius, self.height);
        document::read_f32(block, "innerRadius", &mut inner);
        document::read_f32(block, "outerRadius", &mut outer);
        document::read_f32(block, "height", &mut height);
        self.set_dimensions(inner, outer, height);

        let (mut rings, mut slices) = (self.rings, self.slices);
        document::read_u32(block, "rings", &mut rings);
        document::read_u32(block, "slices", &mut slices);
        self.set_tessellation(rings, slices);
    }

    fn generate_mesh(&self) -> Option<GeometryData> {
        generate_tube(
            self.inner_radius,
            self.outer_radius,
            self.height,
            self.rings,
            self.slices,
        )
    }

    fn extent(&self) -> ObjectExtent {
        ObjectExtent {
            radius: self.outer_radius.abs().max(self.inner_radius.abs()),
            height: self.height.abs(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
