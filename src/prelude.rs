//! # Haggis Solids Prelude
//!
//! This module provides a convenient way to import commonly used types and traits
//! from the crate.
//!
//! ## Usage
//!
//! ```rust
//! use haggis_solids::prelude::*;
//!
//! let mut set = ObjectSet::new();
//! set.add("pipe", Box::new(Tube::new()));
//!
//! let items = set.realize_meshes();
//! assert_eq!(items[0].mesh.triangle_count(), 3024);
//! ```

// Re-export errors
pub use crate::error::SceneError;

// Re-export geometry types
pub use crate::gfx::geometry::{
    generate_cylinder, generate_face, generate_tube, GeometryData, PrimitiveTopology,
};

// Re-export scene types
pub use crate::gfx::scene::shapes::{Cylinder, Face, Tube};
pub use crate::gfx::scene::{
    register_object_type, Color, GeoObject, LoadSummary, Material, ObjectExtent, ObjectRegistry,
    ObjectSet, ObjectState, RenderItem, SaveOptions, Transform, Vertex3D,
};

// Re-export common external dependencies
pub use cgmath::{Vector2, Vector3};
