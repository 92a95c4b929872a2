//! # Scene Management Module
//!
//! This module provides the object model of a scene: parametric solids with
//! their transform and material, the registry that instantiates them by type
//! tag, and the named collection that persists them.
//!
//! ## Key Components
//!
//! - [`GeoObject`] - Contract every solid implements (mesh, document round trip)
//! - [`ObjectState`] - Transform, material, visibility and opacity of an object
//! - [`ObjectRegistry`] - Type tag to factory mapping used when loading
//! - [`ObjectSet`] - Named, ordered collection of objects with file persistence
//! - [`Vertex3D`] - Interleaved position/normal vertex record
//!
//! ## Usage
//!
//! ```no_run
//! use haggis_solids::gfx::scene::{ObjectSet, shapes::Tube};
//!
//! let mut set = ObjectSet::new();
//! set.add("pipe", Box::new(Tube::with_dimensions(0.4, 0.6, 3.0)));
//! set.save_to_file("scene.json").unwrap();
//!
//! let mut loaded = ObjectSet::new();
//! loaded.load_from_file("scene.json").unwrap();
//! ```

pub mod document;
pub mod material;
pub mod object;
pub mod object_set;
pub mod registry;
pub mod shapes;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use material::{Color, Material};
pub use object::{GeoObject, ObjectExtent, ObjectState};
pub use object_set::{LoadSummary, ObjectSet, RenderItem, SaveOptions};
pub use registry::{register_object_type, ObjectRegistry};
pub use transform::Transform;
pub use vertex::Vertex3D;
