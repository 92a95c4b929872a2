//! # Graphics Module
//!
//! This module contains the scene object model and the procedural geometry
//! that turns objects into renderable meshes.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Mesh generators for faces, tubes and cylinders
//! - **Scene Management** ([`scene`]) - Objects, type registry and object sets
//!
//! Rendering itself happens outside this crate. A host consumes either single
//! meshes through [`GeoObject::generate_mesh`](scene::GeoObject::generate_mesh)
//! or a whole set through [`ObjectSet::realize_meshes`](scene::ObjectSet::realize_meshes).
//!
//! ## Usage
//!
//! ```
//! use haggis_solids::gfx::scene::{GeoObject, shapes::Face};
//!
//! let mut face = Face::with_elevation(1.0);
//! face.add_vertex(0.0, 0.0);
//! face.add_vertex(1.0, 0.0);
//! face.add_vertex(0.0, 1.0);
//!
//! let mesh = face.generate_mesh().unwrap();
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

pub mod geometry;
pub mod scene;

// Re-export commonly used types
pub use geometry::GeometryData;
pub use scene::{GeoObject, ObjectRegistry, ObjectSet};
