// src/lib.rs
//! Haggis Solids
//!
//! Parametric 3D solids with JSON scene persistence and procedural mesh
//! generation.

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::SceneError;
pub use gfx::scene::{GeoObject, ObjectRegistry, ObjectSet};
