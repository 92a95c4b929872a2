//! Concrete parametric solids.

pub mod cylinder;
pub mod face;
pub mod tube;

pub use cylinder::Cylinder;
pub use face::Face;
pub use tube::Tube;
