//! # Configuration Constants
//!
//! Defaults and tunables shared by the object model, the mesh generators and
//! the scene persistence layer. Every default value a shape or material starts
//! from is defined here once.

/// Version string written into every saved object set document
pub const FORMAT_VERSION: &str = "1.0";

/// Minimum number of rings a curved surface can be tessellated with
pub const MIN_RINGS: u32 = 1;

/// Minimum number of slices a curved surface can be tessellated with
pub const MIN_SLICES: u32 = 3;

/// Default ring count for tubes and cylinders
pub const DEFAULT_RINGS: u32 = 20;

/// Default slice count for tubes and cylinders
pub const DEFAULT_SLICES: u32 = 36;

// Tube defaults
pub const DEFAULT_TUBE_INNER_RADIUS: f32 = 0.5;
pub const DEFAULT_TUBE_OUTER_RADIUS: f32 = 1.0;
pub const DEFAULT_TUBE_HEIGHT: f32 = 2.0;

// Cylinder defaults
pub const DEFAULT_CYLINDER_RADIUS: f32 = 1.0;
pub const DEFAULT_CYLINDER_LENGTH: f32 = 2.0;

/// Default diffuse color (RGBA, 0-255)
pub const DEFAULT_DIFFUSE: [u8; 4] = [200, 200, 200, 255];

/// Default ambient color (RGBA, 0-255)
pub const DEFAULT_AMBIENT: [u8; 4] = [50, 50, 50, 255];

/// Default specular color (RGBA, 0-255)
pub const DEFAULT_SPECULAR: [u8; 4] = [255, 255, 255, 255];

/// Default specular exponent
pub const DEFAULT_SHININESS: f32 = 50.0;

/// Radius assumed for shapes that do not report their own extent
pub const FALLBACK_EXTENT_RADIUS: f32 = 1.0;

/// Height assumed for shapes that do not report their own extent
pub const FALLBACK_EXTENT_HEIGHT: f32 = 2.0;
