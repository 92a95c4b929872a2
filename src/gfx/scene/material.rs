//! Material definition for scene objects
//!
//! Colors are stored as 8-bit RGBA, matching the persisted document format.

use crate::config::{DEFAULT_AMBIENT, DEFAULT_DIFFUSE, DEFAULT_SHININESS, DEFAULT_SPECULAR};

/// An RGBA color with 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Normalized [0, 1] channels, as a shader expects them
    pub fn to_linear(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// Phong-style material with diffuse, ambient and specular colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub ambient: Color,
    pub specular: Color,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: DEFAULT_DIFFUSE.into(),
            ambient: DEFAULT_AMBIENT.into(),
            specular: DEFAULT_SPECULAR.into(),
            shininess: DEFAULT_SHININESS,
        }
    }
}

impl Material {
    /// Default material with the given diffuse color
    pub fn with_diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversions() {
        let c = Color::rgba(255, 0, 51, 255);
        let linear = c.to_linear();
        assert_eq!(linear[0], 1.0);
        assert_eq!(linear[1], 0.0);
        assert!((linear[2] - 0.2).abs() < 1e-6);
        assert_eq!(<[u8; 4]>::from(c), [255, 0, 51, 255]);
    }

    #[test]
    fn test_with_diffuse_keeps_defaults() {
        let m = Material::with_diffuse(Color::RED);
        assert_eq!(m.diffuse, Color::RED);
        assert_eq!(m.specular, Material::default().specular);
    }
}
