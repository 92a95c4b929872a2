//! # Vertex Data Structures
//!
//! This module defines the interleaved vertex record produced by the mesh
//! generators and consumed by a rendering host.

use std::mem;

/// A 3D vertex with position and normal data.
///
/// This structure represents a single vertex in 3D space with its position
/// and normal vector, interleaved as six consecutive `f32`s.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations.
///
/// # Examples
///
/// ```
/// use haggis_solids::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// assert_eq!(Vertex3D::STRIDE, 24);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

/// Location of one attribute inside an interleaved [`Vertex3D`] buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    /// Byte offset from the start of the vertex
    pub offset: usize,
    /// Number of `f32` components
    pub components: usize,
}

impl Vertex3D {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = mem::size_of::<Vertex3D>();

    /// Attribute layout of the interleaved buffer: position, then normal.
    pub const fn attributes() -> [VertexAttribute; 2] {
        [
            VertexAttribute {
                name: "position",
                offset: 0,
                components: 3,
            },
            VertexAttribute {
                name: "normal",
                offset: mem::size_of::<[f32; 3]>(),
                components: 3,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let [position, normal] = Vertex3D::attributes();
        assert_eq!(position.offset, 0);
        assert_eq!(normal.offset, 12);
        assert_eq!(Vertex3D::STRIDE, 24);
    }
}
