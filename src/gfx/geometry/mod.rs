//! # Procedural Geometry Generation
//!
//! This module turns shape parameters into renderable triangle meshes. The
//! generators live in [`primitives`]; [`GeometryData`] is the mesh description
//! handed across the rendering boundary.
//!
//! ## Supported Primitives
//!
//! - **Face**: Convex polygon at a fixed elevation, fan triangulated
//! - **Tube**: Hollow cylinder with inner/outer walls and annular caps
//! - **Cylinder**: Solid cylinder with disc caps
//!
//! ## Usage
//!
//! ```rust
//! use haggis_solids::gfx::geometry::{generate_face, generate_tube};
//!
//! // A unit square one unit above the ground
//! let square = generate_face(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]], 1.0).unwrap();
//! assert_eq!(square.triangle_count(), 2);
//!
//! // The default tube
//! let tube = generate_tube(0.5, 1.0, 2.0, 20, 36).unwrap();
//! assert_eq!(tube.triangle_count(), 3024);
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Vector3};

use crate::gfx::scene::vertex::Vertex3D;

/// How the index buffer is to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Every three indices form one triangle
    TriangleList,
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Per-vertex normals, absent when the generator does not compute them
    pub normals: Option<Vec<[f32; 3]>>,
    /// Triangle indices
    pub indices: Vec<u32>,
    pub topology: PrimitiveTopology,
}

impl GeometryData {
    /// Create a new empty geometry data structure without normals
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: None,
            indices: Vec::new(),
            topology: PrimitiveTopology::TriangleList,
        }
    }

    /// Create a new empty geometry data structure that carries normals
    pub fn with_normals() -> Self {
        Self {
            normals: Some(Vec::new()),
            ..Self::new()
        }
    }

    /// Preallocate room for `vertices` vertices and `triangles` triangles
    pub fn reserve(&mut self, vertices: usize, triangles: usize) {
        self.vertices.reserve(vertices);
        if let Some(normals) = self.normals.as_mut() {
            normals.reserve(vertices);
        }
        self.indices.reserve(triangles * 3);
    }

    /// Append a vertex with its normal and return its index.
    ///
    /// The normal is dropped if this geometry does not carry normals.
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        if let Some(normals) = self.normals.as_mut() {
            normals.push(normal);
        }
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Geometric normal of triangle `triangle`, following its winding order.
    ///
    /// Returns `None` for an out-of-range triangle or a zero-area one.
    pub fn triangle_normal(&self, triangle: usize) -> Option<Vector3<f32>> {
        let tri = self.indices.get(triangle * 3..triangle * 3 + 3)?;
        let v0 = Vector3::from(*self.vertices.get(tri[0] as usize)?);
        let v1 = Vector3::from(*self.vertices.get(tri[1] as usize)?);
        let v2 = Vector3::from(*self.vertices.get(tri[2] as usize)?);

        let normal = (v1 - v0).cross(v2 - v0);
        if normal.magnitude2() > 0.0 {
            Some(normal.normalize())
        } else {
            None
        }
    }

    /// Fill in normals from the triangle winding if none were generated.
    ///
    /// Each vertex receives the normalized average of the face normals of the
    /// triangles that reference it.
    pub fn with_computed_normals(mut self) -> Self {
        if self.normals.is_some() {
            return self;
        }

        let mut sums = vec![Vector3::new(0.0f32, 0.0, 0.0); self.vertices.len()];
        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            let (Some(&a), Some(&b), Some(&c)) = (
                self.vertices.get(i0),
                self.vertices.get(i1),
                self.vertices.get(i2),
            ) else {
                continue;
            };

            let (a, b, c) = (Vector3::from(a), Vector3::from(b), Vector3::from(c));
            let face_normal = (b - a).cross(c - a);
            for idx in [i0, i1, i2] {
                sums[idx] += face_normal;
            }
        }

        let normals = sums
            .into_iter()
            .map(|n| {
                if n.magnitude2() > 0.0 {
                    n.normalize().into()
                } else {
                    [0.0, 1.0, 0.0]
                }
            })
            .collect();

        self.normals = Some(normals);
        self
    }

    /// Interleave positions and normals into the vertex format used by the
    /// renderer. Missing normals default to straight up.
    pub fn interleaved(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex3D {
                position,
                normal: self
                    .normals
                    .as_ref()
                    .and_then(|normals| normals.get(i).copied())
                    .unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }

    /// Raw bytes of the index buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
