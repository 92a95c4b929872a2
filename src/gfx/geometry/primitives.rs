//! # Primitive Shape Generation
//!
//! This module contains functions to generate the parametric solids of a scene.
//! All shapes are centered on the Y axis in a Y-up coordinate system and use
//! counter-clockwise winding for their visible side.

use super::GeometryData;
use crate::config::{MIN_RINGS, MIN_SLICES};
use std::f32::consts::PI;

/// Generate a flat polygon lying at `elevation` on the Y axis
///
/// # Arguments
/// * `vertices` - Polygon corners as (x, z) pairs, in winding order
/// * `elevation` - Y coordinate shared by every corner
///
/// The polygon is fan triangulated from its first corner, so the result is only
/// correct for convex polygons (or polygons that are star-shaped around the
/// first corner). No normals are generated.
///
/// Returns `None` when fewer than three corners are given.
pub fn generate_face(vertices: &[[f32; 2]], elevation: f32) -> Option<GeometryData> {
    if vertices.len() < 3 {
        return None;
    }

    let mut data = GeometryData::new();
    data.reserve(vertices.len(), vertices.len() - 2);

    data.vertices = vertices
        .iter()
        .map(|&[x, z]| [x, elevation, z])
        .collect();

    for i in 1..vertices.len() as u32 - 1 {
        data.push_triangle(0, i, i + 1);
    }

    Some(data)
}

/// Number of triangles [`generate_tube`] emits for the given tessellation
pub fn tube_triangle_count(rings: u32, slices: u32) -> usize {
    let (rings, slices) = (rings as usize, slices as usize);
    // Outer wall + inner wall + top ring + bottom ring
    2 * slices * rings * 2 + 2 * slices * 2
}

/// Number of triangles [`generate_cylinder`] emits for the given tessellation
pub fn cylinder_triangle_count(rings: u32, slices: u32) -> usize {
    let (rings, slices) = (rings as usize, slices as usize);
    2 * slices * rings + 2 * slices
}

fn valid_tessellation(rings: u32, slices: u32) -> bool {
    rings >= MIN_RINGS && slices >= MIN_SLICES
}

/// Vertices in a (rings + 1) x (slices + 1) wall grid, or `None` if they
/// cannot all be addressed by a `u32` index
fn wall_vertex_count(rings: u32, slices: u32) -> Option<u32> {
    rings.checked_add(1)?.checked_mul(slices.checked_add(1)?)
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Unit circle direction for slice `slice` of `slices`
fn slice_direction(slice: u32, slices: u32) -> (f32, f32) {
    let theta = 2.0 * PI * slice as f32 / slices as f32;
    (theta.cos(), theta.sin())
}

/// Emit a (rings + 1) x (slices + 1) grid on a vertical cylinder wall.
///
/// `inward` flips both the normals and the triangle winding so the concave
/// side becomes the visible one.
fn push_wall(
    data: &mut GeometryData,
    radius: f32,
    height: f32,
    rings: u32,
    slices: u32,
    inward: bool,
) {
    let half_height = height * 0.5;
    let base = data.vertex_count() as u32;
    let sign = if inward { -1.0 } else { 1.0 };

    for ring in 0..=rings {
        let y = -half_height + height * ring as f32 / rings as f32;
        for slice in 0..=slices {
            let (cos, sin) = slice_direction(slice, slices);
            data.push_vertex(
                [radius * cos, y, radius * sin],
                [sign * cos, 0.0, sign * sin],
            );
        }
    }

    for ring in 0..rings {
        for slice in 0..slices {
            let current = base + ring * (slices + 1) + slice;
            let next = current + slices + 1;

            if inward {
                data.push_triangle(current, current + 1, next);
                data.push_triangle(current + 1, next + 1, next);
            } else {
                data.push_triangle(current, next, current + 1);
                data.push_triangle(current + 1, next, next + 1);
            }
        }
    }
}

/// Emit a flat annulus between `inner_radius` and `outer_radius` at height `y`.
///
/// Vertices come in (outer, inner) pairs per slice. `up` selects whether the
/// ring faces +Y or -Y.
fn push_annulus(
    data: &mut GeometryData,
    inner_radius: f32,
    outer_radius: f32,
    y: f32,
    slices: u32,
    up: bool,
) {
    let base = data.vertex_count() as u32;
    let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };

    for slice in 0..=slices {
        let (cos, sin) = slice_direction(slice, slices);
        data.push_vertex([outer_radius * cos, y, outer_radius * sin], normal);
        data.push_vertex([inner_radius * cos, y, inner_radius * sin], normal);
    }

    for slice in 0..slices {
        let outer_current = base + slice * 2;
        let inner_current = outer_current + 1;
        let outer_next = outer_current + 2;
        let inner_next = inner_current + 2;

        if up {
            data.push_triangle(outer_current, inner_current, outer_next);
            data.push_triangle(outer_next, inner_current, inner_next);
        } else {
            data.push_triangle(outer_current, outer_next, inner_current);
            data.push_triangle(outer_next, inner_next, inner_current);
        }
    }
}

/// Emit a disc of `radius` at height `y` as a fan around a center vertex.
fn push_disc(data: &mut GeometryData, radius: f32, y: f32, slices: u32, up: bool) {
    let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
    let center = data.push_vertex([0.0, y, 0.0], normal);

    for slice in 0..=slices {
        let (cos, sin) = slice_direction(slice, slices);
        data.push_vertex([radius * cos, y, radius * sin], normal);
    }

    for slice in 0..slices {
        let current = center + 1 + slice;
        let next = current + 1;

        if up {
            data.push_triangle(center, next, current);
        } else {
            data.push_triangle(center, current, next);
        }
    }
}

/// Generate a hollow cylinder (tube) centered at the origin
///
/// # Arguments
/// * `inner_radius` - Radius of the hole
/// * `outer_radius` - Radius of the outside wall
/// * `height` - Extent along Y, from -height/2 to height/2
/// * `rings` - Subdivisions along the height of each wall
/// * `slices` - Subdivisions around the circumference
///
/// The tube is made of four surfaces that do not share vertices, because their
/// normals differ: outer wall, inner wall, top ring and bottom ring, in that
/// order in the vertex and index buffers.
///
/// `inner_radius < outer_radius` is expected but not checked. Returns `None`
/// when a dimension is not a positive number, the tessellation is below
/// one ring / three slices, or the mesh would need more vertices than a `u32`
/// index can address.
pub fn generate_tube(
    inner_radius: f32,
    outer_radius: f32,
    height: f32,
    rings: u32,
    slices: u32,
) -> Option<GeometryData> {
    if !(positive(inner_radius) && positive(outer_radius) && positive(height)) {
        return None;
    }
    if !valid_tessellation(rings, slices) {
        return None;
    }

    // Every index has to fit a u32
    let wall_vertices = wall_vertex_count(rings, slices)?;
    let ring_vertices = slices.checked_add(1)?.checked_mul(2)?;
    let total_vertices = wall_vertices
        .checked_mul(2)?
        .checked_add(ring_vertices.checked_mul(2)?)?;

    let half_height = height * 0.5;
    let mut data = GeometryData::with_normals();
    data.reserve(total_vertices as usize, tube_triangle_count(rings, slices));

    push_wall(&mut data, outer_radius, height, rings, slices, false);
    push_wall(&mut data, inner_radius, height, rings, slices, true);
    push_annulus(&mut data, inner_radius, outer_radius, half_height, slices, true);
    push_annulus(&mut data, inner_radius, outer_radius, -half_height, slices, false);

    Some(data)
}

/// Generate a solid cylinder centered at the origin
///
/// # Arguments
/// * `radius` - Radius of the cylinder
/// * `length` - Extent along Y, from -length/2 to length/2
/// * `rings` - Subdivisions along the side wall
/// * `slices` - Number of circular segments
///
/// Returns `None` for a non-positive radius or length, a tessellation below
/// one ring / three slices, or one too fine for `u32` indices.
pub fn generate_cylinder(radius: f32, length: f32, rings: u32, slices: u32) -> Option<GeometryData> {
    if !(positive(radius) && positive(length)) || !valid_tessellation(rings, slices) {
        return None;
    }

    let cap_vertices = slices.checked_add(2)?.checked_mul(2)?;
    let total_vertices = wall_vertex_count(rings, slices)?.checked_add(cap_vertices)?;

    let half_length = length * 0.5;
    let mut data = GeometryData::with_normals();
    data.reserve(total_vertices as usize, cylinder_triangle_count(rings, slices));

    push_wall(&mut data, radius, length, rings, slices, false);
    push_disc(&mut data, radius, half_length, slices, true);
    push_disc(&mut data, radius, -half_length, slices, false);

    Some(data)
}
