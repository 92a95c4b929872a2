//! # Scene Round Trip
//!
//! Builds a small scene of cylinders, faces and a tube, saves it to JSON,
//! loads it back into a fresh set and prints what a renderer would receive.
//!
//! ## Usage
//!
//! Run with: `RUST_LOG=info cargo run --example scene_roundtrip [path]`

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use haggis_solids::prelude::*;

fn build_scene() -> ObjectSet {
    let mut set = ObjectSet::new();

    let mut red = Cylinder::with_dimensions(1.5, 3.0);
    red.state_mut().set_position(-3.0, 0.0, 0.0);
    red.state_mut().set_diffuse_color(Color::RED);
    set.add("redCylinder", Box::new(red));

    let mut blue = Cylinder::with_dimensions(1.0, 2.5);
    blue.state_mut().set_position(0.0, 0.0, 0.0);
    blue.state_mut().set_rotation(45.0, 0.0, 0.0);
    blue.state_mut().set_diffuse_color(Color::BLUE);
    blue.set_tessellation(30, 16);
    set.add("blueCylinder", Box::new(blue));

    let mut green = Cylinder::with_dimensions(0.8, 4.0);
    green.state_mut().set_position(3.0, 0.0, 0.0);
    green.state_mut().set_scale(1.0, 0.5, 1.0);
    green.state_mut().set_diffuse_color(Color::GREEN);
    set.add("greenCylinder", Box::new(green));

    let mut floor = Face::with_elevation(-2.0);
    for (x, z) in [(-6.0, -6.0), (6.0, -6.0), (6.0, 6.0), (-6.0, 6.0)] {
        floor.add_vertex(x, z);
    }
    floor.state_mut().set_diffuse_color(Color::rgb(90, 90, 90));
    floor.state_mut().set_opacity(0.6);
    set.add("floor", Box::new(floor));

    let triangle = Face::with_vertices(
        vec![
            Vector2::new(-1.0, 2.0),
            Vector2::new(1.0, 2.0),
            Vector2::new(0.0, 4.0),
        ],
        1.5,
    );
    set.add("triangle", Box::new(triangle));

    let mut pipe = Tube::with_dimensions(0.4, 0.6, 3.0);
    pipe.state_mut().set_position(0.0, 0.0, -3.0);
    pipe.state_mut().set_rotation(90.0, 0.0, 0.0);
    set.add("pipe", Box::new(pipe));

    set
}

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("haggis_solids_scene.json"));

    let scene = build_scene();
    scene
        .save_to_file(&path)
        .with_context(|| format!("saving scene to {}", path.display()))?;

    let mut reloaded = ObjectSet::new();
    let summary = reloaded
        .load_from_file(&path)
        .with_context(|| format!("loading scene from {}", path.display()))?;

    if summary.loaded != scene.count() {
        bail!(
            "expected {} objects after reload, got {} ({} skipped)",
            scene.count(),
            summary.loaded,
            summary.skipped
        );
    }

    println!("Scene file: {}", path.display());
    for (name, object) in &reloaded {
        let extent = object.world_extent();
        println!(
            "  {:<14} {:<9} radius {:>5.2} height {:>5.2}",
            name,
            object.type_tag(),
            extent.radius,
            extent.height
        );
    }

    let items = reloaded.realize_meshes();
    let triangles: usize = items.iter().map(|item| item.mesh.triangle_count()).sum();
    let vertices: usize = items.iter().map(|item| item.mesh.vertex_count()).sum();
    println!(
        "{} meshes ready: {} vertices, {} triangles",
        items.len(),
        vertices,
        triangles
    );

    Ok(())
}
