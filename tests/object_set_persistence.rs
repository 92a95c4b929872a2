//! File round trips of object sets.

use std::fs;

use haggis_solids::prelude::*;
use serde_json::json;
use tempfile::tempdir;

const EPSILON: f32 = 1e-5;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn demo_scene() -> ObjectSet {
    let mut set = ObjectSet::new();

    let mut red = Cylinder::with_dimensions(1.5, 3.0);
    red.state_mut().set_position(-2.0, 0.0, 0.0);
    red.state_mut().set_rotation(0.0, 0.0, 30.0);
    red.state_mut().set_diffuse_color(Color::RED);
    set.add("redCylinder", Box::new(red));

    let mut blue = Cylinder::with_dimensions(1.0, 2.5);
    blue.state_mut().set_position(2.0, 1.0, 0.0);
    blue.state_mut().set_rotation(45.0, 0.0, 0.0);
    blue.state_mut().set_diffuse_color(Color::BLUE);
    blue.set_tessellation(30, 16);
    set.add("blueCylinder", Box::new(blue));

    let mut floor = Face::with_elevation(1.0);
    floor.add_vertex(-2.0, -2.0);
    floor.add_vertex(2.0, -2.0);
    floor.add_vertex(2.0, 2.0);
    floor.add_vertex(-2.0, 2.0);
    floor.state_mut().set_opacity(0.4);
    set.add("floor", Box::new(floor));

    let triangle = Face::with_vertices(
        vec![
            Vector2::new(-1.0, -1.0),
            Vector2::new(1.0, -1.0),
            Vector2::new(0.0, 1.0),
        ],
        0.5,
    );
    set.add("triangle", Box::new(triangle));

    let mut pipe = Tube::with_dimensions(0.3, 0.45, 2.2).with_tessellation(6, 18);
    pipe.state_mut().set_scale(1.0, 2.0, 1.0);
    pipe.state_mut().set_specular_color(Color::rgba(10, 20, 30, 128));
    pipe.state_mut().set_shininess(12.5);
    pipe.state_mut().set_visible(false);
    set.add("pipe", Box::new(pipe));

    set
}

fn assert_same_state(a: &ObjectState, b: &ObjectState) {
    for (x, y) in [
        (a.position(), b.position()),
        (a.rotation(), b.rotation()),
        (a.scale(), b.scale()),
    ] {
        assert!(approx(x.x, y.x) && approx(x.y, y.y) && approx(x.z, y.z));
    }
    assert_eq!(a.diffuse_color(), b.diffuse_color());
    assert_eq!(a.ambient_color(), b.ambient_color());
    assert_eq!(a.specular_color(), b.specular_color());
    assert!(approx(a.shininess(), b.shininess()));
    assert_eq!(a.is_visible(), b.is_visible());
    assert!(approx(a.opacity(), b.opacity()));
}

#[test]
fn save_and_load_round_trip() {
    init_logging();
    let dir = tempdir().unwrap();
    let file = dir.path().join("round_trip.json");
    let original = demo_scene();
    original.save_to_file(&file).unwrap();

    let mut loaded = ObjectSet::new();
    let summary = loaded.load_from_file(&file).unwrap();
    assert_eq!(summary, LoadSummary { loaded: 5, skipped: 0, replaced: 0 });
    assert_eq!(loaded.count(), summary.loaded);
    assert_eq!(loaded.names(), original.names());

    for ((name, a), (_, b)) in original.iter().zip(loaded.iter()) {
        assert_eq!(a.type_tag(), b.type_tag(), "{name}");
        assert_same_state(a.state(), b.state());
    }

    let blue = loaded.get_as::<Cylinder>("blueCylinder").unwrap();
    assert_eq!((blue.radius(), blue.length()), (1.0, 2.5));
    assert_eq!((blue.rings(), blue.slices()), (30, 16));

    let triangle = loaded.get_as::<Face>("triangle").unwrap();
    assert_eq!(triangle.elevation(), 0.5);
    assert_eq!(triangle.vertices()[2], Vector2::new(0.0, 1.0));

    let pipe = loaded.get_as::<Tube>("pipe").unwrap();
    assert!(approx(pipe.inner_radius(), 0.3));
    assert!(approx(pipe.outer_radius(), 0.45));
    assert!(approx(pipe.height(), 2.2));
    assert_eq!((pipe.rings(), pipe.slices()), (6, 18));
}

#[test]
fn compact_output_loads_the_same() {
    init_logging();
    let dir = tempdir().unwrap();
    let file = dir.path().join("compact.json");
    demo_scene()
        .save_to_file_with(&file, SaveOptions { pretty: false })
        .unwrap();

    let contents = fs::read_to_string(&file).unwrap();
    assert!(!contents.contains('\n'));

    let mut loaded = ObjectSet::new();
    assert_eq!(loaded.load_from_file(&file).unwrap().loaded, 5);
}

#[test]
fn unregistered_middle_entry_is_skipped() {
    init_logging();
    let dir = tempdir().unwrap();
    let file = dir.path().join("partial.json");
    let doc = json!({
        "version": "1.0",
        "objectCount": 3,
        "objects": [
            { "name": "first", "type": "Tube", "tube": { "height": 3.0 } },
            { "name": "mystery", "type": "Torus", "torus": { "major": 2.0 } },
            { "name": "last", "type": "Face", "face": { "elevation": -1.0,
              "vertices": [{ "x": 0, "z": 0 }, { "x": 1, "z": 0 }, { "x": 0, "z": 1 }] } },
        ]
    });
    fs::write(&file, serde_json::to_string(&doc).unwrap()).unwrap();

    let mut set = ObjectSet::new();
    let summary = set.load_from_file(&file).unwrap();
    assert_eq!(summary, LoadSummary { loaded: 2, skipped: 1, replaced: 0 });
    assert_eq!(set.names(), vec!["first", "last"]);
    assert_eq!(set.get_as::<Face>("last").unwrap().vertex_count(), 3);
}

#[test]
fn custom_shape_loads_once_registered() {
    init_logging();

    #[derive(Debug, Default)]
    struct Marker {
        state: ObjectState,
        size: f32,
    }

    impl GeoObject for Marker {
        fn type_tag(&self) -> &'static str {
            "Marker"
        }
        fn state(&self) -> &ObjectState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut ObjectState {
            &mut self.state
        }
        fn shape_key(&self) -> &'static str {
            "marker"
        }
        fn shape_document(&self) -> serde_json::Value {
            json!({ "size": self.size })
        }
        fn read_shape_document(&mut self, block: &serde_json::Value) {
            if let Some(size) = block.get("size").and_then(serde_json::Value::as_f64) {
                self.size = size as f32;
            }
        }
        fn generate_mesh(&self) -> Option<GeometryData> {
            let s = self.size;
            generate_face(&[[-s, -s], [s, -s], [s, s], [-s, s]], 0.0)
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    let dir = tempdir().unwrap();
    let file = dir.path().join("custom.json");
    let mut set = ObjectSet::new();
    set.add("m", Box::new(Marker { size: 0.25, ..Default::default() }));
    set.save_to_file(&file).unwrap();

    let mut registry = ObjectRegistry::with_builtin_shapes();
    let mut loaded = ObjectSet::new();
    assert_eq!(loaded.load_from_file_with(&file, &registry).unwrap().skipped, 1);

    registry.register("Marker", || Box::new(Marker::default()));
    assert_eq!(loaded.load_from_file_with(&file, &registry).unwrap().loaded, 1);
    assert_eq!(loaded.get_as::<Marker>("m").unwrap().size, 0.25);
}

#[test]
fn failed_load_keeps_current_objects() {
    init_logging();
    let mut set = demo_scene();

    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        set.load_from_file(&missing),
        Err(SceneError::Io { .. })
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(
        set.load_from_file(&garbage),
        Err(SceneError::Json(_))
    ));

    assert_eq!(set.count(), 5);
}

#[test]
fn failed_save_keeps_existing_file() {
    init_logging();
    let dir = tempdir().unwrap();
    let file = dir.path().join("unwritable.json");
    fs::write(&file, "previous").unwrap();

    // A regular file cannot be used as a directory
    let bad_target = file.join("child.json");
    assert!(demo_scene().save_to_file(&bad_target).is_err());
    assert_eq!(fs::read_to_string(&file).unwrap(), "previous");
}

#[test]
fn save_replaces_existing_file_without_leftovers() {
    init_logging();
    let dir = tempdir().unwrap();
    let file = dir.path().join("scene.json");
    fs::write(&file, "previous").unwrap();

    demo_scene().save_to_file(&file).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("scene.json")]);

    let mut loaded = ObjectSet::new();
    assert_eq!(loaded.load_from_file(&file).unwrap().loaded, 5);
}
