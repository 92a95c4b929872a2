//! # Object Sets
//!
//! A named collection of scene objects, and its JSON file format.
//!
//! Iteration follows insertion order, which is also the order objects are
//! written in. Loading is forgiving: an entry whose type is not registered or
//! whose document is rejected is skipped and the rest of the scene still
//! loads.

use std::fs;
use std::path::{Path, PathBuf};

use cgmath::Matrix4;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use super::material::Material;
use super::object::GeoObject;
use super::registry::{self, ObjectRegistry};
use crate::config::FORMAT_VERSION;
use crate::error::SceneError;
use crate::gfx::geometry::GeometryData;

/// Outcome of loading a document into a set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Objects in the set after loading
    pub loaded: usize,
    /// Entries that were skipped
    pub skipped: usize,
    /// Entries dropped because a later entry had the same name
    pub replaced: usize,
}

/// How a set is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Indent the JSON output
    pub pretty: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Everything a renderer needs to draw one object
#[derive(Debug, Clone)]
pub struct RenderItem<'a> {
    pub name: &'a str,
    pub mesh: GeometryData,
    /// Object to world transform
    pub transform: Matrix4<f32>,
    pub material: Material,
    pub opacity: f32,
    /// Revision of the object geometry the mesh was generated from
    pub geometry_revision: u64,
}

/// Top level of a saved set. Only `objects` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetDocument {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    object_count: Option<Value>,
    objects: Vec<Value>,
}

/// Named scene objects, owned by the set
#[derive(Debug, Default)]
pub struct ObjectSet {
    objects: IndexMap<String, Box<dyn GeoObject>>,
}

impl ObjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `object` under `name`, taking ownership.
    ///
    /// An object already stored under `name` is replaced and returned; the
    /// name keeps its position in the iteration order.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        object: Box<dyn GeoObject>,
    ) -> Option<Box<dyn GeoObject>> {
        self.objects.insert(name.into(), object)
    }

    pub fn get(&self, name: &str) -> Option<&dyn GeoObject> {
        self.objects.get(name).map(|object| object.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn GeoObject> {
        self.objects.get_mut(name).map(|object| object.as_mut() as &mut dyn GeoObject)
    }

    /// The object under `name` if it is a `T`
    pub fn get_as<T: GeoObject>(&self, name: &str) -> Option<&T> {
        self.get(name)?.downcast_ref::<T>()
    }

    pub fn get_as_mut<T: GeoObject>(&mut self, name: &str) -> Option<&mut T> {
        self.get_mut(name)?.downcast_mut::<T>()
    }

    /// Take `name` out of the set. The order of the remaining objects is kept.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn GeoObject>> {
        self.objects.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Object names in iteration order
    pub fn names(&self) -> Vec<&str> {
        self.objects.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn GeoObject)> {
        self.objects
            .iter()
            .map(|(name, object)| (name.as_str(), object.as_ref()))
    }

    /// Meshes for every visible object that has geometry, in iteration order
    pub fn realize_meshes(&self) -> Vec<RenderItem<'_>> {
        self.iter()
            .filter(|(_, object)| object.state().is_visible())
            .filter_map(|(name, object)| {
                let state = object.state();
                let Some(mesh) = object.generate_mesh() else {
                    log::debug!("Object \"{}\" has no geometry, not rendering it", name);
                    return None;
                };

                Some(RenderItem {
                    name,
                    mesh,
                    transform: state.transform().matrix(),
                    material: *state.material(),
                    opacity: state.opacity(),
                    geometry_revision: state.geometry_revision(),
                })
            })
            .collect()
    }

    /// The whole set as a JSON document
    pub fn to_document(&self) -> Value {
        let objects: Vec<Value> = self
            .objects
            .iter()
            .map(|(name, object)| {
                let mut doc = object.to_document();
                if let Value::Object(map) = &mut doc {
                    map.insert("name".into(), json!(name));
                }
                doc
            })
            .collect();

        json!({
            "version": FORMAT_VERSION,
            "objectCount": objects.len(),
            "objects": objects,
        })
    }

    /// Replace the contents of the set with the objects described by `doc`.
    ///
    /// Entries that cannot be turned into objects are skipped. An entry whose
    /// name repeats an earlier one replaces it. The set is only modified once
    /// the document has been accepted as a whole.
    pub fn load_document(
        &mut self,
        doc: &Value,
        registry: &ObjectRegistry,
    ) -> Result<LoadSummary, SceneError> {
        let document = SetDocument::deserialize(doc)
            .map_err(|e| SceneError::malformed(format!("not an object set: {e}")))?;

        if let Some(version) = document.version.as_ref().and_then(Value::as_str) {
            if version != FORMAT_VERSION {
                log::warn!(
                    "Loading object set version {} with reader version {}",
                    version,
                    FORMAT_VERSION
                );
            }
        }

        let mut objects = IndexMap::with_capacity(document.objects.len());
        let mut summary = LoadSummary::default();

        for (index, entry) in document.objects.iter().enumerate() {
            match Self::load_entry(entry, registry) {
                Ok(object) => {
                    let name = entry
                        .get("name")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                        .unwrap_or_else(|| format!("object_{index}"));
                    if objects.insert(name, object).is_some() {
                        log::warn!("Object set entry {} replaces an earlier entry", index);
                        summary.replaced += 1;
                    } else {
                        summary.loaded += 1;
                    }
                }
                Err(err) => {
                    log::warn!("Skipping object set entry {}: {}", index, err);
                    summary.skipped += 1;
                }
            }
        }

        let declared = document.object_count.as_ref().and_then(Value::as_u64);
        if let Some(declared) = declared.filter(|&n| n != document.objects.len() as u64) {
            log::warn!(
                "Object set declares {} objects but contains {}",
                declared,
                document.objects.len()
            );
        }

        self.objects = objects;
        Ok(summary)
    }

    fn load_entry(entry: &Value, registry: &ObjectRegistry) -> Result<Box<dyn GeoObject>, SceneError> {
        if !entry.is_object() {
            return Err(SceneError::malformed("entry is not an object"));
        }

        let tag = entry.get("type").and_then(Value::as_str).unwrap_or_default();
        let mut object = registry
            .create(tag)
            .ok_or_else(|| SceneError::UnknownType(tag.to_owned()))?;
        object.from_document(entry)?;
        Ok(object)
    }

    /// Write the set to `path` as indented JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        self.save_to_file_with(path, SaveOptions::default())
    }

    /// Write the set to `path`.
    ///
    /// The document goes to a temporary file next to `path` that is then
    /// renamed over it, so a failed save leaves an existing file untouched.
    pub fn save_to_file_with(
        &self,
        path: impl AsRef<Path>,
        options: SaveOptions,
    ) -> Result<(), SceneError> {
        let path = path.as_ref();
        let doc = self.to_document();
        let contents = if options.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };

        let tmp = temp_path(path);
        if let Err(err) = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(SceneError::io(path, err));
        }

        log::info!("Saved {} objects to {}", self.count(), path.display());
        Ok(())
    }

    /// Load `path` using the process-wide registry. See
    /// [`load_from_file_with`](Self::load_from_file_with).
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, SceneError> {
        let registry = registry::global();
        self.load_from_file_with(path, &registry)
    }

    /// Replace the contents of the set with the objects stored in `path`.
    ///
    /// On an I/O or parse error the set is left as it was.
    pub fn load_from_file_with(
        &mut self,
        path: impl AsRef<Path>,
        registry: &ObjectRegistry,
    ) -> Result<LoadSummary, SceneError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SceneError::io(path, e))?;
        let doc: Value = serde_json::from_str(&contents)?;

        let summary = self.load_document(&doc, registry)?;
        log::info!(
            "Loaded {} objects from {} ({} skipped)",
            summary.loaded,
            path.display(),
            summary.skipped
        );
        Ok(summary)
    }
}

impl<'a> IntoIterator for &'a ObjectSet {
    type Item = (&'a str, &'a dyn GeoObject);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
