//! # Object Type Registry
//!
//! Maps a type tag to a factory producing a default instance of that type.
//! The scene loader only ever sees tags, so new shape types become loadable by
//! registering a factory; nothing else needs to change.
//!
//! A process-wide registry holding the built-in shapes is available through
//! [`global`]. Custom shapes are added with [`register_object_type`] before
//! the first load that needs them.

use std::collections::HashMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard};

use lazy_static::lazy_static;

use super::object::GeoObject;
use super::shapes::{Cylinder, Face, Tube};

/// Zero-argument constructor for a registered type
pub type ObjectFactory = Box<dyn Fn() -> Box<dyn GeoObject> + Send + Sync>;

#[derive(Default)]
pub struct ObjectRegistry {
    factories: HashMap<String, ObjectFactory>,
}

impl fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

impl ObjectRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every shape this crate ships
    pub fn with_builtin_shapes() -> Self {
        let mut registry = Self::new();
        registry.register(Face::TYPE_TAG, || Box::new(Face::new()));
        registry.register(Tube::TYPE_TAG, || Box::new(Tube::new()));
        registry.register(Cylinder::TYPE_TAG, || Box::new(Cylinder::new()));
        registry
    }

    /// Store `factory` under `tag`. A previous factory for the tag is replaced.
    pub fn register<F>(&mut self, tag: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn GeoObject> + Send + Sync + 'static,
    {
        let tag = tag.into();
        if self.factories.insert(tag.clone(), Box::new(factory)).is_some() {
            log::debug!("Replaced factory for object type \"{}\"", tag);
        } else {
            log::debug!("Registered object type \"{}\"", tag);
        }
    }

    /// A default-state instance of `tag`, or `None` if it is not registered
    pub fn create(&self, tag: &str) -> Option<Box<dyn GeoObject>> {
        self.factories.get(tag).map(|factory| factory())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: RwLock<ObjectRegistry> =
        RwLock::new(ObjectRegistry::with_builtin_shapes());
}

/// Read access to the process-wide registry
pub fn global() -> RwLockReadGuard<'static, ObjectRegistry> {
    // A poisoned lock still holds a consistent map
    GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register `factory` under `tag` in the process-wide registry
pub fn register_object_type<F>(tag: impl Into<String>, factory: F)
where
    F: Fn() -> Box<dyn GeoObject> + Send + Sync + 'static,
{
    GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .register(tag, factory);
}

/// Instantiate `tag` from the process-wide registry
pub fn create_object(tag: &str) -> Option<Box<dyn GeoObject>> {
    global().create(tag)
}
