//! Registry of built cameras.

use std::collections::HashMap;

use crate::camera::SceneCamera;
use crate::error::{CamkitError, Result};

/// Registry for every camera built through camkit.
///
/// Cameras are organized by type name and then by instance name. One camera
/// at a time may be marked active.
#[derive(Default)]
pub struct CameraRegistry {
    /// Map from type name -> (instance name -> camera)
    cameras: HashMap<String, HashMap<String, Box<dyn SceneCamera>>>,
    /// (type name, instance name) of the active camera.
    active: Option<(String, String)>,
}

impl CameraRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a camera under `name`.
    ///
    /// Returns an error if a camera of the same type and name already exists.
    pub fn register(&mut self, name: impl Into<String>, camera: Box<dyn SceneCamera>) -> Result<()> {
        let type_name = camera.type_name().to_string();
        let name = name.into();

        let type_map = self.cameras.entry(type_name.clone()).or_default();

        if type_map.contains_key(&name) {
            return Err(CamkitError::CameraExists(type_name, name));
        }

        type_map.insert(name, camera);
        Ok(())
    }

    /// Gets a camera by type and name.
    pub fn get(&self, type_name: &str, name: &str) -> Option<&dyn SceneCamera> {
        self.cameras
            .get(type_name)
            .and_then(|m| m.get(name))
            .map(|c| c.as_ref())
    }

    /// Gets a mutable camera by type and name.
    pub fn get_mut(&mut self, type_name: &str, name: &str) -> Option<&mut Box<dyn SceneCamera>> {
        self.cameras.get_mut(type_name)?.get_mut(name)
    }

    /// Gets a camera of a concrete type by name.
    pub fn get_as<T: SceneCamera>(&self, type_name: &str, name: &str) -> Option<&T> {
        self.get(type_name, name)?.as_any().downcast_ref::<T>()
    }

    /// Returns the type name of the camera registered under `name`.
    ///
    /// Names are only unique within a type, so this fails with
    /// [`CamkitError::AmbiguousCameraName`] when several types use `name`.
    pub fn resolve_type(&self, name: &str) -> Result<&str> {
        let mut matches = self
            .cameras
            .iter()
            .filter(|(_, m)| m.contains_key(name))
            .map(|(type_name, _)| type_name.as_str());
        match (matches.next(), matches.next()) {
            (Some(type_name), None) => Ok(type_name),
            (Some(_), Some(_)) => Err(CamkitError::AmbiguousCameraName(name.to_string())),
            (None, _) => Err(CamkitError::CameraNotFound(name.to_string())),
        }
    }

    /// Checks if a camera with the given type and name exists.
    pub fn contains(&self, type_name: &str, name: &str) -> bool {
        self.cameras
            .get(type_name)
            .is_some_and(|m| m.contains_key(name))
    }

    /// Removes a camera by type and name. Clears the active camera if it was
    /// the one removed.
    pub fn remove(&mut self, type_name: &str, name: &str) -> Option<Box<dyn SceneCamera>> {
        let removed = self.cameras.get_mut(type_name).and_then(|m| m.remove(name));
        if removed.is_some()
            && self
                .active
                .as_ref()
                .is_some_and(|(t, n)| t == type_name && n == name)
        {
            self.active = None;
        }
        removed
    }

    /// Removes all cameras of a given type.
    pub fn remove_all_of_type(&mut self, type_name: &str) {
        self.cameras.remove(type_name);
        if self.active.as_ref().is_some_and(|(t, _)| t == type_name) {
            self.active = None;
        }
    }

    /// Removes all cameras from the registry.
    pub fn clear(&mut self) {
        self.cameras.clear();
        self.active = None;
    }

    /// Marks the camera of the given type and name as active.
    pub fn set_active(&mut self, type_name: &str, name: &str) -> Result<()> {
        if !self.contains(type_name, name) {
            return Err(CamkitError::CameraNotFound(name.to_string()));
        }
        self.active = Some((type_name.to_string(), name.to_string()));
        Ok(())
    }

    /// Returns the type name of the active camera.
    pub fn active_type(&self) -> Option<&str> {
        self.active.as_ref().map(|(type_name, _)| type_name.as_str())
    }

    /// Returns the name of the active camera.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|(_, name)| name.as_str())
    }

    /// Returns the active camera.
    pub fn active(&self) -> Option<&dyn SceneCamera> {
        let (type_name, name) = self.active.as_ref()?;
        self.get(type_name, name)
    }

    /// Returns the total number of registered cameras.
    pub fn len(&self) -> usize {
        self.cameras.values().map(HashMap::len).sum()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.cameras.values().all(HashMap::is_empty)
    }

    /// Returns all cameras of a given type.
    pub fn get_all_of_type(&self, type_name: &str) -> impl Iterator<Item = &dyn SceneCamera> {
        self.cameras
            .get(type_name)
            .into_iter()
            .flat_map(|m| m.values())
            .map(|c| c.as_ref())
    }
}

impl std::fmt::Debug for CameraRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<(&str, &str)> = self
            .cameras
            .iter()
            .flat_map(|(t, m)| m.keys().map(move |n| (t.as_str(), n.as_str())))
            .collect();
        f.debug_struct("CameraRegistry")
            .field("cameras", &names)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BoxCamera, SlabCamera};

    #[test]
    fn test_register_and_get() {
        let mut registry = CameraRegistry::new();
        registry.register("main", Box::new(BoxCamera::new(1.0, 100.0))).unwrap();

        assert!(registry.contains("BoxCamera", "main"));
        assert_eq!(registry.len(), 1);
        let camera: &BoxCamera = registry.get_as("BoxCamera", "main").unwrap();
        assert_eq!(camera.depth, (1.0, 100.0));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = CameraRegistry::new();
        registry.register("main", Box::new(BoxCamera::new(1.0, 100.0))).unwrap();
        let result = registry.register("main", Box::new(BoxCamera::new(2.0, 200.0)));
        assert!(matches!(result, Err(CamkitError::CameraExists(_, _))));
        assert_eq!(registry.get("BoxCamera", "main").unwrap().far(), 100.0);
    }

    #[test]
    fn test_active_camera() {
        let mut registry = CameraRegistry::new();
        assert!(registry.active().is_none());
        assert!(matches!(
            registry.set_active("BoxCamera", "missing"),
            Err(CamkitError::CameraNotFound(_))
        ));

        registry.register("a", Box::new(BoxCamera::new(1.0, 10.0))).unwrap();
        registry.register("b", Box::new(BoxCamera::new(1.0, 20.0))).unwrap();
        registry.set_active("BoxCamera", "b").unwrap();
        assert_eq!(registry.active_name(), Some("b"));
        assert_eq!(registry.active().unwrap().far(), 20.0);

        registry.remove("BoxCamera", "b");
        assert!(registry.active().is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut registry = CameraRegistry::new();
        registry.register("a", Box::new(BoxCamera::new(1.0, 10.0))).unwrap();
        registry.set_active("BoxCamera", "a").unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.active_name().is_none());
        assert_eq!(registry.get_all_of_type("BoxCamera").count(), 0);
    }

    #[test]
    fn test_same_name_across_types() {
        let mut registry = CameraRegistry::new();
        registry.register("main", Box::new(BoxCamera::new(1.0, 10.0))).unwrap();
        registry.register("main", Box::new(SlabCamera::new(1.0, 20.0))).unwrap();
        assert_eq!(registry.len(), 2);

        assert!(matches!(
            registry.resolve_type("main"),
            Err(CamkitError::AmbiguousCameraName(_))
        ));

        registry.set_active("SlabCamera", "main").unwrap();
        assert_eq!(registry.active_type(), Some("SlabCamera"));
        assert_eq!(registry.active().unwrap().far(), 20.0);

        registry.remove("BoxCamera", "main");
        assert_eq!(registry.active_type(), Some("SlabCamera"));
        assert_eq!(registry.resolve_type("main").unwrap(), "SlabCamera");
    }

    #[test]
    fn test_remove_all_of_type() {
        let mut registry = CameraRegistry::new();
        registry.register("a", Box::new(BoxCamera::new(1.0, 10.0))).unwrap();
        registry.register("b", Box::new(BoxCamera::new(1.0, 20.0))).unwrap();
        registry.register("c", Box::new(SlabCamera::new(1.0, 30.0))).unwrap();
        registry.set_active("BoxCamera", "b").unwrap();

        registry.remove_all_of_type("BoxCamera");
        assert_eq!(registry.len(), 1);
        assert!(registry.active().is_none());
        assert_eq!(registry.get_all_of_type("BoxCamera").count(), 0);
        assert!(registry.contains("SlabCamera", "c"));
    }
}
