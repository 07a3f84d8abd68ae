//! Registration and lookup of cameras in the global context.

use serde_json::Value;

use crate::{CameraKind, CamkitError, Result, SceneCamera};
use camkit_core::state::{try_with_context, try_with_context_mut};

/// Builds a camera of kind `K` from a partial configuration and registers it
/// under `name`. Returns the built camera.
pub fn register_camera<K: CameraKind>(name: &str, params: &Value) -> Result<K::Native> {
    try_with_context_mut(|ctx| ctx.create_camera::<K>(name, params))
        .ok_or(CamkitError::NotInitialized)?
}

/// Builds a camera of kind `K` from a partial configuration without
/// registering it.
pub fn build_camera<K: CameraKind>(params: &Value) -> Result<K::Native> {
    let mut component = try_with_context(|ctx| ctx.construct::<K>(params))
        .ok_or(CamkitError::NotInitialized)??;
    match component.camera() {
        Some(camera) => Ok(camera.clone()),
        None => Ok(component.build()?.clone()),
    }
}

/// Makes the camera registered under `name` the active camera.
///
/// Fails with [`CamkitError::AmbiguousCameraName`] if cameras of several
/// types share `name`; use [`set_active_camera_of_type`] then.
pub fn set_active_camera(name: &str) -> Result<()> {
    try_with_context_mut(|ctx| {
        let type_name = ctx.registry.resolve_type(name)?.to_string();
        ctx.registry.set_active(&type_name, name)
    })
    .ok_or(CamkitError::NotInitialized)?
}

/// Makes the camera of the given type and name the active camera.
pub fn set_active_camera_of_type(type_name: &str, name: &str) -> Result<()> {
    try_with_context_mut(|ctx| ctx.registry.set_active(type_name, name))
        .ok_or(CamkitError::NotInitialized)?
}

/// Returns the name of the active camera.
#[must_use]
pub fn active_camera_name() -> Option<String> {
    try_with_context(|ctx| ctx.registry.active_name().map(str::to_string)).flatten()
}

/// Executes a closure with the active camera.
///
/// Returns `None` if there is no active camera.
pub fn with_active_camera<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&dyn SceneCamera) -> R,
{
    try_with_context(|ctx| ctx.registry.active().map(f)).flatten()
}

/// Returns the type name of the active camera.
#[must_use]
pub fn active_camera_type() -> Option<String> {
    try_with_context(|ctx| ctx.registry.active_type().map(str::to_string)).flatten()
}

/// Removes the camera registered under `name`, whatever its type.
///
/// Fails with [`CamkitError::AmbiguousCameraName`] if cameras of several
/// types share `name`; use [`remove_camera_of_type`] then.
pub fn remove_camera(name: &str) -> Result<()> {
    try_with_context_mut(|ctx| {
        let type_name = ctx.registry.resolve_type(name)?.to_string();
        ctx.registry.remove(&type_name, name);
        log::info!("removed {type_name} '{name}'");
        Ok(())
    })
    .ok_or(CamkitError::NotInitialized)?
}

/// Removes the camera of the given type and name.
pub fn remove_camera_of_type(type_name: &str, name: &str) -> Result<()> {
    try_with_context_mut(|ctx| {
        ctx.registry
            .remove(type_name, name)
            .ok_or_else(|| CamkitError::CameraNotFound(name.to_string()))?;
        log::info!("removed {type_name} '{name}'");
        Ok(())
    })
    .ok_or(CamkitError::NotInitialized)?
}

/// Removes every registered camera of the given type.
pub fn remove_all_cameras_of_type(type_name: &str) {
    try_with_context_mut(|ctx| ctx.registry.remove_all_of_type(type_name));
}

/// Removes every registered camera.
pub fn remove_all_cameras() {
    try_with_context_mut(|ctx| ctx.registry.clear());
}

/// Returns the number of registered cameras.
#[must_use]
pub fn camera_count() -> usize {
    try_with_context(|ctx| ctx.registry.len()).unwrap_or(0)
}

/// Executes a closure with mutable access to a registered camera of type `T`.
///
/// Returns `None` if no such camera exists.
pub fn with_camera<T, F, R>(type_name: &str, name: &str, f: F) -> Option<R>
where
    T: SceneCamera,
    F: FnOnce(&mut T) -> R,
{
    try_with_context_mut(|ctx| {
        ctx.registry
            .get_mut(type_name, name)
            .and_then(|c| c.as_any_mut().downcast_mut::<T>())
            .map(f)
    })
    .flatten()
}

/// Executes a closure with immutable access to a registered camera of type `T`.
///
/// Returns `None` if no such camera exists.
pub fn with_camera_ref<T, F, R>(type_name: &str, name: &str, f: F) -> Option<R>
where
    T: SceneCamera,
    F: FnOnce(&T) -> R,
{
    try_with_context(|ctx| ctx.registry.get_as::<T>(type_name, name).map(f)).flatten()
}
