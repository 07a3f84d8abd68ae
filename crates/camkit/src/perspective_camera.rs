//! Perspective camera registration and access.

use serde_json::Value;

use crate::cameras::{
    register_camera, remove_camera_of_type, set_active_camera_of_type, with_camera, with_camera_ref,
};
use crate::{CameraKind, Mat4, Perspective, PerspectiveCamera, Result, SceneCamera, Vec3};

/// Builds a perspective camera from a partial configuration and registers it
/// under `name`.
pub fn register_perspective_camera(
    name: impl Into<String>,
    params: &Value,
) -> Result<PerspectiveCameraHandle> {
    let name = name.into();
    register_camera::<Perspective>(&name, params)?;
    Ok(PerspectiveCameraHandle { name })
}

/// Gets a registered perspective camera by name.
#[must_use]
pub fn get_perspective_camera(name: &str) -> Option<PerspectiveCameraHandle> {
    with_perspective_camera_ref(name, |_| PerspectiveCameraHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered perspective camera.
#[derive(Debug, Clone)]
pub struct PerspectiveCameraHandle {
    name: String,
}

impl PerspectiveCameraHandle {
    /// Returns the name of this camera.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the registered camera.
    #[must_use]
    pub fn camera(&self) -> Option<PerspectiveCamera> {
        with_perspective_camera_ref(&self.name, Clone::clone)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Option<Mat4> {
        with_perspective_camera_ref(&self.name, |c| c.projection_matrix())
    }

    /// Places the camera. `rotation` holds XYZ Euler angles in radians.
    pub fn set_pose(&self, position: Vec3, rotation: Vec3) -> &Self {
        with_perspective_camera(&self.name, |c| c.set_pose(position, rotation));
        self
    }

    /// Makes this camera the active camera.
    pub fn set_active(&self) -> Result<()> {
        set_active_camera_of_type(Perspective::TYPE_NAME, &self.name)
    }

    /// Removes this camera from the registry.
    pub fn remove(self) -> Result<()> {
        remove_camera_of_type(Perspective::TYPE_NAME, &self.name)
    }
}

/// Executes a closure with mutable access to a registered perspective camera.
///
/// Returns `None` if the camera does not exist.
pub fn with_perspective_camera<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&mut PerspectiveCamera) -> R,
{
    with_camera(Perspective::TYPE_NAME, name, f)
}

/// Executes a closure with immutable access to a registered perspective camera.
///
/// Returns `None` if the camera does not exist.
pub fn with_perspective_camera_ref<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&PerspectiveCamera) -> R,
{
    with_camera_ref(Perspective::TYPE_NAME, name, f)
}
