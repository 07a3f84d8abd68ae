//! Orthographic camera registration and access.
//!
//! # Example
//!
//! ```no_run
//! use camkit::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     // Unset planes default to the viewport: left/right at -W/2 and W/2,
//!     // top/bottom at H/2 and -H/2, near 1.
//!     let camera = register_orthographic_camera(
//!         "overview",
//!         &serde_json::json!({ "camera": { "far": 10000 }, "position": { "y": 50 } }),
//!     )?;
//!     println!("{:?}", camera.extents());
//!     Ok(())
//! }
//! ```

use serde_json::Value;

use crate::cameras::{
    register_camera, remove_camera_of_type, set_active_camera_of_type, with_camera, with_camera_ref,
};
use crate::{CameraKind, Mat4, Orthographic, OrthographicCamera, Result, SceneCamera, Vec3};

/// Builds an orthographic camera from a partial configuration, registers it
/// under `name`, and makes it active unless disabled in the options.
pub fn register_orthographic_camera(
    name: impl Into<String>,
    params: &Value,
) -> Result<OrthographicCameraHandle> {
    let name = name.into();
    register_camera::<Orthographic>(&name, params)?;
    Ok(OrthographicCameraHandle { name })
}

/// Gets a registered orthographic camera by name.
#[must_use]
pub fn get_orthographic_camera(name: &str) -> Option<OrthographicCameraHandle> {
    with_orthographic_camera_ref(name, |_| OrthographicCameraHandle {
        name: name.to_string(),
    })
}

/// Handle for a registered orthographic camera.
#[derive(Debug, Clone)]
pub struct OrthographicCameraHandle {
    name: String,
}

impl OrthographicCameraHandle {
    /// Returns the name of this camera.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the registered camera.
    #[must_use]
    pub fn camera(&self) -> Option<OrthographicCamera> {
        with_orthographic_camera_ref(&self.name, Clone::clone)
    }

    /// Returns left, right, top, bottom, near, far.
    #[must_use]
    pub fn extents(&self) -> Option<[f32; 6]> {
        with_orthographic_camera_ref(&self.name, OrthographicCamera::extents)
    }

    /// Returns the far plane.
    #[must_use]
    pub fn far(&self) -> Option<f32> {
        with_orthographic_camera_ref(&self.name, |c| c.far)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Option<Mat4> {
        with_orthographic_camera_ref(&self.name, |c| c.projection_matrix())
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Option<Mat4> {
        with_orthographic_camera_ref(&self.name, |c| c.view_matrix())
    }

    /// Places the camera. `rotation` holds XYZ Euler angles in radians.
    pub fn set_pose(&self, position: Vec3, rotation: Vec3) -> &Self {
        with_orthographic_camera(&self.name, |c| c.set_pose(position, rotation));
        self
    }

    /// Makes this camera the active camera.
    pub fn set_active(&self) -> Result<()> {
        set_active_camera_of_type(Orthographic::TYPE_NAME, &self.name)
    }

    /// Removes this camera from the registry.
    pub fn remove(self) -> Result<()> {
        remove_camera_of_type(Orthographic::TYPE_NAME, &self.name)
    }
}

/// Executes a closure with mutable access to a registered orthographic camera.
///
/// Returns `None` if the camera does not exist.
pub fn with_orthographic_camera<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&mut OrthographicCamera) -> R,
{
    with_camera(Orthographic::TYPE_NAME, name, f)
}

/// Executes a closure with immutable access to a registered orthographic camera.
///
/// Returns `None` if the camera does not exist.
pub fn with_orthographic_camera_ref<F, R>(name: &str, f: F) -> Option<R>
where
    F: FnOnce(&OrthographicCamera) -> R,
{
    with_camera_ref(Orthographic::TYPE_NAME, name, f)
}
