//! Camera trait shared by every native camera type.

use std::any::Any;

use glam::{Mat4, Vec3};

/// A built camera that can be registered with a [`Context`](crate::Context).
///
/// Native cameras implement this so the registry can hold cameras of
/// different projection types side by side.
pub trait SceneCamera: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the type name of this camera (e.g. "`OrthographicCamera`").
    fn type_name(&self) -> &'static str;

    /// Returns the projection matrix.
    fn projection_matrix(&self) -> Mat4;

    /// Returns the view matrix.
    fn view_matrix(&self) -> Mat4;

    /// Returns the near clipping plane distance.
    fn near(&self) -> f32;

    /// Returns the far clipping plane distance.
    fn far(&self) -> f32;

    /// Returns the camera position in world space.
    fn position(&self) -> Vec3;

    /// Places the camera. `rotation` holds XYZ Euler angles in radians.
    fn set_pose(&mut self, position: Vec3, rotation: Vec3);

    /// Returns the combined view-projection matrix.
    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
