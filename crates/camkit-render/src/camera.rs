//! Native cameras.

use std::any::Any;

use camkit_core::SceneCamera;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Builds the camera-to-world transform from a position and XYZ Euler angles.
fn world_transform(position: Vec3, rotation: Vec3) -> Mat4 {
    let orientation = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_rotation_translation(orientation, position)
}

/// A camera with an orthographic projection.
///
/// The viewing volume is the box bounded by the six planes, in camera space,
/// looking down -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// Left plane.
    pub left: f32,
    /// Right plane.
    pub right: f32,
    /// Top plane.
    pub top: f32,
    /// Bottom plane.
    pub bottom: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl OrthographicCamera {
    /// Creates an orthographic camera at the origin.
    ///
    /// Argument order is left, right, top, bottom, near, far.
    #[must_use]
    pub fn new(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            near,
            far,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Returns the planes in constructor order: left, right, top, bottom,
    /// near, far.
    #[must_use]
    pub fn extents(&self) -> [f32; 6] {
        [
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.near,
            self.far,
        ]
    }

    /// Returns the width of the viewing volume.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the height of the viewing volume.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

impl SceneCamera for OrthographicCamera {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "OrthographicCamera"
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    fn view_matrix(&self) -> Mat4 {
        world_transform(self.position, self.rotation).inverse()
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
    }
}

/// A camera with a perspective projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl PerspectiveCamera {
    /// Creates a perspective camera at the origin.
    #[must_use]
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Returns the field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fov.to_radians()
    }
}

impl SceneCamera for PerspectiveCamera {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "PerspectiveCamera"
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_radians(), self.aspect, self.near, self.far)
    }

    fn view_matrix(&self) -> Mat4 {
        world_transform(self.position, self.rotation).inverse()
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
    }
}

/// GPU uniforms for a camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// World-to-clip matrix.
    pub view_projection: [[f32; 4]; 4],
    /// Camera position (w = 1).
    pub position: [f32; 4],
}

impl CameraUniforms {
    /// Captures the current matrices of any camera.
    #[must_use]
    pub fn from_camera(camera: &dyn SceneCamera) -> Self {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: (projection * view).to_cols_array_2d(),
            position: camera.position().extend(1.0).to_array(),
        }
    }
}
