//! Minimal camera kinds used by unit tests in this crate.

use std::any::Any;

use glam::{Mat4, Vec3};

use crate::camera::SceneCamera;
use crate::component::CameraKind;
use crate::error::Result;
use crate::params::{OrthographicParams, PerspectiveParams};
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxCamera {
    pub depth: (f32, f32),
    pub position: Vec3,
    pub rotation: Vec3,
}

impl BoxCamera {
    pub fn new(near: f32, far: f32) -> Self {
        Self {
            depth: (near, far),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

impl SceneCamera for BoxCamera {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        BoxKind::TYPE_NAME
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    fn near(&self) -> f32 {
        self.depth.0
    }

    fn far(&self) -> f32 {
        self.depth.1
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
    }
}

pub struct BoxKind;

impl CameraKind for BoxKind {
    const TYPE_NAME: &'static str = "BoxCamera";
    type Params = OrthographicParams;
    type Native = BoxCamera;

    fn default_params(viewport: Viewport) -> Self::Params {
        OrthographicParams::from_viewport(viewport)
    }

    fn validate(params: &Self::Params) -> Result<()> {
        params.validate()
    }

    fn construct(params: &Self::Params) -> Self::Native {
        BoxCamera::new(params.near, params.far)
    }
}

/// Second camera type, so tests can reuse a name across types.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabCamera {
    pub depth: (f32, f32),
    pub position: Vec3,
}

impl SlabCamera {
    pub fn new(near: f32, far: f32) -> Self {
        Self {
            depth: (near, far),
            position: Vec3::ZERO,
        }
    }
}

impl SceneCamera for SlabCamera {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        SlabKind::TYPE_NAME
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    fn near(&self) -> f32 {
        self.depth.0
    }

    fn far(&self) -> f32 {
        self.depth.1
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_pose(&mut self, position: Vec3, _rotation: Vec3) {
        self.position = position;
    }
}

pub struct SlabKind;

impl CameraKind for SlabKind {
    const TYPE_NAME: &'static str = "SlabCamera";
    type Params = PerspectiveParams;
    type Native = SlabCamera;

    fn default_params(viewport: Viewport) -> Self::Params {
        PerspectiveParams::from_viewport(viewport)
    }

    fn validate(params: &Self::Params) -> Result<()> {
        params.validate()
    }

    fn construct(params: &Self::Params) -> Self::Native {
        SlabCamera::new(params.near, params.far)
    }
}
