//! Typed camera component parameters.
//!
//! Parameters arrive as partial JSON trees, are merged over defaults, and are
//! then read into the types in this module.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{CamkitError, Result};
use crate::viewport::Viewport;

/// A three-component value addressed by axis name.
///
/// Unlike `glam::Vec3`, this serializes as `{x, y, z}` so that a single axis
/// can be overridden in a partial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// All components zero.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Xyz> for Vec3 {
    fn from(v: Xyz) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Xyz {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Parameters shared by every camera component, plus the camera-specific
/// projection parameters under `camera`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentParams<C> {
    /// Whether the camera is built as soon as the component is constructed.
    pub build: bool,
    /// Camera position in world space.
    pub position: Xyz,
    /// Camera rotation as XYZ Euler angles in radians.
    pub rotation: Xyz,
    /// Projection parameters.
    pub camera: C,
}

impl<C> ComponentParams<C> {
    /// Wraps projection parameters with the base component defaults.
    pub fn with_camera(camera: C) -> Self {
        Self {
            build: true,
            position: Xyz::ZERO,
            rotation: Xyz::ZERO,
            camera,
        }
    }
}

/// The six planes of an orthographic viewing volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicParams {
    pub near: f32,
    pub far: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl OrthographicParams {
    /// Default planes for a viewport: one world unit per pixel, centered on
    /// the view axis, depth range `[1, 1000]`.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            near: 1.0,
            far: 1000.0,
            left: -viewport.half_width(),
            right: viewport.half_width(),
            top: viewport.half_height(),
            bottom: -viewport.half_height(),
        }
    }

    /// Checks that every plane is finite and each opposing pair is ordered.
    pub fn validate(&self) -> Result<()> {
        check_finite("near", self.near)?;
        check_finite("far", self.far)?;
        check_finite("left", self.left)?;
        check_finite("right", self.right)?;
        check_finite("top", self.top)?;
        check_finite("bottom", self.bottom)?;
        check_ordered("near/far", self.near, self.far)?;
        check_ordered("left/right", self.left, self.right)?;
        check_ordered("bottom/top", self.bottom, self.top)
    }
}

/// Parameters of a perspective viewing frustum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveParams {
    pub near: f32,
    pub far: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Width / height.
    pub aspect: f32,
}

impl PerspectiveParams {
    /// Default frustum for a viewport: 75 degree vertical field of view at the
    /// viewport's aspect ratio, depth range `[1, 1000]`.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            near: 1.0,
            far: 1000.0,
            fov: 75.0,
            aspect: viewport.aspect_ratio(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_finite("near", self.near)?;
        check_finite("far", self.far)?;
        check_finite("fov", self.fov)?;
        check_finite("aspect", self.aspect)?;
        if self.near <= 0.0 {
            return Err(CamkitError::InvalidField {
                field: "near",
                reason: "must be positive for a perspective projection",
            });
        }
        if self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(CamkitError::InvalidField {
                field: "fov",
                reason: "must be between 0 and 180 degrees",
            });
        }
        if self.aspect <= 0.0 {
            return Err(CamkitError::InvalidField {
                field: "aspect",
                reason: "must be positive",
            });
        }
        check_ordered("near/far", self.near, self.far)
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CamkitError::NonFinite(field))
    }
}

fn check_ordered(axis: &'static str, min: f32, max: f32) -> Result<()> {
    if min < max {
        Ok(())
    } else {
        Err(CamkitError::DegeneratePlanes { axis, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthographic_defaults_from_viewport() {
        let params = OrthographicParams::from_viewport(Viewport::new(800.0, 600.0));
        assert_eq!(
            params,
            OrthographicParams {
                near: 1.0,
                far: 1000.0,
                left: -400.0,
                right: 400.0,
                top: 300.0,
                bottom: -300.0,
            }
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_orthographic_validation_rejects_swapped_planes() {
        let mut params = OrthographicParams::from_viewport(Viewport::new(800.0, 600.0));
        params.near = 2000.0;
        assert!(matches!(
            params.validate(),
            Err(CamkitError::DegeneratePlanes { axis: "near/far", .. })
        ));

        let mut params = OrthographicParams::from_viewport(Viewport::new(800.0, 600.0));
        params.left = params.right;
        assert!(matches!(
            params.validate(),
            Err(CamkitError::DegeneratePlanes { axis: "left/right", .. })
        ));

        let mut params = OrthographicParams::from_viewport(Viewport::new(800.0, 600.0));
        std::mem::swap(&mut params.top, &mut params.bottom);
        assert!(matches!(
            params.validate(),
            Err(CamkitError::DegeneratePlanes { axis: "bottom/top", .. })
        ));
    }

    #[test]
    fn test_orthographic_validation_rejects_nan() {
        let mut params = OrthographicParams::from_viewport(Viewport::default());
        params.top = f32::NAN;
        assert!(matches!(params.validate(), Err(CamkitError::NonFinite("top"))));
    }

    #[test]
    fn test_perspective_defaults_and_validation() {
        let params = PerspectiveParams::from_viewport(Viewport::new(1600.0, 800.0));
        assert_eq!(params.fov, 75.0);
        assert!((params.aspect - 2.0).abs() < 1e-6);
        assert!(params.validate().is_ok());

        let mut bad = params;
        bad.near = 0.0;
        assert!(matches!(
            bad.validate(),
            Err(CamkitError::InvalidField { field: "near", .. })
        ));

        let mut bad = params;
        bad.fov = 180.0;
        assert!(matches!(
            bad.validate(),
            Err(CamkitError::InvalidField { field: "fov", .. })
        ));
    }

    #[test]
    fn test_xyz_serializes_by_axis() {
        let value = serde_json::to_value(Xyz::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(value, serde_json::json!({ "x": 1.0, "y": 2.0, "z": 3.0 }));
        assert_eq!(Vec3::from(Xyz::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }
}
