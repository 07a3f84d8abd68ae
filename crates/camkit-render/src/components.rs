//! Camera component kinds for the native cameras.
//!
//! Each kind ties a parameter type to a native camera. Used with
//! [`ComponentBuilder`](camkit_core::ComponentBuilder), a partial configuration
//! such as
//!
//! ```json
//! { "camera": { "far": 10000 }, "position": { "y": 50 } }
//! ```
//!
//! is merged over viewport-derived defaults and turned into a camera.

use camkit_core::{CameraKind, OrthographicParams, PerspectiveParams, Result, Viewport};

use crate::camera::{OrthographicCamera, PerspectiveCamera};

/// Orthographic camera component.
///
/// Defaults: `near` 1, `far` 1000, and left/right/top/bottom at half the
/// viewport size, so one world unit maps to one pixel.
#[derive(Debug, Clone, Copy)]
pub struct Orthographic;

impl CameraKind for Orthographic {
    const TYPE_NAME: &'static str = "OrthographicCamera";
    type Params = OrthographicParams;
    type Native = OrthographicCamera;

    fn default_params(viewport: Viewport) -> Self::Params {
        OrthographicParams::from_viewport(viewport)
    }

    fn validate(params: &Self::Params) -> Result<()> {
        params.validate()
    }

    fn construct(params: &Self::Params) -> Self::Native {
        OrthographicCamera::new(
            params.left,
            params.right,
            params.top,
            params.bottom,
            params.near,
            params.far,
        )
    }
}

/// Perspective camera component.
///
/// Defaults: `near` 1, `far` 1000, `fov` 75 degrees, `aspect` from the
/// viewport.
#[derive(Debug, Clone, Copy)]
pub struct Perspective;

impl CameraKind for Perspective {
    const TYPE_NAME: &'static str = "PerspectiveCamera";
    type Params = PerspectiveParams;
    type Native = PerspectiveCamera;

    fn default_params(viewport: Viewport) -> Self::Params {
        PerspectiveParams::from_viewport(viewport)
    }

    fn validate(params: &Self::Params) -> Result<()> {
        params.validate()
    }

    fn construct(params: &Self::Params) -> Self::Native {
        PerspectiveCamera::new(params.fov, params.aspect, params.near, params.far)
    }
}

#[cfg(test)]
mod tests {
    use camkit_core::{
        CamkitError, ComponentBuilder, DefaultsPolicy, DefaultsProvider, FixedViewport,
        SceneCamera, SharedViewport,
    };
    use glam::Vec3;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn provider() -> DefaultsProvider {
        DefaultsProvider::new(Box::new(FixedViewport::new(W, H)), DefaultsPolicy::Snapshot)
    }

    fn default_planes() -> OrthographicParams {
        OrthographicParams {
            near: 1.0,
            far: 1000.0,
            left: -W / 2.0,
            right: W / 2.0,
            top: H / 2.0,
            bottom: -H / 2.0,
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let component = ComponentBuilder::<Orthographic>::new()
            .construct(&json!({}), &provider())
            .unwrap();

        let planes = default_planes();
        assert_eq!(component.params().camera, planes);
        assert_eq!(
            component.camera().unwrap().extents(),
            [planes.left, planes.right, planes.top, planes.bottom, planes.near, planes.far]
        );
    }

    #[test]
    fn test_far_override_with_position() {
        let config = json!({ "camera": { "far": 10000 }, "position": { "y": 50 } });
        let component = ComponentBuilder::<Orthographic>::new()
            .construct(&config, &provider())
            .unwrap();

        let expected = OrthographicParams {
            far: 10000.0,
            ..default_planes()
        };
        assert_eq!(component.params().camera, expected);

        let camera = component.camera().unwrap();
        assert_eq!(camera.far, 10000.0);
        assert_eq!(camera.position, Vec3::new(0.0, 50.0, 0.0));
    }

    #[test]
    fn test_caller_config_is_untouched() {
        let config = json!({ "camera": { "near": 2 } });
        let before = config.clone();
        ComponentBuilder::<Orthographic>::new()
            .construct(&config, &provider())
            .unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn test_identical_configs_build_independent_cameras() {
        let config = json!({ "camera": { "left": -10, "right": 10 } });
        let builder = ComponentBuilder::<Orthographic>::new();
        let first = builder.construct(&config, &provider()).unwrap();
        let second = builder.construct(&config, &provider()).unwrap();

        let mut a = first.into_camera().unwrap();
        let b = second.into_camera().unwrap();
        assert_eq!(a, b);

        a.set_pose(Vec3::X, Vec3::ZERO);
        a.far = 1.5;
        assert_eq!(b.position, Vec3::ZERO);
        assert_eq!(b.far, 1000.0);
    }

    #[test]
    fn test_snapshot_defaults_are_stale_after_resize() {
        let viewport = SharedViewport::new(W, H);
        let defaults = DefaultsProvider::new(Box::new(viewport.clone()), DefaultsPolicy::Snapshot);
        viewport.resize(1920.0, 1080.0);

        let component = ComponentBuilder::<Orthographic>::new()
            .construct(&json!({}), &defaults)
            .unwrap();
        assert_eq!(component.camera().unwrap().right, W / 2.0);
    }

    #[test]
    fn test_live_defaults_follow_resize() {
        let viewport = SharedViewport::new(W, H);
        let defaults = DefaultsProvider::new(Box::new(viewport.clone()), DefaultsPolicy::Live);
        viewport.resize(1920.0, 1080.0);

        let component = ComponentBuilder::<Orthographic>::new()
            .construct(&json!({}), &defaults)
            .unwrap();
        let camera = component.camera().unwrap();
        assert_eq!(camera.right, 960.0);
        assert_eq!(camera.bottom, -540.0);
    }

    #[test]
    fn test_degenerate_planes_fail_fast() {
        let result = ComponentBuilder::<Orthographic>::new()
            .construct(&json!({ "camera": { "left": 10, "right": -10 } }), &provider());
        assert!(matches!(
            result,
            Err(CamkitError::DegeneratePlanes { axis: "left/right", .. })
        ));
    }

    #[test]
    fn test_perspective_defaults() {
        let component = ComponentBuilder::<Perspective>::new()
            .construct(&json!({ "camera": { "fov": 60 } }), &provider())
            .unwrap();
        let camera = component.camera().unwrap();
        assert_eq!(camera.fov, 60.0);
        assert!((camera.aspect - W / H).abs() < 1e-6);
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 1000.0);
        assert_eq!(camera.type_name(), Perspective::TYPE_NAME);
    }

    const FIELDS: [&str; 6] = ["left", "right", "top", "bottom", "near", "far"];

    proptest! {
        #[test]
        fn prop_camera_receives_merged_planes_in_order(
            mask in proptest::collection::vec(any::<bool>(), 6),
            values in proptest::collection::vec(-1.0e4f32..1.0e4, 6),
        ) {
            let mut camera = serde_json::Map::new();
            for (i, field) in FIELDS.iter().enumerate() {
                if mask[i] {
                    camera.insert((*field).to_string(), json!(values[i]));
                }
            }
            let config: Value = json!({ "camera": camera });

            // Arbitrary planes may be degenerate; ordering is what is checked here.
            let component = ComponentBuilder::<Orthographic>::new()
                .with_validation(false)
                .construct(&config, &provider())
                .unwrap();

            let merged = component.params().camera;
            let built = component.camera().unwrap();
            prop_assert_eq!(
                built.extents(),
                [merged.left, merged.right, merged.top, merged.bottom, merged.near, merged.far]
            );

            let defaults = default_planes();
            let default_values =
                [defaults.left, defaults.right, defaults.top, defaults.bottom, defaults.near, defaults.far];
            for i in 0..6 {
                let expected = if mask[i] { values[i] } else { default_values[i] };
                prop_assert_eq!(built.extents()[i], expected);
            }
        }
    }
}
