//! camkit: declarative camera components.
//!
//! A camera component takes a partial configuration, fills in the rest from
//! defaults derived from the current viewport, and builds a native camera.
//!
//! # Quick Start
//!
//! ```no_run
//! use camkit::*;
//!
//! fn main() -> Result<()> {
//!     init_with(Options::default(), FixedViewport::new(800.0, 600.0))?;
//!
//!     // near = 1, far = 10000, left/right = -400/400, top/bottom = 300/-300
//!     let camera = register_orthographic_camera(
//!         "main",
//!         &serde_json::json!({ "camera": { "far": 10000 }, "position": { "y": 50 } }),
//!     )?;
//!     assert_eq!(active_camera_name().as_deref(), Some(camera.name()));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Components
//!
//! - [`Orthographic`] builds an [`OrthographicCamera`]
//! - [`Perspective`] builds a [`PerspectiveCamera`]
//!
//! Other camera types plug in by implementing [`CameraKind`] and going
//! through [`register_camera`] or a [`ComponentBuilder`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

mod cameras;
mod init;
mod orthographic_camera;
mod perspective_camera;

// Re-export core types
pub use camkit_core::{
    deep_merge,
    error::{CamkitError, Result},
    options::{DefaultsPolicy, Options},
    shallow_merge,
    state::{with_context, with_context_mut, Context},
    CameraComponent, CameraKind, CameraRegistry, ComponentBuilder, ComponentParams,
    DefaultsProvider, FixedViewport, Mat4, MergeFn, OrthographicParams, PerspectiveParams,
    SceneCamera, SharedViewport, Vec3, Viewport, ViewportSource, Xyz,
};

// Re-export native camera types
pub use camkit_render::{
    CameraUniforms, Orthographic, OrthographicCamera, Perspective, PerspectiveCamera,
    WindowViewport,
};

pub use cameras::{
    active_camera_name, active_camera_type, build_camera, camera_count, register_camera,
    remove_all_cameras, remove_all_cameras_of_type, remove_camera, remove_camera_of_type,
    set_active_camera, set_active_camera_of_type, with_active_camera, with_camera,
    with_camera_ref,
};
pub use init::{
    default_viewport, init, init_with, is_initialized, refresh_viewport_defaults,
    set_viewport_source, shutdown,
};
pub use orthographic_camera::{
    get_orthographic_camera, register_orthographic_camera, with_orthographic_camera,
    with_orthographic_camera_ref, OrthographicCameraHandle,
};
pub use perspective_camera::{
    get_perspective_camera, register_perspective_camera, with_perspective_camera,
    with_perspective_camera_ref, PerspectiveCameraHandle,
};
