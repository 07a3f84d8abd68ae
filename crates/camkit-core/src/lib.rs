//! Core abstractions for camkit.
//!
//! This crate provides the pieces every camera component is made of:
//! - [`deep_merge`] for layering partial configuration over defaults
//! - [`ViewportSource`] and [`DefaultsProvider`] for viewport-derived defaults
//! - [`CameraKind`] and [`ComponentBuilder`] for turning configuration into
//!   native cameras
//! - [`CameraRegistry`] and the global [`Context`] that built cameras are
//!   registered with

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Projection planes are compared against exact defaults in tests
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod camera;
pub mod component;
pub mod defaults;
pub mod error;
pub mod merge;
pub mod options;
pub mod params;
pub mod registry;
pub mod state;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use camera::SceneCamera;
pub use component::{CameraComponent, CameraKind, ComponentBuilder};
pub use defaults::DefaultsProvider;
pub use error::{CamkitError, Result};
pub use merge::{deep_merge, shallow_merge, MergeFn};
pub use options::{DefaultsPolicy, Options};
pub use params::{ComponentParams, OrthographicParams, PerspectiveParams, Xyz};
pub use registry::CameraRegistry;
pub use state::{with_context, with_context_mut, Context};
pub use viewport::{FixedViewport, SharedViewport, Viewport, ViewportSource};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3};
