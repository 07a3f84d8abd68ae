//! Native cameras for camkit.
//!
//! This crate provides:
//! - [`OrthographicCamera`] and [`PerspectiveCamera`], the cameras built by
//!   camera components
//! - [`CameraUniforms`], their GPU-facing layout
//! - [`Orthographic`] and [`Perspective`], the component kinds that build them
//! - [`WindowViewport`] for reading viewport defaults from a window

// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod camera;
pub mod components;
pub mod window_viewport;

pub use camera::{CameraUniforms, OrthographicCamera, PerspectiveCamera};
pub use components::{Orthographic, Perspective};
pub use window_viewport::{logical_viewport, WindowViewport};
