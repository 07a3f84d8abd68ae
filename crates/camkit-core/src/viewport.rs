//! Viewport size accessors.
//!
//! Camera defaults are derived from the size of the viewport the camera
//! renders into. The size is read through [`ViewportSource`] so that hosts can
//! supply it from a window, a fixed configuration, or a handle they resize.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Width and height of a viewport in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns width / height, or 1.0 for a zero-height viewport.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        if self.height == 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Returns half the width.
    #[must_use]
    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }

    /// Returns half the height.
    #[must_use]
    pub fn half_height(self) -> f32 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Something that can report the current viewport size.
pub trait ViewportSource: Send + Sync {
    /// Returns the current viewport size.
    fn size(&self) -> Viewport;
}

/// A viewport of constant size.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedViewport(pub Viewport);

impl FixedViewport {
    /// Creates a fixed viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self(Viewport::new(width, height))
    }
}

impl ViewportSource for FixedViewport {
    fn size(&self) -> Viewport {
        self.0
    }
}

/// A viewport whose size is updated by the host, e.g. from resize events.
///
/// Clones share the same underlying size.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport {
    inner: Arc<RwLock<Viewport>>,
}

impl SharedViewport {
    /// Creates a shared viewport with the given initial size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Viewport::new(width, height))),
        }
    }

    /// Updates the size seen by every clone of this handle.
    pub fn resize(&self, width: f32, height: f32) {
        match self.inner.write() {
            Ok(mut size) => *size = Viewport::new(width, height),
            Err(poisoned) => *poisoned.into_inner() = Viewport::new(width, height),
        }
        log::debug!("viewport resized to {width}x{height}");
    }
}

impl ViewportSource for SharedViewport {
    fn size(&self) -> Viewport {
        match self.inner.read() {
            Ok(size) => *size,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
