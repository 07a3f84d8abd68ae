//! Viewport sizes read from a `winit` window.

use std::sync::Arc;

use camkit_core::{Viewport, ViewportSource};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Reads the viewport from a window's inner size, in logical pixels.
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: Arc<Window>,
}

impl WindowViewport {
    #[must_use]
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl ViewportSource for WindowViewport {
    fn size(&self) -> Viewport {
        logical_viewport(self.window.inner_size(), self.window.scale_factor())
    }
}

/// Converts a physical window size to a logical viewport.
#[must_use]
pub fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let logical = size.to_logical::<f32>(scale_factor);
    Viewport::new(logical.width, logical.height)
}
