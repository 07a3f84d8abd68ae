//! Initialization and lifecycle management for camkit.

use crate::{CamkitError, FixedViewport, Options, Result, Viewport, ViewportSource};

/// Initializes camkit with default options and a fixed 1280x720 viewport.
///
/// This must be called before any other camkit functions.
///
/// # Errors
///
/// Returns an error if camkit has already been initialized.
///
/// # Example
///
/// ```no_run
/// use camkit::*;
///
/// fn main() -> Result<()> {
///     init()?;
///     let camera = register_orthographic_camera(
///         "main",
///         &serde_json::json!({ "camera": { "far": 10000 }, "position": { "y": 50 } }),
///     )?;
///     assert_eq!(camera.far(), Some(10000.0));
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    init_with(Options::default(), FixedViewport::default())
}

/// Initializes camkit with the given options, reading camera defaults from
/// `viewport`.
pub fn init_with(options: Options, viewport: impl ViewportSource + 'static) -> Result<()> {
    let _ = env_logger::try_init();
    camkit_core::state::init_context(options, Box::new(viewport))?;
    log::info!("camkit initialized");
    Ok(())
}

/// Returns whether camkit has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    camkit_core::state::is_initialized()
}

/// Shuts down camkit, dropping every registered camera.
///
/// After calling this, [`init()`] may be called again.
pub fn shutdown() {
    camkit_core::state::shutdown_context();
    log::info!("camkit shut down");
}

/// Replaces the viewport camera defaults are derived from.
pub fn set_viewport_source(viewport: impl ViewportSource + 'static) -> Result<()> {
    camkit_core::state::try_with_context_mut(|ctx| ctx.set_viewport_source(Box::new(viewport)))
        .ok_or(CamkitError::NotInitialized)
}

/// Re-reads the viewport for snapshot defaults and returns the new size.
pub fn refresh_viewport_defaults() -> Result<Viewport> {
    camkit_core::state::try_with_context_mut(|ctx| ctx.defaults.refresh())
        .ok_or(CamkitError::NotInitialized)
}

/// Returns the viewport camera defaults are currently derived from.
pub fn default_viewport() -> Result<Viewport> {
    camkit_core::state::try_with_context(|ctx| ctx.defaults.viewport())
        .ok_or(CamkitError::NotInitialized)
}
