//! Camera context and global state management.

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::camera::SceneCamera;
use crate::component::{CameraComponent, CameraKind, ComponentBuilder};
use crate::defaults::DefaultsProvider;
use crate::error::{CamkitError, Result};
use crate::options::Options;
use crate::registry::CameraRegistry;
use crate::viewport::{FixedViewport, ViewportSource};

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// Owns the registered cameras and the defaults they are built from.
///
/// A `Context` can be used on its own; the free functions in this module
/// manage one process-wide instance.
#[derive(Debug)]
pub struct Context {
    /// Whether the global context has been initialized.
    pub initialized: bool,

    /// The camera registry.
    pub registry: CameraRegistry,

    /// Global options.
    pub options: Options,

    /// Source of viewport-derived defaults.
    pub defaults: DefaultsProvider,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Options::default(), Box::new(FixedViewport::default()))
    }
}

impl Context {
    /// Creates a context reading the viewport from `source`.
    pub fn new(options: Options, source: Box<dyn ViewportSource>) -> Self {
        let defaults = DefaultsProvider::new(source, options.defaults_policy);
        Self {
            initialized: false,
            registry: CameraRegistry::new(),
            options,
            defaults,
        }
    }

    /// Returns a builder for `K` configured by this context's options.
    pub fn builder<K: CameraKind>(&self) -> ComponentBuilder<K> {
        ComponentBuilder::new().with_validation(self.options.validate_params)
    }

    /// Creates a camera component from a partial configuration.
    pub fn construct<K: CameraKind>(&self, params: &Value) -> Result<CameraComponent<K>> {
        self.builder::<K>().construct(params, &self.defaults)
    }

    /// Registers a built camera under `name`.
    ///
    /// With [`Options::activate_on_register`] set, the camera also becomes
    /// the active camera.
    pub fn register_camera(&mut self, name: &str, camera: Box<dyn SceneCamera>) -> Result<()> {
        let type_name = camera.type_name();
        self.registry.register(name, camera)?;
        log::info!("registered {type_name} '{name}'");
        if self.options.activate_on_register {
            self.registry.set_active(type_name, name)?;
        }
        Ok(())
    }

    /// Builds a camera of kind `K` from a partial configuration, registers a
    /// copy under `name`, and returns the camera.
    ///
    /// The camera is built even if the configuration sets `build: false`.
    pub fn create_camera<K: CameraKind>(&mut self, name: &str, params: &Value) -> Result<K::Native> {
        if self.registry.contains(K::TYPE_NAME, name) {
            return Err(CamkitError::CameraExists(
                K::TYPE_NAME.to_string(),
                name.to_string(),
            ));
        }
        let mut component = self.construct::<K>(params)?;
        let camera = match component.camera() {
            Some(camera) => camera.clone(),
            None => component.build()?.clone(),
        };
        self.register_camera(name, Box::new(camera.clone()))?;
        Ok(camera)
    }

    /// Replaces the viewport accessor used for defaults.
    pub fn set_viewport_source(&mut self, source: Box<dyn ViewportSource>) {
        self.defaults = DefaultsProvider::new(source, self.options.defaults_policy);
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program. It may be called
/// again after [`shutdown_context`].
pub fn init_context(options: Options, source: Box<dyn ViewportSource>) -> Result<()> {
    let lock = CONTEXT.get_or_init(|| RwLock::new(Context::default()));
    let mut ctx = write_lock(lock);

    if ctx.initialized {
        return Err(CamkitError::AlreadyInitialized);
    }

    *ctx = Context::new(options, source);
    ctx.initialized = true;
    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .is_some_and(|lock| read_lock(lock).initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if camkit has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    try_with_context(f).expect("camkit not initialized")
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if camkit has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    try_with_context_mut(f).expect("camkit not initialized")
}

/// Try to access the global context for reading.
///
/// Returns `None` if camkit has not been initialized.
pub fn try_with_context<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&Context) -> R,
{
    let guard = read_lock(CONTEXT.get()?);
    guard.initialized.then(|| f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `None` if camkit has not been initialized.
pub fn try_with_context_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let mut guard = write_lock(CONTEXT.get()?);
    if guard.initialized {
        Some(f(&mut guard))
    } else {
        None
    }
}

/// Shuts down the global context, dropping every registered camera.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        let mut ctx = write_lock(lock);
        ctx.initialized = false;
        ctx.registry.clear();
    }
}

fn read_lock(lock: &RwLock<Context>) -> RwLockReadGuard<'_, Context> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write_lock(lock: &RwLock<Context>) -> RwLockWriteGuard<'_, Context> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}
