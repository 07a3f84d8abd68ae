//! Camera components: partial configuration in, native camera out.
//!
//! A camera type plugs in through [`CameraKind`], which names its parameter
//! type, its native camera type, how defaults are derived from the viewport,
//! and how the native camera is constructed. [`ComponentBuilder`] supplies the
//! rest: merging the caller's configuration over the defaults, validating the
//! result, and placing the built camera.

use std::fmt::Debug;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::camera::SceneCamera;
use crate::defaults::DefaultsProvider;
use crate::error::{CamkitError, Result};
use crate::merge::{deep_merge, MergeFn};
use crate::params::ComponentParams;
use crate::viewport::Viewport;

/// A camera type that can be produced by a [`ComponentBuilder`].
pub trait CameraKind: 'static {
    /// Name under which cameras of this kind are registered.
    const TYPE_NAME: &'static str;

    /// Projection parameters found under the `camera` key.
    type Params: Clone + Debug + PartialEq + Serialize + DeserializeOwned;

    /// The native camera this kind constructs.
    type Native: SceneCamera + Clone + Debug;

    /// Default projection parameters for a viewport.
    fn default_params(viewport: Viewport) -> Self::Params;

    /// Checks merged projection parameters.
    fn validate(params: &Self::Params) -> Result<()>;

    /// Constructs the native camera from merged projection parameters.
    fn construct(params: &Self::Params) -> Self::Native;
}

/// Merges configuration and builds cameras of kind `K`.
pub struct ComponentBuilder<K> {
    merge: MergeFn,
    validate: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for ComponentBuilder<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ComponentBuilder<K> {}

impl<K> Debug for ComponentBuilder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentBuilder")
            .field("validate", &self.validate)
            .finish_non_exhaustive()
    }
}

impl<K: CameraKind> Default for ComponentBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CameraKind> ComponentBuilder<K> {
    /// Creates a builder that deep-merges and validates.
    pub fn new() -> Self {
        Self {
            merge: deep_merge,
            validate: true,
            _kind: PhantomData,
        }
    }

    /// Replaces the merge strategy.
    #[must_use]
    pub fn with_merge(mut self, merge: MergeFn) -> Self {
        self.merge = merge;
        self
    }

    /// Enables or disables parameter validation before building.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Merges `params` over the defaults for `K`.
    ///
    /// `params` is left untouched. Fails if the merged tree cannot be read as
    /// `K`'s parameters, e.g. when a plane is given as a string.
    pub fn merge(
        &self,
        params: &Value,
        defaults: &DefaultsProvider,
    ) -> Result<ComponentParams<K::Params>> {
        let base = defaults.defaults_for::<K>()?;
        let merged = (self.merge)(&base, params);
        let typed: ComponentParams<K::Params> =
            serde_json::from_value(merged).map_err(CamkitError::InvalidParams)?;
        log::debug!("merged {} params: {:?}", K::TYPE_NAME, typed.camera);
        Ok(typed)
    }

    /// Builds a native camera from merged parameters and places it.
    pub fn build(&self, params: &ComponentParams<K::Params>) -> Result<K::Native> {
        if self.validate {
            K::validate(&params.camera)?;
        } else if let Err(err) = K::validate(&params.camera) {
            log::warn!("building {} from unchecked parameters: {err}", K::TYPE_NAME);
        }

        let mut camera = K::construct(&params.camera);
        camera.set_pose(params.position.into(), params.rotation.into());
        Ok(camera)
    }

    /// Creates a component from a partial configuration.
    ///
    /// The camera is built right away unless the merged `build` flag is false.
    pub fn construct(
        &self,
        params: &Value,
        defaults: &DefaultsProvider,
    ) -> Result<CameraComponent<K>> {
        let merged = self.merge(params, defaults)?;
        let mut component = CameraComponent {
            builder: *self,
            params: merged,
            camera: None,
        };
        if component.params.build {
            component.build()?;
        }
        Ok(component)
    }
}

/// Merged parameters for one camera, and the camera once built.
pub struct CameraComponent<K: CameraKind> {
    builder: ComponentBuilder<K>,
    params: ComponentParams<K::Params>,
    camera: Option<K::Native>,
}

impl<K: CameraKind> CameraComponent<K> {
    /// Returns the merged parameters.
    pub fn params(&self) -> &ComponentParams<K::Params> {
        &self.params
    }

    /// Builds the camera, keeps it, and returns it.
    ///
    /// Building again replaces the previously built camera.
    pub fn build(&mut self) -> Result<&K::Native> {
        let camera = self.builder.build(&self.params)?;
        log::debug!("built {}", K::TYPE_NAME);
        Ok(&*self.camera.insert(camera))
    }

    /// Returns the built camera, if any.
    pub fn camera(&self) -> Option<&K::Native> {
        self.camera.as_ref()
    }

    /// Returns whether the camera has been built.
    pub fn is_built(&self) -> bool {
        self.camera.is_some()
    }

    /// Consumes the component, returning the built camera.
    pub fn into_camera(self) -> Option<K::Native> {
        self.camera
    }

    /// Creates a component with the same parameters.
    ///
    /// If this component has been built, the copy builds its own camera.
    pub fn clone_component(&self) -> Result<Self> {
        let mut copy = Self {
            builder: self.builder,
            params: self.params.clone(),
            camera: None,
        };
        if self.is_built() {
            copy.build()?;
        }
        Ok(copy)
    }
}

impl<K: CameraKind> Debug for CameraComponent<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraComponent")
            .field("kind", &K::TYPE_NAME)
            .field("params", &self.params)
            .field("camera", &self.camera)
            .finish()
    }
}
