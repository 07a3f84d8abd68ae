//! Viewport-derived camera defaults.

use serde_json::Value;

use crate::component::CameraKind;
use crate::error::Result;
use crate::options::DefaultsPolicy;
use crate::params::ComponentParams;
use crate::viewport::{Viewport, ViewportSource};

/// Produces default parameters for camera components.
///
/// The provider owns the viewport accessor it was created with. Under
/// [`DefaultsPolicy::Snapshot`] the viewport is read once at creation and the
/// same extents are handed to every component until [`refresh`](Self::refresh)
/// is called; under [`DefaultsPolicy::Live`] it is read on every request.
pub struct DefaultsProvider {
    source: Box<dyn ViewportSource>,
    policy: DefaultsPolicy,
    snapshot: Viewport,
}

impl DefaultsProvider {
    /// Creates a provider, reading the viewport once.
    pub fn new(source: Box<dyn ViewportSource>, policy: DefaultsPolicy) -> Self {
        let snapshot = source.size();
        log::debug!(
            "camera defaults use {}x{} viewport ({policy:?})",
            snapshot.width,
            snapshot.height
        );
        Self {
            source,
            policy,
            snapshot,
        }
    }

    /// Returns the policy this provider was created with.
    pub fn policy(&self) -> DefaultsPolicy {
        self.policy
    }

    /// Returns the viewport defaults are currently derived from.
    pub fn viewport(&self) -> Viewport {
        match self.policy {
            DefaultsPolicy::Snapshot => self.snapshot,
            DefaultsPolicy::Live => self.source.size(),
        }
    }

    /// Re-reads the viewport into the snapshot and returns it.
    pub fn refresh(&mut self) -> Viewport {
        self.snapshot = self.source.size();
        log::debug!(
            "camera defaults refreshed to {}x{}",
            self.snapshot.width,
            self.snapshot.height
        );
        self.snapshot
    }

    /// Returns the typed defaults for a camera kind.
    pub fn params_for<K: CameraKind>(&self) -> ComponentParams<K::Params> {
        ComponentParams::with_camera(K::default_params(self.viewport()))
    }

    /// Returns the defaults for a camera kind as a mergeable tree.
    pub fn defaults_for<K: CameraKind>(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.params_for::<K>())?)
    }
}

impl std::fmt::Debug for DefaultsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultsProvider")
            .field("policy", &self.policy)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}
