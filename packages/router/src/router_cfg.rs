use serde::{Deserialize, Serialize};

use crate::{HookPolicy, RouteKey};

/// Global configuration options for the router.
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use folio_router::prelude::*;
/// let cfg = RouterConfig::default()
///     .home("/inicio")
///     .hook_policy(HookPolicy::Chain);
///
/// assert_eq!(cfg.home_key().as_str(), "/inicio");
/// ```
///
/// It can also be loaded from JSON (or any other serde format); missing fields keep their
/// defaults:
/// ```rust
/// # use folio_router::prelude::*;
/// let cfg: RouterConfig = serde_json::from_str(r##"{ "home": "#/" }"##).unwrap();
/// assert_eq!(cfg, RouterConfig::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub(crate) home: RouteKey,
    pub(crate) hook_policy: HookPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            home: RouteKey::new("/"),
            hook_policy: HookPolicy::default(),
        }
    }
}

impl RouterConfig {
    /// The key used when the location is empty and as the fallback for unknown keys.
    ///
    /// Defaults to `"/"`.
    pub fn home(self, key: impl Into<RouteKey>) -> Self {
        Self {
            home: key.into(),
            ..self
        }
    }

    /// What happens when a second hook is registered for the same phase.
    ///
    /// Defaults to [`HookPolicy::Replace`].
    pub fn hook_policy(self, policy: HookPolicy) -> Self {
        Self {
            hook_policy: policy,
            ..self
        }
    }

    /// The configured home key.
    pub fn home_key(&self) -> &RouteKey {
        &self.home
    }

    /// The configured hook policy.
    pub fn policy(&self) -> HookPolicy {
        self.hook_policy
    }
}
