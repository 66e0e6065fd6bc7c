use thiserror::Error;

use crate::{HandlerError, HookPhase, RouteKey};

/// A resolution that was cut short.
///
/// The router does not roll back its state when this happens: the current and previous routes
/// keep the values they were given at the start of the resolution.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RouterError {
    /// A lifecycle hook failed. Nothing after it in the resolution ran.
    #[error("{phase} hook failed while resolving `{route}`")]
    Hook {
        /// The phase of the failing hook.
        phase: HookPhase,
        /// The key that was being resolved.
        route: RouteKey,
        /// What the hook reported.
        #[source]
        source: HandlerError,
    },

    /// The route handler failed. The after hooks did not run.
    #[error("handler `{matched}` failed while resolving `{route}`")]
    Handler {
        /// The key that was being resolved.
        route: RouteKey,
        /// The key of the handler that ran.
        matched: RouteKey,
        /// What the handler reported.
        #[source]
        source: HandlerError,
    },
}

impl RouterError {
    /// The key that was being resolved when the failure happened.
    pub fn route(&self) -> &RouteKey {
        match self {
            RouterError::Hook { route, .. } | RouterError::Handler { route, .. } => route,
        }
    }
}
