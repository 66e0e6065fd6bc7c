use crate::{key::Parameters, navigation::Navigator, RouteKey};

/// The error type route handlers and hooks may fail with.
pub type HandlerError = anyhow::Error;

/// The result of running a route handler or hook.
pub type HandlerResult = Result<(), HandlerError>;

/// Everything a handler knows about the transition that activated it.
#[derive(Clone, Debug)]
pub struct RouteContext {
    pub(crate) route: RouteKey,
    pub(crate) previous: Option<RouteKey>,
    pub(crate) matched: RouteKey,
    pub(crate) parameters: Parameters,
    pub(crate) fallback: bool,
    pub(crate) navigator: Navigator,
}

impl RouteContext {
    /// The key being resolved. For a fallback this is the unknown key, not the home key.
    pub fn route(&self) -> &RouteKey {
        &self.route
    }

    /// The key that was active before this transition.
    pub fn previous(&self) -> Option<&RouteKey> {
        self.previous.as_ref()
    }

    /// The key the running handler was registered under.
    pub fn matched(&self) -> &RouteKey {
        &self.matched
    }

    /// Whether the handler runs because no other route matched.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Get a value captured by a pattern route.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// All values captured by a pattern route.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// A handle for requesting further navigation.
    ///
    /// Navigation requested here is queued and resolved after the current resolution finishes.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

/// Application code bound to a route key.
///
/// Closures taking a [`RouteContext`] and returning a [`HandlerResult`] implement this trait.
pub trait Handler {
    /// Run the handler for the route described by `cx`.
    fn invoke(&self, cx: &RouteContext) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&RouteContext) -> HandlerResult,
{
    fn invoke(&self, cx: &RouteContext) -> HandlerResult {
        self(cx)
    }
}
