use std::rc::Rc;

use folio_history::Location;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use tracing::{debug, error, trace};

use crate::{
    handler::RouteContext,
    hooks::{HookSlot, Transition},
    navigation::Navigator,
    table::RouteTable,
    Handler, HandlerResult, HookPhase, RouteKey, RouterConfig, RouterError,
};

/// A set of messages that the [`Router`] can handle.
pub(crate) enum RouterMessage {
    /// The location changed and needs to be resolved.
    LocationChanged,
}

/// The current state of the router.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    /// The active route key, [`None`] before the first resolution.
    pub current: Option<RouteKey>,
    /// The key that was active immediately before the last transition.
    pub previous: Option<RouteKey>,
    /// How many resolutions were started, including failed ones.
    pub resolutions: usize,
}

/// The core of the router.
///
/// Combines a route table, two hook phases and a [`Location`]. Changes to the location are queued
/// on a channel and resolved one at a time, so a navigation requested from inside a handler never
/// re-enters the resolution that requested it.
///
/// ```rust
/// # use std::rc::Rc;
/// # use folio_history::MemoryLocation;
/// # use folio_router::prelude::*;
/// let location = Rc::new(MemoryLocation::default());
/// let mut router = Router::new(location, RouterConfig::default());
///
/// router
///     .register("/", |_| Ok(()))
///     .register("/about", |cx| {
///         assert_eq!(cx.previous().map(RouteKey::as_str), Some("/"));
///         Ok(())
///     });
///
/// router.init();
/// router.process_pending().unwrap();
/// assert_eq!(router.current_route().map(RouteKey::as_str), Some("/"));
///
/// router.navigate("/about");
/// router.process_pending().unwrap();
/// assert_eq!(router.current_route().map(RouteKey::as_str), Some("/about"));
/// ```
pub struct Router {
    config: RouterConfig,
    routes: RouteTable,
    before: HookSlot,
    after: HookSlot,
    state: RouterState,
    navigator: Navigator,
    tx: UnboundedSender<RouterMessage>,
    rx: UnboundedReceiver<RouterMessage>,
}

impl Router {
    /// Create a new [`Router`] listening to `location`.
    #[must_use]
    pub fn new(location: Rc<dyn Location>, config: RouterConfig) -> Self {
        let (tx, rx) = unbounded();

        let notify = tx.clone();
        location.listen(Rc::new(move || {
            notify.unbounded_send(RouterMessage::LocationChanged).ok();
        }));

        Self {
            before: HookSlot::new(config.hook_policy),
            after: HookSlot::new(config.hook_policy),
            config,
            routes: RouteTable::default(),
            state: RouterState::default(),
            navigator: Navigator::new(location),
            tx,
            rx,
        }
    }

    /// Bind `handler` to `key`. Registering the same key again replaces the handler.
    ///
    /// Keys containing `:name` segments (e.g. `"/obra/:artwork"`) match any key of the same
    /// shape; exact keys always win over them.
    pub fn register<F>(&mut self, key: impl Into<RouteKey>, handler: F) -> &mut Self
    where
        F: Fn(&RouteContext) -> HandlerResult + 'static,
    {
        self.register_handler(key, handler)
    }

    /// Bind any [`Handler`] implementation to `key`.
    pub fn register_handler(
        &mut self,
        key: impl Into<RouteKey>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        let key = key.into();
        debug!("registering route `{key}`");
        self.routes.insert(key, Box::new(handler));
        self
    }

    /// Set the hook that runs before every route handler.
    ///
    /// With [`HookPolicy::Replace`](crate::HookPolicy::Replace) this replaces the previous hook;
    /// with [`HookPolicy::Chain`](crate::HookPolicy::Chain) it is appended.
    pub fn before_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Transition) -> HandlerResult + 'static,
    {
        self.before.set(Box::new(hook));
        self
    }

    /// Set the hook that runs after every route handler.
    ///
    /// Follows the same policy as [`Router::before_each`].
    pub fn after_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Transition) -> HandlerResult + 'static,
    {
        self.after.set(Box::new(hook));
        self
    }

    /// Remove every before and after hook.
    pub fn clear_hooks(&mut self) {
        self.before.clear();
        self.after.clear();
    }

    /// Whether a handler is bound to exactly `key`.
    pub fn has_route(&self, key: impl Into<RouteKey>) -> bool {
        self.routes.contains(&key.into())
    }

    /// The number of registered routes, patterns included.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// The configuration the router was created with.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The current state of the router.
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// The active route key.
    pub fn current_route(&self) -> Option<&RouteKey> {
        self.state.current.as_ref()
    }

    /// The key that was active before the last transition.
    pub fn previous_route(&self) -> Option<&RouteKey> {
        self.state.previous.as_ref()
    }

    /// A handle that can request navigation without borrowing the router.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Request a transition to `target`.
    ///
    /// This only moves the location. The resolution happens when the queued change is processed.
    pub fn navigate(&self, target: impl Into<RouteKey>) {
        self.navigator.navigate(target);
    }

    /// Start routing.
    ///
    /// If the location is empty it is moved to the home key, which queues the first resolution.
    /// Otherwise a resolution of the present location is queued.
    pub fn init(&mut self) -> &mut Self {
        if self.navigator.current_location().is_empty() {
            self.navigator.navigate(self.config.home.clone());
        } else {
            self.tx.unbounded_send(RouterMessage::LocationChanged).ok();
        }
        self
    }

    /// Resolve every queued location change, oldest first.
    ///
    /// Changes queued while processing (e.g. a handler that navigates) are resolved in the same
    /// call. Stops at the first failed resolution; later changes stay queued.
    ///
    /// Returns the number of resolutions performed.
    pub fn process_pending(&mut self) -> Result<usize, RouterError> {
        let mut resolved = 0;
        while let Ok(message) = self.rx.try_recv() {
            match message {
                RouterMessage::LocationChanged => self.resolve()?,
            }
            resolved += 1;
        }
        Ok(resolved)
    }

    /// The router's event loop.
    ///
    /// Resolves location changes as they arrive. A failed resolution is logged and the loop keeps
    /// serving later changes.
    pub async fn run(&mut self) {
        while let Some(message) = self.rx.next().await {
            match message {
                RouterMessage::LocationChanged => {
                    if let Err(err) = self.resolve() {
                        error!("route resolution failed: {err:#}");
                    }
                }
            }
        }
    }

    /// Resolve the current location right away. An empty location resolves the home key.
    pub fn resolve(&mut self) -> Result<(), RouterError> {
        let fragment = self.navigator.current_location();
        let key = match RouteKey::new(fragment) {
            key if key.is_empty() => self.config.home.clone(),
            key => key,
        };
        self.resolve_route(key)
    }

    /// Resolve `key` right away, without consulting or moving the location.
    ///
    /// 1. `previous` takes the old `current`, `current` takes `key`.
    /// 2. The before hooks run with `(key, previous)`.
    /// 3. The handler for `key` runs; failing that, a matching pattern's handler; failing that,
    ///    the home handler; failing that, nothing.
    /// 4. The after hooks run with `(key, previous)`.
    ///
    /// An unknown key stays recorded as `current` even though the home handler ran.
    pub fn resolve_route(&mut self, key: impl Into<RouteKey>) -> Result<(), RouterError> {
        let key = key.into();
        self.state.previous = self.state.current.replace(key.clone());
        self.state.resolutions += 1;

        let transition = Transition {
            to: key.clone(),
            from: self.state.previous.clone(),
        };
        trace!(
            to = %transition.to,
            from = ?transition.from,
            before = self.before.len(),
            after = self.after.len(),
            "resolving"
        );

        self.before
            .run(&transition)
            .map_err(|source| RouterError::Hook {
                phase: HookPhase::Before,
                route: key.clone(),
                source,
            })?;

        match self.routes.lookup(&key, &self.config.home) {
            Some(resolved) => {
                if resolved.fallback {
                    debug!("no route for `{key}`, falling back to `{}`", resolved.matched);
                }

                let cx = RouteContext {
                    route: key.clone(),
                    previous: self.state.previous.clone(),
                    matched: resolved.matched.clone(),
                    parameters: resolved.parameters,
                    fallback: resolved.fallback,
                    navigator: self.navigator.clone(),
                };

                resolved
                    .handler
                    .invoke(&cx)
                    .map_err(|source| RouterError::Handler {
                        route: key.clone(),
                        matched: cx.matched.clone(),
                        source,
                    })?;
            }
            None => debug!("no route for `{key}` and no home route registered"),
        }

        self.after
            .run(&transition)
            .map_err(|source| RouterError::Hook {
                phase: HookPhase::After,
                route: key,
                source,
            })
    }
}
