//! The whole site wired against in-memory backends.

use std::{rc::Rc, time::Duration};

use folio_history::{Location, MemoryLocation};
use folio_router::prelude::*;

use crate::{
    curtain::{install_curtain, MemoryCurtain, CURTAIN_OPEN_DELAY, CURTAIN_SETTLE_DELAY},
    routes::{register_routes, view_ids},
    Services,
};

/// The portfolio running on a [`MemoryLocation`], a [`MemoryViewHost`] and a [`ManualScheduler`].
///
/// Every step resolves the queued location changes and then lets the virtual clock run until the
/// fades and the curtain have finished.
pub struct HeadlessSite {
    router: Router,
    location: Rc<MemoryLocation>,
    host: MemoryViewHost,
    scheduler: ManualScheduler,
    curtain: Rc<MemoryCurtain>,
}

impl HeadlessSite {
    /// Build the site with every route and the curtain installed. Nothing resolves until
    /// [`HeadlessSite::start`].
    pub fn new(config: RouterConfig, services: Rc<dyn Services>) -> Self {
        let location = Rc::new(MemoryLocation::default());
        let host = MemoryViewHost::new(view_ids());
        let scheduler = ManualScheduler::default();
        let stage = ViewStage::new(host.clone(), scheduler.clone());
        let curtain = Rc::new(MemoryCurtain::default());

        let mut router = Router::new(location.clone(), config);
        register_routes(&mut router, &stage, services);
        install_curtain(&mut router, curtain.clone(), Rc::new(scheduler.clone()));

        Self {
            router,
            location,
            host,
            scheduler,
            curtain,
        }
    }

    /// The time one transition needs to finish: the longer of the view fade and the curtain.
    pub fn settle_time() -> Duration {
        DEFAULT_FADE_DELAY.max(CURTAIN_OPEN_DELAY + CURTAIN_SETTLE_DELAY)
    }

    /// Start routing and resolve the initial location. Returns the active view.
    pub fn start(&mut self) -> Result<Option<String>, RouterError> {
        self.router.init();
        self.settle()
    }

    /// Move to `fragment` and resolve it. Returns the active view.
    pub fn visit(&mut self, fragment: &str) -> Result<Option<String>, RouterError> {
        self.router.navigate(fragment);
        self.settle()
    }

    /// Step back in the history and resolve. Returns the active view.
    pub fn back(&mut self) -> Result<Option<String>, RouterError> {
        self.router.navigator().go_back();
        self.settle()
    }

    fn settle(&mut self) -> Result<Option<String>, RouterError> {
        let result = self.router.process_pending();
        self.scheduler.advance(Self::settle_time());
        result?;
        Ok(self.active_view())
    }

    /// The id of the only active view, if any.
    pub fn active_view(&self) -> Option<String> {
        self.host.active_ids().into_iter().next()
    }

    /// The router driving the site.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The fragment the location currently holds.
    pub fn location(&self) -> String {
        self.location.current()
    }

    /// The in-memory views.
    pub fn host(&self) -> &MemoryViewHost {
        &self.host
    }

    /// The curtain drawn over each transition.
    pub fn curtain(&self) -> &MemoryCurtain {
        &self.curtain
    }
}
