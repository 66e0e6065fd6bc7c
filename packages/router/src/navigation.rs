//! Requesting navigation without holding the router.

use std::{fmt, rc::Rc};

use folio_history::Location;
use tracing::debug;

use crate::RouteKey;

/// A cloneable handle that moves the [`Location`] the router listens to.
///
/// None of these methods run handlers. They change the location; the change notification queues
/// a resolution that the router performs on its next [`process_pending`](crate::Router::process_pending)
/// or loop iteration of [`run`](crate::Router::run).
#[derive(Clone)]
pub struct Navigator {
    location: Rc<dyn Location>,
}

impl Navigator {
    pub(crate) fn new(location: Rc<dyn Location>) -> Self {
        Self { location }
    }

    /// Request a transition to `target`.
    pub fn navigate(&self, target: impl Into<RouteKey>) {
        let target = target.into();
        debug!("navigating to `{target}`");
        self.location.set(target.into_fragment());
    }

    /// Go back one entry in the location history.
    pub fn go_back(&self) {
        self.location.go_back();
    }

    /// Go forward one entry in the location history.
    pub fn go_forward(&self) {
        self.location.go_forward();
    }

    /// Check whether there is a previous location.
    pub fn can_go_back(&self) -> bool {
        self.location.can_go_back()
    }

    /// Check whether there is a future location.
    pub fn can_go_forward(&self) -> bool {
        self.location.can_go_forward()
    }

    /// The raw fragment currently held by the location, without the leading `#`.
    pub fn current_location(&self) -> String {
        self.location.current()
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("location", &self.location.current())
            .finish()
    }
}
