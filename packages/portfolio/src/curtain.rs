//! The page curtain drawn over every transition.
//!
//! The before hook closes the curtain and marks the page as navigating. The after hook waits
//! [`CURTAIN_OPEN_DELAY`], opens the curtain (the page is scrolled back to the top while it is
//! still covered), then waits [`CURTAIN_SETTLE_DELAY`] before clearing the navigating mark.

use std::{cell::RefCell, rc::Rc, time::Duration};

use folio_router::{view::Scheduler, Router};
use tracing::trace;

/// How long the curtain stays closed after a route handler ran.
pub const CURTAIN_OPEN_DELAY: Duration = Duration::from_millis(400);

/// How long after opening the page stays marked as navigating.
pub const CURTAIN_SETTLE_DELAY: Duration = Duration::from_millis(600);

/// Something that can cover the page during a transition.
pub trait Curtain {
    /// Cover the page and mark it as navigating.
    fn close(&self);

    /// Scroll to the top and uncover the page.
    fn open(&self);

    /// Clear the navigating mark.
    fn settle(&self);
}

/// Install the curtain as the router's before and after hooks.
pub fn install_curtain(router: &mut Router, curtain: Rc<dyn Curtain>, scheduler: Rc<dyn Scheduler>) {
    let closing = curtain.clone();
    router
        .before_each(move |transition| {
            trace!("closing curtain for `{}`", transition.to);
            closing.close();
            Ok(())
        })
        .after_each(move |_| {
            let curtain = curtain.clone();
            let settle = scheduler.clone();
            scheduler.schedule(
                CURTAIN_OPEN_DELAY,
                Box::new(move || {
                    curtain.open();
                    settle.schedule(CURTAIN_SETTLE_DELAY, Box::new(move || curtain.settle()));
                }),
            );
            Ok(())
        });
}

/// A step taken by a [`MemoryCurtain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurtainEvent {
    /// [`Curtain::close`] ran.
    Close,
    /// [`Curtain::open`] ran.
    Open,
    /// [`Curtain::settle`] ran.
    Settle,
}

/// A [`Curtain`] that records what it was asked to do.
#[derive(Debug, Default)]
pub struct MemoryCurtain {
    events: RefCell<Vec<CurtainEvent>>,
}

impl MemoryCurtain {
    /// Every step taken so far, oldest first.
    pub fn events(&self) -> Vec<CurtainEvent> {
        self.events.borrow().clone()
    }

    /// Whether the page is covered.
    pub fn is_closed(&self) -> bool {
        let events = self.events.borrow();
        let last_close = events.iter().rposition(|e| *e == CurtainEvent::Close);
        let last_open = events.iter().rposition(|e| *e == CurtainEvent::Open);
        last_close > last_open
    }

    /// Whether the page is marked as navigating.
    pub fn is_navigating(&self) -> bool {
        let events = self.events.borrow();
        let last_close = events.iter().rposition(|e| *e == CurtainEvent::Close);
        let last_settle = events.iter().rposition(|e| *e == CurtainEvent::Settle);
        last_close > last_settle
    }
}

impl Curtain for MemoryCurtain {
    fn close(&self) {
        self.events.borrow_mut().push(CurtainEvent::Close);
    }

    fn open(&self) {
        self.events.borrow_mut().push(CurtainEvent::Open);
    }

    fn settle(&self) {
        self.events.borrow_mut().push(CurtainEvent::Settle);
    }
}
