use std::{cell::RefCell, rc::Rc};

use gloo::events::EventListener;
use tracing::error;
use web_sys::Window;

use crate::{same_fragment, strip_hash, Location};

type Listeners = Rc<RefCell<Vec<Rc<dyn Fn()>>>>;

/// A [`Location`] backed by the browser's URL fragment.
///
/// Changes made from outside the router (back/forward buttons, bookmarks, editing the address bar)
/// reach the listeners through the window's `hashchange` event. Setting the fragment to the value
/// it already has does not fire `hashchange` in browsers, so in that case the listeners are called
/// directly.
pub struct HashLocation {
    window: Window,
    listeners: Listeners,
    listener_hashchange: RefCell<Option<EventListener>>,
}

impl Default for HashLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl HashLocation {
    /// Create a new [`HashLocation`] for the current window.
    pub fn new() -> Self {
        Self {
            window: web_sys::window().expect("access to `window`"),
            listeners: Rc::default(),
            listener_hashchange: RefCell::default(),
        }
    }

    fn notify(listeners: &Listeners) {
        let listeners = listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl Location for HashLocation {
    fn current(&self) -> String {
        match self.window.location().hash() {
            Ok(hash) => strip_hash(&hash).to_string(),
            Err(err) => {
                error!("failed to read the location hash: {err:?}");
                String::new()
            }
        }
    }

    fn set(&self, fragment: String) {
        let fragment = strip_hash(&fragment);
        let before = self.current();
        if same_fragment(&before, fragment) {
            Self::notify(&self.listeners);
            return;
        }

        if let Err(err) = self.window.location().set_hash(fragment) {
            error!("failed to set the location hash to `{fragment}`: {err:?}");
            return;
        }

        // the browser may encode `fragment` into the hash it already had
        if self.current() == before {
            Self::notify(&self.listeners);
        }
    }

    fn go_back(&self) {
        if let Err(err) = self.window.history().and_then(|history| history.back()) {
            error!("failed to go back: {err:?}");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.window.history().and_then(|history| history.forward()) {
            error!("failed to go forward: {err:?}");
        }
    }

    fn listen(&self, callback: Rc<dyn Fn()>) {
        self.listeners.borrow_mut().push(callback);

        let mut slot = self.listener_hashchange.borrow_mut();
        if slot.is_none() {
            let listeners = self.listeners.clone();
            *slot = Some(EventListener::new(&self.window, "hashchange", move |_| {
                Self::notify(&listeners)
            }));
        }
    }
}
