use std::{cell::RefCell, rc::Rc};

use crate::{strip_hash, Location};

struct MemoryLocationState {
    current: String,
    past: Vec<String>,
    future: Vec<String>,
}

/// A [`Location`] that stores all navigation information in memory.
///
/// Listeners run synchronously inside [`Location::set`], [`Location::go_back`] and
/// [`Location::go_forward`].
pub struct MemoryLocation {
    state: RefCell<MemoryLocationState>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::with_initial("")
    }
}

impl MemoryLocation {
    /// Create a [`MemoryLocation`] starting at `fragment`.
    ///
    /// ```rust
    /// # use folio_history::{Location, MemoryLocation};
    /// let location = MemoryLocation::with_initial("/contacto");
    /// assert_eq!(location.current(), "/contacto");
    /// assert!(!location.can_go_back());
    /// ```
    pub fn with_initial(fragment: impl AsRef<str>) -> Self {
        Self {
            state: MemoryLocationState {
                current: strip_hash(fragment.as_ref()).to_string(),
                past: Vec::new(),
                future: Vec::new(),
            }
            .into(),
            listeners: RefCell::default(),
        }
    }

    /// Every fragment visited before the current one, oldest first.
    pub fn past(&self) -> Vec<String> {
        self.state.borrow().past.clone()
    }

    fn notify(&self) {
        // listeners may register more listeners
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn set(&self, fragment: String) {
        {
            let mut write = self.state.borrow_mut();
            let fragment = strip_hash(&fragment).to_string();
            if write.current != fragment {
                let old = std::mem::replace(&mut write.current, fragment);
                write.past.push(old);
                write.future.clear();
            }
        }
        self.notify();
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().past.is_empty()
    }

    fn go_back(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.past.pop() {
                Some(last) => {
                    let old = std::mem::replace(&mut write.current, last);
                    write.future.push(old);
                    true
                }
                None => false,
            }
        };
        if moved {
            self.notify();
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.future.pop() {
                Some(next) => {
                    let old = std::mem::replace(&mut write.current, next);
                    write.past.push(old);
                    true
                }
                None => false,
            }
        };
        if moved {
            self.notify();
        }
    }

    fn listen(&self, callback: Rc<dyn Fn()>) {
        self.listeners.borrow_mut().push(callback);
    }
}
