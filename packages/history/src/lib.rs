//! Location signals for the Folio router.
//!
//! The router never reads the address bar directly. It talks to a [`Location`]: something that
//! holds the current fragment, can be told to move somewhere else, and tells its listeners when it
//! moved. In the browser this is the URL hash ([`HashLocation`], behind the `web` feature); in
//! tests and headless tools it is a [`MemoryLocation`].

#![deny(missing_docs)]

use std::rc::Rc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod hash;
#[cfg(feature = "web")]
pub use hash::*;

/// An addressable location whose changes can be observed.
///
/// Fragments are exchanged without the leading `#`. An empty fragment means "no location".
pub trait Location {
    /// Get the current fragment.
    ///
    /// ```rust
    /// # use folio_history::{Location, MemoryLocation};
    /// let location = MemoryLocation::with_initial("#/about");
    /// assert_eq!(location.current(), "/about");
    /// ```
    #[must_use]
    fn current(&self) -> String;

    /// Move to `fragment`, recording the old location in the history.
    ///
    /// Implementations must notify every listener exactly once per call, including when
    /// `fragment` equals the current location.
    fn set(&self, fragment: String);

    /// Check whether there is a previous location to go back to.
    ///
    /// If a [`Location`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to the previous location. Does nothing if there is none.
    fn go_back(&self);

    /// Check whether there is a future location to go forward to.
    ///
    /// If a [`Location`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to the next location. Does nothing if there is none.
    fn go_forward(&self);

    /// Register a callback that runs every time the location changes.
    fn listen(&self, callback: Rc<dyn Fn()>);
}

/// Strip the leading `#` from a fragment, if any.
///
/// ```rust
/// assert_eq!(folio_history::strip_hash("#/archivo"), "/archivo");
/// assert_eq!(folio_history::strip_hash("/archivo"), "/archivo");
/// ```
pub fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Check whether two fragments name the same location once percent-encoding is undone.
///
/// Browsers hand the hash back encoded, so `"/obra/la%20ola"` and `"/obra/la ola"` are the same
/// place. A leading `#` on either side is ignored.
///
/// ```rust
/// # use folio_history::same_fragment;
/// assert!(same_fragment("#/obra/la%20ola", "/obra/la ola"));
/// assert!(!same_fragment("/obra/la%20ola", "/obra/la"));
/// ```
pub fn same_fragment(a: &str, b: &str) -> bool {
    let (a, b) = (strip_hash(a), strip_hash(b));
    if a == b {
        return true;
    }
    match (urlencoding::decode(a), urlencoding::decode(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
