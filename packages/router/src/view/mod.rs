//! Showing and hiding the page's views.
//!
//! A page is made of mutually exclusive display regions ("views"). [`ViewStage`] switches between
//! them: every view is deactivated and starts fading out, the requested view is activated, and once
//! the fade window has passed every view that is still inactive is removed from the layout.
//!
//! The stage only talks to views through [`ViewSurface`], finds them through a [`ViewHost`] and
//! waits through a [`Scheduler`], so the transition can run against the DOM (feature `web`) or
//! against [`MemoryViewHost`] and [`ManualScheduler`].

use std::{rc::Rc, time::Duration};

use tracing::{trace, warn};

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// How long a deactivated view stays in the layout so its fade-out can finish.
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(500);

/// A named display region.
pub trait ViewSurface {
    /// The identifier the view is looked up by.
    fn id(&self) -> &str;

    /// Put the view in the layout, mark it active and fade it in.
    fn activate(&self);

    /// Remove the active mark and start fading the view out. The view stays in the layout.
    fn deactivate(&self);

    /// Remove the view from the layout.
    fn conceal(&self);

    /// Whether the view is marked active.
    fn is_active(&self) -> bool;

    /// Whether the view takes part in the layout (active or still fading out).
    fn is_displayed(&self) -> bool;

    /// Scroll the page so the view is in sight.
    fn scroll_into_view(&self) {}
}

/// The collection of views on a page.
pub trait ViewHost {
    /// Every view, in document order.
    fn views(&self) -> Vec<Rc<dyn ViewSurface>>;

    /// Look a view up by id.
    fn find(&self, id: &str) -> Option<Rc<dyn ViewSurface>> {
        self.views().into_iter().find(|view| view.id() == id)
    }

    /// Scroll the page back to the top.
    fn scroll_to_top(&self) {}
}

/// Runs a task once a delay has passed.
pub trait Scheduler {
    /// Run `task` after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Switches which view of a [`ViewHost`] is active.
///
/// Cloning a stage is cheap and every clone drives the same views, so route handlers can each hold
/// one.
#[derive(Clone)]
pub struct ViewStage {
    host: Rc<dyn ViewHost>,
    scheduler: Rc<dyn Scheduler>,
    fade_delay: Duration,
}

impl ViewStage {
    /// Create a stage over `host` that waits through `scheduler`.
    pub fn new(host: impl ViewHost + 'static, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            host: Rc::new(host),
            scheduler: Rc::new(scheduler),
            fade_delay: DEFAULT_FADE_DELAY,
        }
    }

    /// Set how long deactivated views stay in the layout.
    ///
    /// Defaults to [`DEFAULT_FADE_DELAY`].
    pub fn with_fade_delay(self, fade_delay: Duration) -> Self {
        Self { fade_delay, ..self }
    }

    /// The configured fade window.
    pub fn fade_delay(&self) -> Duration {
        self.fade_delay
    }

    /// Deactivate every view and remove each one from the layout once the fade window has passed,
    /// unless it was activated again in the meantime.
    pub fn hide_all_views(&self) {
        for view in self.host.views() {
            view.deactivate();
            self.scheduler.schedule(
                self.fade_delay,
                Box::new(move || {
                    if !view.is_active() {
                        view.conceal();
                    }
                }),
            );
        }
    }

    /// Make `id` the only active view and scroll to the top of the page.
    ///
    /// Every view is hidden first. If no view is called `id` nothing else happens, which leaves no
    /// view active; `false` is returned in that case.
    pub fn show_view(&self, id: &str) -> bool {
        self.hide_all_views();

        let Some(view) = self.host.find(id) else {
            warn!("no view with id `{id}`; every view is now hidden");
            return false;
        };

        trace!("showing view `{id}`");
        view.activate();
        self.host.scroll_to_top();
        true
    }

    /// Scroll the page so `id` is in sight. Returns `false` if there is no such view.
    pub fn scroll_to_view(&self, id: &str) -> bool {
        match self.host.find(id) {
            Some(view) => {
                view.scroll_into_view();
                true
            }
            None => false,
        }
    }

    /// The id of the first view marked active.
    pub fn active_view(&self) -> Option<String> {
        self.host
            .views()
            .into_iter()
            .find(|view| view.is_active())
            .map(|view| view.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn stage() -> (ViewStage, MemoryViewHost, ManualScheduler) {
        let host = MemoryViewHost::new(["view-home", "view-about", "view-archivo"]);
        let scheduler = ManualScheduler::default();
        let stage = ViewStage::new(host.clone(), scheduler.clone());
        (stage, host, scheduler)
    }

    #[test]
    fn only_the_shown_view_survives_the_fade() {
        let (stage, host, scheduler) = stage();
        assert!(stage.show_view("view-home"));
        scheduler.advance(DEFAULT_FADE_DELAY);

        assert!(stage.show_view("view-about"));

        // both are in the layout while the old one fades out
        assert!(host.view("view-home").unwrap().is_displayed());
        assert!(host.view("view-about").unwrap().is_displayed());

        scheduler.advance(DEFAULT_FADE_DELAY);
        assert_eq!(host.active_ids(), vec!["view-about"]);
        assert_eq!(host.displayed_ids(), vec!["view-about"]);
    }

    #[test]
    fn concealment_waits_for_the_full_window() {
        let (stage, host, scheduler) = stage();
        stage.show_view("view-home");
        scheduler.advance(DEFAULT_FADE_DELAY);
        stage.show_view("view-about");

        scheduler.advance(DEFAULT_FADE_DELAY - Duration::from_millis(1));
        assert!(host.view("view-home").unwrap().is_displayed());

        scheduler.advance(Duration::from_millis(1));
        assert!(!host.view("view-home").unwrap().is_displayed());
    }

    #[test]
    fn hide_all_views_fades_then_conceals() {
        let (stage, host, scheduler) = stage();
        stage.show_view("view-about");
        scheduler.advance(DEFAULT_FADE_DELAY);

        stage.hide_all_views();
        assert!(host.active_ids().is_empty());
        assert_eq!(host.displayed_ids(), vec!["view-about"]);

        scheduler.advance(DEFAULT_FADE_DELAY - Duration::from_millis(1));
        assert_eq!(host.displayed_ids(), vec!["view-about"]);

        scheduler.advance(Duration::from_millis(1));
        assert!(host.displayed_ids().is_empty());
        assert_eq!(stage.active_view(), None);
    }

    #[test]
    fn reactivated_view_is_not_concealed() {
        let (stage, host, scheduler) = stage();
        stage.show_view("view-home");
        stage.show_view("view-about");
        stage.show_view("view-home");

        scheduler.advance(DEFAULT_FADE_DELAY);
        assert_eq!(host.active_ids(), vec!["view-home"]);
        assert_eq!(host.displayed_ids(), vec!["view-home"]);
    }

    #[test]
    fn unknown_view_hides_everything() {
        let (stage, host, scheduler) = stage();
        stage.show_view("view-home");
        scheduler.advance(DEFAULT_FADE_DELAY);

        assert!(!stage.show_view("view-missing"));
        scheduler.advance(DEFAULT_FADE_DELAY);

        assert_eq!(stage.active_view(), None);
        assert!(host.displayed_ids().is_empty());
    }

    #[test]
    fn show_scrolls_to_top() {
        let (stage, host, _) = stage();
        stage.show_view("view-home");
        stage.show_view("view-missing");

        assert_eq!(host.scrolls_to_top(), 1);
    }

    #[test]
    fn scroll_to_view() {
        let (stage, host, _) = stage();
        assert!(stage.scroll_to_view("view-archivo"));
        assert!(!stage.scroll_to_view("view-missing"));
        assert_eq!(host.view("view-archivo").unwrap().scrolled_into_view(), 1);
    }

    #[test]
    fn custom_fade_delay() {
        let host = MemoryViewHost::new(["a", "b"]);
        let scheduler = ManualScheduler::default();
        let stage = ViewStage::new(host.clone(), scheduler.clone())
            .with_fade_delay(Duration::from_millis(50));

        stage.show_view("a");
        stage.show_view("b");
        scheduler.advance(Duration::from_millis(50));

        assert_eq!(host.displayed_ids(), vec!["b"]);
        assert_eq!(stage.fade_delay(), Duration::from_millis(50));
    }
}
