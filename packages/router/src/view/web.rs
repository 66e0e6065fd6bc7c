use std::{rc::Rc, time::Duration};

use gloo::timers::callback::Timeout;
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use super::{Scheduler, ViewHost, ViewSurface};

const ACTIVE_CLASS: &str = "active";

/// A [`ViewSurface`] backed by a DOM element.
///
/// Activation sets `display: block`, forces a reflow so the opacity transition starts from the
/// hidden state, then adds the `active` class and fades the element in.
pub struct DomView {
    id: String,
    element: HtmlElement,
}

impl DomView {
    /// Wrap `element`, using its `id` attribute as the view id.
    pub fn new(element: HtmlElement) -> Self {
        Self {
            id: element.id(),
            element,
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            error!("failed to set `{property}` on view `{}`: {err:?}", self.id);
        }
    }
}

impl ViewSurface for DomView {
    fn id(&self) -> &str {
        &self.id
    }

    fn activate(&self) {
        self.set_style("display", "block");
        // force a reflow before the fade starts
        let _ = self.element.offset_width();

        if let Err(err) = self.element.class_list().add_1(ACTIVE_CLASS) {
            error!("failed to activate view `{}`: {err:?}", self.id);
        }
        self.set_style("opacity", "1");
        self.set_style("pointer-events", "auto");
    }

    fn deactivate(&self) {
        if let Err(err) = self.element.class_list().remove_1(ACTIVE_CLASS) {
            error!("failed to deactivate view `{}`: {err:?}", self.id);
        }
        self.set_style("opacity", "0");
        self.set_style("pointer-events", "none");
    }

    fn conceal(&self) {
        self.set_style("display", "none");
    }

    fn is_active(&self) -> bool {
        self.element.class_list().contains(ACTIVE_CLASS)
    }

    fn is_displayed(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(false)
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// A [`ViewHost`] over every element of the document matching a selector.
pub struct DomViewHost {
    window: Window,
    document: Document,
    selector: String,
}

impl Default for DomViewHost {
    fn default() -> Self {
        Self::new(".view")
    }
}

impl DomViewHost {
    /// Create a host over every element matching `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        let window = web_sys::window().expect("access to `window`");
        let document = window.document().expect("`window` has access to `document`");
        Self {
            window,
            document,
            selector: selector.into(),
        }
    }
}

impl ViewHost for DomViewHost {
    fn views(&self) -> Vec<Rc<dyn ViewSurface>> {
        let nodes = match self.document.query_selector_all(&self.selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                error!("failed to query views with `{}`: {err:?}", self.selector);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| Rc::new(DomView::new(element)) as Rc<dyn ViewSurface>)
            .collect()
    }

    fn find(&self, id: &str) -> Option<Rc<dyn ViewSurface>> {
        let element = self.document.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(Rc::new(DomView::new(element)))
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// A [`Scheduler`] backed by the browser's `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
