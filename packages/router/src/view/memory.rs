use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use super::{Scheduler, ViewHost, ViewSurface};

/// A [`ViewSurface`] that only records its state.
#[derive(Debug)]
pub struct MemoryView {
    id: String,
    active: Cell<bool>,
    displayed: Cell<bool>,
    opaque: Cell<bool>,
    activations: Cell<usize>,
    scrolled_into_view: Cell<usize>,
}

impl MemoryView {
    /// Create a hidden, inactive view.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: Cell::new(false),
            displayed: Cell::new(false),
            opaque: Cell::new(false),
            activations: Cell::new(0),
            scrolled_into_view: Cell::new(0),
        }
    }

    /// Whether the view is faded in.
    pub fn is_opaque(&self) -> bool {
        self.opaque.get()
    }

    /// How many times the view was activated.
    pub fn activations(&self) -> usize {
        self.activations.get()
    }

    /// How many times the view was scrolled into sight.
    pub fn scrolled_into_view(&self) -> usize {
        self.scrolled_into_view.get()
    }
}

impl ViewSurface for MemoryView {
    fn id(&self) -> &str {
        &self.id
    }

    fn activate(&self) {
        self.displayed.set(true);
        self.active.set(true);
        self.opaque.set(true);
        self.activations.set(self.activations.get() + 1);
    }

    fn deactivate(&self) {
        self.active.set(false);
        self.opaque.set(false);
    }

    fn conceal(&self) {
        self.displayed.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn is_displayed(&self) -> bool {
        self.displayed.get()
    }

    fn scroll_into_view(&self) {
        self.scrolled_into_view.set(self.scrolled_into_view.get() + 1);
    }
}

/// A [`ViewHost`] over a fixed list of [`MemoryView`]s.
///
/// Clones share the same views.
#[derive(Clone, Debug, Default)]
pub struct MemoryViewHost {
    views: Rc<Vec<Rc<MemoryView>>>,
    scrolls_to_top: Rc<Cell<usize>>,
}

impl MemoryViewHost {
    /// Create a host with one view per id, in the given order.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            views: Rc::new(
                ids.into_iter()
                    .map(|id| Rc::new(MemoryView::new(id)))
                    .collect(),
            ),
            scrolls_to_top: Rc::default(),
        }
    }

    /// Look a view up by id.
    pub fn view(&self, id: &str) -> Option<Rc<MemoryView>> {
        self.views.iter().find(|view| view.id == id).cloned()
    }

    /// The ids of every view marked active.
    pub fn active_ids(&self) -> Vec<String> {
        self.ids_where(|view| view.is_active())
    }

    /// The ids of every view in the layout.
    pub fn displayed_ids(&self) -> Vec<String> {
        self.ids_where(|view| view.is_displayed())
    }

    /// How many times the page was scrolled to the top.
    pub fn scrolls_to_top(&self) -> usize {
        self.scrolls_to_top.get()
    }

    fn ids_where(&self, predicate: impl Fn(&MemoryView) -> bool) -> Vec<String> {
        self.views
            .iter()
            .filter(|view| predicate(view))
            .map(|view| view.id.clone())
            .collect()
    }
}

impl ViewHost for MemoryViewHost {
    fn views(&self) -> Vec<Rc<dyn ViewSurface>> {
        self.views
            .iter()
            .map(|view| view.clone() as Rc<dyn ViewSurface>)
            .collect()
    }

    fn scroll_to_top(&self) {
        self.scrolls_to_top.set(self.scrolls_to_top.get() + 1);
    }
}

struct ScheduledTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: Vec<ScheduledTask>,
}

/// A [`Scheduler`] driven by a virtual clock that only moves when told to.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// Move the clock forward by `by`, running every task that comes due, earliest first.
    ///
    /// Tasks scheduled by running tasks run in the same call if they come due in the window.
    /// Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.borrow().now + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let index = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);

                index.map(|i| {
                    let scheduled = clock.queue.remove(i);
                    clock.now = scheduled.due;
                    scheduled.task
                })
            };

            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break,
            }
        }

        self.clock.borrow_mut().now = target;
        ran
    }

    /// The time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// The number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.push(ScheduledTask { due, seq, task });
    }
}
