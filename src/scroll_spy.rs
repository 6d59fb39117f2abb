use crate::scheduler::{Debouncer, Scheduler, Task, TaskHandle};
use crate::sections::OffsetIndex;
use std::time::Duration;

/// First section, in index order, that starts below `scroll_y`.
///
/// `None` once the page is scrolled past the last section's offset. The
/// caller leaves the current highlight alone in that case.
pub fn select_active(index: &OffsetIndex, scroll_y: f64) -> Option<&str> {
    index
        .iter()
        .find(|(_, offset)| scroll_y < *offset)
        .map(|(label, _)| label)
}

/// Idle until a scroll arrives, then pending until the debounce delay passes
/// without another one.
pub struct ScrollSpy<H> {
    debouncer: Debouncer<H>,
    active: Option<String>,
}

impl<H: TaskHandle> ScrollSpy<H> {
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            active: None,
        }
    }

    /// Scroll event: replace any pending evaluation with `evaluate`.
    pub fn schedule<S>(&mut self, scheduler: &S, evaluate: Task)
    where
        S: Scheduler<Handle = H>,
    {
        self.debouncer.arm(scheduler, evaluate);
    }

    /// The pending evaluation fired; pick the section for `scroll_y`.
    ///
    /// Returns the label that should now be marked, or `None` when the
    /// highlight stays as it is. Nothing is recorded until [`ScrollSpy::commit`].
    pub fn settle<'a>(&mut self, index: &'a OffsetIndex, scroll_y: f64) -> Option<&'a str> {
        self.debouncer.fired();
        select_active(index, scroll_y)
    }

    /// Record what the page actually shows as active after a settle.
    pub fn commit(&mut self, active: Option<String>) {
        self.active = active;
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
