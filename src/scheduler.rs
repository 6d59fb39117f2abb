use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// A task that has been armed but may not have run yet.
pub trait TaskHandle {
    /// Cancel the task. Cancelling a task that already ran is a no-op.
    fn cancel(self);
}

/// Runs a task once after a delay.
///
/// Implementations must never run the task from inside `arm`; callers arm
/// while holding a borrow of the state the task will touch.
pub trait Scheduler {
    type Handle: TaskHandle;

    /// Returns `None` if the task could not be scheduled.
    fn arm(&self, delay: Duration, task: Task) -> Option<Self::Handle>;
}

/// `setTimeout` on the browser window, through leptos' helper.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl TaskHandle for leptos::leptos_dom::helpers::TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = leptos::leptos_dom::helpers::TimeoutHandle;

    fn arm(&self, delay: Duration, task: Task) -> Option<Self::Handle> {
        leptos::leptos_dom::helpers::set_timeout_with_handle(task, delay).ok()
    }
}

/// At most one pending task: arming again cancels the previous one.
pub struct Debouncer<H> {
    delay: Duration,
    pending: Option<H>,
}

impl<H: TaskHandle> Debouncer<H> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn arm<S>(&mut self, scheduler: &S, task: Task)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.pending = scheduler.arm(self.delay, task);
    }

    /// Called by the task itself once it fires.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
