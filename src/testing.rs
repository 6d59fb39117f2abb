//! In-memory page and clock used by the unit tests.

use crate::nav::NavTarget;
use crate::router::Viewport;
use crate::scheduler::{Scheduler, Task, TaskHandle};
use crate::sections::{SectionRecord, SectionSource};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

struct PendingTask {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<PendingTask>,
}

/// Scheduler driven by [`ManualScheduler::advance`] instead of wall time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<Clock>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        self.clock.borrow_mut().queue.retain(|t| t.id != self.id);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn arm(&self, delay: Duration, task: Task) -> Option<ManualHandle> {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + delay.as_millis() as u64;
        clock.queue.push(PendingTask { id, due_ms, task });
        Some(ManualHandle {
            id,
            clock: self.clock.clone(),
        })
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, running every task that falls due on the way.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now_ms + by.as_millis() as u64;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let task = clock.queue.remove(i);
                    clock.now_ms = task.due_ms;
                    task.task
                })
            };
            // The borrow is released before running, tasks may re-arm.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().queue.len()
    }
}

struct FakeSection {
    id: String,
    record: SectionRecord,
    active: bool,
}

/// A landing page held entirely in memory.
#[derive(Default)]
pub struct FakePage {
    sections: RefCell<Vec<FakeSection>>,
    markup: RefCell<String>,
    menu_open: Cell<bool>,
    width: Cell<f64>,
    scroll_y: Cell<f64>,
    scroll_requests: RefCell<Vec<f64>>,
    scrape_count: Cell<usize>,
    clear_count: Cell<usize>,
}

impl FakePage {
    /// Sections get ids derived from their labels, as the real page does.
    pub fn new(sections: &[(&str, f64)], width: f64) -> Self {
        let records = sections
            .iter()
            .map(|(label, offset)| SectionRecord::new(*label, "", *offset))
            .collect();
        Self::from_records(records, width)
    }

    /// Sections as `(id, label, offset)`, for labels unrelated to their ids.
    pub fn with_ids(sections: &[(&str, &str, f64)], width: f64) -> Self {
        let records = sections
            .iter()
            .map(|(id, label, offset)| SectionRecord::new(*label, "", *offset).with_id(*id))
            .collect();
        Self::from_records(records, width)
    }

    fn from_records(records: Vec<SectionRecord>, width: f64) -> Self {
        let page = Self::default();
        page.width.set(width);
        *page.sections.borrow_mut() = records
            .into_iter()
            .map(|record| FakeSection {
                id: record.id.clone(),
                record,
                active: false,
            })
            .collect();
        page
    }

    /// Drop a section element without the controller rescraping.
    pub fn remove_section(&self, id: &str) {
        self.sections.borrow_mut().retain(|s| s.id != id);
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    /// Simulate a layout shift, e.g. text reflowing after a resize.
    pub fn set_offset(&self, label: &str, offset: f64) {
        for section in self.sections.borrow_mut().iter_mut() {
            if section.record.label == label {
                section.record.offset_top = offset;
            }
        }
    }

    pub fn active_ids(&self) -> Vec<String> {
        self.sections
            .borrow()
            .iter()
            .filter(|s| s.active)
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn set_active(&self, id: &str) {
        for section in self.sections.borrow_mut().iter_mut() {
            section.active = section.id == id;
        }
    }

    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scroll_requests.borrow().clone()
    }

    pub fn scrape_count(&self) -> usize {
        self.scrape_count.get()
    }

    /// How many times the active markers were swept.
    pub fn clear_count(&self) -> usize {
        self.clear_count.get()
    }
}

impl SectionSource for FakePage {
    fn scrape_sections(&self) -> Vec<SectionRecord> {
        self.scrape_count.set(self.scrape_count.get() + 1);
        self.sections.borrow().iter().map(|s| s.record.clone()).collect()
    }

    fn clear_active_sections(&self) {
        self.clear_count.set(self.clear_count.get() + 1);
        for section in self.sections.borrow_mut().iter_mut() {
            section.active = false;
        }
    }

    fn mark_section_active(&self, anchor: &str) -> bool {
        let mut sections = self.sections.borrow_mut();
        match sections.iter_mut().find(|s| s.id == anchor) {
            Some(section) => {
                section.active = true;
                true
            }
            None => false,
        }
    }
}

impl NavTarget for FakePage {
    fn render_menu(&self, markup: &str) {
        *self.markup.borrow_mut() = markup.to_string();
    }

    fn set_menu_open(&self, open: bool) {
        self.menu_open.set(open);
    }
}

impl Viewport for FakePage {
    fn inner_width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_requests.borrow_mut().push(top);
    }
}

// Shared pages are handed to the controller behind an `Rc`.
impl<T: SectionSource + ?Sized> SectionSource for Rc<T> {
    fn scrape_sections(&self) -> Vec<SectionRecord> {
        (**self).scrape_sections()
    }

    fn clear_active_sections(&self) {
        (**self).clear_active_sections()
    }

    fn mark_section_active(&self, anchor: &str) -> bool {
        (**self).mark_section_active(anchor)
    }
}

impl<T: NavTarget + ?Sized> NavTarget for Rc<T> {
    fn render_menu(&self, markup: &str) {
        (**self).render_menu(markup)
    }

    fn set_menu_open(&self, open: bool) {
        (**self).set_menu_open(open)
    }
}

impl<T: Viewport + ?Sized> Viewport for Rc<T> {
    fn inner_width(&self) -> f64 {
        (**self).inner_width()
    }

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn smooth_scroll_to(&self, top: f64) {
        (**self).smooth_scroll_to(top)
    }
}
