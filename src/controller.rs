use crate::config::{NavConfig, ViewportClass};
use crate::menu::{MenuState, MenuToggle};
use crate::nav::{build_entries, render_markup, NavTarget};
use crate::router::{route_click, ClickTarget, Viewport};
use crate::scheduler::Scheduler;
use crate::scroll_spy::ScrollSpy;
use crate::sections::{OffsetIndex, SectionRecord, SectionSource};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Everything the page needs from the DOM.
pub trait Page: SectionSource + NavTarget + Viewport {}

impl<T: SectionSource + NavTarget + Viewport> Page for T {}

/// Owns all state of the navigation layer.
///
/// Built once when the page starts. Event handlers get it passed in, so the
/// offsets, cached width, debounce timer and menu state never live in globals.
pub struct NavController<P, S: Scheduler> {
    page: P,
    scheduler: S,
    config: NavConfig,
    records: Vec<SectionRecord>,
    index: OffsetIndex,
    viewport_width: f64,
    spy: ScrollSpy<S::Handle>,
    menu: MenuToggle,
}

pub type SharedController<P, S> = Rc<RefCell<NavController<P, S>>>;

impl<P: Page, S: Scheduler> NavController<P, S> {
    /// Scrape the sections and cache the viewport width. Renders nothing.
    pub fn new(page: P, scheduler: S, config: NavConfig) -> Self {
        let records = page.scrape_sections();
        let index = OffsetIndex::from_records(&records);
        let viewport_width = page.inner_width();
        let spy = ScrollSpy::new(Duration::from_millis(config.debounce_ms));
        Self {
            page,
            scheduler,
            config,
            records,
            index,
            viewport_width,
            spy,
            menu: MenuToggle::default(),
        }
    }

    /// Replace the navigation list with brand, one item per section and the
    /// toggle control. Only needed once: labels do not change with layout.
    pub fn build_menu(&self) {
        let entries = build_entries(&self.records, &self.config);
        self.page.render_menu(&render_markup(&entries));
    }

    /// Delegated click inside the navigation list.
    ///
    /// Returns the requested scroll position, or `None` when the click did not
    /// land on a known section item.
    pub fn handle_click(&self, target: &ClickTarget) -> Option<f64> {
        let top = route_click(target, &self.index, self.viewport_width, &self.config)?;
        self.page.smooth_scroll_to(top);
        Some(top)
    }

    /// Offsets and the menu breakpoint both depend on layout.
    pub fn handle_resize(&mut self) {
        self.records = self.page.scrape_sections();
        self.index = OffsetIndex::from_records(&self.records);
        self.viewport_width = self.page.inner_width();
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        let state = self.menu.toggle();
        self.page.set_menu_open(state.is_open());
        state
    }

    /// Debounce timer fired: move the highlight to the section in view.
    ///
    /// Clears every section before marking one, so at most one stays active.
    /// Scrolled past the last section, the current highlight is left as is.
    /// If the section's element vanished since the last scrape nothing ends
    /// up marked, and [`NavController::active_section`] reports `None`.
    pub fn settle_scroll(&mut self) -> Option<String> {
        let scroll_y = self.page.scroll_y();
        let label = self.spy.settle(&self.index, scroll_y)?.to_string();
        let anchor = self.index.anchor(&label)?.to_string();
        self.page.clear_active_sections();
        if self.page.mark_section_active(&anchor) {
            self.spy.commit(Some(label.clone()));
            Some(label)
        } else {
            self.spy.commit(None);
            None
        }
    }

    /// Drop a pending highlight, e.g. when the layer is detached.
    pub fn cancel_pending(&mut self) {
        self.spy.cancel();
    }

    pub fn index(&self) -> &OffsetIndex {
        &self.index
    }

    pub fn records(&self) -> &[SectionRecord] {
        &self.records
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.viewport_width, &self.config)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.spy.active()
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn is_highlight_pending(&self) -> bool {
        self.spy.is_pending()
    }
}

impl<P: Page + 'static, S: Scheduler + 'static> NavController<P, S> {
    /// Build the controller, render the menu and share it with the handlers.
    pub fn init(page: P, scheduler: S, config: NavConfig) -> SharedController<P, S> {
        let controller = Self::new(page, scheduler, config);
        controller.build_menu();
        Rc::new(RefCell::new(controller))
    }
}

/// Scroll event: (re)arm the debounced highlight.
///
/// The task only holds a weak reference, so a dropped controller is never
/// kept alive by a pending timer.
pub fn handle_scroll<P, S>(controller: &SharedController<P, S>)
where
    P: Page + 'static,
    S: Scheduler + 'static,
{
    let weak: Weak<RefCell<NavController<P, S>>> = Rc::downgrade(controller);
    let task = Box::new(move || {
        if let Some(controller) = weak.upgrade() {
            controller.borrow_mut().settle_scroll();
        }
    });
    let mut guard = controller.borrow_mut();
    let ctrl = &mut *guard;
    ctrl.spy.schedule(&ctrl.scheduler, task);
}
