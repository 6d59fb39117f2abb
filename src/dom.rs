use crate::config::{config_from_attribute, NavConfig};
use crate::console::{log_debug, log_warning};
use crate::controller::{handle_scroll, NavController, SharedController};
use crate::error::NavError;
use crate::nav::NavTarget;
use crate::router::{ClickTarget, Viewport};
use crate::scheduler::BrowserScheduler;
use crate::sections::{SectionRecord, SectionSource};
use leptos::ev;
use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub const NAV_CONTAINER_SELECTOR: &str = "header[class='page__header'] > nav > ul";
pub const SECTION_SELECTOR: &str = "main section[id^='section']";
const TOGGLE_SELECTOR: &str = "ul > li.toggle i.fas";
const CONFIG_ATTRIBUTE: &str = "data-nav-config";

/// The live document behind the capability traits.
pub struct BrowserPage {
    window: Window,
    document: Document,
    nav: Element,
    active_class: String,
    open_icon_class: String,
}

impl BrowserPage {
    fn new(window: Window, document: Document, nav: Element, config: &NavConfig) -> Self {
        Self {
            window,
            document,
            nav,
            active_class: config.active_class.clone(),
            open_icon_class: config.open_icon_class.clone(),
        }
    }

    fn section_elements(&self) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(SECTION_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn toggle_icon(&self) -> Option<Element> {
        self.nav.query_selector(TOGGLE_SELECTOR).ok().flatten()
    }
}

impl SectionSource for BrowserPage {
    fn scrape_sections(&self) -> Vec<SectionRecord> {
        self.section_elements()
            .into_iter()
            .filter_map(|el| match el.dataset().get("nav") {
                Some(label) => Some(
                    SectionRecord::new(label, el.class_name(), el.offset_top() as f64).with_id(el.id()),
                ),
                None => {
                    log_warning(&format!(
                        "landing-nav: Section #{} has no data-nav label, leaving it out of the menu",
                        el.id()
                    ));
                    None
                }
            })
            .collect()
    }

    fn clear_active_sections(&self) {
        for el in self.section_elements() {
            let _ = el.class_list().remove_1(&self.active_class);
        }
    }

    fn mark_section_active(&self, anchor: &str) -> bool {
        // Only content sections, never another element sharing the id
        match self.section_elements().into_iter().find(|el| el.id() == anchor) {
            Some(el) => el.class_list().add_1(&self.active_class).is_ok(),
            None => false,
        }
    }
}

impl NavTarget for BrowserPage {
    fn render_menu(&self, markup: &str) {
        self.nav.set_inner_html(markup);
    }

    fn set_menu_open(&self, open: bool) {
        let toggle = self.toggle_icon();
        if open {
            let _ = self.nav.class_list().add_1(&self.active_class);
            if let Some(icon) = toggle {
                let _ = icon.class_list().add_1(&self.open_icon_class);
            }
        } else {
            let _ = self.nav.class_list().remove_1(&self.active_class);
            if let Some(icon) = toggle {
                let _ = icon.class_list().remove_1(&self.open_icon_class);
            }
        }
    }
}

impl Viewport for BrowserPage {
    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Read the optional JSON override from the navigation list.
fn read_config(nav: &Element) -> NavConfig {
    let attribute = nav.get_attribute(CONFIG_ATTRIBUTE);
    config_from_attribute(attribute.as_deref(), |e| {
        log_warning(&format!(
            "landing-nav: Failed to parse {} (using defaults): {}",
            CONFIG_ATTRIBUTE, e
        ))
    })
}

fn click_target(event: &web_sys::Event) -> Option<ClickTarget> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    Some(ClickTarget::new(
        element.node_name(),
        element.text_content().unwrap_or_default(),
    ))
}

type BrowserController = SharedController<BrowserPage, BrowserScheduler>;

/// The attached navigation layer.
///
/// Dropping it leaves every listener in place; call [`MountedNav::detach`]
/// to stop reacting to window events.
pub struct MountedNav {
    controller: BrowserController,
    resize: WindowListenerHandle,
    scroll: WindowListenerHandle,
}

impl MountedNav {
    pub fn detach(self) {
        self.resize.remove();
        self.scroll.remove();
        self.controller.borrow_mut().cancel_pending();
    }
}

/// Build the menu and attach click, resize and scroll handling to the page.
pub fn mount() -> Result<MountedNav, NavError> {
    let window = web_sys::window().ok_or(NavError::NoWindow)?;
    let document = window.document().ok_or(NavError::NoWindow)?;
    let nav = document
        .query_selector(NAV_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| NavError::MissingNavContainer(NAV_CONTAINER_SELECTOR.to_string()))?;

    let config = read_config(&nav);
    let page = BrowserPage::new(window, document, nav.clone(), &config);
    let controller = NavController::init(page, BrowserScheduler, config);
    log_debug(&format!(
        "landing-nav: {} sections indexed",
        controller.borrow().index().len()
    ));

    // Delegated: one listener on the list serves every item
    let on_click = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(target) = click_target(&event) {
                controller.borrow().handle_click(&target);
            }
        }) as Box<dyn Fn(web_sys::Event)>)
    };
    nav.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| NavError::Listener("click"))?;
    on_click.forget();

    // The toggle only exists once the menu has been rendered
    let toggle = nav
        .query_selector(TOGGLE_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| NavError::MissingToggle(TOGGLE_SELECTOR.to_string()))?;
    let on_toggle = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            // The icon sits in an `href="#"` anchor
            event.prevent_default();
            controller.borrow_mut().toggle_menu();
        }) as Box<dyn Fn(web_sys::Event)>)
    };
    toggle
        .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
        .map_err(|_| NavError::Listener("toggle click"))?;
    on_toggle.forget();

    let resize = {
        let controller = controller.clone();
        window_event_listener(ev::resize, move |_| {
            controller.borrow_mut().handle_resize();
        })
    };

    let scroll = {
        let controller = controller.clone();
        window_event_listener(ev::scroll, move |_| {
            handle_scroll(&controller);
        })
    };

    Ok(MountedNav {
        controller,
        resize,
        scroll,
    })
}
