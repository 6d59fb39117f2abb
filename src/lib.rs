pub mod config;
pub mod console;
pub mod controller;
pub mod dom;
pub mod error;
pub mod menu;
pub mod nav;
pub mod router;
pub mod scheduler;
pub mod scroll_spy;
pub mod sections;
#[cfg(test)]
mod testing;

pub use config::{NavConfig, ViewportClass};
pub use controller::{handle_scroll, NavController, Page, SharedController};
pub use error::NavError;
pub use menu::MenuState;
pub use sections::{OffsetIndex, SectionRecord};

use console::log_error;
use dom::MountedNav;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static MOUNTED: RefCell<Option<MountedNav>> = const { RefCell::new(None) };
}

/// Stop reacting to resize and scroll events and drop any pending highlight.
#[wasm_bindgen(js_name = detachNavigation)]
pub fn detach_navigation() {
    if let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) {
        mounted.detach();
    }
}

/// Attach the navigation layer once the module loads
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    match dom::mount() {
        Ok(mounted) => MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
        Err(e) => log_error(&format!("landing-nav: {}", e)),
    }
}
