//! Browser console output.

/// Non-fatal problems the page author might want to know about.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Failures that stop the navigation layer from starting.
pub fn log_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

/// Only emitted in debug builds.
pub fn log_debug(msg: &str) {
    if cfg!(debug_assertions) {
        web_sys::console::debug_1(&msg.into());
    }
}
