//! Errors raised while attaching the navigation layer to the page

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Navigation container not found: {0}")]
    MissingNavContainer(String),

    #[error("Toggle control not found after rendering the menu: {0}")]
    MissingToggle(String),

    #[error("Failed to attach {0} listener")]
    Listener(&'static str),
}
