use crate::config::{NavConfig, ViewportClass};
use crate::sections::OffsetIndex;

/// Window geometry and scrolling.
pub trait Viewport {
    fn inner_width(&self) -> f64;
    fn scroll_y(&self) -> f64;
    /// Fire-and-forget smooth scroll; the animation is never awaited.
    fn smooth_scroll_to(&self, top: f64);
}

/// The element a click inside the navigation list landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickTarget {
    pub node_name: String,
    pub text: String,
}

impl ClickTarget {
    pub fn new(node_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            text: text.into(),
        }
    }

    /// Only list items that mention the marker word address a section.
    fn is_section_item(&self, marker: &str) -> bool {
        self.node_name.eq_ignore_ascii_case("li")
            && self.text.to_lowercase().contains(&marker.to_lowercase())
    }
}

/// Scroll position that brings a section starting at `offset` just below the header.
pub fn scroll_target(offset: f64, viewport_width: f64, config: &NavConfig) -> f64 {
    let class = ViewportClass::from_width(viewport_width, config);
    offset - config.header_allowance_px - class.menu_allowance(config)
}

/// Resolve a click to the scroll position it asks for.
///
/// `None` for anything that is not a section item (brand, toggle icon, gaps
/// between items) and for items whose label is missing from the index.
pub fn route_click(
    target: &ClickTarget,
    index: &OffsetIndex,
    viewport_width: f64,
    config: &NavConfig,
) -> Option<f64> {
    if !target.is_section_item(&config.item_marker) {
        return None;
    }
    let offset = index.get(&target.text)?;
    Some(scroll_target(offset, viewport_width, config))
}
