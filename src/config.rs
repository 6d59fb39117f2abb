use serde::Deserialize;

/// Tunable values for the navigation layer.
///
/// Every field has a default, so a page can override just the values it needs
/// through the `data-nav-config` attribute on the navigation list, e.g.
/// `data-nav-config='{"debounce_ms": 200}'`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Widths at or below this are treated as mobile
    pub breakpoint_px: f64,
    /// Height of the fixed header subtracted from every scroll target
    pub header_allowance_px: f64,
    pub desktop_menu_allowance_px: f64,
    /// The mobile header and menu are taller, so targets move further up
    pub mobile_menu_allowance_px: f64,
    pub debounce_ms: u64,
    pub brand_label: String,
    /// Nav items are only routed when their text contains this word
    pub item_marker: String,
    pub active_class: String,
    pub open_icon_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 1024.0,
            header_allowance_px: 40.0,
            desktop_menu_allowance_px: 0.0,
            mobile_menu_allowance_px: 190.0,
            debounce_ms: 150,
            brand_label: "Landing!".to_string(),
            item_marker: "section".to_string(),
            active_class: "active".to_string(),
            open_icon_class: "fa-times".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Config from the optional `data-nav-config` attribute.
///
/// A missing attribute means defaults. Malformed JSON also falls back to the
/// defaults after handing the parse error to `warn`.
pub fn config_from_attribute(
    attribute: Option<&str>,
    warn: impl FnOnce(&serde_json::Error),
) -> NavConfig {
    let Some(json) = attribute else {
        return NavConfig::default();
    };
    NavConfig::from_json(json).unwrap_or_else(|e| {
        warn(&e);
        NavConfig::default()
    })
}

/// Mobile or desktop layout, recomputed from the window width on every use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64, config: &NavConfig) -> Self {
        if width <= config.breakpoint_px {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Extra space reserved for the menu in this layout
    pub fn menu_allowance(self, config: &NavConfig) -> f64 {
        match self {
            ViewportClass::Mobile => config.mobile_menu_allowance_px,
            ViewportClass::Desktop => config.desktop_menu_allowance_px,
        }
    }
}
