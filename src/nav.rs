use crate::config::NavConfig;
use crate::sections::SectionRecord;

/// The navigation list the menu markup is rendered into.
pub trait NavTarget {
    /// Replace the container's content with `markup`.
    fn render_menu(&self, markup: &str);

    /// Show or hide the mobile menu: the container's active marker and the
    /// toggle icon's open marker move together.
    fn set_menu_open(&self, open: bool);
}

/// One `<li>` of the rendered menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Brand(String),
    Item(String),
    Toggle,
}

impl NavEntry {
    pub fn to_markup(&self) -> String {
        match self {
            NavEntry::Brand(label) => format!(r#"<li class="logo">{}</li>"#, escape_html(label)),
            NavEntry::Item(label) => format!(r#"<li class="item">{}</li>"#, escape_html(label)),
            NavEntry::Toggle => {
                r##"<li class="toggle"><a href="#"><i class="fas fa-bars"></i></a></li>"##.to_string()
            }
        }
    }
}

/// Brand first, then one item per section in document order, then the toggle.
pub fn build_entries(records: &[SectionRecord], config: &NavConfig) -> Vec<NavEntry> {
    let mut entries = Vec::with_capacity(records.len() + 2);
    entries.push(NavEntry::Brand(config.brand_label.clone()));
    entries.extend(records.iter().map(|r| NavEntry::Item(r.label.clone())));
    entries.push(NavEntry::Toggle);
    entries
}

pub fn render_markup(entries: &[NavEntry]) -> String {
    entries.iter().map(NavEntry::to_markup).collect()
}

/// Labels end up as text content, so the click router sees them verbatim.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
