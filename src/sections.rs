use indexmap::IndexMap;

/// One content section as scraped from the live layout.
///
/// `label` comes from the section's `data-nav` attribute and doubles as the
/// menu text and the lookup key into [`OffsetIndex`]. `id` is the element id
/// the active marker goes on.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRecord {
    pub id: String,
    pub label: String,
    pub class: String,
    pub offset_top: f64,
}

impl SectionRecord {
    /// The id follows the page convention, see [`anchor_id`]. Use
    /// [`SectionRecord::with_id`] when the real element id is known.
    pub fn new(label: impl Into<String>, class: impl Into<String>, offset_top: f64) -> Self {
        let label = label.into();
        Self {
            id: anchor_id(&label),
            label,
            class: class.into(),
            offset_top,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Read access to the page's sections plus their "active" markers.
pub trait SectionSource {
    /// Scrape the current sections in document order.
    fn scrape_sections(&self) -> Vec<SectionRecord>;

    /// Remove the active marker from every section.
    fn clear_active_sections(&self);

    /// Mark the section with element id `anchor` active.
    /// Returns `false` if no such section exists.
    fn mark_section_active(&self, anchor: &str) -> bool;
}

/// Conventional element id for a label: lower-cased, whitespace removed.
///
/// ```
/// assert_eq!(landing_nav::sections::anchor_id("Section 3"), "section3");
/// ```
pub fn anchor_id(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
struct IndexedSection {
    offset: f64,
    anchor: String,
}

/// Section label to vertical offset, iterated in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetIndex {
    entries: IndexMap<String, IndexedSection>,
}

impl OffsetIndex {
    /// Build the index from scraped records.
    ///
    /// Labels are unique on a well-formed page. A repeated label keeps the
    /// position of its first occurrence and takes the offset of its last one.
    pub fn from_records(records: &[SectionRecord]) -> Self {
        let mut entries = IndexMap::with_capacity(records.len());
        for record in records {
            entries.insert(
                record.label.clone(),
                IndexedSection {
                    offset: record.offset_top,
                    anchor: record.id.clone(),
                },
            );
        }
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).map(|entry| entry.offset)
    }

    /// Element id of the section behind `label`.
    pub fn anchor(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(|entry| entry.anchor.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, entry)| (l.as_str(), entry.offset))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
