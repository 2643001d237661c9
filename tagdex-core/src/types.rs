//! Core types for the element reference table.
//!
//! These types are designed to be:
//!
//! - **Serializable** - records decode from the dataset wire format
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - missing wire fields become empty strings

use serde::{Deserialize, Serialize};

/// One HTML element descriptor, as shipped in the dataset resource.
///
/// Wire field names follow the dataset (`defaultCSS`, `specURL`). Every
/// field tolerates absence; `status` is normalized on load, see
/// [`crate::dataset::normalize_status`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementRecord {
    /// Tag name, unique within the dataset (not enforced).
    pub name: String,
    /// Free-text description; may embed markup, rendered as-is.
    pub description: String,
    /// Default stylesheet rules for the tag.
    #[serde(rename = "defaultCSS")]
    pub default_css: String,
    /// Hyperlink target for the tag name.
    #[serde(rename = "specURL")]
    pub spec_url: String,
    /// Categorical label: trimmed lowercase after load, `"standard"`
    /// when the wire value is absent or empty.
    pub status: String,
}

/// Column a view can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Order by tag name.
    Name,
    /// Order by description text.
    Description,
    /// Order by default CSS text.
    DefaultCss,
    /// Order by status label.
    Status,
}

impl SortKey {
    /// Identifier carried in `data-sort-key` attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Description => "description",
            SortKey::DefaultCss => "css",
            SortKey::Status => "status",
        }
    }

    /// The record field this key compares by.
    pub fn field(self, record: &ElementRecord) -> &str {
        match self {
            SortKey::Name => &record.name,
            SortKey::Description => &record.description,
            SortKey::DefaultCss => &record.default_css,
            SortKey::Status => &record.status,
        }
    }
}

/// Active ordering: which key drives comparison and in which direction.
///
/// `key: None` means no explicit sort - the view keeps the order the
/// filter/search pass produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    /// Field driving comparison, if any.
    pub key: Option<SortKey>,
    /// Ascending when true, descending when false.
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: None, ascending: true }
    }
}

/// Status restriction applied to the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No restriction - the sentinel "all" chip.
    #[default]
    All,
    /// Keep only records whose status equals this value exactly.
    Only(String),
}

/// The full set of inputs that derive the view from the dataset.
///
/// The view itself is never stored here; it is recomputed wholly by
/// [`crate::query::derive_view`] whenever any input changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Free-text search, matched as a case-insensitive substring.
    pub query: String,
    /// Active status chip.
    pub filter: StatusFilter,
    /// Active sort key and direction.
    pub sort: SortState,
}

/// User interactions that change the derived view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryEvent {
    /// The search box content changed.
    SearchChanged(String),
    /// A filter chip was selected.
    FilterSelected(StatusFilter),
    /// A sortable column header was clicked.
    SortToggled(SortKey),
}

impl QueryState {
    /// Apply one interaction to the state.
    ///
    /// Toggling the active sort key flips the direction in place; a new
    /// key becomes active ascending.
    pub fn apply(&mut self, event: QueryEvent) {
        match event {
            QueryEvent::SearchChanged(query) => self.query = query,
            QueryEvent::FilterSelected(filter) => self.filter = filter,
            QueryEvent::SortToggled(key) => {
                if self.sort.key == Some(key) {
                    self.sort.ascending = !self.sort.ascending;
                } else {
                    self.sort = SortState { key: Some(key), ascending: true };
                }
            }
        }
    }
}
