//! Grid configuration

use serde::Deserialize;
use serde::Serialize;

use crate::filter::SearchMode;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::sort::SortCycle;

/// Per-grid options.
///
/// Everything here is fixed for the lifetime of a grid instance. The
/// presentation flags (`sticky_header`, `scrollable_container`,
/// `max_height`, `search_placeholder`, `details_link`) are not interpreted
/// by the engine; they are echoed in every [`GridView`](crate::GridView) for
/// the host renderer.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use datagrid::GridConfig;
///
/// let config: GridConfig = serde_json::from_str(r#"{ "page_size": 25 }"#).unwrap();
/// assert_eq!(config.page_size, 25);
/// assert!(config.has_pagination);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Placeholder text of the search box.
    pub search_placeholder: Option<String>,

    /// Whether free-text search is applied.
    ///
    /// Default: true
    pub enable_search: bool,

    /// Whether columns may be toggled.
    ///
    /// Default: true
    pub enable_column_visibility: bool,

    /// Whether rows are split into pages.
    ///
    /// Default: true
    pub has_pagination: bool,

    /// Rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Keep the header visible while scrolling.
    pub sticky_header: bool,

    /// Wrap the table in a scroll container.
    pub scrollable_container: bool,

    /// CSS-like maximum height of the scroll container.
    pub max_height: Option<String>,

    /// Path template used by the host's row-click handler.
    pub details_link: Option<String>,

    /// Header click cycle.
    ///
    /// Default: two-state (ascending ↔ descending)
    pub sort_cycle: SortCycle,

    /// How the search query matches.
    ///
    /// Default: substring
    pub search_mode: SearchMode,

    /// Upper bound on placeholder rows while loading.
    pub skeleton_rows: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            search_placeholder: None,
            enable_search: true,
            enable_column_visibility: true,
            has_pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
            sticky_header: false,
            scrollable_container: false,
            max_height: None,
            details_link: None,
            sort_cycle: SortCycle::TwoState,
            search_mode: SearchMode::Substring,
            skeleton_rows: None,
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search placeholder.
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    /// Enables or disables search.
    pub fn with_search(mut self, enabled: bool) -> Self {
        self.enable_search = enabled;
        self
    }

    /// Enables or disables column toggling.
    pub fn with_column_visibility(mut self, enabled: bool) -> Self {
        self.enable_column_visibility = enabled;
        self
    }

    /// Enables or disables pagination.
    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.has_pagination = enabled;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Makes the header sticky.
    pub fn with_sticky_header(mut self, sticky: bool) -> Self {
        self.sticky_header = sticky;
        self
    }

    /// Wraps the table in a scroll container with an optional max height.
    pub fn with_scrollable_container(mut self, max_height: Option<String>) -> Self {
        self.scrollable_container = true;
        self.max_height = max_height;
        self
    }

    /// Sets the details link template.
    pub fn with_details_link(mut self, link: impl Into<String>) -> Self {
        self.details_link = Some(link.into());
        self
    }

    /// Sets the sort cycle.
    pub fn with_sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Caps placeholder rows while loading.
    pub fn with_skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = Some(rows);
        self
    }
}
