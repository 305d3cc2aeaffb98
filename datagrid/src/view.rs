//! Render-ready output of a grid.

use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;
use crate::pagination::PaginationSummary;
use crate::sort::SortDirection;

/// Identity of a rendered row.
///
/// Taken from the grid's row key function when one is set, otherwise the
/// row's position in the source rows. Keys are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Position(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => f.write_str(id),
            RowKey::Position(index) => write!(f, "#{}", index),
        }
    }
}

/// A visible column's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Rendered header text.
    pub label: String,
    /// Whether clicking the header toggles the sort.
    pub sortable: bool,
    /// Current sort direction of this column.
    pub sort: SortDirection,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Row identity.
    pub key: RowKey,
    /// Position in the source rows.
    pub index: usize,
    /// One cell per visible column, in column order.
    pub cells: Vec<Cell>,
}

/// Body of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBody {
    /// Rows are being fetched. Draw this many placeholder rows under the
    /// normal header.
    Loading { skeleton_rows: usize },
    /// Nothing left after filtering.
    Empty,
    /// The rows of the current page.
    Rows(Vec<RenderedRow>),
}

/// Everything a host needs to draw a grid once.
///
/// A view is a snapshot: later mutations of the grid do not change it.
#[derive(Debug)]
pub struct GridView<R> {
    /// Visible columns in declared order.
    pub columns: Vec<HeaderCell>,
    /// Table body.
    pub body: GridBody,
    /// Page metadata.
    pub pagination: PaginationSummary,
    /// Current search query.
    pub query: String,
    /// Search box placeholder.
    pub search_placeholder: Option<String>,
    /// Whether the search box is shown.
    pub search_enabled: bool,
    /// Whether the column visibility menu is shown.
    pub column_visibility_enabled: bool,
    /// Keep the header visible while scrolling.
    pub sticky_header: bool,
    /// Wrap the table in a scroll container.
    pub scrollable_container: bool,
    /// Maximum height of the scroll container.
    pub max_height: Option<String>,
    /// Path template for the host's row-click handler.
    pub details_link: Option<String>,
    pub(crate) source: Arc<[R]>,
    pub(crate) page: Vec<usize>,
}

impl<R> Clone for GridView<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            body: self.body.clone(),
            pagination: self.pagination,
            query: self.query.clone(),
            search_placeholder: self.search_placeholder.clone(),
            search_enabled: self.search_enabled,
            column_visibility_enabled: self.column_visibility_enabled,
            sticky_header: self.sticky_header,
            scrollable_container: self.scrollable_container,
            max_height: self.max_height.clone(),
            details_link: self.details_link.clone(),
            source: Arc::clone(&self.source),
            page: self.page.clone(),
        }
    }
}

impl<R> GridView<R> {
    /// Check if the grid is showing its loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self.body, GridBody::Loading { .. })
    }

    /// Check if this is the "no results" state.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, GridBody::Empty)
    }

    /// Rendered rows of the current page. Empty while loading or empty.
    pub fn rendered_rows(&self) -> &[RenderedRow] {
        match &self.body {
            GridBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Source rows of the current page, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.page.iter().map(|&i| &self.source[i])
    }

    /// Source row at a position of the current page.
    pub fn row(&self, position: usize) -> Option<&R> {
        self.page.get(position).map(|&i| &self.source[i])
    }

    /// Number of rows on the current page.
    pub fn page_len(&self) -> usize {
        self.page.len()
    }

    /// Source positions of the current page's rows.
    pub fn page_indices(&self) -> &[usize] {
        &self.page
    }

    /// All rows handed to the grid.
    pub fn source(&self) -> &[R] {
        &self.source
    }

    /// Keys of the visible columns.
    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }
}
