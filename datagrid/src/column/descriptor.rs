//! Column descriptors: how a grid reads, labels and renders one field.

use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;
use crate::error::FieldError;
use crate::sort::SortDirection;
use crate::value::Value;

/// Reads a cell value out of a row.
pub type Accessor<R> = Arc<dyn Fn(&R) -> Result<Value, FieldError> + Send + Sync>;

/// Renders a cell from its row and accessed value.
pub type CellRenderer<R> = Arc<dyn Fn(&R, &Value) -> Cell + Send + Sync>;

/// Renders a header from the column's current state.
pub type HeaderRenderer = Arc<dyn Fn(&HeaderContext<'_>) -> String + Send + Sync>;

/// What a header render function gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    /// Key of the column.
    pub key: &'a str,
    /// Current sort direction of the column.
    pub sort: SortDirection,
    /// Whether a click on the header toggles the sort.
    pub sortable: bool,
}

/// Column header: a fixed label or a render function.
#[derive(Clone)]
pub enum Header {
    Label(String),
    Render(HeaderRenderer),
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Header::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Header::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Typed specification of one displayable field of `R`.
///
/// # Examples
///
/// ```
/// use datagrid::{Cell, ColumnDescriptor};
///
/// struct Banner {
///     id: u32,
///     title: String,
///     clicks: i64,
/// }
///
/// let columns: Vec<ColumnDescriptor<Banner>> = vec![
///     ColumnDescriptor::new("title", |b: &Banner| b.title.clone()).header("Title"),
///     ColumnDescriptor::new("clicks", |b: &Banner| b.clicks)
///         .header("Clicks")
///         .sortable(),
///     ColumnDescriptor::display("actions")
///         .header("")
///         .cell(|b: &Banner, _| Cell::text(format!("edit #{}", b.id)).stop_row_click())
///         .disable_hiding(),
/// ];
/// ```
pub struct ColumnDescriptor<R> {
    key: String,
    accessor: Accessor<R>,
    header: Header,
    cell: Option<CellRenderer<R>>,
    sortable: bool,
    hideable: bool,
    default_hidden: bool,
}

impl<R: 'static> ColumnDescriptor<R> {
    /// Create a column from an infallible accessor.
    ///
    /// The header defaults to the key. The column is hideable and not
    /// sortable until told otherwise.
    pub fn new<F, V>(key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::try_new(key, move |row: &R| Ok(accessor(row).into()))
    }

    /// Create a column from an accessor that may fail.
    ///
    /// A failed read is treated as "no match" by search and sorts last.
    pub fn try_new<F>(key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        let key = key.into();
        Self {
            header: Header::Label(key.clone()),
            key,
            accessor: Arc::new(accessor),
            cell: None,
            sortable: false,
            hideable: true,
            default_hidden: false,
        }
    }

    /// Create a display-only column whose value is always `Null`.
    ///
    /// Used for columns that only render, like a row's action buttons.
    pub fn display(key: impl Into<String>) -> Self {
        Self::try_new(key, |_: &R| Ok(Value::Null))
    }

    /// Set a static header label.
    pub fn header(mut self, label: impl Into<String>) -> Self {
        self.header = Header::Label(label.into());
        self
    }

    /// Render the header with a function.
    pub fn header_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&HeaderContext<'_>) -> String + Send + Sync + 'static,
    {
        self.header = Header::Render(Arc::new(render));
        self
    }

    /// Give the header a "toggle sort" affordance.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a cell renderer.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&R, &Value) -> Cell + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Keep this column visible no matter what is toggled.
    pub fn disable_hiding(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Start with this column hidden. Ignored for columns that cannot hide.
    pub fn hidden_by_default(mut self) -> Self {
        self.default_hidden = true;
        self
    }
}

impl<R> ColumnDescriptor<R> {
    /// Column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Column header.
    pub fn header_spec(&self) -> &Header {
        &self.header
    }

    /// Whether the header toggles sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether the column can be removed from the visible set.
    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    /// Whether the column starts hidden.
    pub fn is_default_hidden(&self) -> bool {
        self.default_hidden && self.hideable
    }

    /// Read this column's value out of a row.
    pub fn read(&self, row: &R) -> Result<Value, FieldError> {
        (self.accessor)(row)
    }

    /// Plain label of the header, as shown in a visibility menu.
    pub fn label(&self) -> String {
        self.render_header(SortDirection::None)
    }

    /// Render the header for a given sort direction.
    pub fn render_header(&self, sort: SortDirection) -> String {
        match &self.header {
            Header::Label(label) => label.clone(),
            Header::Render(render) => render(&HeaderContext {
                key: &self.key,
                sort,
                sortable: self.sortable,
            }),
        }
    }

    /// Render a cell from an accessor result.
    ///
    /// Without a renderer the cell shows the canonical string of the value.
    /// A failed read renders as an empty cell.
    pub fn render_cell(&self, row: &R, value: &Result<Value, FieldError>) -> Cell {
        let null = Value::Null;
        let value = value.as_ref().unwrap_or(&null);
        match &self.cell {
            Some(render) => render(row, value),
            None => Cell::text(value.to_string()),
        }
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            accessor: Arc::clone(&self.accessor),
            header: self.header.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            default_hidden: self.default_hidden,
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("default_hidden", &self.default_hidden)
            .finish_non_exhaustive()
    }
}
