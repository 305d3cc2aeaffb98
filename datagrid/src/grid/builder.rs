//! Grid builder.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

use log::debug;

use super::state::{DataGrid, GridId, GridInner, HeaderClickFn, RowClickFn, RowKeyFn};
use crate::column::{ColumnDescriptor, ColumnModel};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::pagination::PaginationState;
use crate::sort::SortSpec;

/// Builder for [`DataGrid`].
///
/// ```
/// use datagrid::{ColumnDescriptor, DataGrid, GridConfig};
///
/// struct Plan { name: String, price: i64 }
///
/// let grid = DataGrid::builder(vec![
///     ColumnDescriptor::new("name", |p: &Plan| p.name.clone()).header("Name"),
///     ColumnDescriptor::new("price", |p: &Plan| p.price).sortable(),
/// ])
/// .searchable(&["name"])
/// .config(GridConfig::new().with_page_size(5))
/// .rows(vec![Plan { name: "Basic".into(), price: 10 }])
/// .build()
/// .unwrap();
///
/// assert_eq!(grid.len(), 1);
/// ```
pub struct GridBuilder<R> {
    columns: Vec<ColumnDescriptor<R>>,
    searchable: Vec<String>,
    hidden: Vec<String>,
    config: GridConfig,
    rows: Arc<[R]>,
    sort: Option<SortSpec>,
    loading: bool,
    row_key: Option<RowKeyFn<R>>,
    on_row_click: Option<RowClickFn<R>>,
    on_header_sort_click: Option<HeaderClickFn>,
}

impl<R: Send + Sync + 'static> DataGrid<R> {
    /// Start building a grid over the given columns.
    pub fn builder(columns: Vec<ColumnDescriptor<R>>) -> GridBuilder<R> {
        GridBuilder {
            columns,
            searchable: Vec::new(),
            hidden: Vec::new(),
            config: GridConfig::default(),
            rows: Arc::from(Vec::new()),
            sort: None,
            loading: false,
            row_key: None,
            on_row_click: None,
            on_header_sort_click: None,
        }
    }
}

impl<R: Send + Sync + 'static> GridBuilder<R> {
    /// Keys of the columns the search query matches against.
    ///
    /// Unknown keys are ignored with a warning.
    pub fn searchable<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.searchable = keys.iter().map(|k| k.as_ref().to_string()).collect();
        self
    }

    /// Keys of columns hidden initially, on top of each column's own default.
    pub fn hidden<S: AsRef<str>>(mut self, keys: &[S]) -> Self {
        self.hidden = keys.iter().map(|k| k.as_ref().to_string()).collect();
        self
    }

    /// Set the options.
    pub fn config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial rows.
    pub fn rows(mut self, rows: impl Into<Arc<[R]>>) -> Self {
        self.rows = rows.into();
        self
    }

    /// Set the initial sort. Ignored if it names an unknown or non-sortable
    /// column.
    pub fn sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    /// Start in the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Derive row keys from rows instead of using positions.
    pub fn row_key<F>(mut self, key: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.row_key = Some(Arc::new(key));
        self
    }

    /// Called with the row when a passive part of it is clicked.
    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    /// Called with the column key after a header click toggled its sort.
    pub fn on_header_sort_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_header_sort_click = Some(Arc::new(handler));
        self
    }

    /// Validate and build the grid.
    pub fn build(self) -> Result<DataGrid<R>, GridError> {
        let id = GridId::new();
        let columns = ColumnModel::new(self.columns, &self.hidden)?;
        let searchable = GridInner::resolve_searchable(id, &columns, &self.searchable);
        let pagination = PaginationState::new(self.config.page_size, self.config.has_pagination)?;
        let sort = self.sort.filter(|spec| {
            spec.direction.is_active()
                && columns
                    .get(&spec.column)
                    .is_some_and(|c| c.is_sortable())
        });

        debug!(
            "{}: built with {} columns, {} rows, {} searchable",
            id,
            columns.len(),
            self.rows.len(),
            searchable.len()
        );

        let mut inner = GridInner {
            columns,
            searchable,
            config: self.config,
            rows: self.rows,
            query: String::new(),
            sort,
            pagination,
            loading: self.loading,
            pending_page: None,
            derived: Vec::new(),
            row_key: self.row_key,
            on_row_click: self.on_row_click,
            on_header_sort_click: self.on_header_sort_click,
        };
        inner.rederive(id);

        Ok(DataGrid {
            id,
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(true)),
        })
    }
}
