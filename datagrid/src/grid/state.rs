//! Grid state and its named mutators.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace, warn};

use crate::column::{ColumnDescriptor, ColumnModel, ColumnVisibility};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::filter::filter_indices;
use crate::pagination::{PaginationState, PaginationSummary};
use crate::sort::{SortDirection, SortSpec, sort_indices};
use crate::view::GridView;

/// Derives a stable key from a row.
pub type RowKeyFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Called with the clicked row.
pub type RowClickFn<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Called with the key of a header whose sort was toggled.
pub type HeaderClickFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    pub(super) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Internal state for a grid.
pub(super) struct GridInner<R> {
    /// Column model and visibility set.
    pub columns: ColumnModel<R>,
    /// Keys of the searchable columns, all known to the model.
    pub searchable: Vec<String>,
    /// Options.
    pub config: GridConfig,
    /// Caller-owned rows, never mutated.
    pub rows: Arc<[R]>,
    /// Search query as typed.
    pub query: String,
    /// Active sort.
    pub sort: Option<SortSpec>,
    /// Page size and index.
    pub pagination: PaginationState,
    /// Whether rows are being fetched.
    pub loading: bool,
    /// Page asked for while loading, applied once rows are derived again.
    pub pending_page: Option<usize>,
    /// Filtered and sorted positions into `rows`.
    pub derived: Vec<usize>,
    pub row_key: Option<RowKeyFn<R>>,
    pub on_row_click: Option<RowClickFn<R>>,
    pub on_header_sort_click: Option<HeaderClickFn>,
}

impl<R> GridInner<R> {
    /// Keep only the searchable keys that name a column, in the given order.
    pub fn resolve_searchable<S: AsRef<str>>(
        id: GridId,
        columns: &ColumnModel<R>,
        keys: &[S],
    ) -> Vec<String> {
        let mut resolved: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys.iter().map(AsRef::as_ref) {
            if !columns.contains(key) {
                warn!("{}: ignoring unknown searchable column '{}'", id, key);
            } else if !resolved.iter().any(|k| k == key) {
                resolved.push(key.to_string());
            }
        }
        resolved
    }

    fn searchable_columns(&self) -> Vec<&ColumnDescriptor<R>> {
        self.searchable
            .iter()
            .filter_map(|key| self.columns.get(key))
            .collect()
    }

    /// Run filter and sort again, then clamp the page.
    ///
    /// Skipped while loading; leaving the loading state re-runs it.
    pub fn rederive(&mut self, id: GridId) {
        if self.loading {
            trace!("{}: loading, derivation skipped", id);
            return;
        }

        let filtered = if self.config.enable_search {
            filter_indices(
                &self.rows,
                &self.searchable_columns(),
                &self.query,
                self.config.search_mode,
            )
        } else {
            (0..self.rows.len()).collect()
        };
        let filtered_len = filtered.len();

        self.derived = match &self.sort {
            Some(spec) => match self.columns.get(&spec.column) {
                Some(column) => sort_indices(&self.rows, filtered, column, spec.direction),
                None => filtered,
            },
            None => filtered,
        };

        let clamped = self.pagination.clamp(self.derived.len());
        trace!(
            "{}: derived rows={} filtered={} page={} clamped={}",
            id,
            self.rows.len(),
            filtered_len,
            self.pagination.page_index(),
            clamped
        );

        if let Some(index) = self.pending_page.take() {
            self.pagination.set_page_index(index, self.derived.len());
            debug!("{}: applied page {} requested while loading", id, index);
        }
    }

    /// Page the grid is on, or will be on once loading ends.
    fn requested_page(&self) -> usize {
        self.pending_page.unwrap_or_else(|| self.pagination.page_index())
    }

    /// Go to `index`, or remember it while loading.
    ///
    /// While loading the derived rows are stale, so the index is clamped only
    /// when loading ends.
    fn request_page(&mut self, index: usize) -> bool {
        if self.loading {
            let changed = index != self.requested_page();
            self.pending_page = Some(index);
            return changed;
        }
        self.pagination.set_page_index(index, self.derived.len())
    }

    pub fn summary(&self) -> PaginationSummary {
        self.pagination.summary(self.derived.len(), self.rows.len())
    }

    /// Source position of a row on the current page.
    pub fn page_row(&self, position: usize) -> Option<usize> {
        if self.loading {
            return None;
        }
        self.pagination.slice(&self.derived).get(position).copied()
    }
}

/// A data grid over rows of type `R`.
///
/// `DataGrid<R>` turns a row collection and column descriptors into the
/// rows and columns to draw:
/// - Free-text search over the searchable columns
/// - Single-column stable sort
/// - Pagination with automatic clamping
/// - Column visibility toggles
///
/// Every mutation re-runs filter and sort synchronously and keeps the page
/// index in range. [`view`](DataGrid::view) reads the result.
///
/// Cloning a grid gives another handle to the same instance.
pub struct DataGrid<R> {
    /// Unique identifier.
    pub(super) id: GridId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<GridInner<R>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<R: Send + Sync + 'static> DataGrid<R> {
    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Lock the state for reading.
    ///
    /// A panic in a caller-supplied accessor or renderer poisons the lock.
    /// The state is still consistent at that point, so the guard is recovered.
    pub(super) fn read(&self) -> RwLockReadGuard<'_, GridInner<R>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("{}: recovering poisoned grid state", self.id);
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridInner<R>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("{}: recovering poisoned grid state", self.id);
            poisoned.into_inner()
        })
    }

    /// Apply a mutation, re-derive, and mark dirty when it changed something.
    fn mutate<T>(&self, f: impl FnOnce(&mut GridInner<R>) -> (bool, T)) -> T {
        let mut guard = self.write();
        let (changed, out) = f(&mut guard);
        if changed {
            guard.rederive(self.id);
            self.dirty.store(true, Ordering::SeqCst);
        }
        out
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Render the current state.
    pub fn view(&self) -> GridView<R> {
        super::render::build_view(&self.read())
    }

    /// Get the options.
    pub fn config(&self) -> GridConfig {
        self.read().config.clone()
    }

    /// Get all column descriptors in declared order.
    pub fn columns(&self) -> Vec<ColumnDescriptor<R>> {
        self.read().columns.columns().to_vec()
    }

    /// Get the visible column descriptors in declared order.
    pub fn visible_columns(&self) -> Vec<ColumnDescriptor<R>> {
        self.read().columns.visible_columns().into_iter().cloned().collect()
    }

    /// Entries for a column visibility menu.
    pub fn column_visibility(&self) -> Vec<ColumnVisibility> {
        self.read().columns.visibility_entries()
    }

    /// Get the pagination metadata.
    pub fn pagination(&self) -> PaginationSummary {
        self.read().summary()
    }

    /// Number of rows handed to the grid.
    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    /// Check if the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows left after filtering.
    pub fn filtered_len(&self) -> usize {
        self.read().derived.len()
    }

    /// All rows handed to the grid.
    pub fn rows(&self) -> Arc<[R]> {
        Arc::clone(&self.read().rows)
    }

    // -------------------------------------------------------------------------
    // Rows and loading
    // -------------------------------------------------------------------------

    /// Replace the rows.
    ///
    /// Query, sort and visibility are kept; the page is clamped.
    pub fn set_rows(&self, rows: impl Into<Arc<[R]>>) {
        let rows = rows.into();
        debug!("{}: set_rows({})", self.id, rows.len());
        self.mutate(|g| {
            g.rows = rows;
            (true, ())
        });
    }

    /// Check if the grid is in its loading state.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Enter or leave the loading state.
    ///
    /// While loading, nothing is filtered, sorted or paged and the view shows
    /// placeholder rows.
    pub fn set_loading(&self, loading: bool) {
        debug!("{}: set_loading({})", self.id, loading);
        self.mutate(|g| {
            let changed = g.loading != loading;
            g.loading = loading;
            (changed, ())
        });
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the search query.
    pub fn query(&self) -> String {
        self.read().query.clone()
    }

    /// Set the search query.
    ///
    /// No-op when search is disabled. Returns whether the query changed.
    pub fn set_query(&self, query: impl Into<String>) -> bool {
        let query = query.into();
        self.mutate(|g| {
            if !g.config.enable_search {
                debug!("{}: search disabled, ignoring query", self.id);
                return (false, false);
            }
            if g.query == query {
                return (false, false);
            }
            debug!("{}: set_query({:?})", self.id, query);
            g.query = query;
            (true, true)
        })
    }

    /// Clear the search query.
    pub fn clear_query(&self) -> bool {
        self.set_query(String::new())
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort.
    pub fn sort(&self) -> Option<SortSpec> {
        self.read().sort.clone()
    }

    /// Toggle the sort on a column, as a header click does.
    ///
    /// The active column advances through the configured cycle; any other
    /// column becomes the only sorted one, ascending. Unknown and
    /// non-sortable columns are ignored.
    ///
    /// Returns the column's new direction, or `None` if nothing happened.
    pub fn toggle_sort(&self, column: &str) -> Option<SortDirection> {
        self.mutate(|g| {
            if !g.columns.get(column).is_some_and(|c| c.is_sortable()) {
                debug!("{}: toggle_sort ignored for '{}'", self.id, column);
                return (false, None);
            }
            let next = SortSpec::toggled(g.sort.as_ref(), column, g.config.sort_cycle);
            let direction = next
                .as_ref()
                .map(|s| s.direction)
                .unwrap_or(SortDirection::None);
            debug!("{}: toggle_sort('{}') -> {:?}", self.id, column, direction);
            g.sort = next;
            (true, Some(direction))
        })
    }

    /// Set the sort directly.
    ///
    /// A sort naming an unknown or non-sortable column is ignored. A sort with
    /// `SortDirection::None` clears the sort. Returns whether the sort changed.
    pub fn set_sort(&self, spec: Option<SortSpec>) -> bool {
        self.mutate(|g| {
            let next = match spec {
                Some(spec) if !g.columns.get(&spec.column).is_some_and(|c| c.is_sortable()) => {
                    debug!("{}: set_sort ignored for '{}'", self.id, spec.column);
                    return (false, false);
                }
                Some(spec) if !spec.direction.is_active() => None,
                other => other,
            };
            if g.sort == next {
                return (false, false);
            }
            g.sort = next;
            (true, true)
        })
    }

    /// Clear the sort, restoring filter order.
    pub fn clear_sort(&self) -> bool {
        self.set_sort(None)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Go to a page. Out-of-range indices are clamped.
    ///
    /// While loading, the page is remembered and applied, clamped, once
    /// loading ends. Returns whether the page changed.
    pub fn set_page_index(&self, index: usize) -> bool {
        self.mutate(|g| {
            let changed = g.request_page(index);
            (changed, changed)
        })
    }

    /// Go to the next page.
    pub fn next_page(&self) -> bool {
        self.mutate(|g| {
            let changed = if g.loading {
                let next = g.requested_page().saturating_add(1);
                g.request_page(next)
            } else {
                g.pagination.go_next(g.derived.len())
            };
            (changed, changed)
        })
    }

    /// Go to the previous page.
    pub fn previous_page(&self) -> bool {
        self.mutate(|g| {
            let changed = match (g.loading, g.requested_page()) {
                (true, 0) => false,
                (true, page) => g.request_page(page - 1),
                (false, _) => g.pagination.go_prev(),
            };
            (changed, changed)
        })
    }

    /// Go to the first page.
    pub fn first_page(&self) -> bool {
        self.mutate(|g| {
            let changed = if g.loading {
                g.request_page(0)
            } else {
                g.pagination.go_first()
            };
            (changed, changed)
        })
    }

    /// Go to the last page.
    pub fn last_page(&self) -> bool {
        self.mutate(|g| {
            let changed = if g.loading {
                g.request_page(usize::MAX)
            } else {
                g.pagination.go_last(g.derived.len())
            };
            (changed, changed)
        })
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&self, size: usize) -> Result<bool, GridError> {
        debug!("{}: set_page_size({})", self.id, size);
        self.mutate(|g| match g.pagination.set_page_size(size) {
            Ok(changed) => {
                g.pending_page = None;
                (changed, Ok(changed))
            }
            Err(e) => (false, Err(e)),
        })
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Show or hide a column.
    ///
    /// No-op for unknown columns, columns that cannot hide, and when column
    /// toggling is disabled. Returns whether the visible set changed.
    pub fn toggle_column_visibility(&self, column: &str) -> bool {
        self.mutate(|g| {
            if !g.config.enable_column_visibility {
                debug!("{}: column visibility disabled", self.id);
                return (false, false);
            }
            let changed = g.columns.toggle_visibility(column);
            debug!(
                "{}: toggle_column_visibility('{}') changed={}",
                self.id, column, changed
            );
            (changed, changed)
        })
    }

    /// Check if a column is visible.
    pub fn is_column_visible(&self, column: &str) -> bool {
        self.read().columns.is_visible(column)
    }

    // -------------------------------------------------------------------------
    // Reconfiguration
    // -------------------------------------------------------------------------

    /// Replace the column descriptors and searchable keys.
    ///
    /// Treated as a fresh configuration: query, sort and visibility toggles
    /// are dropped and the grid goes back to the first page. Rows, options
    /// and callbacks are kept.
    pub fn reconfigure<S: AsRef<str>>(
        &self,
        columns: Vec<ColumnDescriptor<R>>,
        searchable: &[S],
    ) -> Result<(), GridError> {
        let model = ColumnModel::new(columns, &[] as &[&str])?;
        let searchable = GridInner::resolve_searchable(self.id, &model, searchable);
        debug!("{}: reconfigure({} columns)", self.id, model.len());
        self.mutate(|g| {
            g.columns = model;
            g.searchable = searchable;
            g.query.clear();
            g.sort = None;
            g.pending_page = None;
            g.pagination.go_first();
            (true, ())
        });
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid has changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R> Clone for DataGrid<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<R> std::fmt::Debug for DataGrid<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .field("dirty", &self.dirty.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
