//! Building a [`GridView`] from grid state.

use std::sync::Arc;

use super::state::GridInner;
use crate::sort::SortSpec;
use crate::view::{GridBody, GridView, HeaderCell, RenderedRow, RowKey};

pub(super) fn build_view<R>(inner: &GridInner<R>) -> GridView<R> {
    let visible = inner.columns.visible_columns();

    let columns = visible
        .iter()
        .map(|col| {
            let sort = SortSpec::direction_of(inner.sort.as_ref(), col.key());
            HeaderCell {
                key: col.key().to_string(),
                label: col.render_header(sort),
                sortable: col.is_sortable(),
                sort,
            }
        })
        .collect();

    let (body, page) = if inner.loading {
        let page_size = inner.pagination.page_size();
        let skeleton_rows = inner
            .config
            .skeleton_rows
            .map_or(page_size, |cap| page_size.min(cap));
        (GridBody::Loading { skeleton_rows }, Vec::new())
    } else {
        let page = inner.pagination.slice(&inner.derived).to_vec();
        if page.is_empty() {
            (GridBody::Empty, page)
        } else {
            let rows = page
                .iter()
                .map(|&index| {
                    let row = &inner.rows[index];
                    let key = match &inner.row_key {
                        Some(key_fn) => RowKey::Id(key_fn(row)),
                        None => RowKey::Position(index),
                    };
                    let cells = visible
                        .iter()
                        .map(|col| col.render_cell(row, &col.read(row)))
                        .collect();
                    RenderedRow { key, index, cells }
                })
                .collect();
            (GridBody::Rows(rows), page)
        }
    };

    GridView {
        columns,
        body,
        pagination: inner.summary(),
        query: inner.query.clone(),
        search_placeholder: inner.config.search_placeholder.clone(),
        search_enabled: inner.config.enable_search,
        column_visibility_enabled: inner.config.enable_column_visibility,
        sticky_header: inner.config.sticky_header,
        scrollable_container: inner.config.scrollable_container,
        max_height: inner.config.max_height.clone(),
        details_link: inner.config.details_link.clone(),
        source: Arc::clone(&inner.rows),
        page,
    }
}
