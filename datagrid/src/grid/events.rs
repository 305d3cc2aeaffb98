//! Click handling for the grid.

use std::sync::Arc;

use log::debug;

use super::state::DataGrid;
use crate::cell::InteractionZone;
use crate::events::{ClickTarget, EventResult};

impl<R: Send + Sync + 'static> DataGrid<R> {
    /// Dispatch a click.
    pub fn on_click(&self, target: &ClickTarget) -> EventResult {
        match target {
            ClickTarget::Header { column } => self.on_header_click(column),
            ClickTarget::Cell { row, column } => self.on_cell_click(*row, column),
            ClickTarget::Row { row } => self.on_row_click(*row),
        }
    }

    /// Handle a header click for sorting.
    ///
    /// Non-sortable headers are ignored. Otherwise the sort is toggled and
    /// the header callback, if any, is called with the column key.
    pub fn on_header_click(&self, column: &str) -> EventResult {
        let Some(direction) = self.toggle_sort(column) else {
            return EventResult::Ignored;
        };
        debug!("{}: header '{}' clicked, now {:?}", self.id, column, direction);

        let handler = self.read().on_header_sort_click.clone();
        if let Some(handler) = handler {
            handler(column);
        }
        EventResult::Consumed
    }

    /// Handle a click inside a cell of the current page.
    ///
    /// Clicks on interactive cells are consumed without reaching the row
    /// handler. Clicks on passive cells are row clicks.
    pub fn on_cell_click(&self, position: usize, column: &str) -> EventResult {
        let zone = {
            let g = self.read();
            g.page_row(position)
                .filter(|_| g.columns.is_visible(column))
                .and_then(|index| {
                    let col = g.columns.get(column)?;
                    let row = &g.rows[index];
                    Some(col.render_cell(row, &col.read(row)).zone)
                })
        };

        match zone {
            None => EventResult::Ignored,
            Some(InteractionZone::Interactive) => {
                debug!(
                    "{}: click on interactive cell ({}, '{}') not forwarded",
                    self.id, position, column
                );
                EventResult::Consumed
            }
            Some(InteractionZone::Passive) => self.on_row_click(position),
        }
    }

    /// Handle a click on a row of the current page.
    ///
    /// Calls the row callback with the row. Ignored while loading, for
    /// positions past the page, or when no callback is set.
    pub fn on_row_click(&self, position: usize) -> EventResult {
        let target = {
            let g = self.read();
            g.page_row(position).and_then(|index| {
                let handler = g.on_row_click.clone()?;
                Some((Arc::clone(&g.rows), index, handler))
            })
        };

        let Some((rows, index, handler)) = target else {
            return EventResult::Ignored;
        };
        debug!("{}: row {} clicked (source {})", self.id, position, index);
        handler(&rows[index]);
        EventResult::Consumed
    }
}
