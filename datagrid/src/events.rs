//! Click targets and event results.
//!
//! Hosts translate their own input events into a [`ClickTarget`] and hand it
//! to [`DataGrid::on_click`](crate::DataGrid::on_click). The grid decides,
//! from the cell's [`InteractionZone`](crate::InteractionZone), whether the
//! click is a row click.

/// Where a click landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A column header.
    Header {
        /// Column key.
        column: String,
    },
    /// A cell of the current page.
    Cell {
        /// Row position within the current page.
        row: usize,
        /// Column key.
        column: String,
    },
    /// Row chrome outside any cell (padding, borders).
    Row {
        /// Row position within the current page.
        row: usize,
    },
}

impl ClickTarget {
    /// Click on a header.
    pub fn header(column: impl Into<String>) -> Self {
        Self::Header {
            column: column.into(),
        }
    }

    /// Click on a cell.
    pub fn cell(row: usize, column: impl Into<String>) -> Self {
        Self::Cell {
            row,
            column: column.into(),
        }
    }

    /// Click on a row outside its cells.
    pub fn row(row: usize) -> Self {
        Self::Row { row }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
