//! Client-side data grid engine
//!
//! Takes rows of any type plus typed column descriptors and derives what a
//! table should show: free-text search, single-column sort, pagination and
//! column visibility. Rendering is left to the host; [`DataGrid::view`]
//! returns the headers, cells and page metadata to draw.

pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod grid;
pub mod pagination;
pub mod sort;
pub mod value;
pub mod view;

pub use cell::{Cell, InteractionZone};
pub use column::{ColumnDescriptor, ColumnModel, ColumnVisibility, Header, HeaderContext};
pub use config::GridConfig;
pub use error::{FieldError, GridError};
pub use events::{ClickTarget, EventResult};
pub use filter::{SearchFilter, SearchMode, filter_indices};
pub use grid::{DataGrid, GridBuilder, GridId};
pub use pagination::{PaginationState, PaginationSummary};
pub use sort::{SortCycle, SortDirection, SortSpec};
pub use value::Value;
pub use view::{GridBody, GridView, HeaderCell, RenderedRow, RowKey};
