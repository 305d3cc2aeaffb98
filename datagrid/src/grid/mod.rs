//! The grid: state, builder, view rendering and click handling.

mod builder;
mod events;
mod render;
mod state;

pub use builder::GridBuilder;
pub use state::{DataGrid, GridId, HeaderClickFn, RowClickFn, RowKeyFn};
