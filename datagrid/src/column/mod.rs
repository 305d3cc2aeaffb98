//! Column model - typed column descriptors and the visibility set.
//!
//! Each column reads one value out of a row through a typed accessor, which
//! search and sort both use. Headers and cells are rendered from that value.

mod descriptor;
mod model;

pub use descriptor::{
    Accessor, CellRenderer, ColumnDescriptor, Header, HeaderContext, HeaderRenderer,
};
pub use model::{ColumnModel, ColumnVisibility};
