//! DataTable widget - a sortable, selectable data table.

mod column;
pub mod events;
pub mod render;
mod state;

pub use column::{
    CellAccessor, CellRenderer, CellValue, Column, PageChangeHandler, Pagination, RowKey,
    SortDirection,
};
pub use state::{DataTable, RowClickHandler, RowSelectHandler, SelectAllState, TableId};
