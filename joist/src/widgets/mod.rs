//! Widget implementations.

pub mod input;
pub mod table;

pub use input::{InputField, InputFieldId, InputKind, InputSize, InputVariant};
pub use table::{
    CellValue, Column, DataTable, Pagination, RowKey, SelectAllState, SortDirection, TableId,
};
