//! Presentational terminal widgets
//!
//! Controlled-style form and data widgets that render to a host-agnostic
//! node tree: a text field with a controlled value mirror and a sortable,
//! selectable data table.

pub mod color;
pub mod error;
pub mod events;
pub mod keys;
pub mod node;
pub mod selection;
pub mod style;
pub mod theme;
pub mod validation;
pub mod widgets;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{BoundaryError, BoundaryErrorKind};
    pub use crate::events::{EventResult, WidgetEvents};
    pub use crate::keys::{Key, KeyCombo, Modifiers};
    pub use crate::node::{Align, Layout, Node, Size};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::style::Style;
    pub use crate::theme::{DefaultTheme, Theme};
    pub use crate::validation::{
        ErrorDisplay, FieldBuilder, FieldError, Validatable, ValidationResult, Validator,
    };
    pub use crate::widgets::{
        CellValue, Column, DataTable, InputField, InputFieldId, InputKind, InputSize, InputVariant,
        Pagination, RowKey, SelectAllState, SortDirection, TableId,
    };
}
