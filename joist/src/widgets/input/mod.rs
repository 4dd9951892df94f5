//! InputField widget - a single-line text field with reactive state.

pub mod events;
pub mod render;
mod state;

pub use state::{ChangeHandler, InputField, InputFieldId, InputKind, InputSize, InputVariant};
