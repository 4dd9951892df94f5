//! Field validation.
//!
//! A fluent API for validating input widgets. Rules run synchronously and
//! write the first failure back to the widget's error slot.
//!
//! # Example
//!
//! ```ignore
//! use joist::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&username, "username")
//!         .required("Username is required")
//!         .min_length(3, "Username must be at least 3 characters")
//!     .field(&email, "email")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with submission
//! }
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
