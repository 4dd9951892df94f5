//! Boundary error types for panic handling.
//!
//! Widgets do not intercept panics from caller-supplied renderers or
//! callbacks; the host wraps its render pass in [`catch`] and decides what
//! fallback to show.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

/// A panic caught at the host boundary.
#[derive(Debug, Clone, Error)]
#[error("{kind} panicked: {message}")]
pub struct BoundaryError {
    /// Where the panic surfaced.
    pub kind: BoundaryErrorKind,
    /// Panic message extracted from the panic payload.
    pub message: String,
}

/// Which boundary caught the panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryErrorKind {
    /// A view render pass panicked (widget or caller-supplied renderer).
    Render,
    /// An owner-supplied callback panicked.
    Handler,
}

impl std::fmt::Display for BoundaryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render => write!(f, "render pass"),
            Self::Handler => write!(f, "handler"),
        }
    }
}

impl BoundaryError {
    /// Build a boundary error from a caught panic payload.
    pub fn from_panic(kind: BoundaryErrorKind, panic: &Box<dyn Any + Send>) -> Self {
        Self {
            kind,
            message: extract_panic_message(panic),
        }
    }
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can contain either `&str` or `String` payloads. This function
/// attempts to extract either, falling back to a generic message.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Run a closure, converting a panic into a [`BoundaryError`].
///
/// The error is logged before being returned so the host can show a
/// fallback without losing the message.
pub fn catch<T>(kind: BoundaryErrorKind, f: impl FnOnce() -> T) -> Result<T, BoundaryError> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(panic) => {
            let err = BoundaryError::from_panic(kind, &panic);
            log::error!("{}", err);
            Err(err)
        }
    }
}
