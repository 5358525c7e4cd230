//! Rejection reasons for adapted async operations.

use std::any::Any;
use thiserror::Error;

/// Why an adapted operation did not produce a value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection<E> {
    /// The operation completed with an error
    #[error("operation failed: {0}")]
    Failed(E),

    /// The operation panicked while being polled
    #[error("operation panicked: {0}")]
    Panicked(String),
}

impl<E> Rejection<E> {
    /// Payload used when a panic carries neither a `&str` nor a `String`.
    pub const OPAQUE_PANIC: &'static str = "opaque panic payload";

    /// Build a `Panicked` rejection from a caught panic payload.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_string(),
                None => Self::OPAQUE_PANIC.to_string(),
            },
        };
        Self::Panicked(message)
    }

    /// Returns `true` if the operation panicked.
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// The error the operation completed with, if it did not panic.
    pub fn into_failed(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }
}
