//! Core result value type and its operations.
//!
//! This module contains the pure functional core of the crate:
//! - The `ResultValue` enum with its constructors and narrowing accessors
//! - Transformations (`map`, `map_err`, `and_then`, `match_with`)
//! - Unwrapping, both panicking and total
//!
//! All logic in this module is pure (no side effects).

mod transform;
mod unwrap;
mod value;

pub use unwrap::UNWRAP_MESSAGE;
pub use value::{failure, success, ResultValue, Variant};
