//! Resolute: a pure two-variant result value
//!
//! Resolute models the outcome of a fallible operation as a plain value,
//! either a `Success` carrying a value or a `Failure` carrying an error.
//! Failures travel through ordinary return values; panics are reserved for
//! `expect`/`unwrap` on a value the caller has already proven successful.
//!
//! # Core Concepts
//!
//! - **ResultValue**: closed enum with constructors and narrowing accessors
//! - **Combinators**: `map`, `map_err`, `and_then`, `match_with`
//! - **Unwrapping**: panicking `expect`/`unwrap`, total `unwrap_or_else`
//! - **Aggregation**: `pack_results` folds many results, first failure wins
//! - **Async adaptation**: `from_async` and `from_effect` (feature `async`)
//!
//! # Example
//!
//! ```rust
//! use resolute::{pack_results, ResultValue};
//!
//! fn parse(raw: &str) -> ResultValue<u32, String> {
//!     raw.parse::<u32>()
//!         .map_err(|e| format!("{raw}: {e}"))
//!         .into()
//! }
//!
//! let sizes = pack_results(["4", "8", "15"].into_iter().map(parse));
//! assert_eq!(sizes.map(|v| v.iter().sum::<u32>()), ResultValue::success(27));
//!
//! let broken = pack_results(["4", "x", "15"].into_iter().map(parse));
//! let total = broken.unwrap_or_else(|_| Vec::new()).len();
//! assert_eq!(total, 0);
//! ```

pub mod aggregate;
pub mod core;
#[cfg(feature = "async")]
pub mod effects;
pub mod interop;

// Re-export commonly used items
pub use crate::aggregate::pack_results;
pub use crate::core::{failure, success, ResultValue, Variant, UNWRAP_MESSAGE};
#[cfg(feature = "async")]
pub use crate::effects::{from_async, from_effect, Rejection};
