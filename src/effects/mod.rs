//! Adapting asynchronous computations into `ResultValue`.
//!
//! This module is the boundary between async code, where failures arrive
//! as `Err` values or panics, and the value-based `ResultValue` vocabulary.
//!
//! # Key Concepts
//!
//! - **`from_async`**: awaits a fallible future and captures both its error
//!   and any panic raised while polling it
//! - **`from_effect`**: runs a Stillwater effect against its environment
//! - **`Rejection`**: the reason an adapted operation did not produce a value
//!
//! Nothing here spawns tasks or depends on a particular runtime.

mod adapt;
mod rejection;

pub use adapt::{from_async, from_effect};
pub use rejection::Rejection;
