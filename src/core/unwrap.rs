//! Extracting the success payload.
//!
//! `expect` and `unwrap` panic on a `Failure`. They are for call sites where
//! a failure means a bug in the caller. Use `unwrap_or_else` or `match_with`
//! when failure is an expected runtime condition.

use super::value::ResultValue;

/// Panic message used by [`ResultValue::unwrap`].
pub const UNWRAP_MESSAGE: &str = "called `ResultValue::unwrap()` on a `Failure` value";

impl<T, E> ResultValue<T, E> {
    /// Return the success payload, or panic with `message`.
    ///
    /// The failure payload is not formatted into the panic, so `E` needs no
    /// `Debug` implementation.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let config: ResultValue<&str, ()> = ResultValue::success("prod");
    /// assert_eq!(config.expect("config is validated at startup"), "prod");
    /// ```
    ///
    /// ```rust,should_panic
    /// use resolute::ResultValue;
    ///
    /// let config: ResultValue<&str, ()> = ResultValue::failure(());
    /// config.expect("config is validated at startup"); // panics
    /// ```
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{message}"),
        }
    }

    /// Return the success payload, or panic with [`UNWRAP_MESSAGE`].
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(UNWRAP_MESSAGE)
    }

    /// Return the success payload, or compute a fallback from the error.
    ///
    /// Never panics. `fallback` runs only for a `Failure`.
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let retries: ResultValue<u32, String> = ResultValue::failure("missing".to_string());
    /// assert_eq!(retries.unwrap_or_else(|e| e.len() as u32), 7);
    /// ```
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Return the success payload, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }
}
