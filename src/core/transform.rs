//! Pure transformations over a `ResultValue`.
//!
//! Every combinator consumes the receiver and returns a new value; the
//! supplied closure runs at most once, synchronously, and only for the
//! variant it applies to.

use super::value::ResultValue;

impl<T, E> ResultValue<T, E> {
    /// Transform the success payload, passing a failure through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let doubled = ResultValue::<i32, String>::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, ResultValue::success(42));
    ///
    /// let failed = ResultValue::<i32, &str>::failure("bad").map(|n| n * 2);
    /// assert_eq!(failed, ResultValue::failure("bad"));
    /// ```
    pub fn map<U, F>(self, f: F) -> ResultValue<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ResultValue::Success(f(value)),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    /// Transform the failure payload, passing a success through unchanged.
    pub fn map_err<G, F>(self, f: F) -> ResultValue<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(error) => ResultValue::Failure(f(error)),
        }
    }

    /// Chain another fallible step onto a success.
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// fn half(n: i32) -> ResultValue<i32, String> {
    ///     if n % 2 == 0 {
    ///         ResultValue::success(n / 2)
    ///     } else {
    ///         ResultValue::failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(half(8).and_then(half), ResultValue::success(2));
    /// assert_eq!(half(6).and_then(half), ResultValue::failure("3 is odd".to_string()));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> ResultValue<U, E>
    where
        F: FnOnce(T) -> ResultValue<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }

    /// Run exactly one of two handlers, depending on the variant.
    ///
    /// Both handlers produce the same output type. When the two outcomes
    /// need different types, return an enum from both.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let message = ResultValue::<u32, String>::failure("timeout".to_string())
    ///     .match_with(|n| format!("got {n}"), |e| format!("failed: {e}"));
    /// assert_eq!(message, "failed: timeout");
    /// ```
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}
