//! Conversions between `ResultValue` and neighbouring result types.
//!
//! - `std::result::Result`, so `?` can be used after `into_result()`
//! - Stillwater's `Validation`, for code that moves between fail-fast and
//!   error-accumulating pipelines

use crate::core::ResultValue;
use stillwater::Validation;

impl<T, E> ResultValue<T, E> {
    /// Convert into a standard library `Result`.
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// fn total(a: ResultValue<i32, String>, b: ResultValue<i32, String>) -> Result<i32, String> {
    ///     Ok(a.into_result()? + b.into_result()?)
    /// }
    ///
    /// assert_eq!(total(ResultValue::success(1), ResultValue::success(2)), Ok(3));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for ResultValue<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<ResultValue<T, E>> for Result<T, E> {
    fn from(result: ResultValue<T, E>) -> Self {
        match result {
            ResultValue::Success(value) => Ok(value),
            ResultValue::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Validation<T, E>> for ResultValue<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Self::Success(value),
            Validation::Failure(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<ResultValue<T, E>> for Validation<T, E> {
    fn from(result: ResultValue<T, E>) -> Self {
        match result {
            ResultValue::Success(value) => Validation::Success(value),
            ResultValue::Failure(error) => Validation::Failure(error),
        }
    }
}
