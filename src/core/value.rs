//! The two-variant result value and its discrimination operations.
//!
//! `ResultValue` is a closed enum: an instance is always exactly one of
//! `Success` or `Failure`, and no third state can be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a fallible operation.
///
/// The payloads are opaque: no operation in this crate inspects them, and
/// comparison, hashing, cloning and serialization are available only when
/// the payload types provide them.
///
/// # Example
///
/// ```rust
/// use resolute::ResultValue;
///
/// fn parse_port(raw: &str) -> ResultValue<u16, String> {
///     match raw.parse::<u16>() {
///         Ok(port) => ResultValue::success(port),
///         Err(_) => ResultValue::failure(format!("invalid port: {raw}")),
///     }
/// }
///
/// assert!(parse_port("8080").is_success());
/// assert!(parse_port("http").is_failure());
///
/// // Narrowing is done with a match; the payload type is known per arm.
/// match parse_port("443") {
///     ResultValue::Success(port) => assert_eq!(port, 443),
///     ResultValue::Failure(reason) => panic!("{reason}"),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "data")]
#[must_use = "this `ResultValue` may be a `Failure`, which should be handled"]
pub enum ResultValue<T, E> {
    /// The operation succeeded with a value
    #[serde(rename = "ok")]
    Success(T),

    /// The operation failed with an error
    #[serde(rename = "err")]
    Failure(E),
}

/// Discriminant of a [`ResultValue`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "ok")]
    Success,
    #[serde(rename = "err")]
    Failure,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("ok"),
            Self::Failure => f.write_str("err"),
        }
    }
}

/// Create a `Success` value. Shorthand for [`ResultValue::success`].
pub fn success<T, E>(value: T) -> ResultValue<T, E> {
    ResultValue::Success(value)
}

/// Create a `Failure` value. Shorthand for [`ResultValue::failure`].
pub fn failure<T, E>(error: E) -> ResultValue<T, E> {
    ResultValue::Failure(error)
}

impl<T, E> ResultValue<T, E> {
    /// Wrap `value` in the `Success` variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let result: ResultValue<i32, String> = ResultValue::success(7);
    /// assert_eq!(result.value(), Some(&7));
    /// ```
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` in the `Failure` variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let result: ResultValue<i32, &str> = ResultValue::failure("nope");
    /// assert_eq!(result.error(), Some(&"nope"));
    /// ```
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if this is the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is the `Failure` variant.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Which variant this value is in.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Failure(_) => Variant::Failure,
        }
    }

    /// Borrow the success payload, or `None` for a `Failure`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, or `None` for a `Success`.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the value, keeping only the success payload.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume the value, keeping only the failure payload.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Convert `&ResultValue<T, E>` into `ResultValue<&T, &E>`.
    ///
    /// Lets the consuming combinators run against a borrowed value.
    ///
    /// ```rust
    /// use resolute::ResultValue;
    ///
    /// let result: ResultValue<String, ()> = ResultValue::success("abc".to_string());
    /// let len = result.as_ref().map(|s| s.len());
    /// assert_eq!(len, ResultValue::success(3));
    /// assert!(result.is_success());
    /// ```
    pub fn as_ref(&self) -> ResultValue<&T, &E> {
        match self {
            Self::Success(value) => ResultValue::Success(value),
            Self::Failure(error) => ResultValue::Failure(error),
        }
    }
}
