//! Async adapters producing `ResultValue`.

use super::rejection::Rejection;
use crate::core::ResultValue;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use stillwater::effect::Effect;
use tracing::{debug, warn};

/// Await a fallible operation and capture its outcome as a `ResultValue`.
///
/// `Ok(value)` becomes `Success(value)`. `Err(error)` becomes
/// `Failure(Rejection::Failed(error))`. A panic raised while polling the
/// operation is caught and becomes `Failure(Rejection::Panicked(reason))`;
/// it never unwinds past this call.
///
/// The operation is polled on the caller's task. Cancelling or timing it out
/// is left to the caller.
///
/// # Example
///
/// ```rust
/// use resolute::{from_async, Rejection, ResultValue};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let answer = from_async(async { Ok::<_, String>(42) }).await;
/// assert_eq!(answer, ResultValue::success(42));
///
/// let failed = from_async(async { Err::<i32, _>("boom") }).await;
/// assert_eq!(failed, ResultValue::failure(Rejection::Failed("boom")));
/// # });
/// ```
pub async fn from_async<F, T, E>(operation: F) -> ResultValue<T, Rejection<E>>
where
    F: Future<Output = Result<T, E>>,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(Ok(value)) => ResultValue::Success(value),
        Ok(Err(error)) => {
            debug!("async operation resolved to an error");
            ResultValue::Failure(Rejection::Failed(error))
        }
        Err(payload) => {
            let rejection = Rejection::from_panic(payload);
            if let Rejection::Panicked(reason) = &rejection {
                warn!(%reason, "async operation panicked");
            }
            ResultValue::Failure(rejection)
        }
    }
}

/// Run a Stillwater effect against `env` and capture its outcome.
///
/// Effect failures are expected failures, so they pass through as the
/// `Failure` payload unchanged.
///
/// ```rust
/// use resolute::{from_effect, ResultValue};
/// use stillwater::prelude::*;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let effect = pure::<_, String, ()>(20).map(|n| n + 1);
/// assert_eq!(from_effect(effect, &()).await, ResultValue::success(21));
/// # });
/// ```
pub async fn from_effect<Eff>(effect: Eff, env: &Eff::Env) -> ResultValue<Eff::Output, Eff::Error>
where
    Eff: Effect,
{
    ResultValue::from(effect.run(env).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use stillwater::prelude::*;

    // stillwater's prelude exports its own `from_async` effect constructor
    use super::from_async;

    #[tokio::test]
    async fn resolved_operation_becomes_success() {
        let result = from_async(async { Ok::<_, String>(42) }).await;
        assert_eq!(result, ResultValue::success(42));
    }

    #[tokio::test]
    async fn erroring_operation_becomes_failure() {
        let result = from_async(async { Err::<i32, _>("boom") }).await;
        assert_eq!(result, ResultValue::failure(Rejection::Failed("boom")));
    }

    #[tokio::test]
    async fn panicking_operation_is_contained() {
        let result = from_async(async {
            let values: Vec<i32> = Vec::new();
            if values.is_empty() {
                panic!("boom");
            }
            Ok::<_, String>(values[0])
        })
        .await;

        assert_eq!(
            result,
            ResultValue::failure(Rejection::Panicked("boom".to_string()))
        );
    }

    #[tokio::test]
    async fn panic_with_formatted_message_is_captured() {
        let id = 7;
        let result = from_async(async move {
            if id > 0 {
                panic!("job {id} crashed");
            }
            Ok::<i32, ()>(id)
        })
        .await;

        assert_eq!(result.into_error(), Some(Rejection::Panicked("job 7 crashed".to_string())));
    }

    #[tokio::test]
    async fn operation_is_awaited_exactly_once() {
        let polls = Cell::new(0);
        let result = from_async(async {
            polls.set(polls.get() + 1);
            tokio::task::yield_now().await;
            Ok::<_, ()>("done")
        })
        .await;

        assert_eq!(result, ResultValue::success("done"));
        assert_eq!(polls.get(), 1);
    }

    #[tokio::test]
    async fn successful_effect_becomes_success() {
        let effect = pure::<_, String, ()>(2).map(|n| n * 21);
        let result = from_effect(effect, &()).await;
        assert_eq!(result, ResultValue::success(42));
    }

    #[tokio::test]
    async fn failing_effect_keeps_its_error() {
        let result: ResultValue<i32, String> = from_effect(fail("denied".to_string()), &()).await;
        assert_eq!(result, ResultValue::failure("denied".to_string()));
    }
}
